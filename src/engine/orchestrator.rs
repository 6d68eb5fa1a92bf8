// ==========================================
// Ювелирный MES - оркестратор воскового передела
// ==========================================
// Связывает движки в два сквозных сценария:
//  1) проведение заказа: разворот → партии → наряды,
//     идемпотентно по коду заказа;
//  2) сборка ёлок из зоны комплектования.
// Последовательная композиция гарантирует, что партии
// заказа полностью готовы до построения нарядов, а запись
// заказа появляется в пуле сразу с партиями и нарядами.
// ==========================================

use crate::domain::codes::new_order_code;
use crate::domain::{CastingTree, Order, OrderRecord};
use crate::engine::expander::UnitExpander;
use crate::engine::grouper::BatchGrouper;
use crate::engine::job_builder::JobBuilder;
use crate::engine::lifecycle::{LifecycleEngine, LifecycleError};
use crate::engine::method::MethodClassifier;
use crate::engine::tree_assembler::TreeAssembler;
use crate::erp::ErpBridge;
use crate::repository::{InsertOutcome, ProductionRepositories, RepositoryError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

// ==========================================
// ProductionOrchestrator
// ==========================================
pub struct ProductionOrchestrator {
    repos: ProductionRepositories,
    expander: UnitExpander,
    grouper: BatchGrouper,
    builder: JobBuilder,
    assembler: TreeAssembler,
    lifecycle: LifecycleEngine,
}

impl ProductionOrchestrator {
    pub fn new(
        repos: ProductionRepositories,
        erp: Arc<dyn ErpBridge>,
        classifier: MethodClassifier,
        precision: u32,
    ) -> Self {
        let lifecycle = LifecycleEngine::new(Arc::clone(&repos.wax_jobs), erp, precision);
        Self {
            expander: UnitExpander::new(),
            grouper: BatchGrouper::new(precision),
            builder: JobBuilder::new(classifier),
            assembler: TreeAssembler::new(precision),
            lifecycle,
            repos,
        }
    }

    /// Движок жизненного цикла нарядов (выдача/сдача/приёмка/выгрузка)
    pub fn lifecycle(&self) -> &LifecycleEngine {
        &self.lifecycle
    }

    /// Проводит заказ: единицы → партии → наряды.
    ///
    /// Ключ идемпотентности - номер заказа; без номера заказ
    /// получает свежий внутренний код. Повторная подача того же
    /// номера возвращает существующую запись, пул нарядов при
    /// этом не растёт.
    #[instrument(skip(self, order), fields(number = order.number.as_deref().unwrap_or("-")))]
    pub fn submit_order(&self, order: Order) -> Result<OrderRecord, RepositoryError> {
        let order_code = order
            .number
            .clone()
            .unwrap_or_else(new_order_code);

        // ранний выход без пересчёта конвейера
        if let Some(existing) = self.repos.orders.get(&order_code)? {
            warn!(order_code, "повторная подача заказа, возвращена существующая запись");
            return Ok(existing);
        }

        let units = self.expander.expand(&order);
        let (batches, mapping) = self.grouper.group(&units);
        let build = self.builder.build(&order, &batches);

        let record = OrderRecord {
            order_code: order_code.clone(),
            order,
            units,
            batches,
            mapping,
            wax_jobs: build.jobs.clone(),
            warnings: build.warnings,
        };

        // вставка и пополнение пула нарядов только при первом проведении
        match self.repos.orders.insert_if_absent(record.clone())? {
            InsertOutcome::Inserted => {
                self.repos.wax_jobs.extend(build.jobs)?;
                info!(
                    order_code,
                    units = record.units.len(),
                    batches = record.batches.len(),
                    job_lines = record.wax_jobs.len(),
                    "заказ проведён"
                );
                Ok(record)
            }
            InsertOutcome::Existing(existing) => {
                warn!(order_code, "повторная подача заказа, возвращена существующая запись");
                Ok(existing)
            }
        }
    }

    /// Собирает ёлки из зоны комплектования.
    ///
    /// Пустая зона даёт пустой результат и не трогает пул ёлок.
    /// При успехе вошедшие наряды получают статус tree_ready,
    /// зона комплектования очищается.
    #[instrument(skip(self))]
    pub fn form_trees(&self) -> Result<Vec<CastingTree>, LifecycleError> {
        let staged = self.repos.staging.list()?;
        if staged.is_empty() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for job_code in &staged {
            match self.lifecycle.summary(job_code) {
                Ok(summary) => summaries.push(summary),
                Err(LifecycleError::JobNotFound(code)) => {
                    // код мог попасть в зону до отката пула; не валим сборку
                    warn!(job_code = code, "в зоне комплектования неизвестный наряд, пропущен");
                }
                Err(e) => return Err(e),
            }
        }
        if summaries.is_empty() {
            return Ok(Vec::new());
        }

        let trees = self.assembler.assemble(&summaries);
        self.repos.trees.append_all(trees.clone())?;

        for tree in &trees {
            for job_code in &tree.member_job_codes {
                self.lifecycle.mark_tree_ready(job_code, &tree.tree_code)?;
            }
        }

        self.repos.staging.clear()?;
        info!(trees = trees.len(), jobs = summaries.len(), "ёлки собраны");
        Ok(trees)
    }
}
