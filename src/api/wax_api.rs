// ==========================================
// Ювелирный MES - API воскового передела
// ==========================================
// Представления для экрана «Воскование / 3D печать»:
// наряды по методам, партии с раскладкой по артикулам,
// действия оператора (выдать / сдано / принято / в 1С),
// зона комплектования и сборка ёлок.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{CastingTree, JobStatus, JobSummary, WaxMethod};
use crate::engine::ProductionOrchestrator;
use crate::repository::ProductionRepositories;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

// ==========================================
// Представления для дерева нарядов
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    pub job_code: String,
    pub operation: String,
    pub articles: String,
    pub qty: u32,
    pub weight: f64,
    pub status: JobStatus,
    pub erp_synced: bool, // колонка «1С»
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodGroupView {
    pub method: WaxMethod,
    pub label: String, // «3D печать» / «Резина»
    pub jobs: Vec<JobView>,
}

// ==========================================
// Представления для дерева партий
// ==========================================

/// Позиция партии: артикул и размер с суммами по строкам заказов
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPosition {
    pub article: String,
    pub size: f64,
    pub qty: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOverview {
    pub batch_code: String,
    pub metal: String,
    pub hallmark: String,
    pub color: String,
    pub qty: u32,
    pub total_weight: f64,
    /// Сумма фактических весов воска по строкам нарядов партии
    pub measured_wax_weight: f64,
    pub positions: Vec<BatchPosition>,
}

// ==========================================
// WaxApi
// ==========================================
pub struct WaxApi {
    orchestrator: Arc<ProductionOrchestrator>,
    repos: ProductionRepositories,
    precision: u32,
}

impl WaxApi {
    pub fn new(
        orchestrator: Arc<ProductionOrchestrator>,
        repos: ProductionRepositories,
        precision: u32,
    ) -> Self {
        Self {
            orchestrator,
            repos,
            precision,
        }
    }

    // ==========================================
    // Представления
    // ==========================================

    /// Логические наряды, сгруппированные по методу изготовления
    pub fn jobs_by_method(&self) -> ApiResult<Vec<MethodGroupView>> {
        let mut groups: BTreeMap<WaxMethod, Vec<JobView>> = BTreeMap::new();
        for summary in self.job_summaries()? {
            groups.entry(summary.method).or_default().push(JobView {
                job_code: summary.job_code.clone(),
                operation: summary.operation.clone(),
                articles: summary.articles.clone(),
                qty: summary.qty,
                weight: summary.weight,
                status: summary.status,
                erp_synced: summary.erp_doc_number.is_some(),
            });
        }

        Ok(groups
            .into_iter()
            .map(|(method, jobs)| MethodGroupView {
                method,
                label: method.label().to_string(),
                jobs,
            })
            .collect())
    }

    /// Партии с раскладкой по (артикул, размер) и набранным весом воска
    pub fn batch_overview(&self) -> ApiResult<Vec<BatchOverview>> {
        let lines = self.repos.wax_jobs.all()?;
        let mut overview = Vec::new();

        for order_code in self.repos.orders.list_codes()? {
            let record = match self.repos.orders.get(&order_code)? {
                Some(record) => record,
                None => continue,
            };

            for batch in &record.batches {
                let key = batch.group_key();

                // раскладка по артикулу и размеру из строк заказа
                let mut agg: BTreeMap<(String, String), BatchPosition> = BTreeMap::new();
                for row in &record.order.rows {
                    if row.group_key() != key {
                        continue;
                    }
                    let slot = agg
                        .entry((row.article.clone(), format!("{}", row.size)))
                        .or_insert_with(|| BatchPosition {
                            article: row.article.clone(),
                            size: row.size,
                            qty: 0,
                            weight: 0.0,
                        });
                    slot.qty += row.qty;
                    slot.weight += row.weight;
                }

                let measured: f64 = lines
                    .iter()
                    .filter(|l| l.batch_code == batch.barcode)
                    .filter_map(|l| l.measured_wax_weight)
                    .sum();

                overview.push(BatchOverview {
                    batch_code: batch.barcode.clone(),
                    metal: batch.metal.clone(),
                    hallmark: batch.hallmark.clone(),
                    color: batch.color.clone(),
                    qty: batch.qty,
                    total_weight: batch.total_weight,
                    measured_wax_weight: crate::domain::round_weight(measured, self.precision),
                    positions: agg.into_values().collect(),
                });
            }
        }

        Ok(overview)
    }

    // ==========================================
    // Действия оператора
    // ==========================================

    /// «Выдать»: наряд уходит исполнителю
    pub fn give(&self, job_code: &str, executor: &str) -> ApiResult<()> {
        Ok(self.orchestrator.lifecycle().give(job_code, executor)?)
    }

    /// «Сдано»: наряд выполнен, вес воска может отсутствовать
    pub fn complete(
        &self,
        job_code: &str,
        executor: &str,
        measured_weight: Option<f64>,
    ) -> ApiResult<()> {
        Ok(self
            .orchestrator
            .lifecycle()
            .complete(job_code, executor, measured_weight)?)
    }

    /// «Принято»: приёмка контролем с попыткой выгрузки в 1С
    pub fn accept(&self, job_code: &str, inspector: &str) -> ApiResult<Option<String>> {
        let outcome = self.orchestrator.lifecycle().accept(job_code, inspector)?;
        Ok(outcome.erp_doc_number)
    }

    /// «В 1С»: повторная выгрузка наряда
    pub fn sync_to_erp(&self, job_code: &str) -> ApiResult<Option<String>> {
        Ok(self.orchestrator.lifecycle().sync_to_erp(job_code)?)
    }

    // ==========================================
    // Комплектование и ёлки
    // ==========================================

    /// Кладёт принятый наряд в зону комплектования
    pub fn stage_for_assembly(&self, job_code: &str) -> ApiResult<bool> {
        let summary = self.orchestrator.lifecycle().summary(job_code)?;
        if summary.status != JobStatus::Accepted {
            return Err(ApiError::InvalidInput(format!(
                "наряд {} не принят контролем (статус {})",
                job_code, summary.status
            )));
        }
        Ok(self.repos.staging.stage(job_code)?)
    }

    /// Убирает наряд из зоны комплектования
    pub fn unstage(&self, job_code: &str) -> ApiResult<bool> {
        Ok(self.repos.staging.unstage(job_code)?)
    }

    /// Содержимое зоны комплектования
    pub fn staged_codes(&self) -> ApiResult<Vec<String>> {
        Ok(self.repos.staging.list()?)
    }

    /// Собирает ёлки из зоны комплектования
    pub fn form_trees(&self) -> ApiResult<Vec<CastingTree>> {
        Ok(self.orchestrator.form_trees()?)
    }

    /// Все собранные ёлки
    pub fn list_trees(&self) -> ApiResult<Vec<CastingTree>> {
        Ok(self.repos.trees.list()?)
    }

    // ==========================================
    // Внутреннее
    // ==========================================

    /// Сводки всех логических нарядов в порядке появления
    fn job_summaries(&self) -> ApiResult<Vec<JobSummary>> {
        let mut summaries = Vec::new();
        for code in self.repos.wax_jobs.job_codes()? {
            let lines = self.repos.wax_jobs.lines(&code)?;
            if let Some(summary) = JobSummary::from_lines(&lines, self.precision) {
                summaries.push(summary);
            }
        }
        Ok(summaries)
    }
}
