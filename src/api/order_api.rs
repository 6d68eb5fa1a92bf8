// ==========================================
// Ювелирный MES - API заказов
// ==========================================
// Тонкая обёртка для формы ввода заказов: приём JSON,
// проведение через оркестратор, выборка записей.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Order, OrderRecord};
use crate::engine::ProductionOrchestrator;
use crate::importer::OrderImporter;
use crate::repository::ProductionRepositories;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Ответ на проведение заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    pub record: OrderRecord,
    /// Предупреждения приёма (нулевые количества и т.п.)
    pub import_warnings: Vec<String>,
}

// ==========================================
// OrderApi
// ==========================================
pub struct OrderApi {
    orchestrator: Arc<ProductionOrchestrator>,
    repos: ProductionRepositories,
    importer: OrderImporter,
}

impl OrderApi {
    pub fn new(orchestrator: Arc<ProductionOrchestrator>, repos: ProductionRepositories) -> Self {
        Self {
            orchestrator,
            repos,
            importer: OrderImporter::new(),
        }
    }

    /// Проводит заказ, поданный JSON-строкой из формы ввода
    pub fn submit_json(&self, json: &str) -> ApiResult<SubmitOrderResponse> {
        let imported = self.importer.parse(json)?;
        let record = self.orchestrator.submit_order(imported.order)?;
        debug!(order_code = %record.order_code, "заказ проведён через API");
        Ok(SubmitOrderResponse {
            record,
            import_warnings: imported.warnings,
        })
    }

    /// Проводит уже типизированный заказ
    pub fn submit(&self, order: Order) -> ApiResult<OrderRecord> {
        Ok(self.orchestrator.submit_order(order)?)
    }

    /// Запись проведённого заказа по коду
    pub fn get(&self, order_code: &str) -> ApiResult<OrderRecord> {
        self.repos
            .orders
            .get(order_code)?
            .ok_or_else(|| ApiError::NotFound(format!("заказ {order_code}")))
    }

    /// Коды всех проведённых заказов
    pub fn list_codes(&self) -> ApiResult<Vec<String>> {
        Ok(self.repos.orders.list_codes()?)
    }
}
