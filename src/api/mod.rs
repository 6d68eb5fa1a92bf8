// ==========================================
// Ювелирный MES - API-слой
// ==========================================
// Тонкий фасад над движками и пулами для экранов GUI.
// Бизнес-правила живут в движках, здесь - делегация
// и представления для отображения.
// ==========================================

pub mod error;
pub mod order_api;
pub mod wax_api;

pub use error::{ApiError, ApiResult};
pub use order_api::{OrderApi, SubmitOrderResponse};
pub use wax_api::{BatchOverview, BatchPosition, JobView, MethodGroupView, WaxApi};
