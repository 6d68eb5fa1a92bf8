// ==========================================
// Ювелирный MES - доменная модель
// ==========================================
// Сущности воскового передела: заказ, единица, партия,
// наряд, ёлка. Только данные и инварианты над ними;
// без доступа к пулам и без логики движков.
// ==========================================

pub mod batch;
pub mod codes;
pub mod order;
pub mod tree;
pub mod types;
pub mod unit;
pub mod wax_job;

// Реэкспорт основных типов
pub use batch::{Batch, BatchMapping};
pub use order::{Order, OrderRecord, OrderRow};
pub use tree::CastingTree;
pub use types::{round_weight, CastGroupKey, JobStatus, WaxMethod};
pub use unit::Unit;
pub use wax_job::{JobEvent, JobSummary, WaxJob};
