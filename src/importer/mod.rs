// ==========================================
// Ювелирный MES - слой приёма внешних данных
// ==========================================

pub mod order_import;

pub use order_import::{next_order_number, ImportError, ImportedOrder, OrderImporter};
