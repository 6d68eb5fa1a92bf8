// ==========================================
// Ювелирный MES - мост в 1С (внешний канал)
// ==========================================

pub mod bridge;
pub mod timeout;

pub use bridge::{ErpBridge, ErpError, OfflineBridge};
pub use timeout::TimeoutBridge;
