// ==========================================
// Ювелирный MES - слой конфигурации
// ==========================================

pub mod app_config;

pub use app_config::{default_config_path, AppConfig};
