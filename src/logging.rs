// ==========================================
// Ювелирный MES - инициализация логирования
// ==========================================
// tracing + tracing-subscriber, уровень через RUST_LOG
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Инициализация логирования процесса.
///
/// # Переменные окружения
/// - RUST_LOG: фильтр уровней (по умолчанию info),
///   например RUST_LOG=debug или RUST_LOG=jewelry_wax_mes=trace
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Инициализация логирования в тестах.
///
/// Более подробный уровень и вывод через test writer;
/// повторный вызов безвреден.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
