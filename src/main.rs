// ==========================================
// Ювелирный MES - консольная точка входа
// ==========================================
// Принимает файл заказа (JSON), проводит его через ядро
// и печатает итог разворота. GUI-оболочка живёт отдельно
// и работает через тот же API-слой.
// ==========================================

use anyhow::{bail, Context};
use jewelry_wax_mes::api::{OrderApi, WaxApi};
use jewelry_wax_mes::config::{default_config_path, AppConfig};
use jewelry_wax_mes::engine::ProductionOrchestrator;
use jewelry_wax_mes::erp::{OfflineBridge, TimeoutBridge};
use jewelry_wax_mes::importer::OrderImporter;
use jewelry_wax_mes::repository::ProductionRepositories;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    jewelry_wax_mes::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", jewelry_wax_mes::APP_NAME);
    tracing::info!("Версия: {}", jewelry_wax_mes::VERSION);
    tracing::info!("==================================================");

    let order_path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => bail!("использование: jewelry-wax-mes <файл-заказа.json>"),
    };

    let config_path = default_config_path();
    let config = AppConfig::load_or_default(&config_path)?;
    tracing::info!(precision = config.weight_precision, "конфигурация загружена");

    // без подключения к 1С: выгрузка нарядов отказывает, ядро работает
    let erp = Arc::new(TimeoutBridge::new(Arc::new(OfflineBridge), config.erp_timeout()));

    let repos = ProductionRepositories::new();
    let orchestrator = Arc::new(ProductionOrchestrator::new(
        repos.clone(),
        erp,
        config.method_classifier(),
        config.weight_precision,
    ));
    let orders = OrderApi::new(Arc::clone(&orchestrator), repos.clone());
    let wax = WaxApi::new(orchestrator, repos, config.weight_precision);

    let imported = OrderImporter::new()
        .load_file(&order_path)
        .with_context(|| format!("приём заказа из {}", order_path.display()))?;
    for warning in &imported.warnings {
        tracing::warn!(warning, "предупреждение приёма");
    }

    let record = orders.submit(imported.order)?;
    println!("{}", serde_json::to_string_pretty(&record)?);

    for group in wax.jobs_by_method()? {
        tracing::info!(
            method = %group.label,
            jobs = group.jobs.len(),
            "наряды по методу"
        );
    }

    Ok(())
}
