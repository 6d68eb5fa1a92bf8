// ==========================================
// LifecycleEngine - жизненный цикл наряда
// ==========================================
// Проверяется: цепочка created → given → done → accepted,
// журнал событий, запреты переходов, неизвестные коды,
// выгрузка в 1С по возможности и её повтор
// ==========================================


use jewelry_wax_mes::api::ApiError;
use jewelry_wax_mes::domain::{JobStatus, JobSummary};
use jewelry_wax_mes::erp::{ErpBridge, ErpError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use test_helpers::{build_stack, build_stack_recording, sample_order, FailingBridge};

/// Первый вызов отказывает, дальше отвечает успехом
struct FlakyBridge {
    failed_once: AtomicBool,
}

impl FlakyBridge {
    fn new() -> Self {
        Self {
            failed_once: AtomicBool::new(false),
        }
    }
}

impl ErpBridge for FlakyBridge {
    fn create_work_order(&self, _job: &JobSummary) -> Result<String, ErpError> {
        if !self.failed_once.swap(true, Ordering::SeqCst) {
            Err(ErpError::Unavailable("COM-сессия оборвалась".to_string()))
        } else {
            Ok("00НВ-000042".to_string())
        }
    }
}

fn submit_and_first_code(stack: &test_helpers::TestStack) -> String {
    stack.orders.submit(sample_order()).unwrap();
    stack.repos.wax_jobs.job_codes().unwrap()[0].clone()
}

#[test]
fn test_full_chain_with_events_and_erp_sync() {
    let (stack, bridge) = build_stack_recording();
    let code = submit_and_first_code(&stack);
    let lifecycle = stack.orchestrator.lifecycle();

    lifecycle.give(&code, "Иванов").unwrap();
    assert_eq!(lifecycle.summary(&code).unwrap().status, JobStatus::Given);

    lifecycle.complete(&code, "Иванов", Some(2.75)).unwrap();
    assert_eq!(lifecycle.summary(&code).unwrap().status, JobStatus::Done);

    let outcome = lifecycle.accept(&code, "Петрова").unwrap();
    let summary = lifecycle.summary(&code).unwrap();
    assert_eq!(summary.status, JobStatus::Accepted);
    assert_eq!(outcome.erp_doc_number.as_deref(), Some("00НВ-000001"));
    assert_eq!(summary.erp_doc_number, outcome.erp_doc_number);
    assert_eq!(bridge.created.lock().unwrap().as_slice(), &[code.clone()]);

    // журнал: given, done, accepted, synced_to_erp
    let lines = stack.repos.wax_jobs.lines(&code).unwrap();
    let stages: Vec<&str> = lines[0].events.iter().map(|e| e.stage.as_str()).collect();
    assert_eq!(stages, vec!["given", "done", "accepted", "synced_to_erp"]);
    assert_eq!(lines[0].assigned_to.as_deref(), Some("Иванов"));
    assert_eq!(lines[0].completed_by.as_deref(), Some("Иванов"));
    assert_eq!(lines[0].accepted_by.as_deref(), Some("Петрова"));
    assert_eq!(lines[0].measured_wax_weight, Some(2.75));
}

#[test]
fn test_complete_without_scale_is_allowed() {
    let (stack, _) = build_stack_recording();
    let code = submit_and_first_code(&stack);
    let lifecycle = stack.orchestrator.lifecycle();

    lifecycle.give(&code, "Иванов").unwrap();
    lifecycle.complete(&code, "Иванов", None).unwrap();

    let lines = stack.repos.wax_jobs.lines(&code).unwrap();
    assert_eq!(lines[0].status, JobStatus::Done);
    assert_eq!(lines[0].measured_wax_weight, None);
}

#[test]
fn test_invalid_transition_rejected_without_mutation() {
    let (stack, _) = build_stack_recording();
    let code = submit_and_first_code(&stack);

    // сдать невыданный наряд нельзя
    let err = stack.wax.complete(&code, "Иванов", None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidTransition(_)));

    let summary = stack.orchestrator.lifecycle().summary(&code).unwrap();
    assert_eq!(summary.status, JobStatus::Created);
    let lines = stack.repos.wax_jobs.lines(&code).unwrap();
    assert!(lines[0].events.is_empty());
}

#[test]
fn test_unknown_job_code_is_recoverable_noop() {
    let (stack, _) = build_stack_recording();
    stack.orders.submit(sample_order()).unwrap();
    let before = stack.repos.wax_jobs.all().unwrap();

    for result in [
        stack.wax.give("WX-НЕТТАКОГО", "Иванов"),
        stack.wax.complete("WX-НЕТТАКОГО", "Иванов", None),
        stack.wax.accept("WX-НЕТТАКОГО", "ОТК").map(|_| ()),
        stack.wax.sync_to_erp("WX-НЕТТАКОГО").map(|_| ()),
    ] {
        assert!(matches!(result.unwrap_err(), ApiError::NotFound(_)));
    }

    // ни один пул не изменился
    assert_eq!(stack.repos.wax_jobs.all().unwrap(), before);
}

#[test]
fn test_erp_failure_keeps_local_accept() {
    let stack = build_stack(Arc::new(FailingBridge));
    let code = submit_and_first_code(&stack);
    let lifecycle = stack.orchestrator.lifecycle();

    lifecycle.give(&code, "Иванов").unwrap();
    lifecycle.complete(&code, "Иванов", Some(1.0)).unwrap();
    let outcome = lifecycle.accept(&code, "ОТК").unwrap();

    // локальный переход прошёл, номера документа нет
    assert_eq!(outcome.erp_doc_number, None);
    let summary = lifecycle.summary(&code).unwrap();
    assert_eq!(summary.status, JobStatus::Accepted);
    assert_eq!(summary.erp_doc_number, None);

    // повтор при той же недоступной базе снова безопасен
    assert_eq!(lifecycle.sync_to_erp(&code).unwrap(), None);
}

#[test]
fn test_sync_retry_after_erp_recovery() {
    let stack = build_stack(Arc::new(FlakyBridge::new()));
    let code = submit_and_first_code(&stack);
    let lifecycle = stack.orchestrator.lifecycle();

    lifecycle.give(&code, "Иванов").unwrap();
    lifecycle.complete(&code, "Иванов", None).unwrap();
    // первая попытка при приёмке отказала
    let outcome = lifecycle.accept(&code, "ОТК").unwrap();
    assert_eq!(outcome.erp_doc_number, None);

    // явный повтор после восстановления базы
    let doc = lifecycle.sync_to_erp(&code).unwrap();
    assert_eq!(doc.as_deref(), Some("00НВ-000042"));

    let summary = lifecycle.summary(&code).unwrap();
    assert_eq!(summary.erp_doc_number.as_deref(), Some("00НВ-000042"));
    let lines = stack.repos.wax_jobs.lines(&code).unwrap();
    assert!(lines[0].events.iter().any(|e| e.stage == "synced_to_erp"));
}
