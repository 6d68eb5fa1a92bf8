// ==========================================
// JobBuilder - построение восковых нарядов
// ==========================================
// Проверяется: один код на (партия, метод), строки под общим
// кодом, сводка логического наряда, предупреждения о строках
// без партии
// ==========================================


use jewelry_wax_mes::domain::{JobStatus, JobSummary, Order, WaxMethod};
use jewelry_wax_mes::engine::{BatchGrouper, JobBuilder, MethodClassifier, UnitExpander};
use std::collections::HashSet;
use test_helpers::{make_row, sample_order, PRECISION};

fn build_jobs(order: &Order) -> jewelry_wax_mes::engine::JobBuildResult {
    let units = UnitExpander::new().expand(order);
    let (batches, _) = BatchGrouper::new(PRECISION).group(&units);
    JobBuilder::new(MethodClassifier::new()).build(order, &batches)
}

#[test]
fn test_two_methods_in_one_batch_give_two_job_codes() {
    // смешанный заказ: R-1001 - резина, 3D-1003 - 3D печать,
    // одна партия (Золото 585 красный)
    let order = sample_order();
    let result = build_jobs(&order);

    assert!(result.warnings.is_empty());
    assert_eq!(result.jobs.len(), 2);

    let codes: HashSet<&str> = result.jobs.iter().map(|j| j.job_code.as_str()).collect();
    assert_eq!(codes.len(), 2, "для двух методов нужны два кода наряда");

    let methods: HashSet<WaxMethod> = result.jobs.iter().map(|j| j.method).collect();
    assert!(methods.contains(&WaxMethod::ThreeD));
    assert!(methods.contains(&WaxMethod::Rubber));
}

#[test]
fn test_same_method_rows_share_one_code() {
    let order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4), make_row("K-2002", 1, 3.0)],
    };
    let result = build_jobs(&order);

    // обе строки -резина- под одним кодом
    assert_eq!(result.jobs.len(), 2);
    assert_eq!(result.jobs[0].job_code, result.jobs[1].job_code);
    assert!(result.jobs[0].job_code.starts_with("WX-"));
}

#[test]
fn test_job_lines_carry_batch_fields_and_created_status() {
    let order = sample_order();
    let units = UnitExpander::new().expand(&order);
    let (batches, _) = BatchGrouper::new(PRECISION).group(&units);
    let result = JobBuilder::new(MethodClassifier::new()).build(&order, &batches);

    for job in &result.jobs {
        assert_eq!(job.batch_code, batches[0].barcode);
        assert_eq!(job.metal, "Золото");
        assert_eq!(job.status, JobStatus::Created);
        assert_eq!(job.operation, job.method.operation_label());
        assert!(job.events.is_empty());
        assert!(job.erp_doc_number.is_none());
    }
}

#[test]
fn test_summary_aggregates_lines_of_one_code() {
    let order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4), make_row("K-2002", 1, 3.0)],
    };
    let result = build_jobs(&order);

    let summary = JobSummary::from_lines(&result.jobs, PRECISION).unwrap();
    assert_eq!(summary.qty, 3);
    assert!((summary.weight - 9.4).abs() < 1e-9);
    assert_eq!(summary.articles, "K-2002, R-1001");
    assert_eq!(summary.status, JobStatus::Created);
}

#[test]
fn test_row_without_batch_yields_warning() {
    // партии посчитаны по другому заказу: строка «Серебро» остаётся без партии
    let gold_order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4)],
    };
    let units = UnitExpander::new().expand(&gold_order);
    let (batches, _) = BatchGrouper::new(PRECISION).group(&units);

    let mut silver_row = make_row("S-3005", 1, 2.0);
    silver_row.metal = "Серебро".to_string();
    let mixed_order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4), silver_row],
    };

    let result = JobBuilder::new(MethodClassifier::new()).build(&mixed_order, &batches);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("S-3005"));
    // строка с партией построена как обычно
    assert_eq!(result.jobs.len(), 1);
}

#[test]
fn test_empty_summary_is_none() {
    assert!(JobSummary::from_lines(&[], PRECISION).is_none());
}
