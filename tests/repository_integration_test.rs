// ==========================================
// Слой пулов - хранение и условные правки
// ==========================================
// Проверяется: идемпотентная вставка заказов, условный
// переход строк наряда, зона комплектования, пул ёлок
// ==========================================


use jewelry_wax_mes::domain::{CastingTree, JobStatus};
use jewelry_wax_mes::engine::{BatchGrouper, JobBuilder, MethodClassifier, UnitExpander};
use jewelry_wax_mes::repository::{
    AssemblyStagingRepository, InsertOutcome, LineUpdate, OrderRepository, TreeRepository,
    WaxJobRepository,
};
use test_helpers::{sample_order, PRECISION};

fn sample_record(code: &str) -> jewelry_wax_mes::domain::OrderRecord {
    let order = sample_order();
    let units = UnitExpander::new().expand(&order);
    let (batches, mapping) = BatchGrouper::new(PRECISION).group(&units);
    let build = JobBuilder::new(MethodClassifier::new()).build(&order, &batches);
    jewelry_wax_mes::domain::OrderRecord {
        order_code: code.to_string(),
        order,
        units,
        batches,
        mapping,
        wax_jobs: build.jobs,
        warnings: build.warnings,
    }
}

#[test]
fn test_order_insert_is_idempotent() {
    let repo = OrderRepository::new();
    let record = sample_record("00ЮП-000001");

    assert_eq!(
        repo.insert_if_absent(record.clone()).unwrap(),
        InsertOutcome::Inserted
    );
    // повторная вставка возвращает первую запись и не перезаписывает
    let mut replay = sample_record("00ЮП-000001");
    replay.warnings.push("изменённая запись".to_string());
    match repo.insert_if_absent(replay).unwrap() {
        InsertOutcome::Existing(existing) => assert_eq!(existing, record),
        other => panic!("ожидалась существующая запись, получено {other:?}"),
    }
    assert_eq!(repo.count().unwrap(), 1);
}

#[test]
fn test_transition_lines_checks_status() {
    let repo = WaxJobRepository::new();
    let record = sample_record("00ЮП-000002");
    let code = record.wax_jobs[0].job_code.clone();
    repo.extend(record.wax_jobs.clone()).unwrap();

    // неизвестный код: пул не тронут
    let missing = repo
        .transition_lines("WX-НЕТ", JobStatus::Created, |_| {})
        .unwrap();
    assert_eq!(missing, LineUpdate::Missing);

    // несовпадение статуса: пул не тронут
    let mismatch = repo
        .transition_lines(&code, JobStatus::Done, |j| j.status = JobStatus::Accepted)
        .unwrap();
    assert_eq!(mismatch, LineUpdate::StatusMismatch(JobStatus::Created));
    assert!(repo
        .lines(&code)
        .unwrap()
        .iter()
        .all(|j| j.status == JobStatus::Created));

    // корректный переход затрагивает все строки кода
    let applied = repo
        .transition_lines(&code, JobStatus::Created, |j| j.status = JobStatus::Given)
        .unwrap();
    let touched = repo.lines(&code).unwrap().len();
    assert_eq!(applied, LineUpdate::Applied(touched));
}

#[test]
fn test_job_codes_in_first_seen_order() {
    let repo = WaxJobRepository::new();
    let record = sample_record("00ЮП-000003");
    repo.extend(record.wax_jobs.clone()).unwrap();

    let codes = repo.job_codes().unwrap();
    let mut expected = Vec::new();
    for job in &record.wax_jobs {
        if !expected.contains(&job.job_code) {
            expected.push(job.job_code.clone());
        }
    }
    assert_eq!(codes, expected);
}

#[test]
fn test_staging_dedup_and_reset() {
    let staging = AssemblyStagingRepository::new();

    assert!(staging.stage("WX-1").unwrap());
    assert!(!staging.stage("WX-1").unwrap()); // повтор игнорируется
    assert!(staging.stage("WX-2").unwrap());
    assert_eq!(staging.list().unwrap(), vec!["WX-1", "WX-2"]);

    assert!(staging.unstage("WX-1").unwrap());
    assert!(!staging.unstage("WX-1").unwrap());

    staging.clear().unwrap();
    assert!(staging.list().unwrap().is_empty());
}

#[test]
fn test_staging_drain_empties_zone() {
    let staging = AssemblyStagingRepository::new();
    staging.stage("WX-1").unwrap();
    staging.stage("WX-2").unwrap();

    let drained = staging.drain().unwrap();
    assert_eq!(drained.len(), 2);
    assert!(staging.list().unwrap().is_empty());
}

#[test]
fn test_tree_pool_append_only() {
    let trees = TreeRepository::new();
    assert_eq!(trees.count().unwrap(), 0);

    trees
        .append_all(vec![CastingTree {
            tree_code: "TR-000001".to_string(),
            metal: "Золото".to_string(),
            hallmark: "585".to_string(),
            color: "красный".to_string(),
            qty: 3,
            weight: 9.6,
            member_job_codes: vec!["WX-1".to_string()],
        }])
        .unwrap();

    assert_eq!(trees.count().unwrap(), 1);
    assert_eq!(trees.list().unwrap()[0].tree_code, "TR-000001");
}
