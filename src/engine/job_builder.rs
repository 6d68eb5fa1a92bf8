// ==========================================
// Ювелирный MES - построитель восковых нарядов
// ==========================================
// Для каждой партии строки заказа сужаются до её ключа
// и делятся по методу изготовления. Каждая пара
// (партия, метод) получает один код наряда; каждая строка
// группы даёт одну строку наряда под этим кодом.
// ==========================================

use crate::domain::codes::new_job_code;
use crate::domain::{Batch, JobStatus, Order, WaxJob, WaxMethod};
use crate::engine::method::MethodClassifier;
use chrono::Utc;
use std::collections::{BTreeMap, HashSet};
use tracing::{instrument, warn};

// ==========================================
// JobBuildResult - результат построения
// ==========================================
// Строки, не попавшие ни в одну партию, не теряются молча:
// каждая даёт предупреждение целостности данных.
#[derive(Debug, Clone)]
pub struct JobBuildResult {
    pub jobs: Vec<WaxJob>,
    pub warnings: Vec<String>,
}

// ==========================================
// JobBuilder - построитель нарядов
// ==========================================
pub struct JobBuilder {
    classifier: MethodClassifier,
}

impl JobBuilder {
    pub fn new(classifier: MethodClassifier) -> Self {
        Self { classifier }
    }

    /// Строит строки нарядов по заказу и его партиям.
    ///
    /// Один код наряда агрегирует все строки с общими
    /// (партия, метод); суммы и объединение артикулов
    /// выполняются при сборке `JobSummary`.
    #[instrument(skip(self, order, batches), fields(rows = order.rows.len(), batches = batches.len()))]
    pub fn build(&self, order: &Order, batches: &[Batch]) -> JobBuildResult {
        let mut jobs = Vec::new();
        let mut matched_rows: HashSet<usize> = HashSet::new();
        let created_at = Utc::now();

        for batch in batches {
            let batch_key = batch.group_key();

            // строки заказа, относящиеся к этой партии
            let rows: Vec<(usize, &_)> = order
                .rows
                .iter()
                .enumerate()
                .filter(|(_, r)| r.group_key() == batch_key)
                .collect();

            // деление строк партии по методу изготовления
            let mut by_method: BTreeMap<WaxMethod, Vec<usize>> = BTreeMap::new();
            for (idx, row) in &rows {
                let method = self.classifier.classify(&row.article);
                by_method.entry(method).or_default().push(*idx);
                matched_rows.insert(*idx);
            }

            for (method, row_indices) in by_method {
                let job_code = new_job_code();
                for idx in row_indices {
                    let row = &order.rows[idx];
                    jobs.push(WaxJob {
                        job_code: job_code.clone(),
                        method,
                        operation: method.operation_label().to_string(),
                        batch_code: batch.barcode.clone(),
                        articles: row.article.clone(),
                        metal: batch.metal.clone(),
                        hallmark: batch.hallmark.clone(),
                        color: batch.color.clone(),
                        qty: row.qty,
                        weight: row.weight,
                        status: JobStatus::Created,
                        created_at,
                        assigned_to: None,
                        completed_by: None,
                        measured_wax_weight: None,
                        accepted_by: None,
                        erp_doc_number: None,
                        events: Vec::new(),
                    });
                }
            }
        }

        // строки без партии - нарушение целостности данных
        let mut warnings = Vec::new();
        for (idx, row) in order.rows.iter().enumerate() {
            if !matched_rows.contains(&idx) {
                let message = format!(
                    "строка {} (артикул {}) не попала ни в одну партию: {}",
                    idx + 1,
                    row.article,
                    row.group_key()
                );
                warn!(article = %row.article, key = %row.group_key(), "строка заказа без партии");
                warnings.push(message);
            }
        }

        JobBuildResult { jobs, warnings }
    }
}
