// ==========================================
// Ювелирный MES - сборка восковых ёлок
// ==========================================
// Принятые наряды с общим (металл, проба, цвет) собираются
// в одну ёлку для литейного передела. Чистая агрегация:
// пулы не трогает, этим занимается оркестратор.
// ==========================================

use crate::domain::codes::new_tree_code;
use crate::domain::{round_weight, CastGroupKey, CastingTree, JobSummary};
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// TreeAssembler - агрегация нарядов в ёлки
// ==========================================
pub struct TreeAssembler {
    precision: u32,
}

impl TreeAssembler {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Собирает ёлки из переданных нарядов.
    ///
    /// Количество и вес ёлки - суммы по вошедшим нарядам,
    /// вес округлён до точности учёта. Пустой вход даёт
    /// пустой результат.
    #[instrument(skip(self, jobs), fields(jobs = jobs.len()))]
    pub fn assemble(&self, jobs: &[JobSummary]) -> Vec<CastingTree> {
        let mut groups: BTreeMap<CastGroupKey, Vec<&JobSummary>> = BTreeMap::new();
        for job in jobs {
            groups.entry(job.group_key()).or_default().push(job);
        }

        groups
            .into_iter()
            .map(|(key, members)| {
                let weight: f64 = members.iter().map(|j| j.weight).sum();
                CastingTree {
                    tree_code: new_tree_code(),
                    metal: key.metal,
                    hallmark: key.hallmark,
                    color: key.color,
                    qty: members.iter().map(|j| j.qty).sum(),
                    weight: round_weight(weight, self.precision),
                    member_job_codes: members.iter().map(|j| j.job_code.clone()).collect(),
                }
            })
            .collect()
    }
}
