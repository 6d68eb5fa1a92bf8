// ==========================================
// Ювелирный MES - восковой наряд
// ==========================================
// Наряд - документ воскового передела на один метод изготовления
// внутри одной партии. Один код наряда разделяют все строки
// с тем же (партия, метод); при отображении и переходах статуса
// логический наряд собирается заново через JobSummary.
// ==========================================

use crate::domain::types::{round_weight, CastGroupKey, JobStatus, WaxMethod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;

// ==========================================
// JobEvent - запись журнала наряда
// ==========================================
// Журнал только дописывается, записи не редактируются
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobEvent {
    pub stage: String,            // этап (given/done/accepted/synced_to_erp/tree_ready)
    pub user: Option<String>,     // сотрудник, выполнивший действие
    pub at: DateTime<Utc>,        // момент события
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<JsonValue>, // дополнительная нагрузка (вес воска, номер документа)
}

impl JobEvent {
    pub fn new(stage: &str, user: Option<&str>, extra: Option<JsonValue>) -> Self {
        Self {
            stage: stage.to_string(),
            user: user.map(str::to_string),
            at: Utc::now(),
            extra,
        }
    }
}

// ==========================================
// WaxJob - строка воскового наряда
// ==========================================
// Создаётся построителем нарядов, меняется только через
// движок жизненного цикла. Не удаляется, только переводится.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaxJob {
    // ===== Идентификация =====
    pub job_code: String,      // общий код логического наряда (WX-...)
    pub method: WaxMethod,     // метод изготовления
    pub operation: String,     // название операции (по методу)
    pub batch_code: String,    // обратная ссылка на партию

    // ===== Состав строки =====
    pub articles: String,      // артикулы строки (для отображения)
    pub metal: String,         // металл партии
    pub hallmark: String,      // проба партии
    pub color: String,         // цвет партии
    pub qty: u32,              // количество по строке
    pub weight: f64,           // вес по строке (г)

    // ===== Жизненный цикл =====
    pub status: JobStatus,              // текущий статус
    pub created_at: DateTime<Utc>,      // момент создания
    pub assigned_to: Option<String>,    // кому выдан
    pub completed_by: Option<String>,   // кто сдал
    pub measured_wax_weight: Option<f64>, // фактический вес воска (весов может не быть)
    pub accepted_by: Option<String>,    // кто принял

    // ===== Синхронизация с ERP =====
    pub erp_doc_number: Option<String>, // номер документа в 1С после выгрузки

    // ===== Журнал =====
    pub events: Vec<JobEvent>, // только дописывается
}

impl WaxJob {
    /// Ключ металлургической группировки наряда
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }
}

// ==========================================
// JobSummary - логический наряд целиком
// ==========================================
// Переагрегация строк, разделяющих один код: суммы количества
// и веса, объединение артикулов. Именно в этом виде наряд
// показывается оператору и выгружается в ERP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_code: String,
    pub method: WaxMethod,
    pub operation: String,
    pub batch_code: String,
    pub articles: String, // объединение артикулов, отсортировано
    pub metal: String,
    pub hallmark: String,
    pub color: String,
    pub qty: u32,
    pub weight: f64, // округлён до точности учёта
    pub status: JobStatus,
    pub erp_doc_number: Option<String>,
}

impl JobSummary {
    /// Собирает логический наряд из его строк.
    ///
    /// Все строки обязаны разделять один код; строки одного кода
    /// переводятся по статусам вместе, поэтому статус берётся
    /// из первой строки. Пустой срез даёт `None`.
    pub fn from_lines(lines: &[WaxJob], precision: u32) -> Option<Self> {
        let first = lines.first()?;

        let mut articles: BTreeSet<&str> = BTreeSet::new();
        let mut qty: u32 = 0;
        let mut weight = 0.0;
        for line in lines {
            for art in line.articles.split(", ") {
                if !art.is_empty() {
                    articles.insert(art);
                }
            }
            qty += line.qty;
            weight += line.weight;
        }

        Some(Self {
            job_code: first.job_code.clone(),
            method: first.method,
            operation: first.operation.clone(),
            batch_code: first.batch_code.clone(),
            articles: articles.into_iter().collect::<Vec<_>>().join(", "),
            metal: first.metal.clone(),
            hallmark: first.hallmark.clone(),
            color: first.color.clone(),
            qty,
            weight: round_weight(weight, precision),
            status: first.status,
            erp_doc_number: first.erp_doc_number.clone(),
        })
    }

    /// Ключ металлургической группировки
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }
}
