// ==========================================
// Ювелирный MES - заказ в производство
// ==========================================
// Заказ приходит из формы ввода в виде JSON:
// шапка (номер может отсутствовать до присвоения) + строки
// ==========================================

use crate::domain::batch::{Batch, BatchMapping};
use crate::domain::types::CastGroupKey;
use crate::domain::unit::Unit;
use crate::domain::wax_job::WaxJob;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderRow - строка заказа
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub article: String,  // артикул изделия
    pub qty: u32,         // количество штук
    pub weight: f64,      // суммарный вес строки (г)
    pub metal: String,    // металл
    pub hallmark: String, // проба
    pub color: String,    // цвет металла
    pub size: f64,        // размер
}

impl OrderRow {
    /// Ключ металлургической группировки строки
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }

    /// Вес одной единицы; при нулевом количестве считается нулевым,
    /// деления на ноль не возникает
    pub fn unit_weight(&self) -> f64 {
        if self.qty == 0 {
            0.0
        } else {
            self.weight / self.qty as f64
        }
    }
}

// ==========================================
// Order - заказ в производство
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    // Номер вида «00ЮП-000123»; отсутствует до присвоения
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    pub rows: Vec<OrderRow>,
}

// ==========================================
// OrderRecord - проведённый заказ
// ==========================================
// Полный результат разворота: единицы, партии, привязка
// партия → единицы и созданные восковые наряды.
// Хранится в пуле заказов, повторная подача возвращает его же.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_code: String,       // ключ идемпотентности
    pub order: Order,             // исходный заказ как подан
    pub units: Vec<Unit>,         // развёрнутые единицы
    pub batches: Vec<Batch>,      // партии (металл/проба/цвет)
    pub mapping: BatchMapping,    // партия → штрихкоды единиц
    pub wax_jobs: Vec<WaxJob>,    // строки нарядов на момент проведения
    pub warnings: Vec<String>,    // предупреждения целостности данных
}
