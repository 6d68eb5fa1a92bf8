// ==========================================
// Ювелирный MES - разворот заказа в единицы
// ==========================================
// Каждая строка заказа превращается в qty прослеживаемых
// единиц со свежими штрихкодами; вес строки делится поровну.
// ==========================================

use crate::domain::codes::new_unit_barcode;
use crate::domain::{Order, Unit};
use tracing::instrument;

// ==========================================
// UnitExpander - разворот количества в единицы
// ==========================================
pub struct UnitExpander;

impl UnitExpander {
    pub fn new() -> Self {
        Self
    }

    /// Разворачивает заказ в плоский список единиц.
    ///
    /// Вес единицы = вес строки / qty; при qty == 0 строка не даёт
    /// ни одной единицы и деления на ноль не происходит.
    /// Операция не может завершиться ошибкой.
    #[instrument(skip(self, order), fields(rows = order.rows.len()))]
    pub fn expand(&self, order: &Order) -> Vec<Unit> {
        let mut units = Vec::new();
        for row in &order.rows {
            let unit_weight = row.unit_weight();
            for _ in 0..row.qty {
                units.push(Unit {
                    barcode: new_unit_barcode(),
                    article: row.article.clone(),
                    metal: row.metal.clone(),
                    hallmark: row.hallmark.clone(),
                    color: row.color.clone(),
                    size: row.size,
                    weight: unit_weight,
                });
            }
        }
        units
    }
}

impl Default for UnitExpander {
    fn default() -> Self {
        Self::new()
    }
}
