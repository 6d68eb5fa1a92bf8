// ==========================================
// Ювелирный MES - единица изделия
// ==========================================

use crate::domain::types::CastGroupKey;
use serde::{Deserialize, Serialize};

// ==========================================
// Unit - одна физическая прослеживаемая единица
// ==========================================
// Создаётся разворотом строки заказа, после создания неизменна.
// Вес - равная доля веса строки, не перевзвешивается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub barcode: String,  // глобально уникальный штрихкод (ITM-...)
    pub article: String,  // артикул из строки заказа
    pub metal: String,    // металл
    pub hallmark: String, // проба
    pub color: String,    // цвет
    pub size: f64,        // размер
    pub weight: f64,      // вес единицы (г), weight строки / qty
}

impl Unit {
    /// Ключ металлургической группировки единицы
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }
}
