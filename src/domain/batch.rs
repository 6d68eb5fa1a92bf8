// ==========================================
// Ювелирный MES - партия металлургического учёта
// ==========================================

use crate::domain::types::CastGroupKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Привязка партия → штрихкоды входящих единиц.
///
/// Авторитетный источник принадлежности: объединение значений
/// покрывает все единицы заказа, значения попарно не пересекаются.
pub type BatchMapping = HashMap<String, Vec<String>>;

// ==========================================
// Batch - партия единиц с общим металлом/пробой/цветом
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub barcode: String,   // уникальный штрихкод партии (BTH-...)
    pub metal: String,     // металл
    pub hallmark: String,  // проба
    pub color: String,     // цвет
    pub qty: u32,          // число единиц в партии
    pub total_weight: f64, // сумма весов единиц, округлена до точности учёта
}

impl Batch {
    /// Ключ металлургической группировки партии
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }
}
