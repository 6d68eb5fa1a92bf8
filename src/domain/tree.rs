// ==========================================
// Ювелирный MES - восковая ёлка
// ==========================================

use crate::domain::types::CastGroupKey;
use serde::{Deserialize, Serialize};

// ==========================================
// CastingTree - ёлка для литейного передела
// ==========================================
// Агрегат принятых нарядов с общим металлом/пробой/цветом.
// Создаётся один раз сборщиком ёлок, далее неизменна.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingTree {
    pub tree_code: String,          // уникальный код ёлки (TR-...)
    pub metal: String,              // металл
    pub hallmark: String,           // проба
    pub color: String,              // цвет
    pub qty: u32,                   // сумма количеств вошедших нарядов
    pub weight: f64,                // сумма весов, округлена до точности учёта
    pub member_job_codes: Vec<String>, // коды вошедших нарядов
}

impl CastingTree {
    pub fn group_key(&self) -> CastGroupKey {
        CastGroupKey::new(&self.metal, &self.hallmark, &self.color)
    }
}
