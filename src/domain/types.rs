// ==========================================
// Ювелирный MES - базовые типы воскового передела
// ==========================================
// Метод изготовления, статус наряда, ключ плавки
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Метод изготовления восковки
// ==========================================
// Ровно два метода: 3D печать и резиновая форма
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WaxMethod {
    #[serde(rename = "3d")]
    ThreeD, // 3D печать
    #[serde(rename = "rubber")]
    Rubber, // резиновая пресс-форма
}

impl WaxMethod {
    /// Отображаемое название метода
    pub fn label(&self) -> &'static str {
        match self {
            WaxMethod::ThreeD => "3D печать",
            WaxMethod::Rubber => "Резина",
        }
    }

    /// Название операции воскового передела для данного метода
    pub fn operation_label(&self) -> &'static str {
        match self {
            WaxMethod::ThreeD => "Отлив восковых заготовок",
            WaxMethod::Rubber => "Изготовление по резиновой форме",
        }
    }
}

impl fmt::Display for WaxMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaxMethod::ThreeD => write!(f, "3d"),
            WaxMethod::Rubber => write!(f, "rubber"),
        }
    }
}

// ==========================================
// Статус наряда
// ==========================================
// Жизненный цикл: created → given → done → accepted → tree_ready
// Обратных переходов нет; tree_ready выставляется сборкой ёлки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Created,   // создан
    Given,     // выдан исполнителю
    Done,      // выполнен и сдан
    Accepted,  // принят контролем
    TreeReady, // собран в ёлку
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Created => write!(f, "created"),
            JobStatus::Given => write!(f, "given"),
            JobStatus::Done => write!(f, "done"),
            JobStatus::Accepted => write!(f, "accepted"),
            JobStatus::TreeReady => write!(f, "tree_ready"),
        }
    }
}

// ==========================================
// Ключ группировки (металл / проба / цвет)
// ==========================================
// Единый ключ металлургического учёта: по нему режутся
// партии при развороте заказа и ёлки при сборке
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CastGroupKey {
    pub metal: String,
    pub hallmark: String,
    pub color: String,
}

impl CastGroupKey {
    pub fn new(metal: &str, hallmark: &str, color: &str) -> Self {
        Self {
            metal: metal.to_string(),
            hallmark: hallmark.to_string(),
            color: color.to_string(),
        }
    }
}

impl fmt::Display for CastGroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metal, self.hallmark, self.color)
    }
}

// ==========================================
// Округление весов
// ==========================================

/// Округляет вес (в граммах) до заданного числа знаков после запятой.
///
/// Все агрегаты (вес партии, вес наряда, вес ёлки) округляются
/// одинаково перед сравнением или отображением.
pub fn round_weight(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}
