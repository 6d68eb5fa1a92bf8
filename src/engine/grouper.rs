// ==========================================
// Ювелирный MES - нарезка единиц на партии
// ==========================================
// Ключ партии: (металл, проба, цвет). Единицы сортируются
// по ключу и режутся на максимальные серии равного ключа -
// одна партия на ключ, без разрывов. Попутно строится
// привязка партия → штрихкоды единиц.
// ==========================================

use crate::domain::codes::new_batch_barcode;
use crate::domain::{round_weight, Batch, BatchMapping, Unit};
use tracing::instrument;

// ==========================================
// BatchGrouper - группировка единиц в партии
// ==========================================
pub struct BatchGrouper {
    precision: u32,
}

impl BatchGrouper {
    pub fn new(precision: u32) -> Self {
        Self { precision }
    }

    /// Нарезает единицы на партии по (металл, проба, цвет).
    ///
    /// Инвариант результата: объединение значений привязки равно
    /// множеству всех штрихкодов, значения попарно не пересекаются.
    #[instrument(skip(self, units), fields(units = units.len()))]
    pub fn group(&self, units: &[Unit]) -> (Vec<Batch>, BatchMapping) {
        let mut sorted: Vec<&Unit> = units.iter().collect();
        sorted.sort_by_key(|u| u.group_key());

        let mut batches = Vec::new();
        let mut mapping = BatchMapping::new();

        let mut i = 0;
        while i < sorted.len() {
            let key = sorted[i].group_key();
            let mut j = i;
            while j < sorted.len() && sorted[j].group_key() == key {
                j += 1;
            }
            let group = &sorted[i..j];

            let barcode = new_batch_barcode();
            let total: f64 = group.iter().map(|u| u.weight).sum();
            batches.push(Batch {
                barcode: barcode.clone(),
                metal: key.metal.clone(),
                hallmark: key.hallmark.clone(),
                color: key.color.clone(),
                qty: group.len() as u32,
                total_weight: round_weight(total, self.precision),
            });
            mapping.insert(barcode, group.iter().map(|u| u.barcode.clone()).collect());

            i = j;
        }

        (batches, mapping)
    }
}
