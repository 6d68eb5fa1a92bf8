// ==========================================
// BatchGrouper - нарезка единиц на партии
// ==========================================
// Проверяется: разбиение по (металл, проба, цвет),
// количества и округлённые суммы, свойство разбиения привязки
// ==========================================


use jewelry_wax_mes::domain::Order;
use jewelry_wax_mes::engine::{BatchGrouper, UnitExpander};
use std::collections::HashSet;
use test_helpers::{make_row, sample_order, PRECISION};

#[test]
fn test_single_key_yields_single_batch() {
    let units = UnitExpander::new().expand(&sample_order());
    let (batches, mapping) = BatchGrouper::new(PRECISION).group(&units);

    assert_eq!(batches.len(), 1);
    let batch = &batches[0];
    assert_eq!(batch.qty, 3);
    assert!((batch.total_weight - 9.6).abs() < 1e-9);
    assert_eq!(mapping[&batch.barcode].len(), 3);
}

#[test]
fn test_mixed_keys_split_into_batches() {
    let mut silver_row = make_row("S-3005", 2, 4.0);
    silver_row.metal = "Серебро".to_string();
    silver_row.hallmark = "925".to_string();
    let mut white_row = make_row("R-1002", 1, 2.0);
    white_row.color = "белый".to_string();
    let order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4), silver_row, white_row],
    };

    let units = UnitExpander::new().expand(&order);
    let (batches, _) = BatchGrouper::new(PRECISION).group(&units);

    assert_eq!(batches.len(), 3);
    for batch in &batches {
        assert!(batch.barcode.starts_with("BTH-"));
        assert!(batch.qty > 0);
    }
}

#[test]
fn test_mapping_is_partition_of_units() {
    let mut other = make_row("S-3005", 3, 9.0);
    other.metal = "Серебро".to_string();
    let order = Order {
        number: None,
        rows: vec![make_row("R-1001", 2, 6.4), other],
    };

    let units = UnitExpander::new().expand(&order);
    let (batches, mapping) = BatchGrouper::new(PRECISION).group(&units);

    // объединение значений равно множеству всех штрихкодов
    let mapped: Vec<&str> = mapping
        .values()
        .flat_map(|v| v.iter().map(String::as_str))
        .collect();
    let mapped_set: HashSet<&str> = mapped.iter().copied().collect();
    assert_eq!(mapped.len(), mapped_set.len(), "значения пересекаются");

    let all: HashSet<&str> = units.iter().map(|u| u.barcode.as_str()).collect();
    assert_eq!(mapped_set, all);

    // каждая партия сходится с своей привязкой
    for batch in &batches {
        assert_eq!(mapping[&batch.barcode].len(), batch.qty as usize);
    }
}

#[test]
fn test_batch_weight_rounded_to_precision() {
    // 3 единицы по 1/3 грамма: сумма требует округления
    let order = Order {
        number: None,
        rows: vec![make_row("R-1001", 3, 1.0)],
    };
    let units = UnitExpander::new().expand(&order);
    let (batches, _) = BatchGrouper::new(PRECISION).group(&units);

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].total_weight, 1.0);
}

#[test]
fn test_empty_units_yield_nothing() {
    let (batches, mapping) = BatchGrouper::new(PRECISION).group(&[]);
    assert!(batches.is_empty());
    assert!(mapping.is_empty());
}
