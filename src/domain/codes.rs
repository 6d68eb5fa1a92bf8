// ==========================================
// Ювелирный MES - генерация кодов и штрихкодов
// ==========================================
// Все физические и документарные коды строятся одинаково:
// префикс + фрагмент hex от UUID v4, верхний регистр
// ==========================================

use uuid::Uuid;

/// Генерирует код с префиксом и hex-хвостом заданной длины
fn prefixed_code(prefix: &str, hex_len: usize) -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{}-{}", prefix, &hex[..hex_len])
}

/// Штрихкод единицы изделия (ITM-XXXXXXXX)
pub fn new_unit_barcode() -> String {
    prefixed_code("ITM", 8)
}

/// Штрихкод партии (BTH-XXXXXXXX)
pub fn new_batch_barcode() -> String {
    prefixed_code("BTH", 8)
}

/// Код воскового наряда (WX-XXXXXXXX)
pub fn new_job_code() -> String {
    prefixed_code("WX", 8)
}

/// Код восковой ёлки (TR-XXXXXX)
pub fn new_tree_code() -> String {
    prefixed_code("TR", 6)
}

/// Внутренний код заказа, если номер ещё не присвоен (ORD-XXXXXXXX)
pub fn new_order_code() -> String {
    prefixed_code("ORD", 8)
}
