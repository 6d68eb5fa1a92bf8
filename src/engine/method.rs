// ==========================================
// Ювелирный MES - определение метода изготовления
// ==========================================
// Правило по артикулу (исторически сложившееся):
// буква «д» или латинская "d" в артикуле → 3D печать,
// иначе резиновая форма. Правило грубое: любое постороннее
// "d" в коде уводит артикул в 3D. Для таких артикулов
// предусмотрена явная таблица переопределений из конфигурации.
// ==========================================

use crate::domain::WaxMethod;
use std::collections::HashMap;

/// Чистая эвристика по артикулу, без переопределений
pub fn classify_by_article(article: &str) -> WaxMethod {
    let art = article.to_lowercase();
    if art.contains('д') || art.contains('d') {
        WaxMethod::ThreeD
    } else {
        WaxMethod::Rubber
    }
}

// ==========================================
// MethodClassifier - классификатор с переопределениями
// ==========================================
pub struct MethodClassifier {
    // артикул → метод; заполняется из конфигурации, обычно пуста
    overrides: HashMap<String, WaxMethod>,
}

impl MethodClassifier {
    pub fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    pub fn with_overrides(overrides: HashMap<String, WaxMethod>) -> Self {
        Self { overrides }
    }

    /// Метод изготовления для артикула.
    ///
    /// Сначала явная таблица, затем эвристика. Всегда возвращает
    /// ровно один из двух методов.
    pub fn classify(&self, article: &str) -> WaxMethod {
        if let Some(method) = self.overrides.get(article) {
            return *method;
        }
        classify_by_article(article)
    }
}

impl Default for MethodClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_d_means_3d() {
        assert_eq!(classify_by_article("3D-1003"), WaxMethod::ThreeD);
        assert_eq!(classify_by_article("PD-77"), WaxMethod::ThreeD);
    }

    #[test]
    fn test_cyrillic_d_means_3d() {
        assert_eq!(classify_by_article("МОДЕЛЬ-5"), WaxMethod::ThreeD);
    }

    #[test]
    fn test_no_d_means_rubber() {
        assert_eq!(classify_by_article("R-1001"), WaxMethod::Rubber);
        assert_eq!(classify_by_article(""), WaxMethod::Rubber);
    }

    #[test]
    fn test_override_wins() {
        // артикул с посторонней "d": эвристика сказала бы 3D
        let mut overrides = HashMap::new();
        overrides.insert("GOLD-77".to_string(), WaxMethod::Rubber);
        let classifier = MethodClassifier::with_overrides(overrides);
        assert_eq!(classifier.classify("GOLD-77"), WaxMethod::Rubber);
        assert_eq!(classifier.classify("3D-1003"), WaxMethod::ThreeD);
    }
}
