//! Разделы одностраничного сайта.
//!
//! Переход возможен из любого раздела в любой по кнопке навигации, без условий.

/// Отображаемый раздел страницы
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Catalog,
    Specs,
    About,
    Contacts,
}

impl Section {
    /// Код раздела для параметра `?section=`
    pub fn code(&self) -> &'static str {
        match self {
            Section::Catalog => "catalog",
            Section::Specs => "specs",
            Section::About => "about",
            Section::Contacts => "contacts",
        }
    }

    /// Подпись в навигации
    pub fn label(&self) -> &'static str {
        match self {
            Section::Catalog => "Каталог",
            Section::Specs => "Характеристики",
            Section::About => "О компании",
            Section::Contacts => "Контакты",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "catalog" => Some(Section::Catalog),
            "specs" => Some(Section::Specs),
            "about" => Some(Section::About),
            "contacts" => Some(Section::Contacts),
            _ => None,
        }
    }

    /// Все разделы в порядке кнопок навигации
    pub fn all() -> [Section; 4] {
        [
            Section::Catalog,
            Section::Specs,
            Section::About,
            Section::Contacts,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_initial() {
        assert_eq!(Section::default(), Section::Catalog);
    }

    #[test]
    fn test_code_roundtrip() {
        for s in Section::all() {
            assert_eq!(Section::from_code(s.code()), Some(s));
        }
        assert_eq!(Section::from_code("cart"), None);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = Section::all().iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Каталог", "Характеристики", "О компании", "Контакты"]
        );
    }
}
