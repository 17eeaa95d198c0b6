use serde::{Deserialize, Serialize};

/// Производители коммутаторов, представленные в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Manufacturer {
    Cisco,
    Hpe,
    Mikrotik,
}

impl Manufacturer {
    /// Получить код производителя (используется в id элементов формы)
    pub fn code(&self) -> &'static str {
        match self {
            Manufacturer::Cisco => "cisco",
            Manufacturer::Hpe => "hpe",
            Manufacturer::Mikrotik => "mikrotik",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Manufacturer::Cisco => "Cisco",
            Manufacturer::Hpe => "HPE",
            Manufacturer::Mikrotik => "Mikrotik",
        }
    }

    /// Все производители в порядке отображения в фильтре
    pub fn all() -> [Manufacturer; 3] {
        [
            Manufacturer::Cisco,
            Manufacturer::Hpe,
            Manufacturer::Mikrotik,
        ]
    }
}

impl std::fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
