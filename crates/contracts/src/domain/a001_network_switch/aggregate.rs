use crate::domain::common::AggregateId;
use crate::enums::Manufacturer;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор коммутатора в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwitchId(pub u32);

impl SwitchId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for SwitchId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<u32>()
            .map(SwitchId)
            .map_err(|e| format!("Invalid switch id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Сколько тегов возможностей показывается на карточке
pub const VISIBLE_FEATURES: usize = 3;

/// Сетевой коммутатор (запись каталога)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSwitch {
    pub id: SwitchId,
    pub name: String,
    pub manufacturer: Manufacturer,
    pub ports: u32,
    /// Скорость порта, только для отображения ("10 Гбит/с")
    pub speed: String,
    pub poe: bool,
    /// Цена в рублях
    pub price: u32,
    /// Декоративный значок карточки
    pub glyph: String,
    pub features: Vec<String>,
}

impl NetworkSwitch {
    /// Теги, которые выводятся на карточке (первые три)
    pub fn visible_features(&self) -> &[String] {
        let end = self.features.len().min(VISIBLE_FEATURES);
        &self.features[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(features: &[&str]) -> NetworkSwitch {
        NetworkSwitch {
            id: SwitchId(42),
            name: "Test".to_string(),
            manufacturer: Manufacturer::Cisco,
            ports: 8,
            speed: "1 Гбит/с".to_string(),
            poe: false,
            price: 1000,
            glyph: "🔷".to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }

    #[test]
    fn test_visible_features_truncates_to_three() {
        let sw = sample(&["Layer 3", "PoE+", "Stackable", "SFP+"]);
        assert_eq!(sw.visible_features(), &["Layer 3", "PoE+", "Stackable"]);
    }

    #[test]
    fn test_visible_features_short_list_untouched() {
        let sw = sample(&["Layer 2"]);
        assert_eq!(sw.visible_features(), &["Layer 2"]);
        assert!(sample(&[]).visible_features().is_empty());
    }

    #[test]
    fn test_switch_id_from_string() {
        assert_eq!(SwitchId::from_string("6"), Ok(SwitchId(6)));
        assert!(SwitchId::from_string("abc").is_err());
        assert_eq!(SwitchId(3).as_string(), "3");
    }
}
