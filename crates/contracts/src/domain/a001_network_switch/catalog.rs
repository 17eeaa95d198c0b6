//! Статический каталог коммутаторов.
//!
//! Набор данных зашит в сборку и не меняется во время работы приложения.

use super::aggregate::{NetworkSwitch, SwitchId};
use crate::enums::Manufacturer;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    name: &str,
    manufacturer: Manufacturer,
    ports: u32,
    speed: &str,
    poe: bool,
    price: u32,
    glyph: &str,
    features: &[&str],
) -> NetworkSwitch {
    NetworkSwitch {
        id: SwitchId(id),
        name: name.to_string(),
        manufacturer,
        ports,
        speed: speed.to_string(),
        poe,
        price,
        glyph: glyph.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

static SWITCHES: Lazy<Vec<NetworkSwitch>> = Lazy::new(|| {
    vec![
        record(
            1,
            "Enterprise Switch Pro 48",
            Manufacturer::Cisco,
            48,
            "10 Гбит/с",
            true,
            125_000,
            "🔷",
            &["Layer 3", "PoE+", "Stackable", "SFP+"],
        ),
        record(
            2,
            "Managed Switch 24",
            Manufacturer::Hpe,
            24,
            "1 Гбит/с",
            true,
            45_000,
            "🔶",
            &["Layer 2", "PoE", "Web Management"],
        ),
        record(
            3,
            "Core Switch 5000",
            Manufacturer::Cisco,
            48,
            "40 Гбит/с",
            false,
            280_000,
            "🔷",
            &["Layer 3", "QSFP+", "Redundant PSU", "Stackable"],
        ),
        record(
            4,
            "Access Switch 16",
            Manufacturer::Mikrotik,
            16,
            "1 Гбит/с",
            true,
            18_000,
            "🔸",
            &["Layer 2", "PoE", "Fanless"],
        ),
        record(
            5,
            "Distribution Switch 32",
            Manufacturer::Hpe,
            32,
            "10 Гбит/с",
            true,
            95_000,
            "🔶",
            &["Layer 3", "PoE+", "SFP+", "VLAN"],
        ),
        record(
            6,
            "Edge Switch 8",
            Manufacturer::Mikrotik,
            8,
            "1 Гбит/с",
            false,
            8_500,
            "🔸",
            &["Layer 2", "Compact", "SFP"],
        ),
    ]
});

/// Все коммутаторы каталога в порядке отображения
pub fn all() -> &'static [NetworkSwitch] {
    &SWITCHES
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_six_records() {
        assert_eq!(all().len(), 6);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<SwitchId> = all().iter().map(|sw| sw.id).collect();
        assert_eq!(ids.len(), all().len());
    }

    #[test]
    fn test_last_record_is_edge_switch() {
        let sw = all().last().expect("edge switch");
        assert_eq!(sw.id, SwitchId(6));
        assert_eq!(sw.name, "Edge Switch 8");
        assert_eq!(sw.price, 8_500);
    }

    #[test]
    fn test_prices_fit_slider_bounds() {
        use super::super::filter::PRICE_MAX;
        assert!(all().iter().all(|sw| sw.price <= PRICE_MAX));
    }
}
