//! Фильтр каталога: производитель, диапазон цены, только PoE.
//!
//! Запись попадает в выдачу, только если проходит все три условия.
//! Пустой набор производителей и выключенный флаг PoE ничего не отсекают.

use super::aggregate::NetworkSwitch;
use crate::enums::Manufacturer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Нижняя граница ползунка цены, ₽
pub const PRICE_MIN: u32 = 0;
/// Верхняя граница ползунка цены, ₽
pub const PRICE_MAX: u32 = 300_000;
/// Шаг ползунка цены, ₽
pub const PRICE_STEP: u32 = 5_000;

/// Диапазон цены с включёнными границами.
///
/// Инвариант `PRICE_MIN <= min <= max <= PRICE_MAX` обеспечивается конструктором.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Создать диапазон: границы прижимаются к пределам ползунка,
    /// перепутанные местами меняются.
    pub fn new(min: u32, max: u32) -> Self {
        let a = min.clamp(PRICE_MIN, PRICE_MAX);
        let b = max.clamp(PRICE_MIN, PRICE_MAX);
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Полный диапазон ползунка
    pub const fn full() -> Self {
        Self {
            min: PRICE_MIN,
            max: PRICE_MAX,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Новый диапазон с изменённой нижней границей
    pub fn with_min(&self, min: u32) -> Self {
        Self::new(min.min(self.max), self.max)
    }

    /// Новый диапазон с изменённой верхней границей
    pub fn with_max(&self, max: u32) -> Self {
        Self::new(self.min, max.max(self.min))
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price <= self.max
    }

    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Состояние фильтров каталога
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SwitchFilter {
    pub manufacturers: BTreeSet<Manufacturer>,
    pub price_range: PriceRange,
    pub poe_only: bool,
}

impl SwitchFilter {
    /// Добавить производителя в выбор или убрать, если он уже выбран
    pub fn toggle_manufacturer(&mut self, manufacturer: Manufacturer) {
        if !self.manufacturers.remove(&manufacturer) {
            self.manufacturers.insert(manufacturer);
        }
    }

    pub fn is_manufacturer_selected(&self, manufacturer: Manufacturer) -> bool {
        self.manufacturers.contains(&manufacturer)
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        self.price_range = range;
    }

    pub fn set_poe_only(&mut self, poe_only: bool) {
        self.poe_only = poe_only;
    }

    /// Сбросить все фильтры к значениям по умолчанию
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Проверка одной записи
    pub fn matches(&self, sw: &NetworkSwitch) -> bool {
        let manufacturer_match =
            self.manufacturers.is_empty() || self.manufacturers.contains(&sw.manufacturer);
        let price_match = self.price_range.contains(sw.price);
        let poe_match = !self.poe_only || sw.poe;
        manufacturer_match && price_match && poe_match
    }

    /// Отфильтровать список, сохраняя исходный порядок
    pub fn apply<'a>(&self, items: &'a [NetworkSwitch]) -> Vec<&'a NetworkSwitch> {
        items.iter().filter(|sw| self.matches(sw)).collect()
    }

    /// Количество условий, отличающихся от значений по умолчанию
    pub fn active_filters_count(&self) -> usize {
        let mut count = 0;
        if !self.manufacturers.is_empty() {
            count += 1;
        }
        if !self.price_range.is_full() {
            count += 1;
        }
        if self.poe_only {
            count += 1;
        }
        count
    }

    pub fn is_default(&self) -> bool {
        self.active_filters_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_network_switch::aggregate::SwitchId;
    use crate::domain::a001_network_switch::catalog;

    fn ids(items: &[&NetworkSwitch]) -> Vec<u32> {
        items.iter().map(|sw| sw.id.value()).collect()
    }

    #[test]
    fn test_default_filter_returns_whole_catalog() {
        let filter = SwitchFilter::default();
        let result = filter.apply(catalog::all());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6]);
        assert!(filter.is_default());
    }

    #[test]
    fn test_single_manufacturer() {
        let mut filter = SwitchFilter::default();
        filter.toggle_manufacturer(Manufacturer::Cisco);
        assert_eq!(ids(&filter.apply(catalog::all())), vec![1, 3]);
    }

    #[test]
    fn test_two_manufacturers_keep_dataset_order() {
        let mut filter = SwitchFilter::default();
        filter.toggle_manufacturer(Manufacturer::Mikrotik);
        filter.toggle_manufacturer(Manufacturer::Cisco);
        assert_eq!(ids(&filter.apply(catalog::all())), vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_poe_only_excludes_non_poe() {
        let mut filter = SwitchFilter::default();
        filter.set_poe_only(true);
        assert_eq!(ids(&filter.apply(catalog::all())), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_price_range_low_end() {
        let mut filter = SwitchFilter::default();
        filter.set_price_range(PriceRange::new(0, 10_000));
        assert_eq!(ids(&filter.apply(catalog::all())), vec![6]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let mut filter = SwitchFilter::default();
        filter.set_price_range(PriceRange::new(45_000, 95_000));
        assert_eq!(ids(&filter.apply(catalog::all())), vec![2, 5]);
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let mut filter = SwitchFilter::default();
        filter.toggle_manufacturer(Manufacturer::Cisco);
        filter.set_poe_only(true);
        assert_eq!(ids(&filter.apply(catalog::all())), vec![1]);

        filter.set_price_range(PriceRange::new(0, 100_000));
        assert!(filter.apply(catalog::all()).is_empty());
    }

    #[test]
    fn test_result_is_subset_and_idempotent() {
        let all = catalog::all();
        let mut filters = Vec::new();
        for m in Manufacturer::all() {
            for poe in [false, true] {
                for (lo, hi) in [(0, 300_000), (10_000, 100_000), (90_000, 90_000)] {
                    let mut f = SwitchFilter::default();
                    f.toggle_manufacturer(m);
                    f.set_poe_only(poe);
                    f.set_price_range(PriceRange::new(lo, hi));
                    filters.push(f);
                }
            }
        }

        for f in &filters {
            let first = f.apply(all);
            assert!(first.iter().all(|sw| all.contains(sw)));
            assert!(first.windows(2).all(|w| w[0].id < w[1].id));

            let owned: Vec<NetworkSwitch> = first.iter().map(|sw| (*sw).clone()).collect();
            let second = f.apply(&owned);
            assert_eq!(ids(&first), ids(&second));
        }
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut filter = SwitchFilter::default();
        filter.toggle_manufacturer(Manufacturer::Hpe);
        let before = filter.manufacturers.clone();

        filter.toggle_manufacturer(Manufacturer::Cisco);
        filter.toggle_manufacturer(Manufacturer::Cisco);
        assert_eq!(filter.manufacturers, before);

        filter.toggle_manufacturer(Manufacturer::Hpe);
        filter.toggle_manufacturer(Manufacturer::Hpe);
        assert_eq!(filter.manufacturers, before);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter = SwitchFilter::default();
        filter.toggle_manufacturer(Manufacturer::Mikrotik);
        filter.set_poe_only(true);
        filter.set_price_range(PriceRange::new(5_000, 50_000));
        assert_eq!(filter.active_filters_count(), 3);

        filter.reset();
        assert_eq!(filter, SwitchFilter::default());
        assert_eq!(filter.apply(catalog::all()).len(), 6);
    }

    #[test]
    fn test_active_filters_count() {
        let mut filter = SwitchFilter::default();
        assert_eq!(filter.active_filters_count(), 0);
        filter.toggle_manufacturer(Manufacturer::Cisco);
        filter.toggle_manufacturer(Manufacturer::Hpe);
        assert_eq!(filter.active_filters_count(), 1);
        filter.set_price_range(PriceRange::new(0, 295_000));
        assert_eq!(filter.active_filters_count(), 2);
    }

    #[test]
    fn test_price_range_clamps_and_orders() {
        let r = PriceRange::new(500_000, 20_000);
        assert_eq!((r.min(), r.max()), (20_000, PRICE_MAX));

        let r = PriceRange::new(70_000, 10_000);
        assert_eq!((r.min(), r.max()), (10_000, 70_000));

        assert!(PriceRange::new(0, 400_000).is_full());
    }

    #[test]
    fn test_price_range_with_min_max_never_cross() {
        let r = PriceRange::new(50_000, 100_000);
        assert_eq!(r.with_min(150_000), PriceRange::new(100_000, 100_000));
        assert_eq!(r.with_max(10_000), PriceRange::new(50_000, 50_000));
        assert_eq!(r.with_max(200_000).max(), 200_000);
    }

    #[test]
    fn test_matches_single_record() {
        let sw = &catalog::all()[2];
        assert_eq!(sw.id, SwitchId(3));
        let mut filter = SwitchFilter::default();
        assert!(filter.matches(sw));
        filter.set_poe_only(true);
        assert!(!filter.matches(sw));
    }
}
