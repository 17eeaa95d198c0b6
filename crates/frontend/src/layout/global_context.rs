use super::section::Section;
use contracts::domain::a001_network_switch::aggregate::NetworkSwitch;
use contracts::domain::a001_network_switch::catalog;
use contracts::domain::a001_network_switch::filter::{PriceRange, SwitchFilter};
use contracts::enums::Manufacturer;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Состояние страницы: активный раздел и фильтры каталога.
///
/// Раздел и фильтры независимы: смена одного никогда не трогает другое.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub section: RwSignal<Section>,
    pub filter: RwSignal<SwitchFilter>,
}

impl SiteContext {
    pub fn new() -> Self {
        Self {
            section: RwSignal::new(Section::default()),
            filter: RwSignal::new(SwitchFilter::default()),
        }
    }

    pub fn set_section(&self, section: Section) {
        log::debug!("section -> {}", section.code());
        self.section.set(section);
    }

    pub fn toggle_manufacturer(&self, manufacturer: Manufacturer) {
        log::debug!("toggle manufacturer {}", manufacturer);
        self.filter.update(|f| f.toggle_manufacturer(manufacturer));
    }

    pub fn set_price_range(&self, range: PriceRange) {
        self.filter.update(|f| f.set_price_range(range));
    }

    pub fn set_poe_only(&self, poe_only: bool) {
        log::debug!("poe only = {}", poe_only);
        self.filter.update(|f| f.set_poe_only(poe_only));
    }

    pub fn reset_filters(&self) {
        log::debug!("reset filters");
        self.filter.update(|f| f.reset());
    }

    /// Записи каталога, прошедшие текущий фильтр (реактивно)
    pub fn visible_switches(&self) -> Vec<NetworkSwitch> {
        self.filter
            .with(|f| f.apply(catalog::all()).into_iter().cloned().collect())
    }

    /// Синхронизация раздела с параметром `?section=` в адресной строке.
    /// Адрес меняется через replaceState, записи в историю не добавляются.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(section) = params.get("section").and_then(|c| Section::from_code(c)) {
            self.section.set(section);
        }

        let this = *self;
        Effect::new(move |_| {
            let section = this.section.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("section", section.code())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for SiteContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.with(f)
    }

    #[test]
    fn test_section_switch_keeps_filters() {
        with_owner(|| {
            let ctx = SiteContext::new();
            ctx.toggle_manufacturer(Manufacturer::Cisco);
            ctx.set_poe_only(true);
            let before = ctx.filter.get_untracked();

            for s in Section::all() {
                ctx.set_section(s);
                assert_eq!(ctx.filter.get_untracked(), before);
            }
        });
    }

    #[test]
    fn test_filter_changes_keep_section() {
        with_owner(|| {
            let ctx = SiteContext::new();
            ctx.set_section(Section::About);

            ctx.toggle_manufacturer(Manufacturer::Hpe);
            ctx.set_price_range(PriceRange::new(10_000, 50_000));
            ctx.set_poe_only(true);
            ctx.reset_filters();

            assert_eq!(ctx.section.get_untracked(), Section::About);
        });
    }

    #[test]
    fn test_visible_switches_follow_filter() {
        with_owner(|| {
            let ctx = SiteContext::new();
            assert_eq!(ctx.visible_switches().len(), 6);

            ctx.set_price_range(PriceRange::new(0, 10_000));
            let ids: Vec<u32> = ctx.visible_switches().iter().map(|s| s.id.value()).collect();
            assert_eq!(ids, vec![6]);

            ctx.reset_filters();
            assert_eq!(ctx.filter.get_untracked(), SwitchFilter::default());
        });
    }
}
