pub mod filter_panel;
pub mod price_range_slider;
pub mod stat_card;
pub mod ui;
