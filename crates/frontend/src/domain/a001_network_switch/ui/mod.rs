pub mod card;
pub mod filters;
pub mod list;

pub use card::SwitchCard;
pub use filters::SwitchFilters;
pub use list::SwitchList;
