mod about;
mod catalog;
mod contacts;
mod specs;

pub use about::AboutPage;
pub use catalog::CatalogPage;
pub use contacts::ContactsPage;
pub use specs::SpecsPage;
