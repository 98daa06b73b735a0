pub mod details;
pub mod model;
pub mod page;

pub use details::NomenklaturaDetailsPage;
pub use page::NomenklaturaPage;
