pub mod details;
pub mod model;
pub mod page;

pub use details::LocationDetailsPage;
pub use page::LocationPage;
