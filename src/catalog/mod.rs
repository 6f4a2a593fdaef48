//! Static reference data shipped with the app.

pub mod articles;
pub mod crops;
pub mod tips;

pub use articles::knowledge_articles;
pub use crops::crop_calendar;
pub use tips::farming_tips;
