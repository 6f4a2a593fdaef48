pub mod calendar;
pub mod export;
pub mod history;
pub mod knowledge;
pub mod profiles;
pub mod rules;
pub mod tips;

pub use calendar::{CalendarEngine, SeasonStatus};
pub use export::{export_snapshot, ExportBundle};
pub use history::AdviceHistory;
pub use knowledge::KnowledgeBase;
pub use profiles::ProfileRegistry;
pub use rules::{AdviceResolver, Resolution};
pub use tips::TipRotator;
