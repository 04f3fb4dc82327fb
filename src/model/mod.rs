#[macro_use]
mod macros;

pub mod bin;
pub mod feedback;
pub mod item;
pub mod language;
pub mod summary;

pub use bin::{Bin, BinId};
pub use feedback::{EnrichmentToken, FeedbackResult, Resolution};
pub use item::WasteItem;
pub use language::{Language, LocalizedText};
pub use summary::{ProgressUpdate, SessionSummary};
