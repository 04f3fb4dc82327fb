pub mod db;
pub mod feedback;
pub mod flush;
pub mod i18n;
pub mod id;
pub mod model;
pub mod provider;
pub mod session;
pub mod settings;
pub mod testutil;

pub use id::IdGenerator;
pub use model::{
    Bin, BinId, EnrichmentToken, FeedbackResult, Language, LocalizedText, ProgressUpdate,
    Resolution, SessionSummary, WasteItem,
};
