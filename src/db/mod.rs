pub mod items;
pub mod migrate;
pub mod seed;
pub mod store;

pub use items::{PgItemProvider, fetch_items};
pub use migrate::migrate;
pub use seed::seed_items;
pub use store::{save_session, save_session_logged, update_progress, update_progress_logged};
