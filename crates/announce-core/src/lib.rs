pub mod db;
pub mod error;
pub mod logging;
pub mod memory;
pub mod model;
pub mod store;

pub use db::DynamoStore;
pub use error::CoreError;
pub use logging::init_logging;
pub use memory::MemoryStore;
pub use model::{Announcement, Title, TitleError};
pub use store::{AnnouncementStore, ScanPage};
