//! Dictionary service: word/translation pairs over HTTP, backed by PostgreSQL.

pub mod config;
pub mod convert;
pub mod entity;
pub mod error;
pub mod gateway;
pub mod repository;

pub use config::Config;
pub use entity::TranslationItem;
pub use error::RepoError;
pub use gateway::AppServer;
pub use repository::{ensure_items_table, ItemRepository, PgItemRepository};
