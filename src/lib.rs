pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod repl;
pub mod utils;

pub use config::{CliConfig, Settings};
pub use core::commands::CommandOutcome;
pub use core::dispatch::dispatch;
pub use core::registry::Registry;
pub use core::session::Session;
pub use domain::model::{Catalog, ListEntry, ListView, ShoppingList, MANUAL_TAG};
pub use utils::error::{Result, ShopError};
