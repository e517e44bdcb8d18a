pub mod commands;
pub mod dispatch;
pub mod registry;
pub mod session;

pub use crate::domain::model::{Catalog, ListEntry, ListView, ShoppingList};
pub use crate::domain::ports::{ListSink, RecipeSource};
pub use crate::utils::error::Result;
