use crate::domain::model::{Catalog, ShoppingList};
use crate::utils::error::Result;

/// Supplies the recipe catalog at startup. The core never touches the
/// filesystem directly.
pub trait RecipeSource {
    fn load(&self) -> Result<Catalog>;
}

/// Destination for a saved shopping list. Returns a human-readable
/// description of where the list went.
pub trait ListSink {
    fn write_list(&mut self, list: &ShoppingList) -> Result<String>;
}
