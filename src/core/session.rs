use crate::domain::model::{Catalog, ShoppingList};
use crate::domain::ports::ListSink;
use crate::utils::error::Result;

/// The one mutable context threaded through the dispatcher and every
/// command handler. Owns the shopping list; the catalog is read-only for
/// the life of the session.
pub struct Session {
    catalog: Catalog,
    pub list: ShoppingList,
    sink: Box<dyn ListSink>,
}

impl Session {
    pub fn new(catalog: Catalog, sink: Box<dyn ListSink>) -> Self {
        Self {
            catalog,
            list: ShoppingList::new(),
            sink,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn save(&mut self) -> Result<String> {
        self.sink.write_list(&self.list)
    }
}
