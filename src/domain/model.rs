use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;

/// Contributor tag for ingredients added directly rather than via a dish.
pub const MANUAL_TAG: &str = "manual";

/// Immutable mapping from dish name to its ordered ingredient lines.
/// Built once at startup from a recipe source; read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(dishes: HashMap<String, Vec<String>>) -> Self {
        Self { dishes }
    }

    pub fn contains(&self, dish_name: &str) -> bool {
        self.dishes.contains_key(dish_name)
    }

    pub fn ingredients(&self, dish_name: &str) -> Option<&[String]> {
        self.dishes.get(dish_name).map(Vec::as_slice)
    }

    /// Dish names sorted lexicographically.
    pub fn dish_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.dishes.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

/// One rendered shopping-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub ingredient: String,
    pub contributors: Vec<String>,
}

/// Rendered view of the list. An empty model renders as `Empty`, never as
/// a zero-length entry sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Empty,
    Entries(Vec<ListEntry>),
}

/// Mutable mapping from ingredient to the set of contributor tags that put
/// it on the list. Invariant: every entry has a non-empty contributor set;
/// an entry whose set would become empty is deleted instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get-or-create the entry for `ingredient` and union `contributor`
    /// into its set. The only way entries come into existence.
    pub fn tag(&mut self, ingredient: &str, contributor: &str) {
        self.entries
            .entry(ingredient.to_string())
            .or_default()
            .insert(contributor.to_string());
    }

    /// Tag every ingredient of a recipe with the dish name.
    pub fn add_recipe(&mut self, dish_name: &str, ingredients: &[String]) {
        for ingredient in ingredients {
            self.tag(ingredient, dish_name);
        }
    }

    /// Add a single ingredient under the manual tag.
    pub fn add_manual(&mut self, ingredient: &str) {
        self.tag(ingredient, MANUAL_TAG);
    }

    /// Remove `contributor` from every entry, then drop entries left with
    /// no contributors. Deliberately a global sweep rather than a walk of
    /// one recipe's ingredient list, so stale tags are cleaned up too.
    pub fn remove_contributor(&mut self, contributor: &str) {
        for contributors in self.entries.values_mut() {
            contributors.remove(contributor);
        }
        self.entries.retain(|_, contributors| !contributors.is_empty());
    }

    /// Delete an ingredient outright, whatever its contributors.
    pub fn remove_ingredient(&mut self, ingredient: &str) {
        self.entries.remove(ingredient);
    }

    pub fn contributors(&self, ingredient: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(ingredient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by ingredient name, contributors in set iteration
    /// order.
    pub fn render(&self) -> ListView {
        if self.entries.is_empty() {
            return ListView::Empty;
        }
        let entries = self
            .entries
            .iter()
            .map(|(ingredient, contributors)| ListEntry {
                ingredient: ingredient.clone(),
                contributors: contributors.iter().cloned().collect(),
            })
            .collect();
        ListView::Entries(entries)
    }

    /// Write the list to `out`, one `<ingredient> -- <contributors>` line
    /// per entry, sorted by ingredient. I/O failures propagate to the
    /// caller.
    pub fn persist<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (ingredient, contributors) in &self.entries {
            let joined = contributors.iter().cloned().collect::<Vec<_>>().join(", ");
            writeln!(out, "{} -- {}", ingredient, joined)?;
        }
        Ok(())
    }
}
