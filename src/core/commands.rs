use crate::core::registry::{Registry, Usage};
use crate::core::session::Session;
use crate::domain::model::ListView;
use crate::utils::error::{Result, ShopError};

/// What a command produced, as plain data. Rendering is the shell's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Every registered command with its parameter names, in registration
    /// order.
    Help(Vec<Usage>),
    /// Dish names, sorted.
    Dishes(Vec<String>),
    /// One recipe's ingredient lines, sorted.
    Recipe(Vec<String>),
    /// A dish's ingredients were merged into the list.
    DishAdded(String),
    /// The current list, sorted by ingredient.
    List(ListView),
    /// The list was written out; carries the destination.
    Saved(String),
    /// The command succeeded with nothing to show.
    Done,
}

pub fn help(registry: &Registry, _session: &mut Session, _args: &[String]) -> Result<CommandOutcome> {
    Ok(CommandOutcome::Help(registry.usages()))
}

pub fn list_dishes(
    _registry: &Registry,
    session: &mut Session,
    _args: &[String],
) -> Result<CommandOutcome> {
    Ok(CommandOutcome::Dishes(session.catalog().dish_names()))
}

pub fn show_recipe(
    _registry: &Registry,
    session: &mut Session,
    args: &[String],
) -> Result<CommandOutcome> {
    let dish_name = &args[0];
    let ingredients = session
        .catalog()
        .ingredients(dish_name)
        .ok_or_else(|| ShopError::RecipeNotFound(dish_name.clone()))?;
    let mut lines: Vec<String> = ingredients.to_vec();
    lines.sort();
    Ok(CommandOutcome::Recipe(lines))
}

pub fn add_dish(
    _registry: &Registry,
    session: &mut Session,
    args: &[String],
) -> Result<CommandOutcome> {
    let dish_name = &args[0];
    let ingredients = session
        .catalog()
        .ingredients(dish_name)
        .ok_or_else(|| ShopError::RecipeNotFound(dish_name.clone()))?
        .to_vec();
    tracing::debug!(dish = %dish_name, ingredients = ingredients.len(), "adding dish");
    session.list.add_recipe(dish_name, &ingredients);
    Ok(CommandOutcome::DishAdded(dish_name.clone()))
}

pub fn add_ingredient(
    _registry: &Registry,
    session: &mut Session,
    args: &[String],
) -> Result<CommandOutcome> {
    session.list.add_manual(&args[0]);
    Ok(CommandOutcome::Done)
}

pub fn remove_dish(
    _registry: &Registry,
    session: &mut Session,
    args: &[String],
) -> Result<CommandOutcome> {
    session.list.remove_contributor(&args[0]);
    Ok(CommandOutcome::Done)
}

pub fn remove_ingredient(
    _registry: &Registry,
    session: &mut Session,
    args: &[String],
) -> Result<CommandOutcome> {
    session.list.remove_ingredient(&args[0]);
    Ok(CommandOutcome::Done)
}

pub fn show_shopping_list(
    _registry: &Registry,
    session: &mut Session,
    _args: &[String],
) -> Result<CommandOutcome> {
    Ok(CommandOutcome::List(session.list.render()))
}

pub fn save(_registry: &Registry, session: &mut Session, _args: &[String]) -> Result<CommandOutcome> {
    let destination = session.save()?;
    tracing::info!(destination = %destination, "shopping list saved");
    Ok(CommandOutcome::Saved(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::Registry;
    use crate::domain::model::{Catalog, ShoppingList};
    use crate::domain::ports::ListSink;
    use crate::utils::error::Result;
    use std::collections::HashMap;

    struct NullSink;

    impl ListSink for NullSink {
        fn write_list(&mut self, _list: &ShoppingList) -> Result<String> {
            Ok("null".to_string())
        }
    }

    fn session() -> Session {
        let mut dishes = HashMap::new();
        dishes.insert(
            "pasta".to_string(),
            vec!["tomato".to_string(), "pasta".to_string()],
        );
        Session::new(Catalog::new(dishes), Box::new(NullSink))
    }

    #[test]
    fn test_add_dish_reports_and_mutates() {
        let registry = Registry::builtin();
        let mut session = session();
        let outcome =
            add_dish(&registry, &mut session, &["pasta".to_string()]).unwrap();
        assert_eq!(outcome, CommandOutcome::DishAdded("pasta".to_string()));
        assert!(session.list.contributors("tomato").is_some());
    }

    #[test]
    fn test_add_dish_unknown_recipe_leaves_list_untouched() {
        let registry = Registry::builtin();
        let mut session = session();
        let err =
            add_dish(&registry, &mut session, &["lasagna".to_string()]).unwrap_err();
        assert!(matches!(err, ShopError::RecipeNotFound(name) if name == "lasagna"));
        assert!(session.list.is_empty());
    }

    #[test]
    fn test_show_recipe_sorts_ingredients() {
        let registry = Registry::builtin();
        let mut session = session();
        let outcome =
            show_recipe(&registry, &mut session, &["pasta".to_string()]).unwrap();
        assert_eq!(
            outcome,
            CommandOutcome::Recipe(vec!["pasta".to_string(), "tomato".to_string()])
        );
    }

    #[test]
    fn test_help_lists_commands_in_registration_order() {
        let registry = Registry::builtin();
        let mut session = session();
        match help(&registry, &mut session, &[]).unwrap() {
            CommandOutcome::Help(usages) => {
                assert_eq!(usages.first().unwrap().name, "help");
                assert_eq!(usages.last().unwrap().name, "save");
                let show = usages.iter().find(|u| u.name == "show_recipe").unwrap();
                assert_eq!(show.params, &["dish_name"]);
            }
            other => panic!("expected help outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_show_shopping_list_empty_indicator() {
        let registry = Registry::builtin();
        let mut session = session();
        let outcome = show_shopping_list(&registry, &mut session, &[]).unwrap();
        assert_eq!(outcome, CommandOutcome::List(ListView::Empty));
    }
}
