use crate::core::commands::CommandOutcome;
use crate::core::registry::Registry;
use crate::core::session::Session;
use crate::utils::error::{Result, ShopError};

/// Parse a raw input line and route it to its handler.
///
/// Tokenization is plain whitespace splitting; arguments cannot contain
/// spaces. Validation happens before the handler runs, so a failed dispatch
/// never touches the session.
pub fn dispatch(registry: &Registry, session: &mut Session, line: &str) -> Result<CommandOutcome> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or(ShopError::EmptyInput)?;
    let args: Vec<String> = tokens.map(str::to_string).collect();

    let spec = registry
        .find(name)
        .ok_or_else(|| ShopError::UnknownCommand(name.to_string()))?;

    if args.len() != spec.arity() {
        return Err(ShopError::ArityMismatch {
            command: spec.name.to_string(),
            expected: spec.arity(),
            given: args.len(),
        });
    }

    tracing::debug!(command = %spec.name, args = ?args, "dispatching");
    (spec.handler)(registry, session, &args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Catalog, ListView, ShoppingList};
    use crate::domain::ports::ListSink;
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
    fn test_dispatch_add_dish() {
        let registry = Registry::builtin();
        let mut session = session();
        let outcome = dispatch(&registry, &mut session, "add_dish pasta").unwrap();
        assert_eq!(outcome, CommandOutcome::DishAdded("pasta".to_string()));

        for ingredient in ["tomato", "pasta"] {
            let contributors = session.list.contributors(ingredient).unwrap();
            assert_eq!(contributors.iter().collect::<Vec<_>>(), vec!["pasta"]);
        }
    }

    #[test]
    fn test_dispatch_missing_recipe_reported_without_mutation() {
        let registry = Registry::builtin();
        let mut session = session();
        let err = dispatch(&registry, &mut session, "add_dish lasagna").unwrap_err();
        assert!(matches!(err, ShopError::RecipeNotFound(_)));
        assert!(session.list.is_empty());
    }

    #[test]
    fn test_dispatch_arity_mismatch() {
        let registry = Registry::builtin();
        let mut session = session();
        let err = dispatch(&registry, &mut session, "remove_dish").unwrap_err();
        assert!(matches!(
            err,
            ShopError::ArityMismatch {
                expected: 1,
                given: 0,
                ..
            }
        ));
        assert!(session.list.is_empty());
    }

    #[test]
    fn test_dispatch_too_many_args() {
        let registry = Registry::builtin();
        let mut session = session();
        let err = dispatch(&registry, &mut session, "save now please").unwrap_err();
        assert!(matches!(err, ShopError::ArityMismatch { .. }));
    }

    #[test]
    fn test_dispatch_unknown_command() {
        let registry = Registry::builtin();
        let mut session = session();
        let err = dispatch(&registry, &mut session, "frobnicate").unwrap_err();
        assert!(matches!(err, ShopError::UnknownCommand(name) if name == "frobnicate"));
    }

    #[test]
    fn test_dispatch_empty_line() {
        let registry = Registry::builtin();
        let mut session = session();
        let err = dispatch(&registry, &mut session, "   ").unwrap_err();
        assert!(matches!(err, ShopError::EmptyInput));
    }

    #[test]
    fn test_dish_and_manual_contributors_merge() {
        let registry = Registry::builtin();
        let mut session = session();
        dispatch(&registry, &mut session, "add_dish pasta").unwrap();
        dispatch(&registry, &mut session, "add_ingredient tomato").unwrap();

        let tomato = session.list.contributors("tomato").unwrap();
        assert_eq!(
            tomato.iter().collect::<Vec<_>>(),
            vec!["manual", "pasta"]
        );
    }

    #[test]
    fn test_dispatch_show_shopping_list_after_adds() {
        let registry = Registry::builtin();
        let mut session = session();
        dispatch(&registry, &mut session, "add_dish pasta").unwrap();
        match dispatch(&registry, &mut session, "show_shopping_list").unwrap() {
            CommandOutcome::List(ListView::Entries(entries)) => {
                let names: Vec<&str> =
                    entries.iter().map(|e| e.ingredient.as_str()).collect();
                assert_eq!(names, vec!["pasta", "tomato"]);
            }
            other => panic!("expected list entries, got {:?}", other),
        }
    }
}
