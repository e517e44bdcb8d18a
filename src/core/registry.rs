use crate::core::commands::{self, CommandOutcome};
use crate::core::session::Session;
use crate::utils::error::Result;

pub type Handler = fn(&Registry, &mut Session, &[String]) -> Result<CommandOutcome>;

/// A registered command: its name, the names of its positional parameters
/// (their count is the arity), and the handler to invoke.
pub struct CommandSpec {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub handler: Handler,
}

impl CommandSpec {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Usage line for `help`, as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Usage {
    pub name: &'static str,
    pub params: &'static [&'static str],
}

/// Static command table built once at startup. Lookup is by name;
/// iteration order is registration order, which is what `help` shows.
pub struct Registry {
    commands: Vec<CommandSpec>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self {
            commands: vec![
                CommandSpec {
                    name: "help",
                    params: &[],
                    handler: commands::help,
                },
                CommandSpec {
                    name: "list_dishes",
                    params: &[],
                    handler: commands::list_dishes,
                },
                CommandSpec {
                    name: "show_recipe",
                    params: &["dish_name"],
                    handler: commands::show_recipe,
                },
                CommandSpec {
                    name: "add_dish",
                    params: &["dish_name"],
                    handler: commands::add_dish,
                },
                CommandSpec {
                    name: "add_ingredient",
                    params: &["ingredient"],
                    handler: commands::add_ingredient,
                },
                CommandSpec {
                    name: "remove_dish",
                    params: &["dish_name"],
                    handler: commands::remove_dish,
                },
                CommandSpec {
                    name: "remove_ingredient",
                    params: &["ingredient"],
                    handler: commands::remove_ingredient,
                },
                CommandSpec {
                    name: "show_shopping_list",
                    params: &[],
                    handler: commands::show_shopping_list,
                },
                CommandSpec {
                    name: "save",
                    params: &[],
                    handler: commands::save,
                },
            ],
        }
    }

    pub fn find(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|spec| spec.name == name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|spec| spec.name).collect()
    }

    pub fn usages(&self) -> Vec<Usage> {
        self.commands
            .iter()
            .map(|spec| Usage {
                name: spec.name,
                params: spec.params,
            })
            .collect()
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }
}
