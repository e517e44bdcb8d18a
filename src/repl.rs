// Interactive shell: the read loop, completion and rendering. The core is
// only reached through `dispatch`.

use crate::core::commands::CommandOutcome;
use crate::core::dispatch::dispatch;
use crate::core::registry::{Registry, Usage};
use crate::core::session::Session;
use crate::domain::model::{ListEntry, ListView};
use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

const QUIT_TOKEN: &str = "quit";

/// Prefix completion over command names plus dish names, on whichever word
/// the cursor is in.
pub struct ReplHelper {
    candidates: Vec<String>,
}

impl ReplHelper {
    pub fn new(registry: &Registry, session: &Session) -> Self {
        let mut candidates: Vec<String> =
            registry.names().into_iter().map(str::to_string).collect();
        candidates.extend(session.catalog().dish_names());
        Self { candidates }
    }
}

impl Completer for ReplHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let prefix = &line[start..pos];
        let matches = self
            .candidates
            .iter()
            .filter(|candidate| candidate.starts_with(prefix))
            .cloned()
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}
impl Validator for ReplHelper {}
impl Helper for ReplHelper {}

/// Read-eval-print loop. Blocks on user input between commands; `quit`,
/// or Ctrl-D, ends the session. Command errors are reported and the loop
/// continues.
pub fn run(registry: &Registry, session: &mut Session) -> anyhow::Result<()> {
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(ReplHelper::new(registry, session)));

    loop {
        println!(
            "{}",
            "Enter a command. Type help for list of commands. Type quit to leave.".bold()
        );
        match rl.readline("> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                if line.trim() == QUIT_TOKEN {
                    println!("K, bye!");
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                match dispatch(registry, session, &line) {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(e) => println!("{}", e.to_string().red()),
                }
                println!();
                println!();
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("K, bye!");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

fn print_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Help(usages) => print_help(usages),
        CommandOutcome::Dishes(names) => {
            for name in names {
                println!("{}", name.yellow());
            }
        }
        CommandOutcome::Recipe(ingredients) => {
            for ingredient in ingredients {
                println!("{}", ingredient.yellow());
            }
        }
        CommandOutcome::DishAdded(dish_name) => {
            println!("Adding {} to shopping list.", dish_name);
        }
        CommandOutcome::List(view) => print_list(view),
        CommandOutcome::Saved(_) => println!("Success!"),
        CommandOutcome::Done => {}
    }
}

fn print_help(usages: &[Usage]) {
    println!();
    println!("{}", "List of available commands:".bold());
    for usage in usages {
        if usage.params.is_empty() {
            println!("{}", usage.name.green());
        } else {
            println!(
                "{} -- {}",
                usage.name.green(),
                usage.params.join(", ").yellow()
            );
        }
    }
}

fn print_list(view: &ListView) {
    match view {
        ListView::Empty => println!("{}", "Empty".yellow()),
        ListView::Entries(entries) => {
            for ListEntry {
                ingredient,
                contributors,
            } in entries
            {
                println!(
                    "{} -- {}",
                    ingredient.green(),
                    contributors.join(", ").yellow()
                );
            }
        }
    }
}
