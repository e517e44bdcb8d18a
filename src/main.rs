use clap::Parser;
use shoplist::adapters::fs::{DishDir, TextFileSink};
use shoplist::domain::ports::RecipeSource;
use shoplist::utils::{logger, validation::Validate};
use shoplist::{repl, CliConfig, Registry, Session, Settings};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting shoplist");

    let settings = match Settings::resolve(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    if cli.verbose {
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // An unreadable recipes directory is the one fatal startup error.
    let catalog = DishDir::new(&settings.recipes_dir).load()?;
    tracing::info!(dishes = catalog.len(), "recipe catalog loaded");
    if catalog.is_empty() {
        tracing::warn!(dir = %settings.recipes_dir, "no .dish files found");
    }

    let sink = TextFileSink::new(&settings.output_path);
    let registry = Registry::builtin();
    let mut session = Session::new(catalog, Box::new(sink));

    repl::run(&registry, &mut session)
}
