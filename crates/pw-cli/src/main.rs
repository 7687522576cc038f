use anyhow::{Context, Result};
use pw_cli::{build_cli, init_tracing, list_categories, OutputFormat, Wizard, WizardConfig};
use pw_content::{Generator, ProjectRequest};
use pw_history::{FileBackend, HistoryStore};
use std::io;
use std::path::PathBuf;

fn format_of(args: &clap::ArgMatches) -> OutputFormat {
    if args.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    let mut config = WizardConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load configuration")?;
    if let Some(dir) = matches.get_one::<PathBuf>("data-dir") {
        config = config.with_data_dir(dir);
    }

    init_tracing(&config);
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    let mut stdout = io::stdout().lock();

    match matches.subcommand() {
        Some(("generate", args)) => {
            let topic = args.get_one::<String>("topic").cloned().unwrap_or_default();
            let category = args.get_one::<String>("category").cloned().unwrap_or_default();
            let request = ProjectRequest::new(topic, category)?;

            let generator = if args.get_flag("no-delay") {
                Generator::instant()
            } else {
                Generator::new(config.generation.delay())
            };
            let wizard = Wizard::new(open_history(&config)?, generator);

            if !args.get_flag("json") && !generator.delay().is_zero() {
                eprintln!("Generating...");
            }
            wizard.generate(&request, format_of(args), &mut stdout).await?;
        }
        Some(("history", args)) => {
            let wizard = Wizard::new(open_history(&config)?, Generator::instant());
            match args.subcommand() {
                Some(("list", sub)) => wizard.list_history(format_of(sub), &mut stdout)?,
                Some(("load", sub)) => {
                    let number = sub.get_one::<usize>("number").copied().unwrap_or(1);
                    wizard.load_history(number, &mut stdout)?;
                }
                Some(("clear", _)) => wizard.clear_history(&mut stdout)?,
                _ => unreachable!("clap enforces a history subcommand"),
            }
        }
        Some(("categories", args)) => list_categories(format_of(args), &mut stdout)?,
        _ => unreachable!("clap enforces a subcommand"),
    }

    Ok(())
}

fn open_history(config: &WizardConfig) -> Result<HistoryStore<FileBackend>> {
    HistoryStore::with_config(FileBackend::new(&config.data_dir), config.history.clone())
        .context("invalid history configuration")
}
