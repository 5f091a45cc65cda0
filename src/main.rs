use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read};

use newscheck::analysis::{AnalysisResult, MockScorer};
use newscheck::cli::{Cli, Commands};
use newscheck::config::{Config, ConfigStore};
use newscheck::logging::init_tracing;
use newscheck::notify::ConsoleNotifier;
use newscheck::ui::checker::CheckerSession;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    cli.apply_overrides(&mut config);

    let log_guard = init_tracing(&config.logging).context("initializing log file")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("newscheck-worker")
        .build()
        .context("building tokio runtime")?;

    let scorer =
        MockScorer::from_seed(config.analysis.seed).with_latency(config.analysis.latency());

    match cli.command {
        None => {
            let store = ConfigStore::new(config, config_path);
            newscheck::ui::run(store, scorer, runtime.handle().clone())
                .context("running terminal UI")?;
        }
        Some(Commands::Check { text, json }) => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let mut session = CheckerSession::new(ConsoleNotifier);
            session.set_text(text);
            match runtime.block_on(session.analyze(&scorer)) {
                Ok(result) => print_result(&result, json)?,
                Err(err) => {
                    drop(runtime);
                    drop(log_guard);
                    std::process::exit(err.exit_code());
                }
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        eprintln!("Paste the news article text, then press Ctrl+D:");
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("reading article from stdin")?;
    Ok(text)
}

fn print_result(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(result).context("serializing result")?
        );
        return Ok(());
    }

    println!("{}", result.headline());
    println!("Classification: {}", result.classification());
    println!("Confidence: {}%", result.confidence);
    println!();
    println!("{}", result.analysis);
    Ok(())
}
