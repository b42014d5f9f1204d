//! utilcli entry point
//!
//! Loads the config once, builds only the client the command needs and runs
//! it. Exit code 1 on any error or failed response.

mod cli;
mod commands;
mod config;
mod util;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utilcli_provider::{
    LyricsConfig, LyricsProvider, PorkbunConfig, PorkbunProvider, ProviderError, ShlinkConfig,
    ShlinkProvider,
};

use cli::{Cli, Commands};
use commands::{Outcome, Output};
use config::AppConfig;
use util::{Clipboard, MenuChooser, SystemClipboard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli).await {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            if is_expected(&e) {
                tracing::debug!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// 用户输入类错误已经打印到 stderr，只在 debug 级别记录
fn is_expected(e: &anyhow::Error) -> bool {
    e.downcast_ref::<ProviderError>()
        .is_some_and(ProviderError::is_expected)
}

/// Logs go to stderr. `RUST_LOG` wins over `--log-level`.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,utilcli={level},utilcli_provider={level}"))
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<Outcome> {
    let config_path = match cli.config {
        Some(path) => path,
        None => AppConfig::default_path()?,
    };
    let config = AppConfig::load(&config_path)?;

    let clipboard = (!cli.no_copy).then(|| Box::new(SystemClipboard::detect()) as Box<dyn Clipboard>);
    let mut out = Output::new(io::stdout(), cli.json, clipboard);

    match cli.command {
        Commands::Porkbun(command) => {
            let provider = PorkbunProvider::new(PorkbunConfig::from(config.porkbun()?))?;
            commands::porkbun::run(command, &provider, &mut out).await
        }
        Commands::Shlink(command) => {
            let section = config.shlink()?;
            let provider = ShlinkProvider::new(ShlinkConfig::from(section))?;
            commands::shlink::run(command, &provider, section.alt_domain.as_deref(), &mut out)
                .await
        }
        Commands::Lyrics(args) => {
            let provider = LyricsProvider::new(LyricsConfig::from(config.utilapi()?))?;
            let mut chooser = MenuChooser::new(io::stdin().lock(), io::stdout());
            commands::lyrics::run(args, &provider, &mut out, &mut chooser).await
        }
    }
}
