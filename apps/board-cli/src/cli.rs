use std::path::PathBuf;
use std::sync::Arc;

mod auth;
mod charts;
mod posts;

use anyhow::Context as _;
use clap::ArgAction;
use serde::Serialize;

use board_core::cancel::{AbortController, AbortSignal};
use board_core::ports::KeyValueStorage;
use board_infra::{FileStorage, JwtTokenService, MockApi, SimulatedLatency};

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};
use crate::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory holding the board's storage (overrides BOARD_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    no_latency: bool,

    /// Print results and errors as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login(auth::Login),

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Manage posts
    #[command(subcommand)]
    Posts(posts::PostsCommand),

    /// Print a dashboard dataset
    Charts(charts::Charts),
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        init_telemetry(&TelemetryConfig::from_env(self.verbose));

        let mut config = AppConfig::from_env();
        if let Some(dir) = self.data_dir {
            config.data_dir = dir;
        }
        if self.no_latency {
            config.simulated_latency = false;
        }
        tracing::debug!(?config, "Loaded configuration");

        let ctx = Context::new(&config, self.json)?;

        let result = match self.command {
            Command::Login(cmd) => cmd.run(&ctx).await,
            Command::Logout => auth::logout(&ctx),
            Command::Whoami => auth::whoami(&ctx),
            Command::Posts(cmd) => cmd.run(&ctx).await,
            Command::Charts(cmd) => cmd.run(&ctx).await,
        };

        result.or_else(|err| ctx.report(err))
    }
}

/// Everything a command needs: the API and how to print.
pub struct Context {
    pub api: MockApi,
    pub json: bool,
}

impl Context {
    fn new(config: &AppConfig, json: bool) -> anyhow::Result<Self> {
        let storage = FileStorage::open(&config.data_dir)
            .with_context(|| format!("opening data directory {}", config.data_dir.display()))?
            .with_quota(config.storage_quota);
        let storage: Arc<dyn KeyValueStorage> = Arc::new(storage);
        let tokens = Arc::new(JwtTokenService::from_env());

        let api = MockApi::new(storage, tokens)
            .with_latency(SimulatedLatency::enabled(config.simulated_latency));

        Ok(Self { api, json })
    }

    /// A signal that fires on Ctrl-C.
    pub fn interrupt_signal(&self) -> AbortSignal {
        let controller = AbortController::new();
        let signal = controller.signal();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                controller.abort();
            }
        });
        signal
    }

    /// Print `value` as JSON, or with `human` otherwise.
    pub fn emit<T: Serialize>(&self, value: &T, human: impl FnOnce(&T)) -> CliResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            human(value);
        }
        Ok(())
    }

    fn report(&self, err: CliError) -> anyhow::Result<()> {
        let problem = err.to_problem();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&problem)?);
            anyhow::bail!("{}", problem.title);
        }
        Err(err.into())
    }
}
