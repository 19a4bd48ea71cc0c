//! Command line entry point for the host plugin manager
//!
//! ```bash
//! # Register the SMS method, templates and pages
//! tfa-plugin enable
//!
//! # Tear everything down again
//! tfa-plugin disable
//! tfa-plugin uninstall --meta '{"code":"TwoFactorAuthCustomerSms42","name":"SMS","version":"4.3.0"}'
//! ```
//!
//! Settings come from `.env`, `config.<env>.toml` and `TFA_*` variables.

use anyhow::Context;
use clap::{Parser, Subcommand};

use tfa_infra::database::DatabasePool;
use tfa_infra::settings::load_settings;
use tfa_plugin::{PluginContext, PluginManager, PluginMeta};
use tfa_shared::logging;

#[derive(Parser)]
#[command(name = "tfa-plugin")]
#[command(about = "Run lifecycle operations of the SMS two-factor plugin", long_about = None)]
struct Cli {
    /// Plugin metadata as JSON, as handed over by the host
    #[arg(long, global = true)]
    meta: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the method, install templates and create pages
    Enable,
    /// Disable the method, remove templates and pages
    Disable,
    /// Same teardown as disable, run when the plugin is removed
    Uninstall,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = load_settings().context("Failed to load settings")?;
    logging::init(&settings.logging);

    let meta = match cli.meta.as_deref() {
        Some(raw) => PluginMeta::from_json(raw).context("Invalid plugin metadata")?,
        None => PluginMeta::current(),
    };

    let pool = DatabasePool::new(&settings.database)
        .await
        .context("Failed to connect to the host database")?;
    let ctx = PluginContext::mysql(&pool, settings.plugin.clone());
    let mut manager = PluginManager::default();

    let result = match cli.command {
        Commands::Enable => manager.enable(&meta, &ctx).await,
        Commands::Disable => manager.disable(&meta, &ctx).await,
        Commands::Uninstall => manager.uninstall(&meta, &ctx).await,
    };
    pool.close().await;
    result?;

    tracing::info!(plugin = %meta.code, state = %manager.state(), "Lifecycle operation finished");
    Ok(())
}
