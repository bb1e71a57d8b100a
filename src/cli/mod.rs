//! Operator command line
//!
//! `plugin-lifecycle [--config FILE] <extensions|plugins> <action> [IDS...|--all] [--yes]`

mod prompt;
mod table;

pub use prompt::TerminalConfirm;

use clap::{Args, Parser, Subcommand};
use plugin_lifecycle::{
    ApiExtensionService, BatchOrchestrator, BatchOutcome, ClientConfig, ConfirmationPort,
    EntityBackend, ManagedEntity, Result, Scope, Transition, UiPluginService, VcdClient,
};
use std::path::PathBuf;
use table::Listing;
use tracing::debug;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", ",
    env!("RUST_VERSION"),
    ")"
);

/// Manage UI plugins and API extension services
#[derive(Debug, Parser)]
#[command(name = "plugin-lifecycle", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// YAML configuration file; VCD_* environment variables override it
    #[arg(short, long, global = true, env = "PLUGIN_LIFECYCLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// API extension services
    Extensions {
        #[command(subcommand)]
        action: ExtensionAction,
    },
    /// UI plugins
    Plugins {
        #[command(subcommand)]
        action: PluginAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ExtensionAction {
    /// List registered services
    List,
    Enable(Targets),
    Disable(Targets),
    /// Delete services, offering to disable enabled ones first
    Delete(Targets),
}

#[derive(Debug, Subcommand)]
pub enum PluginAction {
    /// List installed plugins
    List,
    Enable(Targets),
    Disable(Targets),
    /// Delete plugins, offering to disable enabled ones first
    Delete(Targets),
    /// Set the portals a plugin is visible in
    Scope {
        #[command(flatten)]
        targets: Targets,

        /// Portal to show the plugin in; repeat for both
        #[arg(long = "scope", required = true, value_parser = ["service-provider", "tenant"])]
        scopes: Vec<String>,
    },
    /// Publish plugins to all tenants
    Publish(Targets),
    /// Unpublish plugins from all tenants
    Unpublish(Targets),
}

/// Entities a batch applies to
#[derive(Debug, Clone, Args)]
pub struct Targets {
    /// Keys (href or id) or names
    #[arg(required_unless_present = "all")]
    pub ids: Vec<String>,

    /// Every listed entity
    #[arg(long, conflicts_with = "ids")]
    pub all: bool,
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_deref()).await?;
    let client = VcdClient::new(&config)?;
    let confirm = TerminalConfirm::new(cli.yes);

    match cli.command {
        Command::Extensions { action } => {
            let orchestrator =
                BatchOrchestrator::new(ApiExtensionService::new(client), confirm);
            match action {
                ExtensionAction::List => list(orchestrator).await,
                ExtensionAction::Enable(targets) => {
                    apply(orchestrator, &targets, Transition::Enable).await
                }
                ExtensionAction::Disable(targets) => {
                    apply(orchestrator, &targets, Transition::Disable).await
                }
                ExtensionAction::Delete(targets) => {
                    apply(orchestrator, &targets, Transition::Delete).await
                }
            }
        }
        Command::Plugins { action } => {
            let orchestrator = BatchOrchestrator::new(UiPluginService::new(client), confirm);
            let (targets, transition) = match action {
                PluginAction::List => return list(orchestrator).await,
                PluginAction::Enable(targets) => (targets, Transition::Enable),
                PluginAction::Disable(targets) => (targets, Transition::Disable),
                PluginAction::Delete(targets) => (targets, Transition::Delete),
                PluginAction::Scope { targets, scopes } => (
                    targets,
                    Transition::ChangeScope(Scope::from_names(scopes.as_slice())),
                ),
                PluginAction::Publish(targets) => (targets, Transition::PublishAll),
                PluginAction::Unpublish(targets) => (targets, Transition::UnpublishAll),
            };
            apply(orchestrator, &targets, transition).await
        }
    }
}

async fn list<B, C>(mut orchestrator: BatchOrchestrator<B, C>) -> Result<()>
where
    B: EntityBackend,
    B::Entity: Listing,
    C: ConfirmationPort,
{
    orchestrator.load().await?;
    println!("{}", table::render(orchestrator.entities()));
    Ok(())
}

async fn apply<B, C>(
    mut orchestrator: BatchOrchestrator<B, C>,
    targets: &Targets,
    transition: Transition,
) -> Result<()>
where
    B: EntityBackend,
    B::Entity: Listing,
    C: ConfirmationPort,
{
    let kind = <B::Entity as ManagedEntity>::KIND;

    orchestrator.load().await?;
    if targets.all {
        orchestrator.select_all();
    } else {
        orchestrator.select(targets.ids.as_slice())?;
    }
    debug!(selected = orchestrator.selected().len(), %transition, "Selection ready");

    match orchestrator.run(transition).await? {
        BatchOutcome::NothingSelected => println!("No {} to act on.", kind.plural()),
        BatchOutcome::Declined => println!("Cancelled, nothing was changed."),
        BatchOutcome::AlreadySatisfied { .. } => {}
        BatchOutcome::Completed(report) => {
            if report.remediated > 0 {
                println!(
                    "Disabled {} {} before deleting.",
                    report.remediated,
                    kind.plural()
                );
            }
            println!(
                "{}: {} of {} requests succeeded.",
                transition.title(),
                report.succeeded,
                report.requested
            );
            println!("{}", table::render(orchestrator.entities()));
        }
    }
    Ok(())
}
