//! CLI argument types - shared between binary and tests

use clap::{Args, Parser};

#[derive(Parser)]
#[command(name = "toolgate")]
#[command(about = "Route qualified tool invocations to capability providers")]
#[command(version)]
pub enum Cli {
    /// Call a capability as <provider>__<capability>
    Call(CallArgs),
    /// List the capabilities a provider declares
    Tools(ToolsArgs),
    /// Probe a provider's health endpoint
    Health(HealthArgs),
    /// Show configured providers
    Providers(ProvidersArgs),
}

/// Switches shared by every subcommand.
#[derive(Args, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Force mock mode: never contact a real provider
    #[arg(long, global = true)]
    pub mock: bool,
    /// Remote address override applied to every provider
    #[arg(long, global = true)]
    pub url: Option<String>,
}

#[derive(Parser)]
pub struct CallArgs {
    /// Qualified identifier, e.g. todo__fetch_todos
    pub identifier: String,
    /// Input payload as key:value / key=value pairs (values parsed as JSON
    /// when possible)
    pub args: Vec<String>,
    /// Print the raw JSON result
    #[arg(short, long)]
    pub json: bool,
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser)]
pub struct ToolsArgs {
    /// Provider name
    pub provider: String,
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser)]
pub struct HealthArgs {
    /// Provider name
    pub provider: String,
    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Parser)]
pub struct ProvidersArgs {
    #[command(flatten)]
    pub global: GlobalArgs,
}
