use clap::Parser;
use toolgate::cli::{args::Cli, call};
use toolgate::utils::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("warn");

    let cli = Cli::parse();
    match cli {
        Cli::Call(args) => call::call(args).await?,
        Cli::Tools(args) => call::tools(args).await?,
        Cli::Health(args) => call::health(args).await?,
        Cli::Providers(args) => call::providers(args).await?,
    }

    Ok(())
}
