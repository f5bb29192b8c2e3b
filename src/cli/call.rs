//! Direct tool invocation from the command line.

use crate::cli::args::{CallArgs, GlobalArgs, HealthArgs, ProvidersArgs, ToolsArgs};
use crate::config::expand_path;
use crate::router::{Router, RouterOptions};
use crate::utils::errors::{RouterError, RouterResult};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Parse arguments in shell-friendly format: key:value or key=value
pub fn parse_call_args(args: &[String]) -> RouterResult<Value> {
    let mut map = serde_json::Map::new();

    for arg in args {
        let parts: Vec<&str> = if arg.contains(':') {
            arg.splitn(2, ':').collect()
        } else if arg.contains('=') {
            arg.splitn(2, '=').collect()
        } else {
            // Bare argument - treat as a flag
            map.insert(arg.clone(), Value::Bool(true));
            continue;
        };

        if parts.len() == 2 {
            let key = parts[0].trim();
            let value = parts[1].trim();

            // Try to parse as JSON, fallback to string
            let parsed_value = serde_json::from_str::<Value>(value)
                .unwrap_or_else(|_| Value::String(value.to_string()));

            map.insert(key.to_string(), parsed_value);
        }
    }

    Ok(Value::Object(map))
}

fn build_router(global: &GlobalArgs) -> Router {
    let mut options = RouterOptions::from_env();
    if global.mock {
        options.mock_mode = true;
    }
    if let Some(url) = &global.url {
        options.remote_override = Some(url.clone());
    }
    if let Some(config) = &global.config {
        options.config_path = Some(PathBuf::from(expand_path(config)));
    }
    Router::new(options)
}

/// Execute the `call` subcommand.
pub async fn call(args: CallArgs) -> RouterResult<()> {
    let router = build_router(&args.global);
    let input = parse_call_args(&args.args)?;

    info!("Calling {} with input: {}", args.identifier, input);
    let result = router.invoke(&args.identifier, input).await?;

    if args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

/// Execute the `tools` subcommand.
pub async fn tools(args: ToolsArgs) -> RouterResult<()> {
    let router = build_router(&args.global);
    let capabilities = router.list_capabilities(&args.provider).await;

    if capabilities.is_empty() {
        println!("No capabilities discovered for '{}'", args.provider);
    } else {
        for name in capabilities {
            println!("{}", name);
        }
    }
    Ok(())
}

/// Execute the `health` subcommand. Unhealthy providers map to a non-zero
/// exit status.
pub async fn health(args: HealthArgs) -> RouterResult<()> {
    let router = build_router(&args.global);
    let healthy = router.check_health(&args.provider).await;

    println!(
        "{}: {}",
        args.provider,
        if healthy { "healthy" } else { "unhealthy" }
    );
    if !healthy {
        return Err(RouterError::Transport(format!(
            "provider '{}' is not healthy",
            args.provider
        )));
    }
    Ok(())
}

/// Execute the `providers` subcommand.
pub async fn providers(args: ProvidersArgs) -> RouterResult<()> {
    let store = match &args.global.config {
        Some(path) => crate::config::ConfigStore::new(expand_path(path)),
        None => crate::config::ConfigStore::from_env(),
    };
    let config = store.load().await;

    if config.providers.is_empty() {
        println!("No providers configured ({})", store.path().display());
        return Ok(());
    }

    let mut names: Vec<_> = config.providers.keys().collect();
    names.sort();
    for name in names {
        let address = config
            .get(name)
            .and_then(|d| d.url.as_deref())
            .unwrap_or("(not remotely reachable)");
        println!("{:<20} {}", name, address);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_call_args_colon_syntax() {
        let args = vec!["title:buy milk".to_string(), "done:false".to_string()];
        let parsed = parse_call_args(&args).unwrap();
        assert_eq!(parsed["title"], "buy milk");
        assert_eq!(parsed["done"], false);
    }

    #[test]
    fn test_parse_call_args_bare_flag() {
        let parsed = parse_call_args(&["verbose".to_string()]).unwrap();
        assert_eq!(parsed["verbose"], true);
    }
}
