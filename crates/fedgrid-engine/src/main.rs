//! fedgrid — rank federated cloud services for a placement request.
//!
//! Composition root for the pipeline: wires HTTP-backed sources from a
//! fedgrid.toml file and prints the ranked candidate list the workflow
//! would iterate.
//!
//! # Usage
//!
//! ```text
//! fedgrid rank --config fedgrid.toml --owner group-a --service-type compute
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fedgrid_core::{FedgridConfig, ServiceType};
use fedgrid_engine::PlacementEngine;

#[derive(Parser)]
#[command(name = "fedgrid", about = "Federated cloud placement ranking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and print a ranked placement cursor.
    Rank {
        /// Path to the fedgrid.toml configuration.
        #[arg(long, default_value = "fedgrid.toml")]
        config: PathBuf,

        /// Owner (user group / customer) whose SLA weights apply.
        #[arg(long)]
        owner: String,

        /// Requested capability type (compute, storage, block-storage,
        /// object-store, network).
        #[arg(long, default_value = "compute")]
        service_type: String,

        /// Restrict candidates to these provider ids.
        #[arg(long, value_delimiter = ',')]
        providers: Option<Vec<String>>,
    },
}

/// Parse an operator-supplied capability tag.
///
/// Unlike wire data, a typo on the command line must not silently become
/// a search for `unknown`-typed services; anything unrecognized is
/// rejected with the list of valid tags.
fn parse_service_type(tag: &str) -> anyhow::Result<ServiceType> {
    let parsed = ServiceType::parse(tag);
    if parsed == ServiceType::Unknown && tag.trim() != "unknown" {
        anyhow::bail!(
            "unrecognized service type `{tag}` (expected one of: compute, storage, \
             block-storage, object-store, network, unknown)"
        );
    }
    Ok(parsed)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fedgrid=debug".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Rank {
            config,
            owner,
            service_type,
            providers,
        } => {
            let config = FedgridConfig::from_file(&config)?;
            let engine = PlacementEngine::from_config(&config);

            let requested = parse_service_type(&service_type)?;
            let cursor = engine
                .build_cursor(&owner, providers.as_deref(), requested)
                .await?;

            let snapshot = cursor.snapshot();
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_parse() {
        assert_eq!(parse_service_type("compute").unwrap(), ServiceType::Compute);
        assert_eq!(
            parse_service_type("block-storage").unwrap(),
            ServiceType::BlockStorage
        );
        assert_eq!(parse_service_type("unknown").unwrap(), ServiceType::Unknown);
    }

    #[test]
    fn typo_is_rejected_with_valid_tags() {
        let err = parse_service_type("computee").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("computee"));
        assert!(msg.contains("block-storage"));
    }
}
