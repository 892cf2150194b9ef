//! `bandwise` -- CLI binary for the bandwise proficiency scoring service.
//!
//! Provides the following subcommands:
//!
//! - `bandwise serve` -- Load the language model and serve the HTTP API.
//! - `bandwise model` -- Install or inspect language models.
//! - `bandwise config` -- Show the resolved configuration.

use std::path::PathBuf;

use bandwise_platform::{NativeEnvironment, load_config};
use clap::{Parser, Subcommand};

mod commands;

/// bandwise proficiency scoring service.
#[derive(Parser)]
#[command(name = "bandwise", about = "bandwise proficiency scoring service", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API until Ctrl+C.
    Serve(commands::serve::ServeArgs),

    /// Manage language models.
    Model {
        #[command(subcommand)]
        action: ModelCmd,
    },

    /// Show resolved configuration.
    Config {
        #[command(subcommand)]
        action: ConfigCmd,
    },
}

/// Subcommands for `bandwise model`.
#[derive(Subcommand)]
enum ModelCmd {
    /// Install a built-in model into the models directory.
    Install {
        /// Model name (defaults to the configured model).
        name: Option<String>,
    },

    /// Show an installed model, or list installed models.
    Show {
        /// Model name (lists all installed models when omitted).
        name: Option<String>,
    },
}

/// Subcommands for `bandwise config`.
#[derive(Subcommand)]
enum ConfigCmd {
    /// Show the full resolved configuration.
    Show,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(&NativeEnvironment, cli.config.as_deref()).await?;
    if let Commands::Serve(args) = &cli.command {
        args.apply(&mut config)?;
    }

    let default_filter = if cli.verbose || config.server.debug {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    match cli.command {
        Commands::Serve(_) => commands::serve::run(config).await?,
        Commands::Model { action } => match action {
            ModelCmd::Install { name } => commands::model::install(&config, name.as_deref())?,
            ModelCmd::Show { name } => commands::model::show(&config, name.as_deref())?,
        },
        Commands::Config { action } => match action {
            ConfigCmd::Show => commands::config_cmd::config_show(&config),
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_overrides() {
        let cli = Cli::try_parse_from([
            "bandwise", "serve", "--host", "0.0.0.0", "--port", "8080", "--model", "xx_generic",
            "--debug",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.model.as_deref(), Some("xx_generic"));
        assert!(args.debug);
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["bandwise", "serve", "--config", "/tmp/b.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/b.json")));

        let cli = Cli::try_parse_from(["bandwise", "-v", "config", "show"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Config {
                action: ConfigCmd::Show
            }
        ));
    }

    #[test]
    fn model_name_is_optional() {
        let cli = Cli::try_parse_from(["bandwise", "model", "install"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Model {
                action: ModelCmd::Install { name: None }
            }
        ));

        let cli = Cli::try_parse_from(["bandwise", "model", "show", "en_core"]).unwrap();
        match cli.command {
            Commands::Model {
                action: ModelCmd::Show { name },
            } => assert_eq!(name.as_deref(), Some("en_core")),
            _ => panic!("expected model show"),
        }
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Cli::try_parse_from(["bandwise", "serve", "--port", "99999"]).is_err());
    }
}
