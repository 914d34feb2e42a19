//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Folio portfolio feed generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (default: current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Post collection directory (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write the rss feed and the exported site data
    Build,

    /// Generate only the rss feed
    Feed {
        /// Print the feed to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Export the derived site configuration as json
    Export,

    /// Show the profile with derived fields
    Profile,

    /// Show navigation entries and which one is active for a path
    Nav {
        /// Current page path, e.g. `/blogs/hello/`
        path: String,
    },

    /// Validate the config and the post collection
    Check {
        /// Also count posts marked `draft = true`
        #[arg(long)]
        drafts: bool,
    },

    /// Serve the feed, regenerated on every request
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feed_stdout() {
        let cli = Cli::parse_from(["folio", "feed", "--stdout"]);
        assert!(matches!(cli.command, Commands::Feed { stdout: true }));
        assert_eq!(cli.config, PathBuf::from("folio.toml"));
    }

    #[test]
    fn test_parse_global_paths() {
        let cli = Cli::parse_from(["folio", "-r", "site", "-C", "custom.toml", "build"]);
        assert_eq!(cli.root, Some(PathBuf::from("site")));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(cli.command, Commands::Build));
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["folio", "serve", "-i", "0.0.0.0", "-p", "8080"]);
        match cli.command {
            Commands::Serve { interface, port } => {
                assert_eq!(interface.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_check_drafts() {
        let cli = Cli::parse_from(["folio", "check", "--drafts"]);
        assert!(matches!(cli.command, Commands::Check { drafts: true }));
    }

    #[test]
    fn test_parse_nav_path() {
        let cli = Cli::parse_from(["folio", "nav", "/blogs/hello/"]);
        assert!(matches!(cli.command, Commands::Nav { path } if path == "/blogs/hello/"));
    }
}
