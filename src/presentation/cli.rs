//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Running `deckhand` with no subcommand behaves like `deckhand setup`
//! - Override flags become the command-line layer; tokens are checked when
//!   the layers are merged, so every bad value is reported at once

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::registry::keys;
use crate::domain::value_objects::{Layer, LayerSource};
use crate::error::ParseIssue;
use crate::infrastructure::config::DEFAULT_CONFIG_FILE;
use crate::infrastructure::runtime::DEFAULT_PROJECT_NAME;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deckhand - configure and run a self-hosted Open WebUI stack
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'deckhand' without arguments for interactive setup.")]
pub struct Cli {
    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Settings that override the persisted configuration
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OverrideArgs {
    /// Host port for Open WebUI
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,

    /// Run Ollama as a companion container
    #[arg(long, overrides_with = "no_ollama")]
    pub ollama: bool,

    /// Use an existing Ollama server instead of a companion container
    #[arg(long, overrides_with = "ollama")]
    pub no_ollama: bool,

    /// Address of an existing Ollama server
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Host directory for Open WebUI data
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Set any option (repeatable), e.g. --set search.enabled=true
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Persisted configuration file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Directory receiving docker-compose.yml and .env
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for OverrideArgs {
    fn default() -> Self {
        Self {
            port: None,
            ollama: false,
            no_ollama: false,
            ollama_url: None,
            data_dir: None,
            set: Vec::new(),
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: PathBuf::from("."),
        }
    }
}

impl OverrideArgs {
    /// The command-line layer plus every `--set` that is not `KEY=VALUE`.
    /// Dedicated flags win over `--set` for the same key.
    pub fn split_layer(&self) -> (Layer, Vec<ParseIssue>) {
        let mut layer = Layer::new(LayerSource::Flags);
        let mut rejected = Vec::new();

        for raw in &self.set {
            match Layer::parse_assignment(raw) {
                Some((key, value)) => layer.set(key, value),
                None => rejected.push(ParseIssue::new(
                    LayerSource::Flags,
                    format!("--set expects KEY=VALUE, got '{}'", raw),
                )),
            }
        }

        if let Some(port) = &self.port {
            layer.set(keys::WEBUI_PORT, port.as_str());
        }
        if self.ollama {
            layer.set(keys::OLLAMA_ENABLED, "true");
        }
        if self.no_ollama {
            layer.set(keys::OLLAMA_ENABLED, "false");
        }
        if let Some(url) = &self.ollama_url {
            layer.set(keys::OLLAMA_URL, url.as_str());
        }
        if let Some(dir) = &self.data_dir {
            layer.set(keys::WEBUI_DATA_DIR, dir.as_str());
        }
        (layer, rejected)
    }
}

/// Where the generated files live and what the compose project is called
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StackArgs {
    /// Directory holding docker-compose.yml and .env
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Compose project name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PROJECT_NAME)]
    pub project_name: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check prerequisites, ask questions, write the files and start the stack
    Setup {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Skip the interview and use defaults, config file and flags only
        #[arg(long)]
        non_interactive: bool,

        /// Write the files but do not start the containers
        #[arg(long)]
        no_start: bool,

        /// Compose project name
        #[arg(long, value_name = "NAME", default_value = DEFAULT_PROJECT_NAME)]
        project_name: String,
    },

    /// Render docker-compose.yml and .env without asking questions
    Render {
        #[command(flatten)]
        overrides: OverrideArgs,

        /// Show what would be written without touching any file
        #[arg(long)]
        dry_run: bool,

        /// Show a diff against the files on disk
        #[arg(long)]
        diff: bool,
    },

    /// Report every problem in the merged configuration
    Validate {
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Print the merged configuration and where each value came from
    Config {
        #[command(flatten)]
        overrides: OverrideArgs,
    },

    /// Start the stack (docker compose up -d)
    Up {
        #[command(flatten)]
        stack: StackArgs,
    },

    /// Stop the stack (docker compose down)
    Down {
        #[command(flatten)]
        stack: StackArgs,
    },

    /// Pull the images referenced by the compose file
    Pull {
        #[command(flatten)]
        stack: StackArgs,
    },

    /// Show which declared containers are running
    Status {
        #[command(flatten)]
        stack: StackArgs,
    },
}

impl Commands {
    /// What `deckhand` does without a subcommand
    pub fn default_setup() -> Self {
        Self::Setup {
            overrides: OverrideArgs::default(),
            non_interactive: false,
            no_start: false,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}
