use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::settings::settings_model::{FillStrategy, UserSettings};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "form-autofill",
    version,
    about = "Classify form fields and fill them from a profile or synthetic data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: form-autofill.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill the fields of a captured page snapshot
    Fill {
        /// Page snapshot JSON produced by the extraction script
        #[arg(long)]
        page: String,

        /// Settings file (YAML or JSON); overrides the config file's settings
        #[arg(long)]
        settings: Option<String>,

        /// Only fill fields of this form container
        #[arg(long)]
        form: Option<String>,

        /// Id of the field that triggered the fill
        #[arg(long)]
        trigger: Option<String>,

        /// Select strategy: first, random or matching
        #[arg(long)]
        strategy: Option<FillStrategy>,

        /// Seed for reproducible synthetic values
        #[arg(long)]
        seed: Option<u64>,

        /// Write the filled snapshot to this path
        #[arg(short, long)]
        output: Option<String>,

        /// Append a JSONL trace of every field to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Print the semantic type of every field in a page snapshot
    Classify {
        /// Page snapshot JSON produced by the extraction script
        #[arg(long)]
        page: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `form-autofill.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: UserSettings,

    pub trace: Option<String>,

    pub seed: Option<u64>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("form-autofill.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
            AppConfig::default()
        }),
        Err(_) => AppConfig::default(),
    }
}

/// Tracing filter directive for a `-v` count; `RUST_LOG` takes precedence.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
