//! Config command implementation.
//!
//! Manages persisted CLI defaults.

use anyhow::Result;
use clap::{Args, Subcommand};
use daycount_core::Convention;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_info, print_success, print_warning, KeyValue};

/// Largest accepted `decimal_precision`.
const MAX_PRECISION: usize = 16;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long)]
    pub all: bool,

    /// Specific key to reset (optional)
    pub key: Option<String>,
}

/// CLI configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Default day count convention
    DefaultConvention,
    /// Default output format
    DefaultFormat,
    /// Precision for year fraction output
    DecimalPrecision,
}

impl ConfigKey {
    fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "default_convention" | "convention" => Some(Self::DefaultConvention),
            "default_format" | "format" => Some(Self::DefaultFormat),
            "decimal_precision" | "precision" => Some(Self::DecimalPrecision),
            _ => None,
        }
    }

    fn parse(s: &str) -> CliResult<Self> {
        Self::from_str(s).ok_or_else(|| CliError::Config(format!("Unknown configuration key: {s}")))
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::DefaultConvention => "default_convention",
            Self::DefaultFormat => "default_format",
            Self::DecimalPrecision => "decimal_precision",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Self::DefaultConvention => "Default day count convention (see `daycount conventions`)",
            Self::DefaultFormat => "Default output format (table, json, csv, minimal)",
            Self::DecimalPrecision => "Number of decimal places for year fractions (0-16)",
        }
    }

    fn default_value(&self) -> &'static str {
        match self {
            Self::DefaultConvention => "ActualActual",
            Self::DefaultFormat => "table",
            Self::DecimalPrecision => "10",
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::DefaultConvention,
            Self::DefaultFormat,
            Self::DecimalPrecision,
        ]
    }
}

/// Effective defaults after applying the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub convention: Convention,
    pub format: OutputFormat,
    pub precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            convention: Convention::ActualActual,
            format: OutputFormat::Table,
            precision: 10,
        }
    }
}

/// Simple config storage.
///
/// Values are kept as raw JSON so a hand-edited number or boolean loads
/// and is ignored rather than failing the whole file.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(flatten)]
    values: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Loads the config file, or an empty config if it does not exist yet.
    pub fn load(path: &Path) -> CliResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(serde_json::Value::as_str)
    }

    fn set(&mut self, key: String, value: String) {
        self.values.insert(key, serde_json::Value::String(value));
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }

    fn value_or_default(&self, key: ConfigKey) -> &str {
        self.get(key.as_str()).unwrap_or(key.default_value())
    }

    /// Resolves stored values into typed settings.
    ///
    /// Values edited into an invalid state by hand are ignored with a warning.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();

        for key in ConfigKey::all() {
            let Some(raw) = self.values.get(key.as_str()) else {
                continue;
            };
            let Some(value) = raw.as_str() else {
                tracing::warn!(key = key.as_str(), %raw, "ignoring non-string config value");
                continue;
            };
            let applied = match key {
                ConfigKey::DefaultConvention => parse_convention(value)
                    .map(|convention| settings.convention = convention),
                ConfigKey::DefaultFormat => {
                    parse_format(value).map(|format| settings.format = format)
                }
                ConfigKey::DecimalPrecision => {
                    parse_precision(value).map(|precision| settings.precision = precision)
                }
            };
            if let Err(err) = applied {
                tracing::warn!(key = key.as_str(), %value, %err, "ignoring invalid config value");
            }
        }

        settings
    }
}

/// Get the default config file path.
pub fn default_config_path() -> CliResult<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or_else(|| CliError::Config("Could not determine config directory".to_string()))?;
    Ok(home.join("daycount").join("config.json"))
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, format: OutputFormat, path: &Path) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(format, path),
        ConfigCommand::Get(get_args) => execute_get(get_args, format, path),
        ConfigCommand::Set(set_args) => execute_set(set_args, path),
        ConfigCommand::List => execute_list(format),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, path),
        ConfigCommand::Path => execute_path(path),
    }
}

/// Show current configuration.
fn execute_show(format: OutputFormat, path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    let results: Vec<KeyValue> = ConfigKey::all()
        .iter()
        .map(|key| KeyValue::new(key.as_str(), config.value_or_default(*key)))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Current Configuration");
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: HashMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), config.value_or_default(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Minimal => {
            for kv in &results {
                println!("{}={}", kv.key, kv.value);
            }
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: GetArgs, format: OutputFormat, path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let key = ConfigKey::parse(&args.key)?;
    let value = config.value_or_default(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, path: &Path) -> Result<()> {
    let key = ConfigKey::parse(&args.key)?;
    let value = normalize_config_value(key, &args.value)?;

    let mut config = Config::load(path)?;
    config.set(key.as_str().to_string(), value.clone());
    config.save(path)?;

    print_success(&format!("Set {} = {}", key.as_str(), value));
    Ok(())
}

/// List available configuration keys.
fn execute_list(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if format == OutputFormat::Table {
                print_header("Available Configuration Keys");
            }
            crate::output::print_output(&results, format)?;
        }
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, path: &Path) -> Result<()> {
    if args.all {
        // Overwrites without reading, so an unreadable file can always be reset
        Config::default().save(path)?;
        print_success("Reset all configuration to defaults");
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        let mut config = Config::load(path)?;
        config.remove(key.as_str());
        config.save(path)?;
        print_success(&format!(
            "Reset {} to default ({})",
            key.as_str(),
            key.default_value()
        ));
    } else {
        print_warning("Use --all to reset all settings, or specify a key to reset");
    }

    Ok(())
}

/// Show configuration file path.
fn execute_path(path: &Path) -> Result<()> {
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn parse_convention(value: &str) -> CliResult<Convention> {
    Ok(value.parse::<Convention>()?)
}

fn parse_format(value: &str) -> CliResult<OutputFormat> {
    OutputFormat::from_name(value).ok_or_else(|| {
        CliError::Config(format!(
            "Invalid format: {value}. Use table, json, csv, or minimal."
        ))
    })
}

fn parse_precision(value: &str) -> CliResult<usize> {
    match value.parse::<usize>() {
        Ok(precision) if precision <= MAX_PRECISION => Ok(precision),
        _ => Err(CliError::Config(format!(
            "Invalid precision: {value}. Use a whole number from 0 to {MAX_PRECISION}."
        ))),
    }
}

/// Validates a value and returns the form it is stored in.
fn normalize_config_value(key: ConfigKey, value: &str) -> CliResult<String> {
    match key {
        ConfigKey::DefaultConvention => Ok(parse_convention(value)?.name().to_string()),
        ConfigKey::DefaultFormat => Ok(parse_format(value)?.name().to_string()),
        ConfigKey::DecimalPrecision => Ok(parse_precision(value)?.to_string()),
    }
}
