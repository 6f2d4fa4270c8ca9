//! Command-line interface for the configuration parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::config::{CommitMode, ParserOptions};
use crate::error::{format_signature, Result};
use crate::parser::ConfigurationParser;
use crate::registry::{create_default_registry, Access, ClassRegistry};
use crate::sink::Configuration;
use crate::types::ConfigProperty;

/// xconf-parser - Resolve XML configuration files into key/value properties.
#[derive(Parser)]
#[command(name = "xconf-parser")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a configuration file and print the resolved properties.
    Parse {
        /// Path to the XML configuration file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Apply properties as they resolve instead of after the whole file
        #[arg(long)]
        incremental: bool,
    },

    /// List the classes objects can be built from.
    Classes,
}

/// How resolved properties are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name = value` lines
    Text,
    /// YAML list of `{name, value}` entries
    Yaml,
    /// JSON array of `{name, value}` entries
    Json,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let registry = create_default_registry();

    match cli.command {
        Commands::Parse {
            file,
            format,
            incremental,
        } => parse_command(&registry, &file, format, incremental),
        Commands::Classes => {
            print!("{}", describe_classes(&registry));
            Ok(())
        }
    }
}

/// Execute the parse command.
fn parse_command(
    registry: &ClassRegistry,
    file: &Path,
    format: OutputFormat,
    incremental: bool,
) -> Result<()> {
    let commit_mode = if incremental {
        CommitMode::Incremental
    } else {
        CommitMode::Atomic
    };
    let parser = ConfigurationParser::new(registry)
        .with_options(ParserOptions::default().with_commit_mode(commit_mode));

    let mut conf = Configuration::new();
    let count = parser.parse_file(file, &mut conf)?;
    tracing::info!(count, path = %file.display(), "Parsed configuration");

    let properties = conf.into_properties();
    print!("{}", render_properties(&properties, format)?);
    Ok(())
}

/// Render properties in the requested format.
///
/// # Errors
/// Returns `OutputSerialization` if YAML or JSON encoding fails.
pub fn render_properties(properties: &[ConfigProperty], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => properties
            .iter()
            .map(|p| format!("{} = {}\n", style(&p.name).cyan(), p.value))
            .collect(),
        OutputFormat::Yaml => serde_yaml_ng::to_string(properties)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(properties)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

/// List registered classes with their constructor signatures.
#[must_use]
pub fn describe_classes(registry: &ClassRegistry) -> String {
    let mut out = String::new();
    for class in registry.classes() {
        out.push_str(&format!("{}\n", style(class.name()).bold()));
        for constructor in class.constructors() {
            let signature = format_signature(constructor.signature());
            match constructor.access() {
                Access::Public => out.push_str(&format!("  {signature}\n")),
                Access::Private => {
                    out.push_str(&format!("  {signature} {}\n", style("(private)").dim()));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["xconf-parser", "parse", "site.xml"]);

        let Commands::Parse {
            file,
            format,
            incremental,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("site.xml"));
        assert_eq!(format, OutputFormat::Text);
        assert!(!incremental);
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "xconf-parser",
            "parse",
            "site.xml",
            "--format",
            "json",
            "--incremental",
        ]);

        let Commands::Parse {
            format,
            incremental,
            ..
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(format, OutputFormat::Json);
        assert!(incremental);
    }

    #[test]
    fn test_cli_classes() {
        let cli = Cli::parse_from(["xconf-parser", "classes"]);
        assert!(matches!(cli.command, Commands::Classes));
    }

    #[test]
    fn test_render_json_and_yaml() {
        let props = vec![ConfigProperty::new("k", "v")];

        let json = render_properties(&props, OutputFormat::Json).unwrap();
        let parsed: Vec<ConfigProperty> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, props);

        let yaml = render_properties(&props, OutputFormat::Yaml).unwrap();
        let parsed: Vec<ConfigProperty> = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, props);
    }

    #[test]
    fn test_render_text() {
        console::set_colors_enabled(false);
        let props = vec![ConfigProperty::new("a", "1"), ConfigProperty::new("b", "2")];
        assert_eq!(
            render_properties(&props, OutputFormat::Text).unwrap(),
            "a = 1\nb = 2\n"
        );
    }

    #[test]
    fn test_describe_classes() {
        console::set_colors_enabled(false);
        let listing = describe_classes(&create_default_registry());
        assert!(listing.contains("org.apache.hadoop.io.IntWritable\n  ()\n  (int)\n"));
        assert!(listing.contains("org.apache.hadoop.io.NullWritable\n  () (private)\n"));
    }
}
