//! CLI command implementations

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::CliConfig;
use crate::lexicon_source::LexiconSource;
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, Record, TextFormatter};

pub mod batch;
pub mod datetime;
pub mod gender;
pub mod generate_config;
pub mod normalize;
pub mod number;
pub mod validate;

/// Spanish number, date/time and gender parsing
#[derive(Debug, Parser)]
#[command(name = "hablar", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// CLI settings file
    #[arg(long, global = true, value_name = "FILE", env = "HABLAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Embedded lexicon to use (e.g. es, spanish)
    #[arg(short = 'l', long, global = true, value_name = "CODE")]
    pub language: Option<String>,

    /// External lexicon file, overrides --language
    #[arg(long, global = true, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Initialize logging based on verbosity
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second init (as in tests) is harmless
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Read the number written in a phrase
    Number(number::NumberArgs),

    /// Rewrite number words as digits
    Normalize(normalize::NormalizeArgs),

    /// Extract a date and time from a phrase
    Datetime(datetime::DatetimeArgs),

    /// Guess the grammatical gender of a noun
    Gender(gender::GenderArgs),

    /// Process files line by line
    Batch(batch::BatchArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded lexicons
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages => {
                println!("Available languages:");
                for code in hablar_core::list_available_languages() {
                    let lexicon = hablar_core::get_lexicon(code)?;
                    println!("  {:<6} {}", code, lexicon.name());
                }
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  text   One result per line, '-' when nothing was found");
                println!("  json   JSON array of results with their input");
            }
        }
        Ok(())
    }
}

impl Cli {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        self.global.init_logging();

        match &self.command {
            Commands::Number(args) => args.execute(&Session::new(&self.global)?),
            Commands::Normalize(args) => args.execute(&Session::new(&self.global)?),
            Commands::Datetime(args) => args.execute(&Session::new(&self.global)?),
            Commands::Gender(args) => args.execute(&Session::new(&self.global)?),
            Commands::Batch(args) => args.execute(&Session::new(&self.global)?),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Settings resolved from flags over the config file
#[derive(Debug)]
pub struct Session {
    pub config: CliConfig,
    pub source: LexiconSource,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Session {
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let config = CliConfig::load(global.config.as_deref())?;

        let source = match (&global.lexicon, &global.language) {
            (Some(path), _) => LexiconSource::External(path.clone()),
            (None, Some(code)) => LexiconSource::Embedded(code.clone()),
            (None, None) => LexiconSource::Embedded(config.processing.default_language.clone()),
        };

        let format = match global.format {
            Some(format) => format,
            None => config.default_format()?,
        };

        Ok(Self {
            config,
            source,
            format,
            quiet: global.quiet,
        })
    }

    /// Parser over the selected lexicon
    pub fn parser(&self) -> Result<hablar_core::Parser> {
        Ok(hablar_core::Parser::from_lexicon(self.source.load()?))
    }

    /// Formatter writing to `output`, or stdout
    pub fn formatter(&self, output: Option<&Path>) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                writer,
                self.config.output.pretty_json,
            )),
        };
        Ok(formatter)
    }

    /// Write records through the configured formatter
    pub fn emit(&self, records: &[Record], output: Option<&Path>) -> Result<()> {
        let mut formatter = self.formatter(output)?;
        for record in records {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hablar", "number", "dos", "mil", "-f", "json", "-vv"])
            .unwrap();
        assert_eq!(cli.global.format, Some(OutputFormat::Json));
        assert_eq!(cli.global.verbose, 2);
        match cli.command {
            Commands::Number(args) => assert_eq!(args.text, vec!["dos", "mil"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_list_commands_parse() {
        let cli = Cli::try_parse_from(["hablar", "list", "formats"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                subcommand: ListCommands::Formats
            }
        ));
    }

    #[test]
    fn test_session_defaults() {
        let session = Session::new(&GlobalArgs::default()).unwrap();
        assert_eq!(session.source, LexiconSource::Embedded("es".to_string()));
        assert_eq!(session.format, OutputFormat::Text);
    }

    #[test]
    fn test_lexicon_file_wins_over_language() {
        let global = GlobalArgs {
            language: Some("es".to_string()),
            lexicon: Some(PathBuf::from("custom.toml")),
            ..GlobalArgs::default()
        };
        let session = Session::new(&global).unwrap();
        assert_eq!(
            session.source,
            LexiconSource::External(PathBuf::from("custom.toml"))
        );
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["hablar", "process"]).is_err());
    }
}
