mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use commands::migrate::MigrateArgs;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Power curve document migration toolkit.
#[derive(Parser)]
#[command(
    name = "powercurve",
    version,
    about = "Power curve document migration toolkit"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log each lens and transform as it is applied
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Migrate a power curve document to a newer schema version
    Migrate {
        /// Path to the JSON document
        input: PathBuf,
        /// Schema version the document is written against (e.g. alpha-3)
        #[arg(long)]
        from: String,
        /// Schema version to migrate to [default: current version]
        #[arg(long)]
        to: Option<String>,
        /// Write the migrated document here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Validate the migrated document against this JSON Schema
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Value for turbine.power_reference_location when upgrading from alpha-3
        #[arg(long)]
        power_reference_location: Option<String>,
    },

    /// Validate a power curve document against a JSON Schema
    Validate {
        /// Path to the JSON document
        document: PathBuf,
        /// Path to the JSON Schema
        #[arg(long)]
        schema: Option<PathBuf>,
    },

    /// List schema versions and the lenses between them
    Versions,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = match config::load_cli_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e, cli.output, cli.quiet);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate {
            input,
            from,
            to,
            out,
            schema,
            power_reference_location,
        } => {
            let args = MigrateArgs {
                input: &input,
                from: &from,
                to: to.as_deref(),
                out: out.as_deref(),
                schema: schema.as_deref(),
                power_reference_location: power_reference_location.as_deref(),
            };
            commands::migrate::cmd_migrate(&args, &config.migrate, cli.output, cli.quiet);
        }
        Commands::Validate { document, schema } => {
            let schema = schema.or(config.validate.schema);
            commands::validate::cmd_validate(&document, schema.as_deref(), cli.output, cli.quiet);
        }
        Commands::Versions => {
            commands::versions::cmd_versions(cli.output, cli.quiet);
        }
    }
}

/// Install the stderr log subscriber. `--verbose` and `--quiet` take
/// precedence over `RUST_LOG`.
fn init_tracing(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
