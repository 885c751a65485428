//! CLI migrate subcommand.
//!
//! Reads a document, walks it through the lens chain between the declared
//! source version and the target, optionally validates the result against
//! a JSON Schema and writes it out.

use std::path::Path;
use std::process;

use powercurve_lenses::{LensOptions, LensRegistry, Migrator};
use powercurve_schema::SchemaVersion;
use tracing::info;

use super::load_json;
use super::validate::{report_invalid, schema_errors};
use crate::config::MigrateSettings;
use crate::{report_error, OutputFormat};

pub(crate) struct MigrateArgs<'a> {
    pub input: &'a Path,
    pub from: &'a str,
    pub to: Option<&'a str>,
    pub out: Option<&'a Path>,
    pub schema: Option<&'a Path>,
    pub power_reference_location: Option<&'a str>,
}

pub(crate) fn cmd_migrate(
    args: &MigrateArgs<'_>,
    settings: &MigrateSettings,
    output: OutputFormat,
    quiet: bool,
) {
    let from = parse_version(args.from, output, quiet);
    let to = match args.to.or(settings.target.as_deref()) {
        Some(tag) => parse_version(tag, output, quiet),
        None => SchemaVersion::CURRENT,
    };

    let mut options = LensOptions::default();
    if let Some(location) = args
        .power_reference_location
        .or(settings.power_reference_location.as_deref())
    {
        options.power_reference_location = location.to_string();
    }

    let doc = load_json(args.input, output, quiet);

    let migrator = Migrator::new(LensRegistry::standard(), options);
    let migrated = match migrator.migrate_value(doc, from, to) {
        Ok(v) => v,
        Err(e) => {
            let msg = format!("error migrating '{}': {}", args.input.display(), e);
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    };

    if let Some(schema_path) = args.schema.or(settings.schema.as_deref()) {
        let schema = load_json(schema_path, output, quiet);
        match schema_errors(&schema, &migrated) {
            Ok(errors) if errors.is_empty() => {
                info!(schema = %schema_path.display(), "migrated document is valid");
            }
            Ok(errors) => {
                report_invalid(&errors, output, quiet);
                process::exit(1);
            }
            Err(e) => {
                report_error(&format!("error in '{}': {}", schema_path.display(), e), output, quiet);
                process::exit(1);
            }
        }
    }

    let pretty = match serde_json::to_string_pretty(&migrated) {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("serialization error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let Some(out) = args.out else {
        println!("{}", pretty);
        return;
    };

    if let Err(e) = std::fs::write(out, pretty + "\n") {
        let msg = format!("error writing file '{}': {}", out.display(), e);
        report_error(&msg, output, quiet);
        process::exit(1);
    }

    if !quiet {
        match output {
            OutputFormat::Text => {
                println!("migrated {} -> {}: {}", from, to, out.display());
            }
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "from": from,
                    "to": to,
                    "out": out.display().to_string(),
                });
                println!("{}", json);
            }
        }
    }
}

fn parse_version(tag: &str, output: OutputFormat, quiet: bool) -> SchemaVersion {
    match tag.parse() {
        Ok(v) => v,
        Err(e) => {
            let known: Vec<&str> = SchemaVersion::ALL.iter().map(|v| v.as_str()).collect();
            let msg = format!("{} (known versions: {})", e, known.join(", "));
            report_error(&msg, output, quiet);
            process::exit(1);
        }
    }
}
