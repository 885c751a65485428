use std::path::Path;
use std::process;

use serde_json::Value;

use super::load_json;
use crate::{report_error, OutputFormat};

/// Validate `document` against the JSON Schema `schema`.
///
/// Returns every validation error message, or an error if the schema
/// itself does not compile.
pub(crate) fn schema_errors(schema: &Value, document: &Value) -> Result<Vec<String>, String> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|e| format!("failed to compile schema: {}", e))?;
    Ok(validator
        .iter_errors(document)
        .map(|e| format!("{}", e))
        .collect())
}

pub(crate) fn cmd_validate(
    document_path: &Path,
    schema_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let Some(schema_path) = schema_path else {
        report_error(
            "no schema given: pass --schema or set schema in the [validate] config section",
            output,
            quiet,
        );
        process::exit(1);
    };

    let schema = load_json(schema_path, output, quiet);
    let doc = load_json(document_path, output, quiet);

    let errors = match schema_errors(&schema, &doc) {
        Ok(errors) => errors,
        Err(e) => {
            report_error(&format!("error in '{}': {}", schema_path.display(), e), output, quiet);
            process::exit(1);
        }
    };

    if errors.is_empty() {
        if !quiet {
            match output {
                OutputFormat::Text => println!("valid"),
                OutputFormat::Json => println!("{{\"valid\": true}}"),
            }
        }
        return;
    }

    report_invalid(&errors, output, quiet);
    process::exit(1);
}

/// Print validation errors to stderr.
pub(crate) fn report_invalid(errors: &[String], output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Text => {
            if !quiet {
                eprintln!("invalid document");
                for err in errors {
                    eprintln!("  - {}", err);
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "valid": false,
                "errors": errors
            });
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
    }
}
