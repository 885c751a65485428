use powercurve_lenses::LensRegistry;
use powercurve_schema::SchemaVersion;

use crate::OutputFormat;

pub(crate) fn cmd_versions(output: OutputFormat, quiet: bool) {
    let registry = LensRegistry::standard();

    match output {
        OutputFormat::Json => {
            let lenses: Vec<serde_json::Value> = registry
                .lenses()
                .iter()
                .map(|lens| {
                    serde_json::json!({
                        "from": lens.from,
                        "to": lens.to,
                        "transforms": lens.transforms,
                    })
                })
                .collect();
            let json = serde_json::json!({
                "current": SchemaVersion::CURRENT,
                "versions": registry.versions(),
                "lenses": lenses,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&json).unwrap_or_default()
            );
        }
        OutputFormat::Text => {
            if quiet {
                return;
            }
            println!("Schema versions:");
            for version in registry.versions() {
                if version == SchemaVersion::CURRENT {
                    println!("  {} (current)", version);
                } else {
                    println!("  {}", version);
                }
            }
            println!();
            println!("Lenses:");
            for lens in registry.lenses() {
                println!("  {} -> {}", lens.from, lens.to);
                for transform in lens.transforms {
                    println!("    - {}", transform);
                }
            }
        }
    }
}
