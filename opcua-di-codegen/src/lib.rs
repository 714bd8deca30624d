//! Code generator for the identifier tables of OPC UA companion models.
//!
//! Reads `NodeIds.csv` style files and browse name lists, and writes Rust
//! modules with one enum per node class.

mod browse_names;
mod config;
mod error;
mod ids;
mod utils;

use std::{fs::File, io::Write};

pub use browse_names::{generate_browse_names, BrowseNameCodeGenTarget};
pub use config::{CodeGenConfig, CodeGenTarget};
pub use error::{CodeGenError, CodeGenErrorKind};
pub use ids::{generate_node_ids, NodeIdCodeGenTarget};

/// Notice written at the top of every generated file.
pub fn generated_notice(source: &str) -> String {
    format!(
        "// This file was autogenerated from {source} by opcua-di-codegen\n//\n// DO NOT EDIT THIS FILE\n"
    )
}

/// Format `file` and write it to `path`, after the generator notice and
/// the configured headers.
pub fn write_to_file(
    file: &syn::File,
    path: &str,
    source: &str,
    headers: &[&str],
) -> Result<(), CodeGenError> {
    let mut out = generated_notice(source);
    for header in headers.iter().filter(|h| !h.is_empty()) {
        out.push('\n');
        out.push_str(header.trim_end());
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&prettyplease::unparse(file));

    let mut target = File::create(path)
        .map_err(|e| CodeGenError::io("Failed to create output file", e).in_file(path))?;
    target
        .write_all(out.as_bytes())
        .map_err(|e| CodeGenError::io("Failed to write output file", e).in_file(path))?;
    Ok(())
}

/// Run every target in `config`. Paths in the config are relative to `root_path`.
pub fn run_codegen(config: &CodeGenConfig, root_path: &str) -> Result<(), CodeGenError> {
    for target in &config.targets {
        log::info!(
            "Generating {} from {}",
            target.output_file(),
            target.file_path()
        );
        let file = match target {
            CodeGenTarget::Ids(t) => generate_node_ids(t, root_path),
            CodeGenTarget::BrowseNames(t) => generate_browse_names(t, root_path),
        }
        .map_err(|e| e.in_file(target.file_path()))?;

        let output = format!("{}/{}", root_path, target.output_file());
        write_to_file(
            &file,
            &output,
            target.file_path(),
            &[&config.extra_header, target.extra_header()],
        )?;
        log::info!("Wrote {} items to {}", file.items.len(), output);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{CodeGenConfig, CodeGenTarget};

    #[test]
    fn parse_config() {
        let config: CodeGenConfig = serde_yaml::from_str(
            r#"
extra_header: |
  // OPCUA for Rust
targets:
  - type: ids
    file_path: schemas/NodeIds.csv
    output_file: opcua-di/src/generated/node_ids.rs
    namespace_uri: http://opcfoundation.org/UA/DI/
    namespace_const: crate::DI_NAMESPACE_URI
  - type: browse_names
    file_path: schemas/BrowseNames.csv
    output_file: opcua-di/src/generated/browse_names.rs
"#,
        )
        .unwrap();
        assert_eq!(config.targets.len(), 2);
        assert!(config.extra_header.starts_with("// OPCUA for Rust"));
        let CodeGenTarget::Ids(ids) = &config.targets[0] else {
            panic!("Expected an ids target");
        };
        assert_eq!(ids.namespace_const, "crate::DI_NAMESPACE_URI");
        assert!(ids.type_name.is_none());
        assert_eq!(config.targets[1].file_path(), "schemas/BrowseNames.csv");
    }

    #[test]
    fn notice() {
        assert!(crate::generated_notice("schemas/NodeIds.csv")
            .starts_with("// This file was autogenerated from schemas/NodeIds.csv"));
    }
}
