use std::{fs::File, io::BufReader};

use crate::CodeGenError;
pub use gen::{parse, render, IdItem, CATEGORIES};

mod gen;

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct NodeIdCodeGenTarget {
    pub file_path: String,
    pub output_file: String,
    /// Namespace URI of the identifiers, used in the generated documentation.
    pub namespace_uri: String,
    /// Path to the constant holding the namespace URI in the target crate,
    /// for example `crate::DI_NAMESPACE_URI`.
    pub namespace_const: String,
    /// Category used for CSV files with only two columns.
    pub type_name: Option<String>,
    #[serde(default)]
    pub extra_header: String,
}

pub fn generate_node_ids(
    target: &NodeIdCodeGenTarget,
    root_path: &str,
) -> Result<syn::File, CodeGenError> {
    let file = File::open(format!("{}/{}", root_path, target.file_path))
        .map_err(|e| CodeGenError::io("Failed to open node ID file", e))?;
    let mut data = parse(
        BufReader::new(file),
        &target.file_path,
        target.type_name.as_deref(),
    )?;
    data.sort_by(|a, b| a.name.cmp(&b.name));
    let namespace_const: syn::Path = syn::parse_str(&target.namespace_const)?;
    let mut items = Vec::new();
    for item in data {
        log::debug!(
            "Rendering {} identifiers in category {}",
            item.variants.len(),
            item.name
        );
        items.extend(render(item, &target.namespace_uri, &namespace_const)?);
    }
    Ok(syn::File {
        shebang: None,
        attrs: Vec::new(),
        items,
    })
}
