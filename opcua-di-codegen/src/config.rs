use serde::{Deserialize, Serialize};

use crate::{browse_names::BrowseNameCodeGenTarget, ids::NodeIdCodeGenTarget};

#[derive(Serialize, Deserialize, Debug)]
pub struct CodeGenConfig {
    /// Header prepended to every generated file, after the generator notice.
    #[serde(default)]
    pub extra_header: String,
    pub targets: Vec<CodeGenTarget>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "type")]
pub enum CodeGenTarget {
    #[serde(rename = "ids")]
    Ids(NodeIdCodeGenTarget),
    #[serde(rename = "browse_names")]
    BrowseNames(BrowseNameCodeGenTarget),
}

impl CodeGenTarget {
    pub fn file_path(&self) -> &str {
        match self {
            CodeGenTarget::Ids(t) => &t.file_path,
            CodeGenTarget::BrowseNames(t) => &t.file_path,
        }
    }

    pub fn output_file(&self) -> &str {
        match self {
            CodeGenTarget::Ids(t) => &t.output_file,
            CodeGenTarget::BrowseNames(t) => &t.output_file,
        }
    }

    pub fn extra_header(&self) -> &str {
        match self {
            CodeGenTarget::Ids(t) => &t.extra_header,
            CodeGenTarget::BrowseNames(t) => &t.extra_header,
        }
    }
}
