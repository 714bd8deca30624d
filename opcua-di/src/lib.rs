// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

#![warn(missing_docs)]

//! Bindings for the OPC UA Device Integration (DI) companion specification.
//!
//! This crate contains
//!
//!  * Identifier tables for the nodes defined by the DI information model,
//!    see [`DataTypeId`], [`ObjectId`], [`VariableId`] and friends, and the
//!    [`BrowseName`] table.
//!  * The DI structures, [`FetchResultDataType`] and its subtypes, and
//!    [`ParameterResultDataType`], with OPC UA binary, XML (feature `xml`) and
//!    JSON (feature `json`) encodings.
//!  * The DI enumerations and option sets.
//!  * [`DiTypeLoader`], which lets an [`ExtensionObject`](opcua_types::ExtensionObject)
//!    decoder produce DI structures.
//!
//! Node ids in this crate are defined with namespace index 0 and the DI
//! namespace URI. Use [`IdentifierTable::node_id`] to get the id in a specific
//! server's namespace table.

use opcua_types::{ContextOwned, ExpandedNodeId, NamespaceMap, NodeId};

/// URI of the DI namespace.
pub const DI_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/DI/";

/// Namespace of the XML schema for DI structures.
pub const DI_XSD_NAMESPACE_URI: &str = "http://opcfoundation.org/UA/DI/Types.xsd";

#[cfg(feature = "console-logging")]
pub mod console_logging;
mod generated;
mod structures;
mod type_loader;
pub mod types;

pub use generated::*;
pub use structures::DiStructure;
pub use type_loader::DiTypeLoader;
pub use types::*;

/// Common interface of the generated identifier tables.
///
/// Each table is a fieldless enum with one variant per node, where the
/// discriminant is the numeric identifier of the node within its namespace.
pub trait IdentifierTable: Copy + Sized + 'static {
    /// URI of the namespace the identifiers belong to.
    const NAMESPACE_URI: &'static str;

    /// Every entry in the table, in definition order.
    const ALL: &'static [Self];

    /// Numeric identifier of this entry.
    fn id(&self) -> u32;

    /// Symbolic name of this entry.
    fn name(&self) -> &'static str;

    /// The entry as an expanded node id qualified by namespace URI.
    fn expanded_node_id(&self) -> ExpandedNodeId {
        ExpandedNodeId::from((NodeId::new(0, self.id()), Self::NAMESPACE_URI))
    }

    /// The entry as a node id in the given namespace table, or `None` if
    /// the namespace is not registered there.
    fn node_id(&self, namespaces: &NamespaceMap) -> Option<NodeId> {
        namespaces
            .get_index(Self::NAMESPACE_URI)
            .map(|ns| NodeId::new(ns, self.id()))
    }

    /// Look up an entry by numeric identifier.
    fn from_id(id: u32) -> Option<Self> {
        Self::ALL.iter().find(|v| v.id() == id).copied()
    }

    /// Look up an entry by symbolic name.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().find(|v| v.name() == name).copied()
    }
}

/// Add the DI namespace to the context, and register a [`DiTypeLoader`].
/// Returns the namespace index given to DI. If the namespace is already in
/// the namespace map, its index is returned and nothing is added.
pub fn register_namespace(ctx: &mut ContextOwned) -> u16 {
    if let Some(index) = ctx.namespaces().get_index(DI_NAMESPACE_URI) {
        return index;
    }
    let index = ctx.namespaces_mut().add_namespace(DI_NAMESPACE_URI);
    ctx.loaders_mut().add_type_loader(DiTypeLoader);
    log::debug!("Registered namespace {DI_NAMESPACE_URI} at index {index}");
    index
}

#[cfg(test)]
mod tests;
