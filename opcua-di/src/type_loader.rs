// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Type loader producing DI structures from extension object bodies.

use std::io::Read;

use opcua_types::{
    Context, DynEncodable, EncodingResult, Error, NodeId, TypeLoader, TypeLoaderPriority,
};

use crate::{structures::EncodingKind, DiStructure, ObjectId, DI_NAMESPACE_URI};

/// Type loader for the structures defined by DI. Registered by
/// [`register_namespace`](crate::register_namespace).
#[derive(Debug, Clone, Copy, Default)]
pub struct DiTypeLoader;

impl DiTypeLoader {
    /// Resolve `node_id` to a DI encoding id of the given kind, `None` if it
    /// belongs to another namespace or names something else.
    fn resolve(
        node_id: &NodeId,
        kind: EncodingKind,
        ctx: &Context<'_>,
    ) -> Option<EncodingResult<ObjectId>> {
        let idx = ctx.namespaces().get_index(DI_NAMESPACE_URI)?;
        if idx != node_id.namespace {
            return None;
        }
        let Some(num_id) = node_id.as_u32() else {
            return Some(Err(Error::decoding(
                "Unsupported encoding ID. Only numeric encoding IDs are currently supported",
            )));
        };
        let encoding = ObjectId::try_from(num_id).ok()?;
        if EncodingKind::of(encoding) != Some(kind) {
            return None;
        }
        log::trace!("Loading DI structure {encoding:?} as {kind:?}");
        Some(Ok(encoding))
    }
}

impl TypeLoader for DiTypeLoader {
    #[cfg(feature = "xml")]
    fn load_from_xml(
        &self,
        node_id: &NodeId,
        stream: &mut opcua_types::xml::XmlStreamReader<&mut dyn Read>,
        ctx: &Context<'_>,
    ) -> Option<EncodingResult<Box<dyn DynEncodable>>> {
        let encoding = match Self::resolve(node_id, EncodingKind::Xml, ctx)? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        Some(DiStructure::decode_xml(encoding, stream, ctx).map(DiStructure::into_dyn))
    }

    #[cfg(feature = "json")]
    fn load_from_json(
        &self,
        node_id: &NodeId,
        stream: &mut opcua_types::json::JsonStreamReader<&mut dyn Read>,
        ctx: &Context<'_>,
    ) -> Option<EncodingResult<Box<dyn DynEncodable>>> {
        let encoding = match Self::resolve(node_id, EncodingKind::Json, ctx)? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        Some(DiStructure::decode_json(encoding, stream, ctx).map(DiStructure::into_dyn))
    }

    fn load_from_binary(
        &self,
        node_id: &NodeId,
        stream: &mut dyn Read,
        ctx: &Context<'_>,
    ) -> Option<EncodingResult<Box<dyn DynEncodable>>> {
        let encoding = match Self::resolve(node_id, EncodingKind::Binary, ctx)? {
            Ok(e) => e,
            Err(e) => return Some(Err(e)),
        };
        Some(DiStructure::decode_binary(encoding, stream, ctx).map(DiStructure::into_dyn))
    }

    fn priority(&self) -> TypeLoaderPriority {
        TypeLoaderPriority::Generated
    }
}
