// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`ParameterResultDataType`] structure.

use std::io::{Read, Write};

use opcua_types::{
    BinaryDecodable, BinaryEncodable, Context, DiagnosticInfo, EncodingResult, QualifiedName,
    StatusCode, UaNullable,
};

use crate::{
    types::{byte_len_vec, expanded_message_info, read_vec, write_vec},
    DataTypeId, MessageInfo, ObjectId,
};

/// Result of the transfer of a single parameter.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ParameterResultDataType {
    /// Browse path from the `ParameterSet` object to the parameter.
    pub node_path: Vec<QualifiedName>,
    /// Status of the transfer of this parameter.
    pub status_code: StatusCode,
    /// Diagnostics for the status code.
    pub diagnostics: DiagnosticInfo,
}

impl MessageInfo for ParameterResultDataType {
    fn type_id(&self) -> ObjectId {
        ObjectId::ParameterResultDataType_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> ObjectId {
        ObjectId::ParameterResultDataType_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> ObjectId {
        ObjectId::ParameterResultDataType_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> DataTypeId {
        DataTypeId::ParameterResultDataType
    }
}

expanded_message_info!(ParameterResultDataType);

impl UaNullable for ParameterResultDataType {}

impl BinaryEncodable for ParameterResultDataType {
    fn byte_len(&self, ctx: &Context<'_>) -> usize {
        let mut size = 0;
        size += byte_len_vec(&self.node_path, ctx);
        size += self.status_code.byte_len(ctx);
        size += self.diagnostics.byte_len(ctx);
        size
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, ctx: &Context<'_>) -> EncodingResult<()> {
        write_vec(stream, &self.node_path, ctx)?;
        self.status_code.encode(stream, ctx)?;
        self.diagnostics.encode(stream, ctx)?;
        Ok(())
    }
}

impl BinaryDecodable for ParameterResultDataType {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        let node_path = read_vec(stream, ctx)?;
        let status_code = StatusCode::decode(stream, ctx)?;
        let diagnostics = DiagnosticInfo::decode(stream, ctx)?;
        Ok(Self {
            node_path,
            status_code,
            diagnostics,
        })
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{Read, Write};

    use opcua_types::{xml::*, EncodingResult};

    use super::ParameterResultDataType;

    impl XmlType for ParameterResultDataType {
        const TAG: &'static str = "ParameterResultDataType";
    }

    impl XmlEncodable for ParameterResultDataType {
        fn encode(
            &self,
            writer: &mut XmlStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            writer.encode_child("NodePath", &self.node_path, ctx)?;
            writer.encode_child("StatusCode", &self.status_code, ctx)?;
            writer.encode_child("Diagnostics", &self.diagnostics, ctx)?;
            Ok(())
        }
    }

    impl XmlDecodable for ParameterResultDataType {
        fn decode(
            read: &mut XmlStreamReader<&mut dyn Read>,
            context: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = ParameterResultDataType::default();
            read.iter_children(
                |key, stream, ctx| {
                    match key.as_str() {
                        "NodePath" => res.node_path = XmlDecodable::decode(stream, ctx)?,
                        "StatusCode" => res.status_code = XmlDecodable::decode(stream, ctx)?,
                        "Diagnostics" => res.diagnostics = XmlDecodable::decode(stream, ctx)?,
                        _ => {
                            log::warn!("Skipping unknown element {key} in ParameterResultDataType");
                            stream.skip_value()?;
                        }
                    }
                    Ok(())
                },
                context,
            )?;
            Ok(res)
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use std::io::{Read, Write};

    use opcua_types::{json::*, EncodingResult, UaNullable};

    use super::ParameterResultDataType;

    impl JsonEncodable for ParameterResultDataType {
        fn encode(
            &self,
            stream: &mut JsonStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            stream.begin_object()?;
            stream.name("NodePath")?;
            JsonEncodable::encode(&self.node_path, stream, ctx)?;
            if !self.status_code.is_ua_null() {
                stream.name("StatusCode")?;
                JsonEncodable::encode(&self.status_code, stream, ctx)?;
            }
            if !self.diagnostics.is_ua_null() {
                stream.name("Diagnostics")?;
                JsonEncodable::encode(&self.diagnostics, stream, ctx)?;
            }
            stream.end_object()?;
            Ok(())
        }
    }

    impl JsonDecodable for ParameterResultDataType {
        fn decode(
            stream: &mut JsonStreamReader<&mut dyn Read>,
            ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut node_path = None;
            let mut status_code = None;
            let mut diagnostics = None;
            stream.begin_object()?;
            while stream.has_next()? {
                match stream.next_name()? {
                    "NodePath" => node_path = Some(JsonDecodable::decode(stream, ctx)?),
                    "StatusCode" => status_code = Some(JsonDecodable::decode(stream, ctx)?),
                    "Diagnostics" => diagnostics = Some(JsonDecodable::decode(stream, ctx)?),
                    _ => stream.skip_value()?,
                }
            }
            stream.end_object()?;

            Ok(Self {
                node_path: node_path.unwrap_or_default(),
                status_code: status_code.unwrap_or_default(),
                diagnostics: diagnostics.unwrap_or_default(),
            })
        }
    }
}
