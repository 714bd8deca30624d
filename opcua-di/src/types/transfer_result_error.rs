// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`TransferResultErrorDataType`] structure.

use std::io::{Read, Write};

use opcua_types::{
    BinaryDecodable, BinaryEncodable, Context, DiagnosticInfo, EncodingResult, UaNullable,
};

use crate::{
    types::expanded_message_info, DataTypeId, FetchResultDataType, MessageInfo, ObjectId,
};

/// Returned by `FetchTransferResultData` when the transfer failed, or when
/// the requested results are no longer available.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TransferResultErrorDataType {
    /// Fields inherited from [`FetchResultDataType`].
    pub base: FetchResultDataType,
    /// Error code of the transfer. `-1` for an invalid transfer id,
    /// `-2` when the results expired, `-3` for an invalid sequence number.
    pub status: i32,
    /// Diagnostics for the error.
    pub diagnostics: DiagnosticInfo,
}

impl MessageInfo for TransferResultErrorDataType {
    fn type_id(&self) -> ObjectId {
        ObjectId::TransferResultErrorDataType_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> ObjectId {
        ObjectId::TransferResultErrorDataType_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> ObjectId {
        ObjectId::TransferResultErrorDataType_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> DataTypeId {
        DataTypeId::TransferResultErrorDataType
    }
}

expanded_message_info!(TransferResultErrorDataType);

impl UaNullable for TransferResultErrorDataType {}

impl BinaryEncodable for TransferResultErrorDataType {
    fn byte_len(&self, ctx: &Context<'_>) -> usize {
        let mut size = 0;
        size += self.base.byte_len(ctx);
        size += self.status.byte_len(ctx);
        size += self.diagnostics.byte_len(ctx);
        size
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, ctx: &Context<'_>) -> EncodingResult<()> {
        self.base.encode(stream, ctx)?;
        self.status.encode(stream, ctx)?;
        self.diagnostics.encode(stream, ctx)?;
        Ok(())
    }
}

impl BinaryDecodable for TransferResultErrorDataType {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        let base = FetchResultDataType::decode(stream, ctx)?;
        let status = i32::decode(stream, ctx)?;
        let diagnostics = DiagnosticInfo::decode(stream, ctx)?;
        Ok(Self {
            base,
            status,
            diagnostics,
        })
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{Read, Write};

    use opcua_types::{xml::*, EncodingResult};

    use super::TransferResultErrorDataType;

    impl XmlType for TransferResultErrorDataType {
        const TAG: &'static str = "TransferResultErrorDataType";
    }

    impl XmlEncodable for TransferResultErrorDataType {
        fn encode(
            &self,
            writer: &mut XmlStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            XmlEncodable::encode(&self.base, writer, ctx)?;
            writer.encode_child("Status", &self.status, ctx)?;
            writer.encode_child("Diagnostics", &self.diagnostics, ctx)?;
            Ok(())
        }
    }

    impl XmlDecodable for TransferResultErrorDataType {
        fn decode(
            read: &mut XmlStreamReader<&mut dyn Read>,
            context: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = TransferResultErrorDataType::default();
            read.iter_children(
                |key, stream, ctx| {
                    match key.as_str() {
                        "Status" => res.status = XmlDecodable::decode(stream, ctx)?,
                        "Diagnostics" => res.diagnostics = XmlDecodable::decode(stream, ctx)?,
                        _ => {
                            if !res.base.decode_xml_field(&key, stream, ctx)? {
                                log::warn!(
                                    "Skipping unknown element {key} in TransferResultErrorDataType"
                                );
                                stream.skip_value()?;
                            }
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

    use super::TransferResultErrorDataType;

    impl JsonEncodable for TransferResultErrorDataType {
        fn encode(
            &self,
            stream: &mut JsonStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            stream.begin_object()?;
            self.base.encode_json_fields(stream, ctx)?;
            if !self.status.is_ua_null() {
                stream.name("Status")?;
                JsonEncodable::encode(&self.status, stream, ctx)?;
            }
            if !self.diagnostics.is_ua_null() {
                stream.name("Diagnostics")?;
                JsonEncodable::encode(&self.diagnostics, stream, ctx)?;
            }
            stream.end_object()?;
            Ok(())
        }
    }

    impl JsonDecodable for TransferResultErrorDataType {
        fn decode(
            stream: &mut JsonStreamReader<&mut dyn Read>,
            ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = TransferResultErrorDataType::default();
            stream.begin_object()?;
            while stream.has_next()? {
                let name = stream.next_name_owned()?;
                match name.as_str() {
                    "Status" => res.status = JsonDecodable::decode(stream, ctx)?,
                    "Diagnostics" => res.diagnostics = JsonDecodable::decode(stream, ctx)?,
                    _ => {
                        if !res.base.decode_json_field(&name, stream, ctx)? {
                            log::warn!(
                                "Skipping unknown field {name} in TransferResultErrorDataType"
                            );
                            stream.skip_value()?;
                        }
                    }
                }
            }
            stream.end_object()?;
            Ok(res)
        }
    }
}
