// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`TransferResultDataDataType`] structure.

use std::io::{Read, Write};

use opcua_types::{BinaryDecodable, BinaryEncodable, Context, EncodingResult, UaNullable};

use crate::{
    types::{byte_len_vec, expanded_message_info, read_vec, write_vec},
    DataTypeId, FetchResultDataType, MessageInfo, ObjectId, ParameterResultDataType,
};

/// One batch of results from a parameter transfer. Results are fetched in
/// sequence until `end_of_results` is set.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TransferResultDataDataType {
    /// Fields inherited from [`FetchResultDataType`].
    pub base: FetchResultDataType,
    /// Sequence number of this batch, starting at 0.
    pub sequence_number: i32,
    /// `true` if this is the last batch.
    pub end_of_results: bool,
    /// Results of the individual parameters.
    pub parameter_defs: Vec<ParameterResultDataType>,
}

impl MessageInfo for TransferResultDataDataType {
    fn type_id(&self) -> ObjectId {
        ObjectId::TransferResultDataDataType_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> ObjectId {
        ObjectId::TransferResultDataDataType_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> ObjectId {
        ObjectId::TransferResultDataDataType_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> DataTypeId {
        DataTypeId::TransferResultDataDataType
    }
}

expanded_message_info!(TransferResultDataDataType);

impl UaNullable for TransferResultDataDataType {}

impl BinaryEncodable for TransferResultDataDataType {
    fn byte_len(&self, ctx: &Context<'_>) -> usize {
        let mut size = 0;
        size += self.base.byte_len(ctx);
        size += self.sequence_number.byte_len(ctx);
        size += self.end_of_results.byte_len(ctx);
        size += byte_len_vec(&self.parameter_defs, ctx);
        size
    }

    fn encode<S: Write + ?Sized>(&self, stream: &mut S, ctx: &Context<'_>) -> EncodingResult<()> {
        self.base.encode(stream, ctx)?;
        self.sequence_number.encode(stream, ctx)?;
        self.end_of_results.encode(stream, ctx)?;
        write_vec(stream, &self.parameter_defs, ctx)?;
        Ok(())
    }
}

impl BinaryDecodable for TransferResultDataDataType {
    fn decode<S: Read + ?Sized>(stream: &mut S, ctx: &Context<'_>) -> EncodingResult<Self> {
        let base = FetchResultDataType::decode(stream, ctx)?;
        let sequence_number = i32::decode(stream, ctx)?;
        let end_of_results = bool::decode(stream, ctx)?;
        let parameter_defs = read_vec(stream, ctx)?;
        Ok(Self {
            base,
            sequence_number,
            end_of_results,
            parameter_defs,
        })
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{Read, Write};

    use opcua_types::{xml::*, EncodingResult};

    use super::TransferResultDataDataType;

    impl XmlType for TransferResultDataDataType {
        const TAG: &'static str = "TransferResultDataDataType";
    }

    impl XmlEncodable for TransferResultDataDataType {
        fn encode(
            &self,
            writer: &mut XmlStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            XmlEncodable::encode(&self.base, writer, ctx)?;
            writer.encode_child("SequenceNumber", &self.sequence_number, ctx)?;
            writer.encode_child("EndOfResults", &self.end_of_results, ctx)?;
            writer.encode_child("ParameterDefs", &self.parameter_defs, ctx)?;
            Ok(())
        }
    }

    impl XmlDecodable for TransferResultDataDataType {
        fn decode(
            read: &mut XmlStreamReader<&mut dyn Read>,
            context: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = TransferResultDataDataType::default();
            read.iter_children(
                |key, stream, ctx| {
                    match key.as_str() {
                        "SequenceNumber" => {
                            res.sequence_number = XmlDecodable::decode(stream, ctx)?
                        }
                        "EndOfResults" => res.end_of_results = XmlDecodable::decode(stream, ctx)?,
                        "ParameterDefs" => res.parameter_defs = XmlDecodable::decode(stream, ctx)?,
                        _ => {
                            if !res.base.decode_xml_field(&key, stream, ctx)? {
                                log::warn!(
                                    "Skipping unknown element {key} in TransferResultDataDataType"
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

    use super::TransferResultDataDataType;

    impl JsonEncodable for TransferResultDataDataType {
        fn encode(
            &self,
            stream: &mut JsonStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            stream.begin_object()?;
            self.base.encode_json_fields(stream, ctx)?;
            if !self.sequence_number.is_ua_null() {
                stream.name("SequenceNumber")?;
                JsonEncodable::encode(&self.sequence_number, stream, ctx)?;
            }
            if !self.end_of_results.is_ua_null() {
                stream.name("EndOfResults")?;
                JsonEncodable::encode(&self.end_of_results, stream, ctx)?;
            }
            stream.name("ParameterDefs")?;
            JsonEncodable::encode(&self.parameter_defs, stream, ctx)?;
            stream.end_object()?;
            Ok(())
        }
    }

    impl JsonDecodable for TransferResultDataDataType {
        fn decode(
            stream: &mut JsonStreamReader<&mut dyn Read>,
            ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = TransferResultDataDataType::default();
            stream.begin_object()?;
            while stream.has_next()? {
                let name = stream.next_name_owned()?;
                match name.as_str() {
                    "SequenceNumber" => res.sequence_number = JsonDecodable::decode(stream, ctx)?,
                    "EndOfResults" => res.end_of_results = JsonDecodable::decode(stream, ctx)?,
                    "ParameterDefs" => res.parameter_defs = JsonDecodable::decode(stream, ctx)?,
                    _ => {
                        if !res.base.decode_json_field(&name, stream, ctx)? {
                            log::warn!(
                                "Skipping unknown field {name} in TransferResultDataDataType"
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
