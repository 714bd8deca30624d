// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`FetchResultDataType`] structure, base of the results returned by
//! `FetchTransferResultData`.

use std::io::{Read, Write};

use opcua_types::{BinaryDecodable, BinaryEncodable, Context, EncodingResult, UaNullable};

use crate::{types::expanded_message_info, DataTypeId, MessageInfo, ObjectId};

/// Abstract base of the results of a parameter transfer. It has no fields of
/// its own, subtypes embed it as `base` and encode it before their own fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FetchResultDataType {}

impl MessageInfo for FetchResultDataType {
    fn type_id(&self) -> ObjectId {
        ObjectId::FetchResultDataType_Encoding_DefaultBinary
    }
    fn json_type_id(&self) -> ObjectId {
        ObjectId::FetchResultDataType_Encoding_DefaultJson
    }
    fn xml_type_id(&self) -> ObjectId {
        ObjectId::FetchResultDataType_Encoding_DefaultXml
    }
    fn data_type_id(&self) -> DataTypeId {
        DataTypeId::FetchResultDataType
    }
}

expanded_message_info!(FetchResultDataType);

impl UaNullable for FetchResultDataType {}

impl BinaryEncodable for FetchResultDataType {
    fn byte_len(&self, _ctx: &Context<'_>) -> usize {
        0
    }

    fn encode<S: Write + ?Sized>(&self, _stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<()> {
        Ok(())
    }
}

impl BinaryDecodable for FetchResultDataType {
    fn decode<S: Read + ?Sized>(_stream: &mut S, _ctx: &Context<'_>) -> EncodingResult<Self> {
        Ok(Self {})
    }
}

#[cfg(feature = "xml")]
mod xml {
    use std::io::{Read, Write};

    use opcua_types::{xml::*, EncodingResult};

    use super::FetchResultDataType;

    impl FetchResultDataType {
        /// Decode a child element belonging to this type. Returns `false` if
        /// the element is not one of its fields.
        pub(crate) fn decode_xml_field(
            &mut self,
            _key: &str,
            _stream: &mut XmlStreamReader<&mut dyn Read>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<bool> {
            Ok(false)
        }
    }

    impl XmlType for FetchResultDataType {
        const TAG: &'static str = "FetchResultDataType";
    }

    impl XmlEncodable for FetchResultDataType {
        fn encode(
            &self,
            _writer: &mut XmlStreamWriter<&mut dyn Write>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            Ok(())
        }
    }

    impl XmlDecodable for FetchResultDataType {
        fn decode(
            read: &mut XmlStreamReader<&mut dyn Read>,
            context: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = FetchResultDataType::default();
            read.iter_children(
                |key, stream, ctx| {
                    if !res.decode_xml_field(&key, stream, ctx)? {
                        log::warn!("Skipping unknown element {key} in FetchResultDataType");
                        stream.skip_value()?;
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

    use opcua_types::{json::*, EncodingResult};

    use super::FetchResultDataType;

    impl FetchResultDataType {
        /// Write the fields of this type into an open JSON object.
        pub(crate) fn encode_json_fields(
            &self,
            _stream: &mut JsonStreamWriter<&mut dyn Write>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            Ok(())
        }

        /// Decode the value of the field `name`. Returns `false` if the
        /// field does not belong to this type, leaving the value unread.
        pub(crate) fn decode_json_field(
            &mut self,
            _name: &str,
            _stream: &mut JsonStreamReader<&mut dyn Read>,
            _ctx: &Context<'_>,
        ) -> EncodingResult<bool> {
            Ok(false)
        }
    }

    impl JsonEncodable for FetchResultDataType {
        fn encode(
            &self,
            stream: &mut JsonStreamWriter<&mut dyn Write>,
            ctx: &Context<'_>,
        ) -> EncodingResult<()> {
            stream.begin_object()?;
            self.encode_json_fields(stream, ctx)?;
            stream.end_object()?;
            Ok(())
        }
    }

    impl JsonDecodable for FetchResultDataType {
        fn decode(
            stream: &mut JsonStreamReader<&mut dyn Read>,
            ctx: &Context<'_>,
        ) -> EncodingResult<Self> {
            let mut res = FetchResultDataType::default();
            stream.begin_object()?;
            while stream.has_next()? {
                let name = stream.next_name_owned()?;
                if !res.decode_json_field(&name, stream, ctx)? {
                    log::warn!("Skipping unknown field {name} in FetchResultDataType");
                    stream.skip_value()?;
                }
            }
            stream.end_object()?;
            Ok(res)
        }
    }
}
