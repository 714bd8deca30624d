// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! The [`DiStructure`] sum type over every structure defined by DI.

use std::io::Read;

use opcua_types::{
    skip_bytes, BinaryDecodable, Context, DynEncodable, EncodingResult, Error, ExtensionObject,
    NodeId, StatusCode,
};

use crate::{
    DataTypeId, FetchResultDataType, IdentifierTable, MessageInfo, ObjectId,
    ParameterResultDataType, TransferResultDataDataType, TransferResultErrorDataType,
    DI_NAMESPACE_URI,
};

/// Wire encodings a DI structure can be carried in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EncodingKind {
    Binary,
    Xml,
    Json,
}

impl EncodingKind {
    /// The encoding identified by `id`, if `id` is the encoding id of a DI structure.
    pub(crate) fn of(id: ObjectId) -> Option<Self> {
        use ObjectId::*;
        match id {
            FetchResultDataType_Encoding_DefaultBinary
            | TransferResultErrorDataType_Encoding_DefaultBinary
            | TransferResultDataDataType_Encoding_DefaultBinary
            | ParameterResultDataType_Encoding_DefaultBinary => Some(Self::Binary),
            FetchResultDataType_Encoding_DefaultXml
            | TransferResultErrorDataType_Encoding_DefaultXml
            | TransferResultDataDataType_Encoding_DefaultXml
            | ParameterResultDataType_Encoding_DefaultXml => Some(Self::Xml),
            FetchResultDataType_Encoding_DefaultJson
            | TransferResultErrorDataType_Encoding_DefaultJson
            | TransferResultDataDataType_Encoding_DefaultJson
            | ParameterResultDataType_Encoding_DefaultJson => Some(Self::Json),
            _ => None,
        }
    }
}

/// Resolve `node_id` to the DI encoding id of the given kind.
fn encoding_id(node_id: &NodeId, kind: EncodingKind, ctx: &Context<'_>) -> EncodingResult<ObjectId> {
    ctx.namespaces()
        .get_index(DI_NAMESPACE_URI)
        .filter(|idx| *idx == node_id.namespace)
        .and_then(|_| node_id.as_u32())
        .and_then(|id| ObjectId::try_from(id).ok())
        .filter(|id| EncodingKind::of(*id) == Some(kind))
        .ok_or_else(|| {
            Error::new(
                StatusCode::BadDataTypeIdUnknown,
                format!("{node_id} is not a DI {kind:?} encoding id"),
            )
        })
}

fn unknown_encoding(encoding: ObjectId, kind: &str) -> Error {
    Error::new(
        StatusCode::BadDataTypeIdUnknown,
        format!(
            "{} ({}) is not a DI {kind} encoding id",
            encoding.name(),
            encoding.id()
        ),
    )
}

/// Any of the structures defined by DI.
///
/// Decoding through this type dispatches on the encoding id at compile time,
/// as opposed to going through the type loaders of a [`Context`].
#[derive(Debug, Clone, PartialEq)]
pub enum DiStructure {
    /// A bare [`FetchResultDataType`].
    FetchResult(FetchResultDataType),
    /// A [`TransferResultErrorDataType`].
    TransferResultError(TransferResultErrorDataType),
    /// A [`TransferResultDataDataType`].
    TransferResultData(TransferResultDataDataType),
    /// A [`ParameterResultDataType`].
    ParameterResult(ParameterResultDataType),
}

impl DiStructure {
    /// Data type of the contained structure.
    pub fn data_type_id(&self) -> DataTypeId {
        match self {
            Self::FetchResult(v) => MessageInfo::data_type_id(v),
            Self::TransferResultError(v) => MessageInfo::data_type_id(v),
            Self::TransferResultData(v) => MessageInfo::data_type_id(v),
            Self::ParameterResult(v) => MessageInfo::data_type_id(v),
        }
    }

    /// Decode the structure whose binary encoding id is `encoding`.
    pub fn decode_binary<S: Read + ?Sized>(
        encoding: ObjectId,
        stream: &mut S,
        ctx: &Context<'_>,
    ) -> EncodingResult<Self> {
        Ok(match encoding {
            ObjectId::FetchResultDataType_Encoding_DefaultBinary => {
                Self::FetchResult(BinaryDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultErrorDataType_Encoding_DefaultBinary => {
                Self::TransferResultError(BinaryDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultDataDataType_Encoding_DefaultBinary => {
                Self::TransferResultData(BinaryDecodable::decode(stream, ctx)?)
            }
            ObjectId::ParameterResultDataType_Encoding_DefaultBinary => {
                Self::ParameterResult(BinaryDecodable::decode(stream, ctx)?)
            }
            r => return Err(unknown_encoding(r, "binary")),
        })
    }

    /// Decode the structure whose XML encoding id is `encoding`. The reader
    /// must be positioned inside the element of the structure.
    #[cfg(feature = "xml")]
    pub fn decode_xml(
        encoding: ObjectId,
        stream: &mut opcua_types::xml::XmlStreamReader<&mut dyn Read>,
        ctx: &Context<'_>,
    ) -> EncodingResult<Self> {
        use opcua_types::xml::XmlDecodable;

        Ok(match encoding {
            ObjectId::FetchResultDataType_Encoding_DefaultXml => {
                Self::FetchResult(XmlDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultErrorDataType_Encoding_DefaultXml => {
                Self::TransferResultError(XmlDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultDataDataType_Encoding_DefaultXml => {
                Self::TransferResultData(XmlDecodable::decode(stream, ctx)?)
            }
            ObjectId::ParameterResultDataType_Encoding_DefaultXml => {
                Self::ParameterResult(XmlDecodable::decode(stream, ctx)?)
            }
            r => return Err(unknown_encoding(r, "XML")),
        })
    }

    /// Decode the structure whose JSON encoding id is `encoding`.
    #[cfg(feature = "json")]
    pub fn decode_json(
        encoding: ObjectId,
        stream: &mut opcua_types::json::JsonStreamReader<&mut dyn Read>,
        ctx: &Context<'_>,
    ) -> EncodingResult<Self> {
        use opcua_types::json::JsonDecodable;

        Ok(match encoding {
            ObjectId::FetchResultDataType_Encoding_DefaultJson => {
                Self::FetchResult(JsonDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultErrorDataType_Encoding_DefaultJson => {
                Self::TransferResultError(JsonDecodable::decode(stream, ctx)?)
            }
            ObjectId::TransferResultDataDataType_Encoding_DefaultJson => {
                Self::TransferResultData(JsonDecodable::decode(stream, ctx)?)
            }
            ObjectId::ParameterResultDataType_Encoding_DefaultJson => {
                Self::ParameterResult(JsonDecodable::decode(stream, ctx)?)
            }
            r => return Err(unknown_encoding(r, "JSON")),
        })
    }

    /// The value of a structure encoded as an empty XML element, where every
    /// field takes its default.
    #[cfg(feature = "xml")]
    fn empty_xml(encoding: ObjectId) -> EncodingResult<Self> {
        Ok(match encoding {
            ObjectId::FetchResultDataType_Encoding_DefaultXml => {
                Self::FetchResult(Default::default())
            }
            ObjectId::TransferResultErrorDataType_Encoding_DefaultXml => {
                Self::TransferResultError(Default::default())
            }
            ObjectId::TransferResultDataDataType_Encoding_DefaultXml => {
                Self::TransferResultData(Default::default())
            }
            ObjectId::ParameterResultDataType_Encoding_DefaultXml => {
                Self::ParameterResult(Default::default())
            }
            r => return Err(unknown_encoding(r, "XML")),
        })
    }

    /// Decode a binary extension object holding a DI structure.
    ///
    /// `FetchResultDataType` has no fields, so its body is zero bytes long.
    /// [`ExtensionObject`] reads any body of length zero as null, while this
    /// only treats a negative length (or the "no body" encoding byte) as
    /// null and returns `None` for it. Bytes of the body left over after the
    /// structure are skipped.
    pub fn decode_binary_extension_object<S: Read + ?Sized>(
        stream: &mut S,
        ctx: &Context<'_>,
    ) -> EncodingResult<Option<Self>> {
        let _depth_lock = ctx.options().depth_lock()?;
        let node_id = <NodeId as BinaryDecodable>::decode(stream, ctx)?;
        let encoding_type = <u8 as BinaryDecodable>::decode(stream, ctx)?;
        match encoding_type {
            0x0 => Ok(None),
            0x1 => {
                let size = <i32 as BinaryDecodable>::decode(stream, ctx)?;
                if size < 0 {
                    return Ok(None);
                }
                let encoding = encoding_id(&node_id, EncodingKind::Binary, ctx)?;
                let mut body = Read::take(&mut *stream, size as u64);
                let value = Self::decode_binary(encoding, &mut body, ctx)?;
                let remaining = body.limit();
                if remaining > 0 {
                    log::debug!("Skipping {remaining} trailing bytes after {encoding:?}");
                    skip_bytes(&mut body, remaining)?;
                }
                Ok(Some(value))
            }
            #[cfg(feature = "xml")]
            0x2 => {
                use opcua_types::{xml::enter_first_tag, xml::XmlStreamReader, UAString};

                let body = <UAString as BinaryDecodable>::decode(stream, ctx)?;
                let Some(body) = body.value() else {
                    return Ok(None);
                };
                let mut cursor = std::io::Cursor::new(body.as_bytes());
                let mut reader = XmlStreamReader::new(&mut cursor as &mut dyn Read);
                if !enter_first_tag(&mut reader)? {
                    return Ok(None);
                }
                let encoding = encoding_id(&node_id, EncodingKind::Xml, ctx)?;
                Self::decode_xml(encoding, &mut reader, ctx).map(Some)
            }
            r => Err(Error::decoding(format!("Invalid encoding type {r} in stream"))),
        }
    }

    /// Decode the XML form of an extension object holding a DI structure.
    /// The reader must be positioned inside the `ExtensionObject` element.
    ///
    /// Unlike [`ExtensionObject`], a structure written as a self-closing
    /// element such as `<FetchResultDataType/>` decodes to the structure
    /// with default fields. A `<ByteString>` body holds the binary encoding.
    /// Returns `None` for an empty body.
    #[cfg(feature = "xml")]
    pub fn decode_xml_extension_object(
        reader: &mut opcua_types::xml::XmlStreamReader<&mut dyn Read>,
        ctx: &Context<'_>,
    ) -> EncodingResult<Option<Self>> {
        use opcua_types::{
            xml::{XmlDecodable, XmlReadExt},
            ByteString,
        };
        use opcua_xml::events::Event;

        let mut type_id: Option<NodeId> = None;
        let mut value = None;
        reader.iter_children(
            |key, reader, ctx| {
                match key.as_str() {
                    "TypeId" => type_id = Some(XmlDecodable::decode(reader, ctx)?),
                    "Body" => {
                        let (name, empty) = loop {
                            match reader.next_event()? {
                                Event::Start(s) => break (s.name().0.to_vec(), false),
                                Event::Empty(s) => break (s.name().0.to_vec(), true),
                                Event::End(_) => return Ok(()),
                                _ => (),
                            }
                        };
                        let Some(type_id) = type_id.take() else {
                            return Err(Error::decoding("Missing type ID in extension object"));
                        };

                        if name == b"ByteString" {
                            let encoding = encoding_id(&type_id, EncodingKind::Binary, ctx)?;
                            if !empty {
                                let bytes: ByteString = XmlDecodable::decode(reader, ctx)?;
                                if let Some(raw) = bytes.value {
                                    let mut raw = raw.as_slice();
                                    value = Some(Self::decode_binary(encoding, &mut raw, ctx)?);
                                }
                            }
                        } else {
                            let encoding = encoding_id(&type_id, EncodingKind::Xml, ctx)?;
                            value = Some(if empty {
                                Self::empty_xml(encoding)?
                            } else {
                                Self::decode_xml(encoding, reader, ctx)?
                            });
                        }
                        reader.skip_value()?;
                    }
                    _ => reader.skip_value()?,
                }
                Ok(())
            },
            ctx,
        )?;
        Ok(value)
    }

    /// Box the contained structure as a [`DynEncodable`].
    pub fn into_dyn(self) -> Box<dyn DynEncodable> {
        match self {
            Self::FetchResult(v) => Box::new(v),
            Self::TransferResultError(v) => Box::new(v),
            Self::TransferResultData(v) => Box::new(v),
            Self::ParameterResult(v) => Box::new(v),
        }
    }

    /// Wrap the contained structure in an extension object.
    pub fn into_extension_object(self) -> ExtensionObject {
        ExtensionObject {
            body: Some(self.into_dyn()),
        }
    }

    /// Take the structure out of an extension object. If the extension
    /// object is null or holds something else, it is returned unchanged.
    pub fn try_from_extension_object(obj: ExtensionObject) -> Result<Self, ExtensionObject> {
        macro_rules! take {
            ($t:ty, $variant:ident) => {
                if obj.inner_is::<$t>() {
                    return obj
                        .into_inner_as::<$t>()
                        .map(|v| Self::$variant(*v))
                        .ok_or_else(ExtensionObject::null);
                }
            };
        }

        take!(FetchResultDataType, FetchResult);
        take!(TransferResultErrorDataType, TransferResultError);
        take!(TransferResultDataDataType, TransferResultData);
        take!(ParameterResultDataType, ParameterResult);
        Err(obj)
    }
}

impl From<FetchResultDataType> for DiStructure {
    fn from(value: FetchResultDataType) -> Self {
        Self::FetchResult(value)
    }
}

impl From<TransferResultErrorDataType> for DiStructure {
    fn from(value: TransferResultErrorDataType) -> Self {
        Self::TransferResultError(value)
    }
}

impl From<TransferResultDataDataType> for DiStructure {
    fn from(value: TransferResultDataDataType) -> Self {
        Self::TransferResultData(value)
    }
}

impl From<ParameterResultDataType> for DiStructure {
    fn from(value: ParameterResultDataType) -> Self {
        Self::ParameterResult(value)
    }
}

impl From<DiStructure> for ExtensionObject {
    fn from(value: DiStructure) -> Self {
        value.into_extension_object()
    }
}

impl TryFrom<ExtensionObject> for DiStructure {
    type Error = ExtensionObject;

    fn try_from(value: ExtensionObject) -> Result<Self, Self::Error> {
        Self::try_from_extension_object(value)
    }
}
