// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Data types defined by the DI information model.

mod enums;
mod fetch_result;
mod parameter_result;
mod transfer_result_data;
mod transfer_result_error;

pub use enums::{DeviceHealthEnumeration, SoftwareVersionFileType, UpdateBehavior};
pub use fetch_result::FetchResultDataType;
pub use parameter_result::ParameterResultDataType;
pub use transfer_result_data::TransferResultDataDataType;
pub use transfer_result_error::TransferResultErrorDataType;

use std::io::{Read, Write};

use opcua_types::{write_i32, BinaryDecodable, BinaryEncodable, Context, EncodingResult};

use crate::{DataTypeId, ObjectId};

/// Encoding and data type ids of a DI structure, within the DI namespace.
pub trait MessageInfo {
    /// The binary encoding id.
    fn type_id(&self) -> ObjectId;
    /// The JSON encoding id.
    fn json_type_id(&self) -> ObjectId;
    /// The XML encoding id.
    fn xml_type_id(&self) -> ObjectId;
    /// The data type id.
    fn data_type_id(&self) -> DataTypeId;
}

// Qualifies the ids from `MessageInfo` with the DI namespace URI.
macro_rules! expanded_message_info {
    ($t:ty) => {
        impl opcua_types::ExpandedMessageInfo for $t {
            fn full_type_id(&self) -> opcua_types::ExpandedNodeId {
                crate::MessageInfo::type_id(self).into()
            }

            fn full_json_type_id(&self) -> opcua_types::ExpandedNodeId {
                crate::MessageInfo::json_type_id(self).into()
            }

            fn full_xml_type_id(&self) -> opcua_types::ExpandedNodeId {
                crate::MessageInfo::xml_type_id(self).into()
            }

            fn full_data_type_id(&self) -> opcua_types::ExpandedNodeId {
                crate::MessageInfo::data_type_id(self).into()
            }
        }
    };
}

pub(crate) use expanded_message_info;

// Array fields of DI structures are plain `Vec`s. A null array (length -1)
// decodes as an empty one.
pub(crate) fn byte_len_vec<T: BinaryEncodable>(values: &[T], ctx: &Context<'_>) -> usize {
    4 + values.iter().map(|v| v.byte_len(ctx)).sum::<usize>()
}

pub(crate) fn write_vec<T: BinaryEncodable, S: Write + ?Sized>(
    stream: &mut S,
    values: &[T],
    ctx: &Context<'_>,
) -> EncodingResult<()> {
    write_i32(stream, values.len() as i32)?;
    for value in values {
        value.encode(stream, ctx)?;
    }
    Ok(())
}

pub(crate) fn read_vec<T: BinaryDecodable, S: Read + ?Sized>(
    stream: &mut S,
    ctx: &Context<'_>,
) -> EncodingResult<Vec<T>> {
    Ok(<Option<Vec<T>> as BinaryDecodable>::decode(stream, ctx)?.unwrap_or_default())
}
