mod binary;
mod extension_object;
mod ids;
mod json;

use std::io::Cursor;

use opcua_types::{
    BinaryDecodable, BinaryEncodable, Context, ContextOwned, DecodingOptions, DiagnosticInfo,
    NamespaceMap, QualifiedName, StatusCode, UAString,
};

use crate::{
    register_namespace, FetchResultDataType, ParameterResultDataType, TransferResultDataDataType,
    TransferResultErrorDataType,
};

/// A context with the DI namespace at index 1.
pub(crate) fn di_context() -> ContextOwned {
    let mut ctx = ContextOwned::new_default(NamespaceMap::new(), DecodingOptions::test());
    let index = register_namespace(&mut ctx);
    assert_eq!(index, 1);
    ctx
}

pub(crate) fn diagnostics() -> DiagnosticInfo {
    DiagnosticInfo {
        symbolic_id: Some(3),
        additional_info: Some(UAString::from("value out of range")),
        ..DiagnosticInfo::null()
    }
}

pub(crate) fn parameter_result(name: &str, status_code: StatusCode) -> ParameterResultDataType {
    ParameterResultDataType {
        node_path: vec![
            QualifiedName::new(1, "ParameterSet"),
            QualifiedName::new(1, name),
        ],
        status_code,
        diagnostics: if status_code.is_good() {
            DiagnosticInfo::null()
        } else {
            diagnostics()
        },
    }
}

pub(crate) fn transfer_result_data() -> TransferResultDataDataType {
    TransferResultDataDataType {
        base: FetchResultDataType {},
        sequence_number: 2,
        end_of_results: true,
        parameter_defs: vec![
            parameter_result("Temperature", StatusCode::Good),
            parameter_result("Pressure", StatusCode::BadOutOfRange),
        ],
    }
}

pub(crate) fn transfer_result_error() -> TransferResultErrorDataType {
    TransferResultErrorDataType {
        base: FetchResultDataType {},
        status: -2,
        diagnostics: diagnostics(),
    }
}

pub(crate) fn encode_binary<T: BinaryEncodable>(value: &T, ctx: &Context<'_>) -> Vec<u8> {
    let buf = value.encode_to_vec(ctx);
    assert_eq!(buf.len(), value.byte_len(ctx));
    buf
}

pub(crate) fn decode_binary<T: BinaryDecodable>(buf: &[u8], ctx: &Context<'_>) -> T {
    let mut stream = Cursor::new(buf);
    let value = T::decode(&mut stream, ctx).unwrap();
    assert_eq!(stream.position() as usize, buf.len(), "trailing bytes");
    value
}

pub(crate) fn binary_round_trip<T>(value: &T, ctx: &Context<'_>)
where
    T: BinaryEncodable + BinaryDecodable + PartialEq + std::fmt::Debug,
{
    let buf = encode_binary(value, ctx);
    let decoded: T = decode_binary(&buf, ctx);
    assert_eq!(&decoded, value);
}
