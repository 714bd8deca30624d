use std::io::Cursor;

use opcua_types::{
    BinaryDecodable, BinaryEncodable, ContextOwned, DiagnosticInfo, QualifiedName, StatusCode,
};

use crate::{
    DeviceHealthEnumeration, DiStructure, FetchResultDataType, ObjectId, ParameterResultDataType,
    SoftwareVersionFileType, TransferResultDataDataType, TransferResultErrorDataType,
    UpdateBehavior,
};

use super::{
    binary_round_trip, decode_binary, di_context, encode_binary, parameter_result,
    transfer_result_data, transfer_result_error,
};

#[test]
fn fetch_result_is_empty() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    assert!(encode_binary(&FetchResultDataType {}, &ctx).is_empty());
    let decoded: FetchResultDataType = decode_binary(&[], &ctx);
    assert_eq!(decoded, FetchResultDataType::default());
}

#[test]
fn round_trips() {
    let ctx = di_context();
    let ctx = ctx.context();
    binary_round_trip(&transfer_result_data(), &ctx);
    binary_round_trip(&transfer_result_error(), &ctx);
    binary_round_trip(&parameter_result("Level", StatusCode::BadOutOfRange), &ctx);
    binary_round_trip(&TransferResultDataDataType::default(), &ctx);
    binary_round_trip(&TransferResultErrorDataType::default(), &ctx);
    binary_round_trip(&ParameterResultDataType::default(), &ctx);
}

#[test]
fn transfer_result_error_layout() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let value = TransferResultErrorDataType {
        status: -2,
        ..Default::default()
    };
    // Status, then an empty diagnostic info mask.
    assert_eq!(
        encode_binary(&value, &ctx),
        vec![0xFE, 0xFF, 0xFF, 0xFF, 0x00]
    );
}

#[test]
fn transfer_result_data_layout() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let value = TransferResultDataDataType {
        end_of_results: true,
        ..Default::default()
    };
    assert_eq!(
        encode_binary(&value, &ctx),
        vec![0, 0, 0, 0, 1, 0, 0, 0, 0]
    );

    let value = TransferResultDataDataType {
        sequence_number: 1,
        parameter_defs: vec![ParameterResultDataType::default()],
        ..Default::default()
    };
    assert_eq!(
        encode_binary(&value, &ctx),
        vec![
            1, 0, 0, 0, // SequenceNumber
            0, // EndOfResults
            1, 0, 0, 0, // ParameterDefs length
            0, 0, 0, 0, // NodePath length
            0, 0, 0, 0, // StatusCode
            0, // Diagnostics
        ]
    );
}

#[test]
fn null_arrays_decode_as_empty() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let decoded: TransferResultDataDataType =
        decode_binary(&[7, 0, 0, 0, 1, 0xFF, 0xFF, 0xFF, 0xFF], &ctx);
    assert_eq!(decoded.sequence_number, 7);
    assert!(decoded.end_of_results);
    assert!(decoded.parameter_defs.is_empty());

    let decoded: ParameterResultDataType =
        decode_binary(&[0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0x3C, 0x80, 0], &ctx);
    assert!(decoded.node_path.is_empty());
    assert_eq!(decoded.status_code, StatusCode::BadOutOfRange);
    assert_eq!(decoded.diagnostics, DiagnosticInfo::null());
}

#[test]
fn node_path_layout() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let value = ParameterResultDataType {
        node_path: vec![QualifiedName::new(2, "Ab")],
        ..Default::default()
    };
    assert_eq!(
        encode_binary(&value, &ctx),
        vec![
            1, 0, 0, 0, // NodePath length
            2, 0, // NamespaceIndex
            2, 0, 0, 0, b'A', b'b', // Name
            0, 0, 0, 0, // StatusCode
            0, // Diagnostics
        ]
    );
}

#[test]
fn truncated_input_fails() {
    let ctx = di_context();
    let ctx = ctx.context();
    let buf = encode_binary(&transfer_result_data(), &ctx);
    for len in [1, 4, 5, buf.len() - 1] {
        let mut stream = Cursor::new(&buf[..len]);
        assert!(
            TransferResultDataDataType::decode(&mut stream, &ctx).is_err(),
            "decoding {len} bytes"
        );
    }
}

#[test]
fn negative_array_length_fails() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let mut stream = Cursor::new(vec![0xFE, 0xFF, 0xFF, 0xFF, 0, 0, 0, 0, 0]);
    let err = ParameterResultDataType::decode(&mut stream, &ctx).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);
}

#[test]
fn enums() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    assert_eq!(
        encode_binary(&DeviceHealthEnumeration::OFF_SPEC, &ctx),
        vec![3, 0, 0, 0]
    );
    binary_round_trip(&DeviceHealthEnumeration::MAINTENANCE_REQUIRED, &ctx);
    binary_round_trip(&SoftwareVersionFileType::Pending, &ctx);

    let mut stream = Cursor::new(vec![5, 0, 0, 0]);
    let err = DeviceHealthEnumeration::decode(&mut stream, &ctx).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);

    let behavior = UpdateBehavior::WillDisconnect | UpdateBehavior::RequiresPowerCycle;
    assert_eq!(encode_binary(&behavior, &ctx), vec![6, 0, 0, 0]);
    let decoded: UpdateBehavior = decode_binary(&[0x13, 0, 0, 0], &ctx);
    assert_eq!(
        decoded,
        UpdateBehavior::KeepsParameters | UpdateBehavior::WillDisconnect
    );
}

#[test]
fn dispatch_by_encoding_id() {
    let ctx = di_context();
    let ctx = ctx.context();
    let value = transfer_result_error();
    let buf = encode_binary(&value, &ctx);

    let decoded = DiStructure::decode_binary(
        ObjectId::TransferResultErrorDataType_Encoding_DefaultBinary,
        &mut Cursor::new(&buf),
        &ctx,
    )
    .unwrap();
    assert_eq!(decoded, DiStructure::TransferResultError(value));
    assert_eq!(
        decoded.data_type_id(),
        crate::DataTypeId::TransferResultErrorDataType
    );

    for id in [
        ObjectId::DeviceSet,
        ObjectId::TransferResultErrorDataType_Encoding_DefaultXml,
        ObjectId::TransferResultErrorDataType_Encoding_DefaultJson,
    ] {
        let err = DiStructure::decode_binary(id, &mut Cursor::new(&buf), &ctx).unwrap_err();
        assert_eq!(err.status(), StatusCode::BadDataTypeIdUnknown);
    }
}

#[test]
fn clones_are_independent() {
    let original = transfer_result_data();
    let mut copy = original.clone();
    assert_eq!(copy, original);
    copy.parameter_defs[0].node_path.push(QualifiedName::new(1, "Extra"));
    copy.sequence_number += 1;
    assert_ne!(copy, original);
    assert_eq!(original.parameter_defs[0].node_path.len(), 2);
    assert_eq!(original.sequence_number, 2);
}

#[test]
fn byte_len_matches_encoding() {
    let ctx = di_context();
    let ctx = ctx.context();
    let value = transfer_result_data();
    let mut buf = Vec::new();
    value.encode(&mut buf, &ctx).unwrap();
    assert_eq!(buf.len(), value.byte_len(&ctx));
}
