use std::io::{Cursor, Read, Write};

use serde_json::{json, Value};

use opcua_types::{
    json::{JsonDecodable, JsonEncodable, JsonStreamReader, JsonStreamWriter, JsonWriter},
    Context, ContextOwned, DiagnosticInfo, EncodingResult, QualifiedName, StatusCode,
};

use crate::{
    DeviceHealthEnumeration, DiStructure, FetchResultDataType, ObjectId, ParameterResultDataType,
    SoftwareVersionFileType, TransferResultDataDataType, TransferResultErrorDataType,
    UpdateBehavior,
};

use super::{di_context, parameter_result, transfer_result_data, transfer_result_error};

pub(super) fn from_value<T: JsonDecodable>(v: Value, ctx: &Context<'_>) -> EncodingResult<T> {
    let v = serde_json::to_string(&v).unwrap();
    let stream = &mut v.as_bytes() as &mut dyn Read;
    let mut reader = JsonStreamReader::new(stream);
    T::decode(&mut reader, ctx)
}

pub(super) fn to_value<T: JsonEncodable>(v: &T, ctx: &Context<'_>) -> Value {
    let mut target = Vec::new();
    let mut stream = Cursor::new(&mut target);
    let mut writer = JsonStreamWriter::new(&mut stream as &mut dyn Write);
    v.encode(&mut writer, ctx).unwrap();
    writer.finish_document().unwrap();
    serde_json::from_slice(&target).unwrap()
}

fn json_round_trip<T>(value: &T, ctx: &Context<'_>)
where
    T: JsonDecodable + JsonEncodable + PartialEq + std::fmt::Debug,
{
    let encoded = to_value(value, ctx);
    println!("{encoded}");
    let decoded: T = from_value(encoded, ctx).unwrap();
    assert_eq!(&decoded, value);
}

#[test]
fn round_trips() {
    let ctx = di_context();
    let ctx = ctx.context();
    json_round_trip(&transfer_result_data(), &ctx);
    json_round_trip(&transfer_result_error(), &ctx);
    json_round_trip(&parameter_result("Level", StatusCode::BadOutOfRange), &ctx);
    json_round_trip(&TransferResultDataDataType::default(), &ctx);
    json_round_trip(&TransferResultErrorDataType::default(), &ctx);
    json_round_trip(&ParameterResultDataType::default(), &ctx);
    json_round_trip(&FetchResultDataType {}, &ctx);
}

#[test]
fn transfer_result_error_shape() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let value = TransferResultErrorDataType {
        status: -2,
        ..Default::default()
    };
    assert_eq!(to_value(&value, &ctx), json!({ "Status": -2 }));
    assert_eq!(
        to_value(&TransferResultErrorDataType::default(), &ctx),
        json!({})
    );

    let value = TransferResultErrorDataType {
        status: -1,
        diagnostics: DiagnosticInfo {
            symbolic_id: Some(3),
            ..DiagnosticInfo::null()
        },
        ..Default::default()
    };
    assert_eq!(
        to_value(&value, &ctx),
        json!({ "Status": -1, "Diagnostics": { "SymbolicId": 3 } })
    );
}

#[test]
fn transfer_result_data_shape() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let value = TransferResultDataDataType {
        end_of_results: true,
        ..Default::default()
    };
    assert_eq!(
        to_value(&value, &ctx),
        json!({ "EndOfResults": true, "ParameterDefs": [] })
    );

    let value = TransferResultDataDataType {
        sequence_number: 3,
        parameter_defs: vec![ParameterResultDataType {
            node_path: vec![QualifiedName::new(1, "Temp")],
            status_code: StatusCode::BadOutOfRange,
            ..Default::default()
        }],
        ..Default::default()
    };
    assert_eq!(
        to_value(&value, &ctx),
        json!({
            "SequenceNumber": 3,
            "ParameterDefs": [{
                "NodePath": ["1:Temp"],
                "StatusCode": 2151415808u32
            }]
        })
    );
}

#[test]
fn missing_or_null_collections_decode_as_empty() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let decoded: TransferResultDataDataType =
        from_value(json!({ "SequenceNumber": 5 }), &ctx).unwrap();
    assert_eq!(decoded.sequence_number, 5);
    assert!(decoded.parameter_defs.is_empty());

    let decoded: TransferResultDataDataType =
        from_value(json!({ "EndOfResults": true, "ParameterDefs": null }), &ctx).unwrap();
    assert!(decoded.end_of_results);
    assert!(decoded.parameter_defs.is_empty());

    let decoded: ParameterResultDataType =
        from_value(json!({ "NodePath": null, "StatusCode": null }), &ctx).unwrap();
    assert_eq!(decoded, ParameterResultDataType::default());
}

#[test]
fn unknown_fields_are_skipped() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let decoded: TransferResultErrorDataType = from_value(
        json!({ "Extra": { "Nested": [1, 2] }, "Status": -3, "Other": "x" }),
        &ctx,
    )
    .unwrap();
    assert_eq!(decoded.status, -3);
    assert!(decoded.diagnostics.is_null());

    let decoded: FetchResultDataType = from_value(json!({ "Anything": 1 }), &ctx).unwrap();
    assert_eq!(decoded, FetchResultDataType {});
}

#[test]
fn invalid_values_fail() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    let err = from_value::<TransferResultDataDataType>(json!({ "SequenceNumber": "one" }), &ctx)
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);
    assert!(from_value::<TransferResultDataDataType>(json!([]), &ctx).is_err());
}

#[test]
fn enums() {
    let ctx = ContextOwned::default();
    let ctx = ctx.context();
    assert_eq!(
        to_value(&DeviceHealthEnumeration::OFF_SPEC, &ctx),
        json!(3)
    );
    json_round_trip(&SoftwareVersionFileType::Pending, &ctx);
    assert!(from_value::<DeviceHealthEnumeration>(json!(9), &ctx).is_err());

    let behavior = UpdateBehavior::KeepsParameters | UpdateBehavior::WillReboot;
    assert_eq!(to_value(&behavior, &ctx), json!(9));
    assert_eq!(
        from_value::<UpdateBehavior>(json!(9), &ctx).unwrap(),
        behavior
    );
}

#[test]
fn dispatch_by_encoding_id() {
    let ctx = di_context();
    let ctx = ctx.context();
    let value = transfer_result_error();
    let data = serde_json::to_string(&to_value(&value, &ctx)).unwrap();

    let stream = &mut data.as_bytes() as &mut dyn Read;
    let mut reader = JsonStreamReader::new(stream);
    let decoded = DiStructure::decode_json(
        ObjectId::TransferResultErrorDataType_Encoding_DefaultJson,
        &mut reader,
        &ctx,
    )
    .unwrap();
    assert_eq!(decoded, DiStructure::TransferResultError(value));

    let stream = &mut data.as_bytes() as &mut dyn Read;
    let mut reader = JsonStreamReader::new(stream);
    let err = DiStructure::decode_json(ObjectId::DeviceSet, &mut reader, &ctx).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDataTypeIdUnknown);
}
