use std::io::Cursor;

use serde_json::json;

use opcua_types::{
    xml::{enter_first_tag, XmlStreamReader},
    BinaryDecodable, BinaryEncodable, ByteString, ContextOwned, ExpandedNodeId, ExtensionObject,
    NodeId, StatusCode,
};

use crate::{
    register_namespace, DataTypeId, DiStructure, FetchResultDataType, IdentifierTable, ObjectId,
    ParameterResultDataType, TransferResultDataDataType, TransferResultErrorDataType,
    DI_NAMESPACE_URI,
};

use super::{
    di_context, json::from_value, json::to_value, parameter_result, transfer_result_data,
    transfer_result_error, xml::from_xml_str, xml::to_xml_str,
};

#[test]
fn register_namespace_is_idempotent() {
    let mut ctx = ContextOwned::default();
    ctx.namespaces_mut().add_namespace("urn:vendor:model");
    let index = register_namespace(&mut ctx);
    assert_eq!(index, 2);
    assert_eq!(register_namespace(&mut ctx), 2);
    assert_eq!(ctx.namespaces().get_index(DI_NAMESPACE_URI), Some(2));
    // The core loader plus ours.
    assert_eq!(ctx.loaders_mut().iter().count(), 2);
}

#[test]
fn binary_round_trip() {
    let ctx = di_context();
    let ctx = ctx.context();
    let obj = ExtensionObject::from_message(transfer_result_data());
    let buf = obj.encode_to_vec(&ctx);
    assert_eq!(buf.len(), obj.byte_len(&ctx));
    // Four byte node id, namespace 1, TransferResultDataDataType_Encoding_DefaultBinary.
    assert_eq!(&buf[..5], &[0x01, 0x01, 0x14, 0x3E, 0x01]);

    let decoded = ExtensionObject::decode(&mut Cursor::new(&buf), &ctx).unwrap();
    assert_eq!(decoded, obj);
    assert_eq!(
        decoded.inner_as::<TransferResultDataDataType>(),
        Some(&transfer_result_data())
    );
}

#[test]
fn binary_round_trip_each_type() {
    let ctx = di_context();
    let ctx = ctx.context();
    let values: Vec<DiStructure> = vec![
        FetchResultDataType {}.into(),
        transfer_result_error().into(),
        transfer_result_data().into(),
        parameter_result("Flow", StatusCode::Good).into(),
    ];
    for value in values {
        let buf = value.clone().into_extension_object().encode_to_vec(&ctx);
        let mut stream = Cursor::new(&buf);
        let decoded = DiStructure::decode_binary_extension_object(&mut stream, &ctx).unwrap();
        assert_eq!(decoded, Some(value));
        assert_eq!(stream.position() as usize, buf.len());
    }
}

#[test]
fn empty_binary_body() {
    let ctx = di_context();
    let ctx = ctx.context();
    let buf = ExtensionObject::new(FetchResultDataType {}).encode_to_vec(&ctx);
    // FetchResultDataType_Encoding_DefaultBinary, a body follows, zero bytes long.
    assert_eq!(buf, vec![0x01, 0x01, 0x97, 0x19, 0x01, 0x00, 0x00, 0x00, 0x00]);

    let decoded = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &ctx);
    assert_eq!(
        decoded.unwrap(),
        Some(DiStructure::FetchResult(FetchResultDataType {}))
    );
    // The generic decoder reads a zero length body as null.
    let generic = ExtensionObject::decode(&mut Cursor::new(&buf), &ctx).unwrap();
    assert!(generic.is_null());
}

#[test]
fn null_binary_bodies() {
    let ctx = di_context();
    let ctx = ctx.context();
    // Body length -1.
    let buf = [0x01, 0x01, 0x97, 0x19, 0x01, 0xFF, 0xFF, 0xFF, 0xFF];
    let decoded = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &ctx);
    assert_eq!(decoded.unwrap(), None);

    // No body at all.
    let buf = [0x01, 0x01, 0x97, 0x19, 0x00];
    let decoded = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &ctx);
    assert_eq!(decoded.unwrap(), None);

    let buf = [0x01, 0x01, 0x97, 0x19, 0x07];
    let err = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &ctx);
    assert_eq!(err.unwrap_err().status(), StatusCode::BadDecodingError);
}

#[test]
fn trailing_body_bytes_are_skipped() {
    let ctx = di_context();
    let ctx = ctx.context();
    // A two byte body for a structure without fields, then one more byte.
    let buf = [0x01, 0x01, 0x97, 0x19, 0x01, 0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB, 0xCC];
    let mut stream = Cursor::new(&buf);
    let decoded = DiStructure::decode_binary_extension_object(&mut stream, &ctx).unwrap();
    assert_eq!(decoded, Some(DiStructure::FetchResult(FetchResultDataType {})));
    assert_eq!(stream.position(), 11);

    // The data type id is not an encoding id.
    let buf = [0x01, 0x01, 0x7A, 0x19, 0x01, 0x00, 0x00, 0x00, 0x00];
    let err = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &ctx);
    assert_eq!(err.unwrap_err().status(), StatusCode::BadDataTypeIdUnknown);
}

#[test]
fn xml_round_trip() {
    let ctx = di_context();
    let ctx = ctx.context();
    let obj = ExtensionObject::from_message(transfer_result_error());
    let encoded = to_xml_str(&obj, &ctx);
    assert!(encoded.starts_with(concat!(
        "<TypeId><Identifier>ns=1;i=15900</Identifier></TypeId>",
        "<Body><TransferResultErrorDataType>"
    )));

    let decoded: ExtensionObject = from_xml_str(&encoded, &ctx).unwrap();
    assert_eq!(decoded, obj);
    assert!(decoded.inner_is::<TransferResultErrorDataType>());
}

#[test]
fn xml_from_document() {
    let ctx = di_context();
    let ctx = ctx.context();
    let decoded: ExtensionObject = from_xml_str(
        r#"
        <TypeId><Identifier>ns=1;i=15901</Identifier></TypeId>
        <Body>
            <TransferResultDataDataType xmlns="http://opcfoundation.org/UA/DI/Types.xsd">
                <SequenceNumber>0</SequenceNumber>
                <EndOfResults>true</EndOfResults>
            </TransferResultDataDataType>
        </Body>
        "#,
        &ctx,
    )
    .unwrap();
    let value = decoded
        .into_inner_as::<TransferResultDataDataType>()
        .unwrap();
    assert!(value.end_of_results);
    assert!(value.parameter_defs.is_empty());
}

fn decode_xml_body(body: &str, ctx: &ContextOwned) -> Option<DiStructure> {
    let doc = format!("<ExtensionObject>{body}</ExtensionObject>");
    let mut cursor = Cursor::new(doc.as_bytes());
    let mut reader = XmlStreamReader::new(&mut cursor as &mut dyn std::io::Read);
    assert!(enter_first_tag(&mut reader).unwrap());
    DiStructure::decode_xml_extension_object(&mut reader, &ctx.context()).unwrap()
}

#[test]
fn self_closing_xml_body() {
    let ctx = di_context();
    let decoded = decode_xml_body(
        concat!(
            "<TypeId><Identifier>ns=1;i=6535</Identifier></TypeId>",
            "<Body><FetchResultDataType xmlns=\"http://opcfoundation.org/UA/DI/Types.xsd\"/></Body>"
        ),
        &ctx,
    );
    assert_eq!(decoded, Some(DiStructure::FetchResult(FetchResultDataType {})));

    // Missing fields take their defaults.
    let decoded = decode_xml_body(
        concat!(
            "<TypeId><Identifier>ns=1;i=15900</Identifier></TypeId>",
            "<Body><TransferResultErrorDataType/></Body>"
        ),
        &ctx,
    );
    assert_eq!(
        decoded,
        Some(DiStructure::TransferResultError(
            TransferResultErrorDataType::default()
        ))
    );

    let decoded = decode_xml_body(
        "<TypeId><Identifier>ns=1;i=6535</Identifier></TypeId><Body></Body>",
        &ctx,
    );
    assert_eq!(decoded, None);
}

#[test]
fn xml_byte_string_body() {
    let ctx = di_context();
    let body = ByteString::from(vec![0, 0, 0, 0, 1, 0, 0, 0, 0]);
    assert_eq!(body.as_base64(), "AAAAAAEAAAAA");
    let doc = format!(
        concat!(
            "<TypeId><Identifier>ns=1;i=15892</Identifier></TypeId>",
            "<Body><ByteString>{}</ByteString></Body>"
        ),
        body.as_base64()
    );
    let expected = TransferResultDataDataType {
        end_of_results: true,
        ..Default::default()
    };

    let decoded: ExtensionObject = from_xml_str(&doc, &ctx.context()).unwrap();
    assert_eq!(
        decoded.inner_as::<TransferResultDataDataType>(),
        Some(&expected)
    );
    assert_eq!(
        decode_xml_body(&doc, &ctx),
        Some(DiStructure::TransferResultData(expected))
    );
}

#[test]
fn json_round_trip() {
    let ctx = di_context();
    let ctx = ctx.context();
    let obj = ExtensionObject::from_message(ParameterResultDataType::default());
    let encoded = to_value(&obj, &ctx);
    assert_eq!(
        encoded,
        json!({
            "UaTypeId": { "Id": 15912, "Namespace": 1 },
            "UaBody": { "NodePath": [] }
        })
    );

    let obj = ExtensionObject::from_message(transfer_result_data());
    let decoded: ExtensionObject = from_value(to_value(&obj, &ctx), &ctx).unwrap();
    assert_eq!(decoded, obj);
}

#[test]
fn encodings_are_not_interchangeable() {
    let ctx = di_context();
    let ctx = ctx.context();
    // A JSON body tagged with the binary encoding id is not a DI JSON
    // encoding, so no type loader picks it up.
    let err = from_value::<ExtensionObject>(
        json!({
            "UaTypeId": { "Id": 15892, "Namespace": 1 },
            "UaBody": { "EndOfResults": true }
        }),
        &ctx,
    )
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);
}

#[test]
fn json_binary_body() {
    let ctx = di_context();
    let ctx = ctx.context();
    // UaEncoding 1 carries the binary encoding as base64.
    let decoded: ExtensionObject = from_value(
        json!({
            "UaTypeId": { "Id": 15892, "Namespace": 1 },
            "UaEncoding": 1,
            "UaBody": "AAAAAAEAAAAA"
        }),
        &ctx,
    )
    .unwrap();
    let value = decoded
        .into_inner_as::<TransferResultDataDataType>()
        .unwrap();
    assert_eq!(value.sequence_number, 0);
    assert!(value.end_of_results);
    assert!(value.parameter_defs.is_empty());

    // Same body, but tagged with the JSON encoding id.
    let err = from_value::<ExtensionObject>(
        json!({
            "UaTypeId": { "Id": 15911, "Namespace": 1 },
            "UaEncoding": 1,
            "UaBody": "AAAAAAEAAAAA"
        }),
        &ctx,
    )
    .unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);
}

#[test]
fn unknown_ids_are_rejected() {
    let ctx = di_context();
    let ctx = ctx.context();
    // The data type id is not an encoding id.
    let id = DataTypeId::TransferResultDataDataType.node_id(ctx.namespaces()).unwrap();
    let err = ctx.load_from_binary(&id, &mut Cursor::new(Vec::<u8>::new())).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);

    // Right identifier, wrong namespace.
    let id = NodeId::new(0, ObjectId::TransferResultDataDataType_Encoding_DefaultBinary.id());
    assert!(ctx.load_from_binary(&id, &mut Cursor::new(Vec::<u8>::new())).is_err());

    let id = NodeId::new(1, "TransferResultDataDataType");
    let err = ctx.load_from_binary(&id, &mut Cursor::new(Vec::<u8>::new())).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);
}

#[test]
fn decoding_requires_the_namespace() {
    let di = di_context();
    let buf = ExtensionObject::from_message(transfer_result_error()).encode_to_vec(&di.context());

    let plain = ContextOwned::default();
    let err = ExtensionObject::decode(&mut Cursor::new(&buf), &plain.context()).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadDecodingError);

    let err = DiStructure::decode_binary_extension_object(&mut Cursor::new(&buf), &plain.context());
    assert_eq!(err.unwrap_err().status(), StatusCode::BadDataTypeIdUnknown);
}

#[test]
fn dynamic_equality() {
    let a = ExtensionObject::new(transfer_result_data());
    let b = ExtensionObject::new(transfer_result_data());
    let (Some(a), Some(b)) = (a.body.as_deref(), b.body.as_deref()) else {
        panic!("empty extension objects");
    };
    assert!(a.dyn_eq(a));
    assert!(a.dyn_eq(b));
    assert!(b.dyn_eq(a));

    let mut changed = transfer_result_data();
    changed.parameter_defs[1].status_code = StatusCode::Good;
    let changed = ExtensionObject::new(changed);
    assert!(!a.dyn_eq(changed.body.as_deref().unwrap()));

    // Same fields, different types.
    let base = ExtensionObject::new(FetchResultDataType {});
    let error = ExtensionObject::new(TransferResultErrorDataType::default());
    let base = base.body.as_deref().unwrap();
    let error = error.body.as_deref().unwrap();
    assert!(!base.dyn_eq(error));
    assert!(!error.dyn_eq(base));
}

#[test]
fn type_erased_clone() {
    let obj = ExtensionObject::new(transfer_result_error());
    let copy = obj.clone();
    assert_eq!(copy, obj);
    let mut inner = copy.into_inner_as::<TransferResultErrorDataType>().unwrap();
    inner.status = -1;
    assert_eq!(inner.status, -1);
    assert_eq!(
        obj.inner_as::<TransferResultErrorDataType>().map(|v| v.status),
        Some(-2)
    );
}

#[test]
fn data_type_of_body() {
    let obj = ExtensionObject::new(parameter_result("Flow", StatusCode::Good));
    let expected: ExpandedNodeId = DataTypeId::ParameterResultDataType.into();
    assert_eq!(obj.data_type(), Some(expected));
}

#[test]
fn structure_conversions() {
    let value = DiStructure::from(transfer_result_data());
    let obj = value.clone().into_extension_object();
    assert!(obj.inner_is::<TransferResultDataDataType>());
    assert_eq!(DiStructure::try_from_extension_object(obj), Ok(value));

    let obj: ExtensionObject = DiStructure::from(FetchResultDataType {}).into();
    assert_eq!(
        DiStructure::try_from(obj),
        Ok(DiStructure::FetchResult(FetchResultDataType {}))
    );

    let err = DiStructure::try_from_extension_object(ExtensionObject::null()).unwrap_err();
    assert!(err.is_null());
}
