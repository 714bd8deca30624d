// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Plays the server side of `FetchTransferResultData`: the results of a
//! parameter transfer are split into batches, and every batch is sent
//! through the binary, XML and JSON encodings of an extension object and
//! decoded again with the DI type loader.

use std::io::Cursor;

use log::{error, info};
use opcua_di::{
    register_namespace, DiStructure, FetchResultDataType, ParameterResultDataType,
    TransferResultDataDataType, TransferResultErrorDataType,
};
use opcua_types::{
    BinaryDecodable, BinaryEncodable, Context, ContextOwned, DiagnosticInfo, EncodingResult,
    ExtensionObject, NamespaceMap, QualifiedName, StatusCode,
};

/// Parameters written by the simulated transfer. Every third one fails.
const PARAMETERS: &[&str] = &[
    "Temperature",
    "Pressure",
    "FlowRate",
    "Level",
    "Density",
    "Viscosity",
    "Conductivity",
];

/// Status of a `TransferResultErrorDataType` for a sequence number past the
/// last batch.
const INVALID_SEQUENCE_NUMBER: i32 = -3;

struct Args {
    help: bool,
    batch_size: usize,
}

impl Args {
    pub fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
        let mut args = pico_args::Arguments::from_env();
        Ok(Args {
            help: args.contains(["-h", "--help"]),
            batch_size: args.opt_value_from_str("--batch-size")?.unwrap_or(3),
        })
    }

    pub fn usage() {
        println!(
            r#"Transfer results
Usage:
  -h, --help           Show help
  --batch-size [n]     Parameter results per batch (default: 3)"#
        );
    }
}

fn parameter_result(ns: u16, index: usize, name: &str) -> ParameterResultDataType {
    let failed = index % 3 == 2;
    ParameterResultDataType {
        node_path: vec![
            QualifiedName::new(ns, "ParameterSet"),
            QualifiedName::new(ns, name),
        ],
        status_code: if failed {
            StatusCode::BadOutOfRange
        } else {
            StatusCode::Good
        },
        diagnostics: if failed {
            DiagnosticInfo {
                additional_info: Some(format!("{name} is outside its range").into()),
                ..DiagnosticInfo::null()
            }
        } else {
            DiagnosticInfo::null()
        },
    }
}

/// Split the parameter results into batches, followed by the error a client
/// gets when it asks for one batch too many.
fn transfer_results(ns: u16, batch_size: usize) -> Vec<DiStructure> {
    let results: Vec<_> = PARAMETERS
        .iter()
        .enumerate()
        .map(|(idx, name)| parameter_result(ns, idx, name))
        .collect();
    let batches: Vec<_> = results.chunks(batch_size.max(1)).collect();
    let count = batches.len();

    let mut res: Vec<DiStructure> = batches
        .into_iter()
        .enumerate()
        .map(|(idx, batch)| {
            TransferResultDataDataType {
                base: FetchResultDataType {},
                sequence_number: idx as i32,
                end_of_results: idx + 1 == count,
                parameter_defs: batch.to_vec(),
            }
            .into()
        })
        .collect();
    res.push(
        TransferResultErrorDataType {
            base: FetchResultDataType {},
            status: INVALID_SEQUENCE_NUMBER,
            diagnostics: DiagnosticInfo::null(),
        }
        .into(),
    );
    res
}

fn binary_round_trip(obj: &ExtensionObject, ctx: &Context<'_>) -> EncodingResult<ExtensionObject> {
    let mut buf = Vec::with_capacity(obj.byte_len(ctx));
    obj.encode(&mut buf, ctx)?;
    info!("Binary: {} bytes", buf.len());
    ExtensionObject::decode(&mut Cursor::new(buf), ctx)
}

#[cfg(feature = "xml")]
fn xml_round_trip(obj: &ExtensionObject, ctx: &Context<'_>) -> EncodingResult<ExtensionObject> {
    use std::io::{Read, Write};

    use opcua_types::xml::{
        enter_first_tag, XmlDecodable, XmlEncodable, XmlStreamReader, XmlStreamWriter,
    };

    let mut buf = Vec::new();
    let mut writer = XmlStreamWriter::new(&mut buf as &mut dyn Write);
    writer.write_start("ExtensionObject")?;
    XmlEncodable::encode(obj, &mut writer, ctx)?;
    writer.write_end("ExtensionObject")?;
    info!("XML: {}", String::from_utf8_lossy(&buf));

    let mut cursor = Cursor::new(buf);
    let mut reader = XmlStreamReader::new(&mut cursor as &mut dyn Read);
    if !enter_first_tag(&mut reader)? {
        return Ok(ExtensionObject::null());
    }
    XmlDecodable::decode(&mut reader, ctx)
}

#[cfg(feature = "json")]
fn json_round_trip(obj: &ExtensionObject, ctx: &Context<'_>) -> EncodingResult<ExtensionObject> {
    use std::io::{Read, Write};

    use opcua_types::json::{
        JsonDecodable, JsonEncodable, JsonStreamReader, JsonStreamWriter, JsonWriter,
    };

    let mut buf = Vec::new();
    let mut writer = JsonStreamWriter::new(&mut buf as &mut dyn Write);
    JsonEncodable::encode(obj, &mut writer, ctx)?;
    writer.finish_document()?;
    info!("JSON: {}", String::from_utf8_lossy(&buf));

    let mut cursor = Cursor::new(buf);
    let mut reader = JsonStreamReader::new(&mut cursor as &mut dyn Read);
    JsonDecodable::decode(&mut reader, ctx)
}

fn check(name: &str, original: &ExtensionObject, decoded: EncodingResult<ExtensionObject>) -> bool {
    match decoded {
        Ok(decoded) if &decoded == original => true,
        Ok(decoded) => {
            error!("{name} round trip changed the value: {decoded:?}");
            false
        }
        Err(e) => {
            error!("{name} round trip failed: {e}");
            false
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse_args()?;
    if args.help {
        Args::usage();
        return Ok(());
    }
    opcua_di::console_logging::init();

    let mut ctx = ContextOwned::new_default(NamespaceMap::new(), Default::default());
    let ns = register_namespace(&mut ctx);
    info!("Registered {} at index {ns}", opcua_di::DI_NAMESPACE_URI);
    let ctx = ctx.context();

    let mut failures = 0;
    for result in transfer_results(ns, args.batch_size) {
        match &result {
            DiStructure::TransferResultData(data) => info!(
                "Batch {} with {} results, end of results: {}",
                data.sequence_number,
                data.parameter_defs.len(),
                data.end_of_results
            ),
            DiStructure::TransferResultError(err) => {
                info!("Transfer error with status {}", err.status)
            }
            other => info!("{:?}", other.data_type_id()),
        }

        let obj = result.clone().into_extension_object();
        let mut ok = check("Binary", &obj, binary_round_trip(&obj, &ctx));
        #[cfg(feature = "xml")]
        {
            ok &= check("XML", &obj, xml_round_trip(&obj, &ctx));
        }
        #[cfg(feature = "json")]
        {
            ok &= check("JSON", &obj, json_round_trip(&obj, &ctx));
        }

        if ok {
            match DiStructure::try_from_extension_object(obj) {
                Ok(decoded) if decoded == result => (),
                _ => {
                    error!("Extension object did not convert back to the structure");
                    failures += 1;
                }
            }
        } else {
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(format!("{failures} results did not survive encoding").into());
    }
    info!("All results encoded and decoded");
    Ok(())
}
