// OPCUA for Rust
// SPDX-License-Identifier: MPL-2.0
// Copyright (C) 2017-2024 Adam Lock

//! Identifier tables and browse names generated by `opcua-di-codegen` from
//! the CSV files in `schemas/`. Regenerate with
//! `cargo run -p opcua-di-codegen -- codegen.yml`.

#[allow(missing_docs)]
pub mod browse_names;
#[allow(missing_docs)]
pub mod node_ids;

pub use browse_names::*;
pub use node_ids::*;
