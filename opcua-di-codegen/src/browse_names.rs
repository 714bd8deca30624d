use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
};

use quote::quote;
use syn::{parse_quote, Item};

use crate::{
    utils::{csv_columns, safe_ident},
    CodeGenError,
};

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct BrowseNameCodeGenTarget {
    pub file_path: String,
    pub output_file: String,
    #[serde(default)]
    pub extra_header: String,
}

/// Parse a CSV file with lines on the form `Symbol,BrowseName`.
/// Symbols must be unique, several symbols may share a browse name.
pub fn parse(reader: impl BufRead, file_name: &str) -> Result<Vec<(String, String)>, CodeGenError> {
    let mut res = Vec::new();
    let mut symbols = HashSet::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CodeGenError::io("Failed to read lines from file", e))?;
        let Some(vals) = csv_columns(&line) else {
            continue;
        };
        let in_line = |e: CodeGenError| {
            e.with_context(format!("parsing line {}", line_no + 1))
                .in_file(file_name)
        };
        let &[symbol, browse_name] = vals.as_slice() else {
            return Err(in_line(CodeGenError::wrong_format(
                "two columns",
                format!("{} columns", vals.len()),
            )));
        };
        if symbol.is_empty() || browse_name.is_empty() {
            return Err(in_line(CodeGenError::wrong_format(
                "a symbol and a browse name",
                "an empty column",
            )));
        }
        if !symbols.insert(symbol.to_owned()) {
            return Err(in_line(CodeGenError::duplicate("symbol", symbol)));
        }
        res.push((symbol.to_owned(), browse_name.to_owned()));
    }
    Ok(res)
}

pub fn render(names: Vec<(String, String)>) -> Result<Vec<Item>, CodeGenError> {
    let mut items = Vec::new();
    let mut vs = quote! {};
    let mut all = quote! {};
    let mut as_str_arms = quote! {};
    let mut from_str_arms = quote! {};
    let mut seen = HashSet::new();

    for (symbol, browse_name) in &names {
        let (idt, _) = safe_ident(symbol);
        vs.extend(quote! { #idt, });
        all.extend(quote! { Self::#idt, });
        as_str_arms.extend(quote! { Self::#idt => #browse_name, });
        // Lookup resolves a shared browse name to the first symbol.
        if seen.insert(browse_name) {
            from_str_arms.extend(quote! { #browse_name => Self::#idt, });
        }
    }

    items.push(Item::Enum(parse_quote! {
        #[doc = " Browse names of the elements of the information model."]
        #[allow(non_camel_case_types)]
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
        pub enum BrowseName {
            #vs
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl BrowseName {
            #[doc = " Every browse name, in definition order."]
            pub const ALL: &'static [BrowseName] = &[#all];

            #[doc = " The browse name as a string."]
            pub fn as_str(&self) -> &'static str {
                match self {
                    #as_str_arms
                }
            }

            #[doc = " The browse name qualified with the given namespace index."]
            pub fn qualified_name(&self, namespace_index: u16) -> opcua_types::QualifiedName {
                opcua_types::QualifiedName::new(namespace_index, self.as_str())
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl std::fmt::Display for BrowseName {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl<'a> TryFrom<&'a str> for BrowseName {
            type Error = ();

            fn try_from(value: &'a str) -> Result<Self, Self::Error> {
                Ok(match value {
                    #from_str_arms
                    _ => return Err(()),
                })
            }
        }
    }));

    Ok(items)
}

pub fn generate_browse_names(
    target: &BrowseNameCodeGenTarget,
    root_path: &str,
) -> Result<syn::File, CodeGenError> {
    let file = File::open(format!("{}/{}", root_path, target.file_path))
        .map_err(|e| CodeGenError::io("Failed to open browse name file", e))?;
    let names = parse(BufReader::new(file), &target.file_path)?;
    log::debug!("Rendering {} browse names", names.len());
    Ok(syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: render(names)?,
    })
}
