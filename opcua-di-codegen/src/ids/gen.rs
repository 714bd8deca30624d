use std::{
    collections::{HashMap, HashSet},
    io::BufRead,
};

use proc_macro2::Span;
use quote::quote;
use syn::{parse_quote, Ident, Item, Path};

use crate::{
    utils::{csv_columns, safe_ident},
    CodeGenError,
};

/// Node classes that get an identifier table.
pub const CATEGORIES: &[&str] = &[
    "DataType",
    "Method",
    "Object",
    "ObjectType",
    "ReferenceType",
    "Variable",
    "VariableType",
];

#[derive(Debug)]
pub struct IdItem {
    pub name: String,
    pub variants: Vec<(u32, String)>,
}

impl IdItem {
    pub fn new(it: &str) -> Self {
        Self {
            name: it.to_owned(),
            variants: Vec::new(),
        }
    }
}

/// Parse a node ID CSV file with lines on the form `Name,Id,Category`, or
/// `Name,Id` if `type_name` is given. Categories keep the order they first
/// appear in, variants keep file order.
pub fn parse(
    reader: impl BufRead,
    file_name: &str,
    type_name: Option<&str>,
) -> Result<Vec<IdItem>, CodeGenError> {
    let mut types: Vec<IdItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut names = HashSet::new();
    let mut ids = HashSet::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CodeGenError::io("Failed to read lines from file", e))?;
        let Some(vals) = csv_columns(&line) else {
            continue;
        };
        let in_line = |e: CodeGenError| {
            e.with_context(format!("parsing line {}", line_no + 1))
                .in_file(file_name)
        };

        let category = match (vals.len(), type_name) {
            (2, Some(type_name)) => type_name,
            (2, None) => {
                return Err(in_line(CodeGenError::other(format!(
                    "CSV file {file_name} has only two columns, but no type name fallback was specified"
                ))));
            }
            (3, _) => vals[2],
            (n, _) => {
                return Err(in_line(CodeGenError::wrong_format(
                    "two or three columns",
                    format!("{n} columns"),
                )));
            }
        };
        if !CATEGORIES.contains(&category) {
            return Err(in_line(CodeGenError::wrong_format(
                format!("one of {}", CATEGORIES.join(", ")),
                category,
            )));
        }

        let name = vals[0];
        if name.is_empty() {
            return Err(in_line(CodeGenError::wrong_format(
                "a symbolic name",
                "an empty column",
            )));
        }
        let id: u32 = vals[1]
            .parse()
            .map_err(|e| in_line(CodeGenError::parse_int(vals[1], e)))?;
        if !names.insert(name.to_owned()) {
            return Err(in_line(CodeGenError::duplicate("name", name)));
        }
        if !ids.insert(id) {
            return Err(in_line(CodeGenError::duplicate("id", id.to_string())));
        }

        let idx = *index.entry(category.to_owned()).or_insert_with(|| {
            types.push(IdItem::new(category));
            types.len() - 1
        });
        types[idx].variants.push((id, name.to_owned()));
    }

    Ok(types)
}

pub fn render(
    item: IdItem,
    namespace_uri: &str,
    namespace_const: &Path,
) -> Result<Vec<Item>, CodeGenError> {
    let mut items = Vec::new();
    let mut vs = quote! {};
    let mut all = quote! {};
    let mut name_arms = quote! {};
    let mut from_arms = quote! {};
    let mut from_str_arms = quote! {};
    for (val, key) in item.variants {
        let (idt, _) = safe_ident(&key);
        vs.extend(quote! { #idt = #val, });
        all.extend(quote! { Self::#idt, });
        name_arms.extend(quote! { Self::#idt => #key, });
        from_arms.extend(quote! { #val => Self::#idt, });
        from_str_arms.extend(quote! { #key => Self::#idt, });
    }

    let name = Ident::new(&format!("{}Id", item.name), Span::call_site());
    let doc = format!(
        " Identifiers of {} nodes in the namespace `{}`.",
        item.name, namespace_uri
    );

    items.push(Item::Enum(parse_quote! {
        #[doc = #doc]
        #[allow(non_camel_case_types, clippy::enum_variant_names)]
        #[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
        #[repr(u32)]
        pub enum #name {
            #vs
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl crate::IdentifierTable for #name {
            const NAMESPACE_URI: &'static str = #namespace_const;
            const ALL: &'static [Self] = &[#all];

            fn id(&self) -> u32 {
                *self as u32
            }

            fn name(&self) -> &'static str {
                match self {
                    #name_arms
                }
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl<'a> From<&'a #name> for opcua_types::ExpandedNodeId {
            fn from(r: &'a #name) -> Self {
                crate::IdentifierTable::expanded_node_id(r)
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl From<#name> for opcua_types::ExpandedNodeId {
            fn from(r: #name) -> Self {
                crate::IdentifierTable::expanded_node_id(&r)
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl TryFrom<u32> for #name {
            type Error = ();

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                Ok(match value {
                    #from_arms
                    _ => return Err(()),
                })
            }
        }
    }));

    items.push(Item::Impl(parse_quote! {
        impl<'a> TryFrom<&'a str> for #name {
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

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use quote::ToTokens;

    use super::{parse, render};
    use crate::CodeGenErrorKind;

    const CSV: &str = "\
# Name,Id,Category
DeviceType,1002,ObjectType

FetchResultDataType,6522,DataType
DeviceSet,5001,Object
ParameterResultDataType,6525,DataType
";

    #[test]
    fn parse_categories() {
        let items = parse(Cursor::new(CSV), "NodeIds.csv", None).unwrap();
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["ObjectType", "DataType", "Object"]);
        assert_eq!(
            items[1].variants,
            vec![
                (6522, "FetchResultDataType".to_owned()),
                (6525, "ParameterResultDataType".to_owned())
            ]
        );
    }

    #[test]
    fn parse_two_columns() {
        let items = parse(Cursor::new("Lock,6244\n"), "ids.csv", Some("Method")).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Method");

        let err = parse(Cursor::new("Lock,6244\n"), "ids.csv", None).unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::Other(_)));
    }

    #[test]
    fn parse_errors() {
        let err = parse(Cursor::new("Lock,1,Method,Extra\n"), "ids.csv", None).unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::WrongFormat(..)));
        assert_eq!(err.file.as_deref(), Some("ids.csv"));
        assert_eq!(err.context.as_deref(), Some("parsing line 1"));

        let err = parse(Cursor::new("Lock,1,Thing\n"), "ids.csv", None).unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::WrongFormat(..)));

        let err = parse(Cursor::new("Lock,abc,Method\n"), "ids.csv", None).unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::ParseInt(..)));

        let err = parse(
            Cursor::new("Lock,1,Method\n# note\nLock,2,Object\n"),
            "ids.csv",
            None,
        )
        .unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::Duplicate("name", _)));
        assert_eq!(err.context.as_deref(), Some("parsing line 3"));

        let err = parse(
            Cursor::new("Lock,1,Method\nUnlock,1,Method\n"),
            "ids.csv",
            None,
        )
        .unwrap_err();
        assert!(matches!(*err.kind, CodeGenErrorKind::Duplicate("id", _)));
    }

    #[test]
    fn render_enum() {
        let mut items = parse(Cursor::new(CSV), "NodeIds.csv", None).unwrap();
        let data_types = items.remove(1);
        let path: syn::Path = syn::parse_str("crate::DI_NAMESPACE_URI").unwrap();
        let rendered = render(data_types, "http://opcfoundation.org/UA/DI/", &path).unwrap();
        assert_eq!(rendered.len(), 6);

        let syn::Item::Enum(en) = &rendered[0] else {
            panic!("Expected an enum");
        };
        assert_eq!(en.ident, "DataTypeId");
        assert_eq!(en.variants.len(), 2);

        let text = rendered
            .iter()
            .map(|i| i.to_token_stream().to_string())
            .collect::<String>();
        assert!(text.contains("FetchResultDataType = 6522u32"));
        assert!(text.contains("crate :: DI_NAMESPACE_URI"));
        assert!(text.contains("\"ParameterResultDataType\" => Self :: ParameterResultDataType"));
    }
}
