use proc_macro2::Span;
use syn::Ident;

/// Make an identifier out of `val`, prefixing names that are not valid
/// Rust identifiers. The second value is `true` if the name was changed.
pub fn safe_ident(val: &str) -> (Ident, bool) {
    let mut val = val.to_string();
    let mut changed = false;
    if val.starts_with(['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']) || val == "type" {
        val = format!("__{val}");
        changed = true;
    }

    (Ident::new(&val, Span::call_site()), changed)
}

/// Split a CSV line into trimmed columns. Blank lines and lines starting
/// with `#` yield `None`.
pub fn csv_columns(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    Some(line.split(',').map(str::trim).collect())
}

#[cfg(test)]
mod tests {
    use super::{csv_columns, safe_ident};

    #[test]
    fn safe_idents() {
        let (ident, changed) = safe_ident("DeviceSet");
        assert_eq!(ident.to_string(), "DeviceSet");
        assert!(!changed);
        let (ident, changed) = safe_ident("3DModel");
        assert_eq!(ident.to_string(), "__3DModel");
        assert!(changed);
    }

    #[test]
    fn columns() {
        assert_eq!(csv_columns("  # comment"), None);
        assert_eq!(csv_columns(""), None);
        assert_eq!(
            csv_columns("DeviceSet, 5001 ,Object"),
            Some(vec!["DeviceSet", "5001", "Object"])
        );
    }
}
