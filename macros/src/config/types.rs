//! Type helper functions for Config derive macro.

use quote::quote;
use syn::Type;

/// Convert syn::Type to string representation
pub fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}

/// Infer section name from struct name
pub fn infer_section(name: &str) -> String {
    let name = name
        .strip_suffix("SectionConfig")
        .or_else(|| name.strip_suffix("Config"))
        .unwrap_or(name);
    to_snake_case(name)
}

/// Convert PascalCase to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Format default value based on field type.
/// Strings and enum tags get quoted, numbers and booleans are used as-is
pub fn format_default_for_type(value: &str, ty: &str) -> String {
    let inner = ty
        .strip_prefix("Option<")
        .and_then(|t| t.strip_suffix('>'))
        .unwrap_or(ty);
    match inner {
        "bool" | "u8" | "u16" | "u32" | "u64" | "usize" | "i8" | "i16" | "i32" | "i64"
        | "isize" | "f32" | "f64" => value.to_string(),
        _ if inner.starts_with("Vec<") => value.to_string(),
        _ => format!("\"{}\"", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_section_from_struct_name() {
        assert_eq!(infer_section("FooterConfig"), "footer");
        assert_eq!(infer_section("LastUpdatedConfig"), "last_updated");
        assert_eq!(infer_section("SiteSectionConfig"), "site");
        assert_eq!(infer_section("NavItem"), "nav_item");
    }

    #[test]
    fn quotes_string_like_defaults() {
        assert_eq!(format_default_for_type("/", "Option<String>"), "\"/\"");
        assert_eq!(format_default_for_type("local", "SearchProvider"), "\"local\"");
        assert_eq!(format_default_for_type("false", "bool"), "false");
        assert_eq!(format_default_for_type("[]", "Vec<String>"), "[]");
    }
}
