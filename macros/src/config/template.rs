//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let field_codes: Vec<TokenStream> = fields
        .iter()
        .map(|f| generate_field_template_code(f))
        .collect();

    quote! {
        #(#field_codes)*
    }
}

/// Inner type of `Option<T>`, if `ty` is an option.
fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;

    let doc_code = if let Some(ref doc) = info.doc {
        let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
        quote! { out.push_str(#doc_str); }
    } else {
        quote! {}
    };

    let inline = info
        .inline_doc
        .as_ref()
        .map(|c| format!("  # {}", c))
        .unwrap_or_default();

    // Nested sections render with their own header; optional ones are commented out
    if info.sub {
        if let Some(inner) = option_inner(&info.ty) {
            return quote! {
                out.push('\n');
                #doc_code
                for line in <#inner>::template_with_header().lines() {
                    if line.starts_with('#') || line.is_empty() {
                        out.push_str(line);
                    } else {
                        out.push_str("# ");
                        out.push_str(line);
                    }
                    out.push('\n');
                }
            };
        }
        let field_ty = &info.ty;
        return quote! {
            out.push('\n');
            #doc_code
            out.push_str(&<#field_ty>::template_with_header());
        };
    }

    let ty_str = type_to_string(&info.ty);
    let is_optional = option_inner(&info.ty).is_some();

    if let Some(ref default_val) = info.default {
        let line = format!(
            "{} = {}{}\n",
            toml_name,
            format_default_for_type(default_val, &ty_str),
            inline
        );
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    if is_optional {
        let line = format!("# {} = \"\"{}\n", toml_name, inline);
        return quote! {
            #doc_code
            out.push_str(#line);
        };
    }

    // Runtime default from `Default::default()`
    quote! {
        #doc_code
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_default());
        out.push_str(#inline);
        out.push('\n');
    }
}
