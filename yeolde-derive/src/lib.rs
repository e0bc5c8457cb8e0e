use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, LitStr, Meta};

/// Derive macro that generates commodity metadata accessors for a fieldless enum.
///
/// Each variant must carry a `#[commodity(key = "...", display = "...", icon = "...")]`
/// attribute. For each variant, extracts:
/// - Internal key (used for filtering and price lookups)
/// - Display name (used as the purchasing power mapping key)
/// - Icon path (used by launcher integrations)
/// - Description (from doc comments)
///
/// Generates `ALL` in declaration order plus `key()`, `display_name()`, `icon()`,
/// `description()`, `find_by_key()` and `find_by_display_name()`.
#[proc_macro_derive(Commodity, attributes(commodity))]
pub fn derive_commodity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => panic!("Commodity only supports enums"),
    };

    let variant_info: Vec<_> = variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, Fields::Unit) {
                panic!("Commodity only supports fieldless variants");
            }
            let ident = &variant.ident;
            let attrs = match get_commodity_attrs(&variant.attrs) {
                Ok(attrs) => attrs,
                Err(err) => panic!("invalid #[commodity] attribute on {}: {}", ident, err),
            };
            let doc = get_doc_comment(&variant.attrs);
            (ident, attrs, doc)
        })
        .collect();

    let all = variant_info.iter().map(|(ident, _, _)| quote! { #name::#ident });
    let keys = variant_info.iter().map(|(ident, attrs, _)| {
        let key = &attrs.key;
        quote! { #name::#ident => #key }
    });
    let displays = variant_info.iter().map(|(ident, attrs, _)| {
        let display = &attrs.display;
        quote! { #name::#ident => #display }
    });
    let icons = variant_info.iter().map(|(ident, attrs, _)| {
        let icon = &attrs.icon;
        quote! { #name::#ident => #icon }
    });
    let descriptions = variant_info.iter().map(|(ident, _, doc)| {
        quote! { #name::#ident => #doc }
    });
    let by_key = variant_info.iter().map(|(ident, attrs, _)| {
        let key = &attrs.key;
        quote! { #key => Some(#name::#ident) }
    });
    let by_display = variant_info.iter().map(|(ident, attrs, _)| {
        let display = &attrs.display;
        quote! { #display => Some(#name::#ident) }
    });

    let expanded = quote! {
        impl #name {
            pub const ALL: &'static [#name] = &[#(#all),*];

            pub fn key(&self) -> &'static str {
                match self {
                    #(#keys),*
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    #(#displays),*
                }
            }

            pub fn icon(&self) -> &'static str {
                match self {
                    #(#icons),*
                }
            }

            pub fn description(&self) -> &'static str {
                match self {
                    #(#descriptions),*
                }
            }

            pub fn find_by_key(key: &str) -> Option<#name> {
                match key {
                    #(#by_key,)*
                    _ => None,
                }
            }

            pub fn find_by_display_name(display_name: &str) -> Option<#name> {
                match display_name {
                    #(#by_display,)*
                    _ => None,
                }
            }
        }
    };

    TokenStream::from(expanded)
}

struct CommodityAttrs {
    key: String,
    display: String,
    icon: String,
}

fn get_commodity_attrs(attrs: &[syn::Attribute]) -> syn::Result<CommodityAttrs> {
    let mut key = None;
    let mut display = None;
    let mut icon = None;

    for attr in attrs {
        if !attr.path().is_ident("commodity") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            let value: LitStr = meta.value()?.parse()?;
            if meta.path.is_ident("key") {
                key = Some(value.value());
            } else if meta.path.is_ident("display") {
                display = Some(value.value());
            } else if meta.path.is_ident("icon") {
                icon = Some(value.value());
            } else {
                return Err(meta.error("expected `key`, `display` or `icon`"));
            }
            Ok(())
        })?;
    }

    let missing = |field: &str| syn::Error::new(proc_macro2::Span::call_site(), format!("missing `{}`", field));
    Ok(CommodityAttrs {
        key: key.ok_or_else(|| missing("key"))?,
        display: display.ok_or_else(|| missing("display"))?,
        icon: icon.ok_or_else(|| missing("icon"))?,
    })
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}
