//! Exhibit Macros
//!
//! Procedural macro for demonstration registration.
//!
//! ## Macros
//!
//! - `#[demo]` - Register a demonstration function

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

mod attr {
    use syn::meta::ParseNestedMeta;

    /// Get the attribute name as a string
    pub fn name(meta: &ParseNestedMeta) -> String {
        meta.path
            .get_ident()
            .map(|i| i.to_string())
            .unwrap_or_default()
    }

    /// Parse a string literal attribute: `attr = "value"`
    pub fn string(meta: &ParseNestedMeta) -> syn::Result<String> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value.value())
    }

    /// Parse a comma-separated string as tags: `tags = "a, b, c"`
    pub fn tags(meta: &ParseNestedMeta) -> syn::Result<Vec<String>> {
        let value: syn::LitStr = meta.value()?.parse()?;
        Ok(value
            .value()
            .split(',')
            .map(|s| s.trim().to_string())
            .collect())
    }

    /// Create an unknown attribute error
    pub fn unknown(meta: &ParseNestedMeta, name: &str) -> syn::Error {
        meta.error(format!("unknown attribute: {}", name))
    }
}

/// Register a demonstration function
///
/// The function takes no arguments and returns its description as a
/// `String`. The id defaults to the function name in kebab-case.
///
/// # Example
///
/// ```ignore
/// #[demo(chapter = "fundamentals")]
/// fn closure_reduce() -> String {
///     let sum: i32 = (1..=6).fold(0, |current, next| current + next);
///     format!("sum is {sum}")
/// }
///
/// // With configuration
/// #[demo(id = "custom-id", chapter = "fundamentals", tags = "closures, folds")]
/// fn another() -> String { ... }
/// ```
#[proc_macro_attribute]
pub fn demo(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    let func = parse_macro_input!(item as ItemFn);

    demo_impl(args, func)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn demo_impl(args: TokenStream2, func: ItemFn) -> Result<TokenStream2, syn::Error> {
    validate_signature(&func)?;

    let config = parse_demo_config(args)?;

    let fn_name = &func.sig.ident;
    let fn_name_str = fn_name.to_string();

    let id = config.id.unwrap_or_else(|| fn_name_str.replace('_', "-"));
    let chapter = config.chapter.unwrap_or_else(|| "default".to_string());
    let tags: Vec<_> = config.tags.iter().map(|t| quote! { #t }).collect();

    Ok(quote! {
        #func

        ::exhibit::internal::inventory::submit! {
            ::exhibit::DemoDef {
                id: #id,
                name: #fn_name_str,
                chapter: #chapter,
                tags: &[#(#tags),*],
                runner_fn: #fn_name,
                file: file!(),
                line: line!(),
                module_path: module_path!(),
            }
        }
    })
}

#[derive(Default)]
struct DemoConfig {
    id: Option<String>,
    chapter: Option<String>,
    tags: Vec<String>,
}

fn parse_demo_config(args: TokenStream2) -> Result<DemoConfig, syn::Error> {
    let mut config = DemoConfig::default();

    if args.is_empty() {
        return Ok(config);
    }

    let parser = syn::meta::parser(|meta| {
        let name = attr::name(&meta);
        match name.as_str() {
            "id" => config.id = Some(attr::string(&meta)?),
            "chapter" => config.chapter = Some(attr::string(&meta)?),
            "tags" => config.tags = attr::tags(&meta)?,
            _ => return Err(attr::unknown(&meta, &name)),
        }
        Ok(())
    });

    syn::parse::Parser::parse2(parser, args)?;

    Ok(config)
}

fn validate_signature(func: &ItemFn) -> syn::Result<()> {
    if !func.sig.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "Exhibit: demonstration functions take no arguments",
        ));
    }
    if func.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "Exhibit: demonstrations run synchronously",
        ));
    }
    if matches!(func.sig.output, syn::ReturnType::Default) {
        return Err(syn::Error::new_spanned(
            &func.sig,
            "Exhibit: demonstration functions must return their description (`-> String`)",
        ));
    }
    Ok(())
}
