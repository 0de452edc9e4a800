//! Attribute macros for `core-async`.
//!
//! `#[core_async::test]` turns an `async fn` into a plain `#[test]` that
//! drives its body with `core_async::runtime::block_on`, so test crates do
//! not need a direct Tokio dependency.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        let tokens = TokenStream2::from(attr);
        return syn::Error::new_spanned(tokens, "#[core_async::test] does not accept arguments")
            .to_compile_error()
            .into();
    }

    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        return syn::Error::new_spanned(
            input.sig.fn_token,
            "#[core_async::test] requires an `async fn`",
        )
        .to_compile_error()
        .into();
    }

    expand_test(input).into()
}

fn expand_test(input: ItemFn) -> TokenStream2 {
    let ItemFn {
        attrs,
        vis,
        mut sig,
        block,
    } = input;
    sig.asyncness = None;

    quote! {
        #(#attrs)*
        #[test]
        #vis #sig {
            core_async::runtime::block_on(async move #block)
        }
    }
}
