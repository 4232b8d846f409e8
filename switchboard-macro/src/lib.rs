/*
 * Copyright (c) 2026. Switchboard Contributors
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */
#![forbid(unsafe_code)]

//! Switchboard Macro Library
//!
//! This library provides procedural macros for the Switchboard dispatch bus.
//! It includes macros that turn plain structs into dispatchable actions.
//!
//! # Action Macros
//!
//! The [`action`] macro declares an action whose handler returns its result
//! synchronously; [`async_action`] declares one whose result arrives through
//! a completion callback:
//!
//! ```ignore
//! // Handler shape: Fn(Greet) -> String
//! #[action(output = String)]
//! pub struct Greet {
//!     pub name: String,
//! }
//!
//! // Handler shape: Fn(FetchValue, Completion<usize>)
//! #[async_action(output = usize)]
//! pub struct FetchValue {
//!     pub key: String,
//! }
//!
//! // `output` defaults to `()` for fire-and-forget actions.
//! #[action]
//! pub struct Refresh;
//! ```
//!
//! The action value itself is the handler's parameter (`Param = Self`).
//! Implement `GenericAction` by hand instead when the handler should receive
//! a narrower payload than the whole action.

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, DeriveInput};

fn has_derive(input: &DeriveInput, trait_name: &str) -> bool {
    input.attrs.iter().any(|attr| {
        if attr.path().is_ident("derive") {
            let mut found = false;
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident(trait_name) {
                    found = true;
                }
                Ok(())
            });
            found
        } else {
            false
        }
    })
}

/// Configuration options parsed from `#[action(...)]` / `#[async_action(...)]`
/// attributes.
struct ActionConfig {
    /// The declared output type; `()` when omitted.
    output: syn::Type,
}

impl ActionConfig {
    /// Parse configuration from attribute tokens.
    fn parse(attr: &TokenStream) -> syn::Result<Self> {
        let attr_string = attr.to_string();
        let trimmed = attr_string.trim();

        if trimmed.is_empty() {
            return Ok(Self {
                output: syn::parse_quote!(()),
            });
        }

        // The only recognized option is `output = Type`. The value may itself
        // contain commas (tuples, generics), so split on the first `=` only.
        let value = trimmed
            .strip_prefix("output")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='))
            .ok_or_else(|| {
                syn::Error::new(
                    proc_macro2::Span::call_site(),
                    "expected `output = Type`, e.g. #[action(output = String)]",
                )
            })?;

        let output = syn::parse_str::<syn::Type>(value.trim()).map_err(|_| {
            syn::Error::new(
                proc_macro2::Span::call_site(),
                format!("`{}` is not a valid output type", value.trim()),
            )
        })?;

        Ok(Self { output })
    }
}

/// Shared expansion for both action macros; `marker` is the sync or async
/// marker trait path to implement alongside `GenericAction`.
fn expand_action(
    attr: TokenStream,
    item: TokenStream,
    marker: proc_macro2::TokenStream,
) -> TokenStream {
    // Parse configuration from attributes
    let config = match ActionConfig::parse(&attr) {
        Ok(config) => config,
        Err(err) => return err.to_compile_error().into(),
    };
    let output = &config.output;

    // Parse the input tokens into a syntax tree.
    let input = parse_macro_input!(item as DeriveInput);

    // Get the name and generics of the struct.
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Determine which traits need to be derived
    let need_debug = !has_derive(&input, "Debug");

    let derives = if need_debug {
        quote!(#[derive(Debug)])
    } else {
        quote!()
    };

    // Generate a unique identifier for the static assertion to avoid conflicts
    let assert_ident = quote::format_ident!("_AssertSwitchboardAction_{}", name);

    let expanded = quote! {
        #derives
        #input

        impl #impl_generics ::switchboard::prelude::GenericAction for #name #ty_generics #where_clause {
            type Param = Self;
            type Output = #output;

            fn into_param(self) -> Self {
                self
            }
        }

        impl #impl_generics #marker for #name #ty_generics #where_clause {}

        // Compile-time assertion that the action type satisfies Send + 'static.
        // This catches invalid action types early with clear error messages.
        #[doc(hidden)]
        #[allow(dead_code, non_camel_case_types, non_snake_case, clippy::needless_lifetimes)]
        const _: () = {
            fn #assert_ident #impl_generics () #where_clause {
                fn assert_bounds<T: Send + 'static>() {}
                assert_bounds::<#name #ty_generics>();
            }
        };
    };

    // Return the generated tokens.
    TokenStream::from(expanded)
}

/// Declares a synchronous action type.
///
/// This macro implements the traits required for a type to be dispatched
/// through the Switchboard bus with a blocking-return calling convention.
///
/// # Usage
///
/// ```ignore
/// use switchboard_macro::action;
///
/// #[action(output = String)]
/// pub struct Greet {
///     pub name: String,
/// }
///
/// #[action]
/// pub struct Refresh;
/// ```
///
/// This expands to:
/// - `#[derive(Debug)]` (if not already present)
/// - `impl GenericAction` with `Param = Self` and the declared `Output`
///   (`()` when the `output` option is omitted)
/// - `impl Action`
/// - A compile-time assertion that the type is `Send + 'static`
#[proc_macro_attribute]
pub fn action(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_action(attr, item, quote!(::switchboard::prelude::Action))
}

/// Declares an asynchronous action type.
///
/// Identical to [`action`], except the generated marker is `AsyncAction`:
/// the registered handler receives a completion callback and the result is
/// delivered through it rather than returned.
///
/// # Usage
///
/// ```ignore
/// use switchboard_macro::async_action;
///
/// #[async_action(output = usize)]
/// pub struct FetchValue {
///     pub key: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn async_action(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand_action(attr, item, quote!(::switchboard::prelude::AsyncAction))
}
