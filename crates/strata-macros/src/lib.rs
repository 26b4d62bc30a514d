// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Procedural macros for the Strata runtime.

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives `strata_data::ecs::Component` for a struct or enum.
///
/// The generated impl names the trait through the absolute
/// `::strata_data` path, so it works both inside `strata-data` (which
/// aliases itself) and in downstream crates that define their own
/// components, such as custom-property plugins.
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // `Component` carries `Send + Sync + 'static` supertraits; the compiler
    // reports a type that violates them at the impl site.
    let expanded = quote! {
        impl #impl_generics ::strata_data::ecs::Component for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}
