// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Derive macros for ARINC 424 record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too. Fields are parsed in declaration order and can
//! be positioned with `#[arinc424(skip(n))]` or `#[arinc424(field = n)]`.
//!
//! Columns with a constant content (spacing columns, section codes) are
//! declared on the struct with `#[arinc424(literal(column = n, value = ".."))]`
//! and are checked before any field is parsed.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitInt, LitStr};

enum FieldAttribute {
    Skip(usize),
    Position(usize),
}

struct Literal {
    column: usize,
    value: String,
}

fn parse_field_attributes(field: &syn::Field) -> syn::Result<Option<FieldAttribute>> {
    let mut attribute = None;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("arinc424")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                let content;
                syn::parenthesized!(content in meta.input);
                let n: LitInt = content.parse()?;
                attribute = Some(FieldAttribute::Skip(n.base10_parse()?));
                Ok(())
            } else if meta.path.is_ident("field") {
                let n: LitInt = meta.value()?.parse()?;
                attribute = Some(FieldAttribute::Position(n.base10_parse()?));
                Ok(())
            } else {
                Err(meta.error("expected `skip(n)` or `field = n`"))
            }
        })?;
    }

    Ok(attribute)
}

fn parse_literals(input: &DeriveInput) -> syn::Result<Vec<Literal>> {
    let mut literals = Vec::new();

    for attr in input.attrs.iter().filter(|a| a.path().is_ident("arinc424")) {
        attr.parse_nested_meta(|meta| {
            if !meta.path.is_ident("literal") {
                return Err(meta.error("expected `literal(column = n, value = \"..\")`"));
            }

            let mut column = None;
            let mut value = None;

            meta.parse_nested_meta(|inner| {
                if inner.path.is_ident("column") {
                    let n: LitInt = inner.value()?.parse()?;
                    column = Some(n.base10_parse::<usize>()?);
                    Ok(())
                } else if inner.path.is_ident("value") {
                    let s: LitStr = inner.value()?.parse()?;
                    value = Some(s.value());
                    Ok(())
                } else {
                    Err(inner.error("expected `column` or `value`"))
                }
            })?;

            match (column, value) {
                (Some(column), Some(value)) if column >= 1 => {
                    literals.push(Literal { column, value });
                    Ok(())
                }
                _ => Err(meta.error("literal needs a `column` (1-based) and a `value`")),
            }
        })?;
    }

    Ok(literals)
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let lifetime = generics.lifetimes().next().ok_or_else(|| {
        syn::Error::new_spanned(
            name,
            "Record types must have a lifetime parameter (e.g., 'a)",
        )
    })?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Record derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Record derive only supports structs",
            ))
        }
    };

    let literal_checks = parse_literals(&input)?.into_iter().map(|literal| {
        let column = literal.column;
        let value = literal.value;
        quote! {
            fields.expect_literal(#column, #value)?;
        }
    });

    let mut field_parsers = Vec::new();

    for field in fields {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "field should be named"))?;

        let parse_expr = match parse_field_attributes(field)? {
            Some(FieldAttribute::Position(pos)) => quote! {
                #field_name: fields.get(#pos)?
            },
            Some(FieldAttribute::Skip(n)) => quote! {
                #field_name: fields.skip(#n).next()?
            },
            None => quote! {
                #field_name: fields.next()?
            },
        };

        field_parsers.push(parse_expr);
    }

    Ok(quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                #(#literal_checks)*

                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime [u8]> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(bytes: &#lifetime [u8]) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_bytes(bytes)
            }
        }
    })
}

#[proc_macro_derive(Record, attributes(arinc424))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}
