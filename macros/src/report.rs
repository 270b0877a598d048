//! `caps_of!` expansion: a full capability report for one type.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::bool_expr::generate_single_probe;

pub struct ReportInput {
    pub ty: syn::Type,
}

impl Parse for ReportInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: syn::Type = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("caps_of! takes a single type"));
        }
        Ok(ReportInput { ty })
    }
}

pub fn expand_caps_of(input: ReportInput) -> TokenStream {
    let ty = &input.ty;

    let has_serialize = generate_single_probe(&quote! { ::sercaps::caps::Serialize }, ty);
    let has_serialize_member =
        generate_single_probe(&quote! { ::sercaps::caps::SerializeMember }, ty);
    let has_callable_serialize =
        generate_single_probe(&quote! { ::sercaps::caps::CallableSerialize }, ty);
    let has_to_text = generate_single_probe(&quote! { ::sercaps::caps::ToText }, ty);
    let is_integral = generate_single_probe(&quote! { ::sercaps::caps::Integral }, ty);
    let is_floating = generate_single_probe(&quote! { ::sercaps::caps::Floating }, ty);

    quote! {
        {
            let _ = ::core::marker::PhantomData::<#ty>;
            ::sercaps::detect::Caps {
                has_serialize: #has_serialize,
                has_serialize_member: #has_serialize_member,
                has_callable_serialize: #has_callable_serialize,
                has_to_text: #has_to_text,
                is_integral: #is_integral,
                is_floating: #is_floating,
            }
        }
    }
}
