//! `probe!` input parsing and expansion.

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};

use crate::bool_expr::{BoolExpr, generate_probe_body};

/// Single type check: `Type: Expr`
pub struct TypeCheck {
    pub ty: syn::Type,
    pub expr: BoolExpr,
}

impl Parse for TypeCheck {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty: syn::Type = input.parse()?;
        input.parse::<syn::Token![:]>()?;
        let expr: BoolExpr = input.parse()?;
        Ok(TypeCheck { ty, expr })
    }
}

/// Input for `probe!`: one or more type checks
pub struct ProbeInput {
    pub checks: Vec<TypeCheck>,
}

impl Parse for ProbeInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut checks = Vec::new();

        // Parse first check (required)
        checks.push(input.parse()?);

        // Parse additional checks separated by commas
        while input.peek(syn::Token![,]) {
            input.parse::<syn::Token![,]>()?;
            if input.is_empty() {
                break;
            }
            checks.push(input.parse()?);
        }

        Ok(ProbeInput { checks })
    }
}

pub fn expand_probe(input: ProbeInput) -> TokenStream {
    if input.checks.len() == 1 {
        let check = &input.checks[0];
        let ty = &check.ty;
        let body = generate_probe_body(&check.expr, ty);

        // Reference the user's type so an unused type alias or import does
        // not warn when the probe is the only use
        quote! {
            {
                let _ = ::core::marker::PhantomData::<#ty>;
                #body
            }
        }
    } else {
        // Multiple checks - AND them together
        let type_refs: Vec<_> = input
            .checks
            .iter()
            .map(|c| {
                let ty = &c.ty;
                quote! { let _ = ::core::marker::PhantomData::<#ty>; }
            })
            .collect();
        let check_exprs: Vec<_> = input
            .checks
            .iter()
            .map(|c| generate_probe_body(&c.expr, &c.ty))
            .collect();

        quote! {
            {
                #(#type_refs)*
                (#(#check_exprs)&&*)
            }
        }
    }
}
