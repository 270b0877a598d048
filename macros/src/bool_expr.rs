// Boolean expression parsing and evaluation for capability probes

use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    Token, Type,
    parse::{Parse, ParseStream},
};

// =============================================================================
// Boolean Expression AST
// =============================================================================

#[derive(Clone, Debug)]
pub enum BoolExpr {
    Cap(Type),
    And(Box<BoolExpr>, Box<BoolExpr>),
    Or(Box<BoolExpr>, Box<BoolExpr>),
    Not(Box<BoolExpr>),
}

impl Parse for BoolExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        parse_or(input)
    }
}

// Recursive descent parser: Or -> And -> Unary -> Primary

fn parse_or(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_and(input)?;

    while input.peek(Token![|]) {
        input.parse::<Token![|]>()?;
        let rhs = parse_and(input)?;
        lhs = BoolExpr::Or(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_and(input: ParseStream) -> syn::Result<BoolExpr> {
    let mut lhs = parse_unary(input)?;

    while input.peek(Token![&]) {
        input.parse::<Token![&]>()?;
        let rhs = parse_unary(input)?;
        lhs = BoolExpr::And(Box::new(lhs), Box::new(rhs));
    }
    Ok(lhs)
}

fn parse_unary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let operand = parse_unary(input)?;
        Ok(BoolExpr::Not(Box::new(operand)))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: ParseStream) -> syn::Result<BoolExpr> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        content.parse()
    } else {
        // Parse a type (capability name or custom trait path)
        let ty: Type = input.parse()?;
        Ok(BoolExpr::Cap(ty))
    }
}

// =============================================================================
// Capability Name Mapping
// =============================================================================

/// Resolve a capability name to the trait the probe tests.
///
/// Known names map to the `sercaps` capability vocabulary; anything else is
/// taken verbatim as a custom trait path, probe-able on concrete types with
/// zero registration.
fn capability_bound(ty: &Type) -> TokenStream {
    let ty_str = quote!(#ty).to_string().replace(' ', "");
    match ty_str.as_str() {
        "Serialize" => quote! { ::sercaps::caps::Serialize },
        "SerializeMember" | "Member" => quote! { ::sercaps::caps::SerializeMember },
        "CallableSerialize" | "Callable" => quote! { ::sercaps::caps::CallableSerialize },
        "ToText" => quote! { ::sercaps::caps::ToText },
        "Integral" => quote! { ::sercaps::caps::Integral },
        "Floating" => quote! { ::sercaps::caps::Floating },
        _ => quote! { #ty },
    }
}

fn is_arithmetic_name(ty: &Type) -> bool {
    quote!(#ty).to_string().replace(' ', "") == "Arithmetic"
}

// =============================================================================
// Probe Codegen
// =============================================================================

/// Generate the check body for one expression against one type.
///
/// NOT logic: the operator is applied to the retrieved capability status,
/// never pushed into the probe itself; a probe failure already reads as
/// `false`.
pub fn generate_probe_body(expr: &BoolExpr, ty: &Type) -> TokenStream {
    match expr {
        BoolExpr::Cap(cap) if is_arithmetic_name(cap) => {
            // Arithmetic is the derived disjunction of the closed numeric
            // classifications, never an independent probe.
            let integral = generate_single_probe(&quote! { ::sercaps::caps::Integral }, ty);
            let floating = generate_single_probe(&quote! { ::sercaps::caps::Floating }, ty);
            quote! { (#integral || #floating) }
        }
        BoolExpr::Cap(cap) => {
            let bound = capability_bound(cap);
            generate_single_probe(&bound, ty)
        }
        BoolExpr::And(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l && #r) }
        }
        BoolExpr::Or(lhs, rhs) => {
            let l = generate_probe_body(lhs, ty);
            let r = generate_probe_body(rhs, ty);
            quote! { (#l || #r) }
        }
        BoolExpr::Not(operand) => {
            let o = generate_probe_body(operand, ty);
            quote! { (!#o) }
        }
    }
}

/// Generate a single inherent-const fallback probe for one trait bound.
pub fn generate_single_probe(bound: &TokenStream, ty: &Type) -> TokenStream {
    quote! {
        {
            trait __ProbeFallback { const VAL: bool = false; }
            struct __Probe<X: ?Sized>(::core::marker::PhantomData<X>);
            impl<X: ?Sized> __ProbeFallback for __Probe<X> {}
            impl<X: ?Sized + #bound> __Probe<X> { const VAL: bool = true; }
            __Probe::<#ty>::VAL
        }
    }
}
