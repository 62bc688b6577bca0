//! Rendering of a [`Synthesis`] plan to Rust tokens.
//!
//! Generated code refers to the runtime crate through a configurable path (`crate` when the output is included
//! into the facade crate itself) and never uses inner attributes, so it can be pulled in with `include!`.

use crate::naming;
use crate::registry::{KindDecl, KindId, Registry};
use crate::synthesis::{BinaryEmission, BinaryOp, Form, Synthesis, UnaryEmission, UnaryOp};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use qdim_core::Dimensions;
use quote::{format_ident, quote};

/// Emission settings.
#[derive(Clone, Debug)]
pub struct EmitOptions {
    /// Path of the crate exporting `Quantity`, `Dimensions`, `Kind`, ... as seen from the generated code.
    pub runtime_path: String,
    /// Cargo feature gating `serde` derives on generated kinds; `None` disables them.
    pub serde_feature: Option<String>,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            runtime_path: "crate".to_string(),
            serde_feature: None,
        }
    }
}

/// Renders every kind of `registry` plus the operators in `plan`.
pub fn render(registry: &Registry, plan: &Synthesis, options: &EmitOptions) -> syn::Result<TokenStream> {
    let rt: syn::Path = syn::parse_str(&options.runtime_path)?;
    let ctx = Context {
        registry,
        rt: quote!(#rt),
        serde_feature: options.serde_feature.as_deref(),
    };

    let kinds = registry.ids().map(|id| ctx.kind(id));
    let binary = plan.binary.iter().map(|e| ctx.binary(e));
    let named_traits = plan
        .named_binary_traits()
        .into_iter()
        .map(|(op, result)| ctx.named_trait(op, result));
    let unary = plan.unary.iter().map(|e| ctx.unary(e));
    let prelude = ctx.prelude(plan);
    let table = ctx.table();

    Ok(quote! {
        #(#kinds)*
        #(#named_traits)*
        #(#binary)*
        #(#unary)*
        #prelude
        #table
    })
}

struct Context<'a> {
    registry: &'a Registry,
    rt: TokenStream,
    serde_feature: Option<&'a str>,
}

impl Context<'_> {
    fn ident(&self, id: KindId) -> Ident {
        Ident::new(self.registry.name(id), Span::call_site())
    }

    fn decl(&self, id: KindId) -> &KindDecl {
        self.registry.get(id)
    }

    // =========================================================================
    // Per kind
    // =========================================================================

    fn kind(&self, id: KindId) -> TokenStream {
        let rt = &self.rt;
        let decl = self.decl(id);
        let name = self.ident(id);
        let name_str = decl.name.as_str();
        let dims = dimensions_literal(rt, decl.dimensions);
        let label = decl.canonical_unit().unwrap_or(name_str);

        let struct_doc = format!(
            "{} (`{}`), stored as an `f64` in canonical units.",
            name_str, decl.dimensions
        );
        let serde_attr = self.serde_feature.map(|feature| {
            quote! {
                #[cfg_attr(
                    feature = #feature,
                    derive(::serde::Serialize, ::serde::Deserialize),
                    serde(transparent)
                )]
            }
        });

        let conversions_trait = format_ident!("{}", naming::conversions_trait(name_str));
        let conversion_methods = decl.conversions.iter().map(|c| {
            let method = Ident::new(&c.name, Span::call_site());
            let ratio = Literal::f64_unsuffixed(c.ratio);
            let doc = format!("The value in {} (1 {} = {} canonical units).", c.name, c.name, c.ratio);
            quote! {
                #[doc = #doc]
                #[inline]
                pub fn #method(self) -> f64 {
                    self.0 / #ratio
                }
            }
        });
        let conversions = (!decl.conversions.is_empty()).then(|| {
            let trait_doc = format!("Constructs [`{}`] values from `f64` in named units.", name_str);
            let signatures = decl.conversions.iter().map(|c| {
                let method = Ident::new(&c.name, Span::call_site());
                let doc = format!("Interprets `self` as {}.", c.name);
                quote! {
                    #[doc = #doc]
                    fn #method(self) -> #name;
                }
            });
            let impls = decl.conversions.iter().map(|c| {
                let method = Ident::new(&c.name, Span::call_site());
                let ratio = Literal::f64_unsuffixed(c.ratio);
                quote! {
                    #[inline]
                    fn #method(self) -> #name {
                        #name(self * #ratio)
                    }
                }
            });
            quote! {
                #[doc = #trait_doc]
                pub trait #conversions_trait {
                    #(#signatures)*
                }

                impl #conversions_trait for f64 {
                    #(#impls)*
                }
            }
        });

        quote! {
            #[doc = #struct_doc]
            #[derive(Clone, Copy, Debug, Default, PartialEq)]
            #serde_attr
            pub struct #name(f64);

            impl #name {
                /// Dimension vector of this kind.
                pub const DIMENSIONS: #rt::Dimensions = #dims;

                /// Wraps a value in canonical units.
                #[inline]
                pub const fn new(value: f64) -> Self {
                    Self(value)
                }

                /// The value in canonical units.
                #[inline]
                pub const fn value(self) -> f64 {
                    self.0
                }

                /// Converts a runtime quantity, failing when its dimensions differ.
                #[inline]
                pub fn from_quantity(
                    quantity: #rt::Quantity,
                ) -> ::core::result::Result<Self, #rt::DimensionMismatch> {
                    <Self as #rt::Kind>::try_from_quantity(quantity)
                }

                /// Rounds up.
                #[inline]
                pub fn ceil(self) -> Self {
                    Self(#rt::float::ceil(self.0))
                }

                /// Rounds down.
                #[inline]
                pub fn floor(self) -> Self {
                    Self(#rt::float::floor(self.0))
                }

                /// Rounds towards zero.
                #[inline]
                pub fn truncate(self) -> Self {
                    Self(#rt::float::trunc(self.0))
                }

                /// Rounds to the nearest integer, ties to even.
                #[inline]
                pub fn round(self) -> Self {
                    Self(#rt::float::round(self.0))
                }

                /// Absolute value.
                #[inline]
                pub fn abs(self) -> Self {
                    Self(#rt::float::abs(self.0))
                }

                /// Minimum; a NaN operand is returned as-is.
                #[inline]
                pub fn min(self, other: Self) -> Self {
                    Self(#rt::scalar::min(self.0, other.0))
                }

                /// Maximum; a NaN operand is returned as-is.
                #[inline]
                pub fn max(self, other: Self) -> Self {
                    Self(#rt::scalar::max(self.0, other.0))
                }

                /// Snaps the value to `min` or `max`, see `scalar::cut_range`.
                #[inline]
                pub fn cut_range(self, min: f64, max: f64) -> Self {
                    Self(#rt::scalar::cut_range(self.0, min, max))
                }

                /// Remaps the value between ranges, see `scalar::map`.
                #[inline]
                pub fn map(self, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> Self {
                    Self(#rt::scalar::map(self.0, old_min, old_max, new_min, new_max))
                }

                #(#conversion_methods)*
            }

            #conversions

            impl #rt::Kind for #name {
                const NAME: &'static str = #name_str;
                const DIMENSIONS: #rt::Dimensions = #dims;

                #[inline]
                fn from_value(value: f64) -> Self {
                    Self(value)
                }

                #[inline]
                fn value(self) -> f64 {
                    self.0
                }
            }

            impl ::core::fmt::Display for #name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&self.0, f)?;
                    f.write_str(concat!(" ", #label))
                }
            }

            impl ::core::cmp::PartialOrd for #name {
                #[inline]
                fn partial_cmp(&self, other: &Self) -> ::core::option::Option<::core::cmp::Ordering> {
                    self.0.partial_cmp(&other.0)
                }
            }

            impl ::core::ops::Add for #name {
                type Output = #name;
                #[inline]
                fn add(self, rhs: #name) -> #name {
                    #name(self.0 + rhs.0)
                }
            }

            impl ::core::ops::Sub for #name {
                type Output = #name;
                #[inline]
                fn sub(self, rhs: #name) -> #name {
                    #name(self.0 - rhs.0)
                }
            }

            impl ::core::ops::AddAssign for #name {
                #[inline]
                fn add_assign(&mut self, rhs: #name) {
                    self.0 += rhs.0;
                }
            }

            impl ::core::ops::SubAssign for #name {
                #[inline]
                fn sub_assign(&mut self, rhs: #name) {
                    self.0 -= rhs.0;
                }
            }

            impl ::core::ops::Neg for #name {
                type Output = #name;
                #[inline]
                fn neg(self) -> #name {
                    #name(-self.0)
                }
            }

            impl ::core::ops::Mul<f64> for #name {
                type Output = #name;
                #[inline]
                fn mul(self, rhs: f64) -> #name {
                    #name(self.0 * rhs)
                }
            }

            impl ::core::ops::Mul<#name> for f64 {
                type Output = #name;
                #[inline]
                fn mul(self, rhs: #name) -> #name {
                    #name(self * rhs.0)
                }
            }

            impl ::core::ops::Div<f64> for #name {
                type Output = #name;
                #[inline]
                fn div(self, rhs: f64) -> #name {
                    #name(self.0 / rhs)
                }
            }

            impl ::core::convert::From<#name> for #rt::Quantity {
                #[inline]
                fn from(value: #name) -> Self {
                    #rt::Quantity::new(#name::DIMENSIONS, value.0)
                }
            }

            impl ::core::convert::TryFrom<#rt::Quantity> for #name {
                type Error = #rt::DimensionMismatch;
                #[inline]
                fn try_from(quantity: #rt::Quantity) -> ::core::result::Result<Self, Self::Error> {
                    #name::from_quantity(quantity)
                }
            }
        }
    }

    // =========================================================================
    // Synthesized operations
    // =========================================================================

    fn named_trait_ident(&self, op: BinaryOp, result: KindId) -> Ident {
        format_ident!("{}{}", op.named_prefix(), self.registry.name(result))
    }

    fn named_method_ident(&self, prefix: &str, result: KindId) -> Ident {
        format_ident!("{}_{}", prefix, naming::snake_case(self.registry.name(result)))
    }

    fn named_trait(&self, op: BinaryOp, result: KindId) -> TokenStream {
        let trait_name = self.named_trait_ident(op, result);
        let method = self.named_method_ident(&op.named_prefix().to_lowercase(), result);
        let result_ty = self.ident(result);
        let doc = format!(
            "`{}` producing [`{}`] where the operator yields another kind with the same dimensions.",
            op.symbol(),
            self.registry.name(result)
        );
        let method_doc = format!(
            "`self {} rhs` as [`{}`].",
            op.symbol(),
            self.registry.name(result)
        );
        quote! {
            #[doc = #doc]
            pub trait #trait_name<Rhs> {
                #[doc = #method_doc]
                fn #method(self, rhs: Rhs) -> #result_ty;
            }
        }
    }

    fn binary(&self, emission: &BinaryEmission) -> TokenStream {
        let lhs = self.ident(emission.lhs);
        let rhs = self.ident(emission.rhs);
        let result = self.ident(emission.result);
        let body = match emission.op {
            BinaryOp::Mul => quote!(#result(self.0 * rhs.0)),
            BinaryOp::Div => quote!(#result(self.0 / rhs.0)),
        };

        match emission.form {
            Form::Operator => {
                let (op_trait, method) = match emission.op {
                    BinaryOp::Mul => (quote!(::core::ops::Mul), quote!(mul)),
                    BinaryOp::Div => (quote!(::core::ops::Div), quote!(div)),
                };
                quote! {
                    impl #op_trait<#rhs> for #lhs {
                        type Output = #result;
                        #[inline]
                        fn #method(self, rhs: #rhs) -> #result {
                            #body
                        }
                    }
                }
            }
            Form::Named => {
                let trait_name = self.named_trait_ident(emission.op, emission.result);
                let method =
                    self.named_method_ident(&emission.op.named_prefix().to_lowercase(), emission.result);
                quote! {
                    impl #trait_name<#rhs> for #lhs {
                        #[inline]
                        fn #method(self, rhs: #rhs) -> #result {
                            #body
                        }
                    }
                }
            }
        }
    }

    fn unary(&self, emission: &UnaryEmission) -> TokenStream {
        let operand = self.ident(emission.operand);
        let result = self.ident(emission.result);
        let rt = &self.rt;
        let body = match emission.op {
            UnaryOp::Sqrt => quote!(#result(#rt::float::sqrt(self.0))),
            UnaryOp::Squared => quote!(#result(self.0 * self.0)),
            UnaryOp::Cubed => quote!(#result(self.0 * self.0 * self.0)),
            UnaryOp::Inverse => quote!(#result(1.0 / self.0)),
        };

        match (emission.op, emission.form) {
            (UnaryOp::Inverse, Form::Operator) => quote! {
                impl ::core::ops::Div<#operand> for f64 {
                    type Output = #result;
                    #[inline]
                    fn div(self, rhs: #operand) -> #result {
                        #result(self / rhs.0)
                    }
                }
            },
            (op, form) => {
                let method = match form {
                    Form::Operator => format_ident!("{}", op.method()),
                    Form::Named => self.named_method_ident(op.method(), emission.result),
                };
                let doc = format!(
                    "{} as [`{}`].",
                    capitalize(op.verb()),
                    self.registry.name(emission.result)
                );
                quote! {
                    impl #operand {
                        #[doc = #doc]
                        #[inline]
                        pub fn #method(self) -> #result {
                            #body
                        }
                    }
                }
            }
        }
    }

    // =========================================================================
    // Module level
    // =========================================================================

    fn prelude(&self, plan: &Synthesis) -> TokenStream {
        let conversion_traits = self
            .registry
            .kinds()
            .iter()
            .filter(|k| !k.conversions.is_empty())
            .map(|k| format_ident!("{}", naming::conversions_trait(&k.name)));
        let named_traits = plan
            .named_binary_traits()
            .into_iter()
            .map(|(op, result)| self.named_trait_ident(op, result));
        let exports: Vec<Ident> = conversion_traits.chain(named_traits).collect();

        let body = (!exports.is_empty()).then(|| quote!(pub use super::{#(#exports),*};));
        quote! {
            /// Conversion and named-operation traits, for glob import.
            pub mod prelude {
                #body
            }
        }
    }

    fn table(&self) -> TokenStream {
        let rt = &self.rt;
        let entries = self.registry.ids().map(|id| {
            let decl = self.decl(id);
            let name = self.ident(id);
            let name_str = decl.name.as_str();
            let conversions = decl.conversions.iter().map(|c| {
                let unit = c.name.as_str();
                let ratio = Literal::f64_unsuffixed(c.ratio);
                quote!((#unit, #ratio))
            });
            quote! {
                #rt::KindInfo {
                    name: #name_str,
                    dimensions: #name::DIMENSIONS,
                    conversions: &[#(#conversions),*],
                }
            }
        });
        quote! {
            /// Every generated kind, in declaration order.
            pub static KINDS: &[#rt::KindInfo] = &[#(#entries),*];
        }
    }
}

/// `Dimensions::new(...)` with one suffixed literal per exponent.
fn dimensions_literal(rt: &TokenStream, dimensions: Dimensions) -> TokenStream {
    let exponents = dimensions.to_array().map(f64_literal);
    quote!(#rt::Dimensions::new(#(#exponents),*))
}

/// A finite `f64` as tokens; negative values become a negated positive literal.
fn f64_literal(value: f64) -> TokenStream {
    let literal = Literal::f64_suffixed(value.abs());
    if value.is_sign_negative() && value != 0.0 {
        quote!(-#literal)
    } else {
        quote!(#literal)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
