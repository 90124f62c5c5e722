//! Mapper registration macro.
//!
//! `#[mapper]` leaves the annotated function untouched and submits it to the
//! distributed registration list so that a registry can collect it later.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    FnArg, GenericArgument, Ident, ItemFn, PathArguments, ReturnType, Token, Type,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments for the `#[mapper]` macro.
pub(crate) struct MapperArgs {
    /// The function returns `Result<D, E>` instead of `D`.
    pub fallible: bool,
}

impl Parse for MapperArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut fallible = false;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "fallible" => fallible = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(MapperArgs { fallible })
    }
}

/// Extract `D` from a `Result<D, E>` return type.
///
/// Accepts any path ending in `Result`, so `std::io::Result<D>` and crate
/// aliases such as `anyhow::Result<D>` work too.
fn ok_type(ty: &Type) -> syn::Result<&Type> {
    if let Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Result"
        && let PathArguments::AngleBracketed(generics) = &segment.arguments
        && let Some(GenericArgument::Type(ok)) = generics.args.first()
    {
        return Ok(ok);
    }
    Err(syn::Error::new_spanned(
        ty,
        "fallible mapper must return `Result<Destination, Error>`",
    ))
}

pub(crate) fn mapper_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as MapperArgs);
    let input = parse_macro_input!(item as ItemFn);

    match expand(&args, &input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(args: &MapperArgs, input: &ItemFn) -> syn::Result<proc_macro2::TokenStream> {
    let fn_name = &input.sig.ident;

    if input.sig.asyncness.is_some() {
        return Err(syn::Error::new_spanned(
            input.sig.asyncness,
            "mapper functions must be synchronous",
        ));
    }
    if !input.sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.sig.generics,
            "mapper functions cannot be generic",
        ));
    }

    let inputs = &input.sig.inputs;
    let source_type = match inputs.first() {
        Some(FnArg::Typed(pat_type)) => &pat_type.ty,
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new_spanned(
                receiver,
                "mapper cannot have a self parameter",
            ));
        }
        None => {
            return Err(syn::Error::new_spanned(
                &input.sig,
                "mapper must take the source value as its first argument",
            ));
        }
    };
    let takes_args = match inputs.len() {
        1 => false,
        2 => true,
        _ => {
            return Err(syn::Error::new_spanned(
                inputs,
                "mapper must be `fn(Source) -> Destination` or `fn(Source, &Args) -> Destination`",
            ));
        }
    };

    let return_type = match &input.sig.output {
        ReturnType::Type(_, ty) => ty.as_ref(),
        ReturnType::Default => {
            return Err(syn::Error::new_spanned(
                &input.sig,
                "mapper must return the destination value",
            ));
        }
    };
    let destination_type = if args.fallible {
        ok_type(return_type)?
    } else {
        return_type
    };

    let call = if takes_args {
        quote! { #fn_name(value, args) }
    } else {
        quote! { #fn_name(value) }
    };
    let body = if args.fallible {
        quote! { #call }
    } else {
        quote! { ::core::result::Result::Ok::<_, ::core::convert::Infallible>(#call) }
    };

    let key_fn = format_ident!("__convey_key_{}", fn_name);
    let build_fn = format_ident!("__convey_build_{}", fn_name);

    Ok(quote! {
        #input

        const _: () = {
            #[allow(non_snake_case)]
            fn #key_fn() -> ::convey::TypePairKey {
                ::convey::TypePairKey::of::<#destination_type, #source_type>()
            }

            #[allow(non_snake_case)]
            fn #build_fn() -> ::std::sync::Arc<dyn ::convey::ErasedConverter> {
                ::std::sync::Arc::new(
                    ::convey::TypedConverter::<#destination_type, #source_type, _, _>::new(
                        |value: #source_type, args: &::convey::Args| {
                            let _ = &args;
                            #body
                        },
                    ),
                )
            }

            ::convey::inventory::submit! {
                ::convey::MapperRegistration::new(#key_fn, #build_fn)
            }
        };
    })
}
