use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{FnArg, ItemFn, Pat, Token, Type, parse_macro_input};

const MAX_ARITY: usize = 7;

// #[function] / #[function(pure)]
// Declares a native callback for expressions. Every parameter must be a plain
// `f64` identifier and the return type `f64`. Alongside the function this
// emits a braced marker struct with the same name (type namespace only, so it
// does not clash with the fn), implementing `exprtree::NativeFunction`, and
// submits an `exprtree::FnMeta` to the inventory registry.
#[proc_macro_attribute]
pub fn function(attr: TokenStream, item: TokenStream) -> TokenStream {
    let flags = match Punctuated::<syn::Ident, Token![,]>::parse_terminated.parse(attr) {
        Ok(flags) => flags,
        Err(e) => return e.to_compile_error().into(),
    };
    let mut pure = false;
    for flag in &flags {
        if flag == "pure" {
            pure = true;
        } else {
            return syn::Error::new_spanned(flag, "unknown #[function] option, expected `pure`")
                .to_compile_error()
                .into();
        }
    }

    let func = parse_macro_input!(item as ItemFn);
    let sig = &func.sig;
    let ident = &sig.ident;
    let vis = &func.vis;

    // Verify return type is f64
    let ret_ok = match &sig.output {
        syn::ReturnType::Type(_, ty) => matches!(**ty, Type::Path(ref tp) if tp.path.is_ident("f64")),
        syn::ReturnType::Default => false,
    };
    if !ret_ok {
        return syn::Error::new_spanned(&sig.output, "#[function] requires return type f64")
            .to_compile_error()
            .into();
    }

    if !sig.generics.params.is_empty() {
        return syn::Error::new_spanned(&sig.generics, "#[function] does not support generic functions")
            .to_compile_error()
            .into();
    }
    if sig.asyncness.is_some() || sig.unsafety.is_some() || sig.abi.is_some() {
        return syn::Error::new_spanned(sig, "#[function] requires a plain safe Rust fn")
            .to_compile_error()
            .into();
    }

    for input in &sig.inputs {
        match input {
            FnArg::Typed(pt) => {
                if !matches!(&*pt.pat, Pat::Ident(_)) {
                    return syn::Error::new_spanned(&pt.pat, "#[function] requires simple identifier parameters")
                        .to_compile_error()
                        .into();
                }
                if !matches!(&*pt.ty, Type::Path(tp) if tp.path.is_ident("f64")) {
                    return syn::Error::new_spanned(&pt.ty, "#[function] only supports f64 parameters")
                        .to_compile_error()
                        .into();
                }
            }
            FnArg::Receiver(_) => {
                return syn::Error::new_spanned(input, "#[function] does not support receiver parameters")
                    .to_compile_error()
                    .into();
            }
        }
    }

    let arity = sig.inputs.len();
    if arity > MAX_ARITY {
        return syn::Error::new_spanned(&sig.inputs, "#[function] supports at most 7 parameters")
            .to_compile_error()
            .into();
    }

    let name_str = ident.to_string();
    let variant = format_ident!("F{}", arity);

    let output = quote! {
        #func

        #[allow(non_camel_case_types, dead_code)]
        #vis struct #ident {}

        impl ::exprtree::NativeFunction for #ident {
            const NAME: &'static str = #name_str;
            const PURE: bool = #pure;
            fn native() -> ::exprtree::Native {
                ::exprtree::Native::#variant(#ident)
            }
        }

        ::exprtree::inventory::submit! {
            ::exprtree::FnMeta {
                name: #name_str,
                native: ::exprtree::Native::#variant(#ident),
                pure: #pure,
                mod_path: module_path!(),
            }
        }
    };

    output.into()
}
