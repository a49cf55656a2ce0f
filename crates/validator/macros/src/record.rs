use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input, parse_quote};

use crate::support::{attrs, diag, utils};

/// Attribute read on fields.
const ATTR: &str = "tag";
/// Flag that leaves a field out of the record.
const SKIP: &str = "skip";

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts,
        Err(e) => diag::to_compile_error(e),
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let named = utils::require_named_fields(&input)?;

    let mut descriptors = Vec::new();
    let mut value_types = Vec::new();

    for field in &named.named {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let args = attrs::parse_attrs(&field.attrs, ATTR)?;
        if args.has_flag(SKIP) {
            continue;
        }

        let name = utils::ident_name(ident);
        let (tags, specs): (Vec<_>, Vec<_>) = args
            .string_pairs(&[SKIP])?
            .into_iter()
            .map(|(tag, spec)| (utils::ident_name(&tag), spec))
            .unzip();

        descriptors.push(quote! {
            ::tagcheck_validator::record::Field::new(
                #name,
                ::tagcheck_validator::value::ToValue::to_value(&self.#ident),
            )
            #(.with_tag(#tags, #specs))*
        });
        value_types.push(field.ty.clone());
    }

    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let where_clause = generics.make_where_clause();
        for ty in &value_types {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::tagcheck_validator::value::ToValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::tagcheck_validator::record::Record for #struct_name #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::tagcheck_validator::record::Field> {
                ::std::vec![#(#descriptors),*]
            }
        }
    };

    Ok(expanded.into())
}
