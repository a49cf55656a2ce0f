use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Returns the named fields of a struct, or an error spanned on the item.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "This derive can only be used on structs",
            ));
        }
    };
    match fields {
        Fields::Named(named) => Ok(named),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "This derive requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            input.ident.span(),
            "This derive requires a non-unit struct with fields",
        )),
    }
}

/// Identifier text without a raw identifier prefix.
pub fn ident_name(ident: &syn::Ident) -> String {
    ident.unraw().to_string()
}
