use syn::{
    Attribute, Ident, Lit, LitStr, Meta, Result, Token,
    ext::IdentExt,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

use crate::support::diag;

/// Arguments collected from one or more `#[name(...)]` attributes.
#[derive(Debug, Clone, Default)]
pub struct AttrArgs {
    pub items: Vec<AttrItem>,
}

#[derive(Debug, Clone)]
pub enum AttrItem {
    /// A bare word like `skip`.
    Flag(Ident),
    /// `key = <literal>`
    KeyValue { key: Ident, value: Lit },
}

impl AttrItem {
    fn key(&self) -> &Ident {
        match self {
            Self::Flag(key) | Self::KeyValue { key, .. } => key,
        }
    }
}

impl AttrArgs {
    pub fn has_flag(&self, flag: &str) -> bool {
        self.items
            .iter()
            .any(|item| matches!(item, AttrItem::Flag(f) if f == flag))
    }

    /// Every `key = "..."` pair in declaration order.
    ///
    /// Flags other than those in `flags`, non-string values and repeated keys
    /// are errors.
    pub fn string_pairs(&self, flags: &[&str]) -> Result<Vec<(Ident, LitStr)>> {
        let mut pairs: Vec<(Ident, LitStr)> = Vec::new();
        for item in &self.items {
            match item {
                AttrItem::Flag(flag) => {
                    if !flags.iter().any(|known| flag == known) {
                        return Err(diag::error_spanned(
                            flag,
                            format!("unknown flag `{flag}`, expected `{flag} = \"...\"`"),
                        ));
                    }
                }
                AttrItem::KeyValue { key, value } => {
                    let Lit::Str(spec) = value else {
                        return Err(diag::error_spanned(
                            value,
                            format!("expected a string literal for `{key}`"),
                        ));
                    };
                    if pairs.iter().any(|(seen, _)| seen == key) {
                        return Err(diag::error_spanned(
                            item.key(),
                            format!("duplicate key `{key}`"),
                        ));
                    }
                    pairs.push((key.clone(), spec.clone()));
                }
            }
        }
        Ok(pairs)
    }
}

/// Parses one attribute if its path is `expected`.
pub fn parse_attr(attr: &Attribute, expected: &str) -> Result<Option<AttrArgs>> {
    if !attr.path().is_ident(expected) {
        return Ok(None);
    }

    match &attr.meta {
        Meta::Path(_) => Ok(Some(AttrArgs::default())),
        Meta::List(list) => {
            let args = syn::parse2::<AttrArgsParser>(list.tokens.clone())?;
            Ok(Some(args.0))
        }
        Meta::NameValue(nv) => Err(diag::error_spanned(
            nv,
            format!("#[{expected}] must be #[{expected}(...)] or #[{expected}] (not name-value)"),
        )),
    }
}

/// Parses and merges every `#[name(...)]` attribute in `attrs`.
pub fn parse_attrs(attrs: &[Attribute], name: &str) -> Result<AttrArgs> {
    let mut result = AttrArgs::default();

    for attr in attrs {
        if let Some(args) = parse_attr(attr, name)? {
            result.items.extend(args.items);
        }
    }

    Ok(result)
}

struct AttrArgsParser(AttrArgs);

impl Parse for AttrArgsParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let items = Punctuated::<AttrItemParser, Token![,]>::parse_terminated(input)?
            .into_iter()
            .map(|x| x.0)
            .collect();
        Ok(Self(AttrArgs { items }))
    }
}

struct AttrItemParser(AttrItem);

impl Parse for AttrItemParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.call(Ident::parse_any)?;

        if input.peek(Token![=]) {
            input.parse::<Token![=]>()?;
            let value: Lit = input.parse()?;
            return Ok(Self(AttrItem::KeyValue { key, value }));
        }

        Ok(Self(AttrItem::Flag(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parse(tokens: proc_macro2::TokenStream) -> AttrArgs {
        syn::parse2::<AttrArgsParser>(tokens).unwrap().0
    }

    #[test]
    fn parses_pairs_and_flags() {
        let args = parse(quote!(valid = "required|min:2", strict = "alpha", skip));
        assert!(args.has_flag("skip"));

        let pairs = args.string_pairs(&["skip"]).unwrap();
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.value()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("valid".to_owned(), "required|min:2".to_owned()),
                ("strict".to_owned(), "alpha".to_owned()),
            ]
        );
    }

    #[test]
    fn keyword_keys_are_accepted() {
        let args = parse(quote!(type = "int"));
        assert_eq!(args.string_pairs(&[]).unwrap()[0].0, "type");
    }

    #[test]
    fn rejects_bad_items() {
        assert!(parse(quote!(valid = 3)).string_pairs(&[]).is_err());
        assert!(parse(quote!(hidden)).string_pairs(&["skip"]).is_err());
        assert!(parse(quote!(a = "x", a = "y")).string_pairs(&[]).is_err());
    }

    #[test]
    fn empty_attribute() {
        assert!(parse(quote!()).items.is_empty());
    }
}
