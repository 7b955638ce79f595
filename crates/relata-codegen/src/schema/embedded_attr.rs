#[derive(Debug, Default)]
pub(crate) struct EmbeddedAttr {
    /// Prepended to the embedded type's column names
    pub(crate) prefix: Option<syn::LitStr>,

    pub(crate) on_empty: OnEmpty,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OnEmpty {
    #[default]
    UseNull,
    UseEmpty,
}

mod kw {
    syn::custom_keyword!(prefix);
    syn::custom_keyword!(on_empty);
    syn::custom_keyword!(use_null);
    syn::custom_keyword!(use_empty);
}

impl EmbeddedAttr {
    /// Parses `#[embedded]` or `#[embedded(prefix = "...", on_empty = use_empty)]`.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<EmbeddedAttr> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(EmbeddedAttr::default()),
            syn::Meta::List(_) => attr.parse_args(),
            syn::Meta::NameValue(_) => Err(syn::Error::new_spanned(
                attr,
                "expected `#[embedded]` or `#[embedded(prefix = \"...\")]`",
            )),
        }
    }
}

impl syn::parse::Parse for EmbeddedAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();
        let mut on_empty_seen = false;

        while !input.is_empty() {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::prefix) {
                if result.prefix.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate embedded prefix"));
                }
                let _kw: kw::prefix = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                result.prefix = Some(input.parse()?);
            } else if lookahead.peek(kw::on_empty) {
                if on_empty_seen {
                    return Err(syn::Error::new(input.span(), "duplicate `on_empty`"));
                }
                on_empty_seen = true;

                let _kw: kw::on_empty = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;

                let lookahead = input.lookahead1();
                if lookahead.peek(kw::use_null) {
                    let _kw: kw::use_null = input.parse()?;
                    result.on_empty = OnEmpty::UseNull;
                } else if lookahead.peek(kw::use_empty) {
                    let _kw: kw::use_empty = input.parse()?;
                    result.on_empty = OnEmpty::UseEmpty;
                } else {
                    return Err(lookahead.error());
                }
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
