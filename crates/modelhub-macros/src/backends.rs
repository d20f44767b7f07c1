use modelhub_backends::Backend;
use proc_macro2::{Ident, Span};
use syn::{Attribute, Error, Token, punctuated::Punctuated, spanned::Spanned};

const BACKENDS_ATTR: &str = "backends";

/// Reads the `#[backends(...)]` attribute of a placeholder.
///
/// Every problem found is pushed to `errors` so they can be reported together.
pub(crate) fn parse_backends_attr(
    attrs: &[Attribute],
    item_span: Span,
    errors: &mut Vec<Error>,
) -> Vec<Backend> {
    let mut found = attrs
        .iter()
        .filter(|attr| attr.path().is_ident(BACKENDS_ATTR));

    let Some(attr) = found.next() else {
        errors.push(Error::new(
            item_span,
            "Expected a `#[backends(...)]` attribute listing the required backends.",
        ));
        return Vec::new();
    };

    for extra in found {
        errors.push(Error::new_spanned(
            extra,
            "The `#[backends(...)]` attribute can only be given once.",
        ));
    }

    let idents = match attr.parse_args_with(Punctuated::<Ident, Token![,]>::parse_terminated) {
        Ok(idents) => idents,
        Err(err) => {
            errors.push(err);
            return Vec::new();
        }
    };

    if idents.is_empty() {
        errors.push(Error::new(
            attr.span(),
            "A placeholder must require at least one backend.",
        ));
    }

    let mut backends = Vec::with_capacity(idents.len());
    for ident in idents {
        match ident.to_string().parse::<Backend>() {
            Ok(backend) if backends.contains(&backend) => errors.push(Error::new(
                ident.span(),
                format!("Backend `{ident}` is listed more than once."),
            )),
            Ok(backend) => backends.push(backend),
            Err(_) => errors.push(Error::new(
                ident.span(),
                format!("Unknown backend `{ident}`."),
            )),
        }
    }

    backends
}

/// The `Backend` variant identifier, e.g. `Timm` for `timm`.
pub(crate) fn variant_ident(backend: Backend) -> Ident {
    Ident::new(&format!("{backend:?}"), Span::call_site())
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{DeriveInput, parse_quote};

    fn parse(input: DeriveInput) -> (Vec<Backend>, Vec<Error>) {
        let mut errors = Vec::new();
        let backends = parse_backends_attr(&input.attrs, input.ident.span(), &mut errors);
        (backends, errors)
    }

    #[test]
    fn keeps_declaration_order() {
        let (backends, errors) = parse(parse_quote! {
            #[backends(vision, timm)]
            pub struct DetrModel { _private: () }
        });
        assert!(errors.is_empty());
        assert_eq!(backends, vec![Backend::Vision, Backend::Timm]);
    }

    #[test]
    fn missing_attribute() {
        let (backends, errors) = parse(parse_quote! {
            pub struct DetrModel;
        });
        assert!(backends.is_empty());
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn empty_list() {
        let (_, errors) = parse(parse_quote! {
            #[backends()]
            pub struct DetrModel;
        });
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("at least one backend"));
    }

    #[test]
    fn unknown_and_duplicate_backends() {
        let (backends, errors) = parse(parse_quote! {
            #[backends(timm, pillow, timm)]
            pub struct DetrModel;
        });
        assert_eq!(backends, vec![Backend::Timm]);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains("Unknown backend `pillow`"));
        assert!(errors[1].to_string().contains("more than once"));
    }

    #[test]
    fn variant_names() {
        assert_eq!(variant_ident(Backend::Timm).to_string(), "Timm");
        assert_eq!(variant_ident(Backend::Sentencepiece).to_string(), "Sentencepiece");
    }
}
