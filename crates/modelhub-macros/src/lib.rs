mod backends;

use backends::{parse_backends_attr, variant_ident};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, parse_macro_input};

fn compile_errors(errors: Vec<Error>) -> proc_macro2::TokenStream {
    errors
        .into_iter()
        .map(|err| err.to_compile_error())
        .collect()
}

/// Builds the empty value of the placeholder, whatever the shape of its (private) fields.
fn placeholder_body(fields: &Fields) -> proc_macro2::TokenStream {
    match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|field| &field.ident);
            quote! { Self { #(#names: ::core::default::Default::default()),* } }
        }
        Fields::Unnamed(unnamed) => {
            let values = unnamed
                .unnamed
                .iter()
                .map(|_| quote! { ::core::default::Default::default() });
            quote! { Self(#(#values),*) }
        }
        Fields::Unit => quote! { Self },
    }
}

pub(crate) fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Vec<Error>> {
    let mut errors = Vec::<Error>::new();
    let ident = &input.ident;

    let backends = parse_backends_attr(&input.attrs, ident.span(), &mut errors);

    if !input.generics.params.is_empty() {
        errors.push(Error::new_spanned(
            &input.generics,
            "Placeholder objects cannot be generic.",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data) => Some(&data.fields),
        _ => {
            errors.push(Error::new(
                ident.span(),
                "`DummyObject` can only be derived for structs.",
            ));
            None
        }
    };

    let (Some(fields), true) = (fields, errors.is_empty()) else {
        return Err(errors);
    };

    let name = syn::LitStr::new(&ident.to_string(), ident.span());
    let variants = backends.into_iter().map(variant_ident);
    let body = placeholder_body(fields);

    Ok(quote! {
        impl ::modelhub_backends::DummyObject for #ident {
            const NAME: &'static str = #name;
            const BACKENDS: &'static [::modelhub_backends::Backend] =
                &[#(::modelhub_backends::Backend::#variants),*];

            fn placeholder(_: ::modelhub_backends::Checked) -> Self {
                #body
            }
        }

        impl #ident {
            /// Fails with a `MissingBackendError` unless every backend this object requires is
            /// enabled. `args` is ignored.
            pub fn new<A>(
                args: A,
            ) -> ::core::result::Result<Self, ::modelhub_backends::MissingBackendError> {
                <Self as ::modelhub_backends::DummyObject>::new(args)
            }

            /// Same as `new`, asking `oracle` which backends are available.
            pub fn new_with<O, A>(
                oracle: &O,
                args: A,
            ) -> ::core::result::Result<Self, ::modelhub_backends::MissingBackendError>
            where
                O: ::modelhub_backends::BackendOracle + ?Sized,
            {
                <Self as ::modelhub_backends::DummyObject>::new_with(oracle, args)
            }

            /// Name of the object this placeholder stands for.
            pub fn name() -> &'static str {
                <Self as ::modelhub_backends::DummyObject>::NAME
            }

            /// Backends required by the real object, in declaration order.
            pub fn backends() -> &'static [::modelhub_backends::Backend] {
                <Self as ::modelhub_backends::DummyObject>::BACKENDS
            }
        }
    })
}

/// Turns a struct into a placeholder object requiring the backends listed in `#[backends(...)]`.
///
/// ```ignore
/// #[derive(Debug, DummyObject)]
/// #[backends(timm, vision)]
/// pub struct DetrModel {
///     _private: (),
/// }
/// ```
#[proc_macro_derive(DummyObject, attributes(backends))]
pub fn derive_dummy_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(code) => code.into(),
        Err(errors) => compile_errors(errors).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn contains(code: &proc_macro2::TokenStream, fragment: proc_macro2::TokenStream) -> bool {
        code.to_string().contains(&fragment.to_string())
    }

    #[test]
    fn expands_named_struct() {
        let input: DeriveInput = parse_quote! {
            #[backends(timm, vision)]
            pub struct DetrModel { _private: () }
        };
        let code = expand(&input).unwrap();

        assert!(contains(&code, quote! { const NAME: &'static str = "DetrModel"; }));
        assert!(contains(
            &code,
            quote! { &[::modelhub_backends::Backend::Timm, ::modelhub_backends::Backend::Vision] }
        ));
        assert!(contains(
            &code,
            quote! { Self { _private: ::core::default::Default::default() } }
        ));
    }

    #[test]
    fn expands_unit_struct() {
        let input: DeriveInput = parse_quote! {
            #[backends(speech)]
            pub struct Wav2Vec2Processor;
        };
        let code = expand(&input).unwrap();
        assert!(contains(
            &code,
            quote! { fn placeholder(_: ::modelhub_backends::Checked) -> Self { Self } }
        ));
    }

    #[test]
    fn rejects_generics_and_enums_together_with_attribute_errors() {
        let input: DeriveInput = parse_quote! {
            #[backends()]
            pub enum DetrModel<T> { A(T) }
        };
        let errors = expand(&input).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
