use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr};

pub fn derive_event(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let event_type = match extract_name(&input) {
        Ok(Some(event_type)) => event_type,
        Ok(None) => name.to_string(),
        Err(err) => return err.to_compile_error().into(),
    };

    let expanded = quote! {
        impl #impl_generics ::sourced_uow::Event for #name #ty_generics #where_clause {
            const EVENT_TYPE: &'static str = #event_type;
        }
    };

    TokenStream::from(expanded)
}

fn extract_name(input: &DeriveInput) -> syn::Result<Option<String>> {
    let mut name = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("event") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                name = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("unsupported event attribute, expected `name = \"...\"`"))
            }
        })?;
    }
    Ok(name)
}
