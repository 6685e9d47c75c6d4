use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DataStruct, DeriveInput, Field, Fields, Ident, LitStr, Token, Type, TypePath,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

struct NodeAttribute {
    crate_path: syn::Path,
}

/// Parses the container attribute in the format: `crate_path = "path::to::crate"`.
impl Parse for NodeAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key: Ident = input.parse()?;
        if key != "crate_path" {
            return Err(syn::Error::new(key.span(), "expected attribute `crate_path`"));
        }

        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        let path: syn::Path = value.parse()?;

        Ok(NodeAttribute { crate_path: path })
    }
}

/// Returns whether a field carries the `#[node(data)]` marker.
fn is_marked_data(field: &Field) -> syn::Result<bool> {
    for attr in &field.attrs {
        if attr.path().is_ident("node") {
            let marker: Ident = attr.parse_args()?;
            if marker != "data" {
                return Err(syn::Error::new(marker.span(), "expected field attribute `data`"));
            }
            return Ok(true);
        }
    }
    Ok(false)
}

/// Derive macro for intrusive list nodes.
///
/// The struct must own a `link: DoubleLink<Self>` field. The payload exposed
/// through `NodeWithData` is the field named `data`, or the one marked with
/// `#[node(data)]`. Any other field is left alone.
#[proc_macro_derive(Node, attributes(node))]
pub fn node_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut crate_path = quote! { ::heni_collections };

    for attr in &input.attrs {
        if attr.path().is_ident("node") {
            match attr.parse_args::<NodeAttribute>() {
                Ok(node_attr) => {
                    let path = node_attr.crate_path;
                    crate_path = quote! { #path };
                    break;
                }
                Err(e) => return e.to_compile_error().into(),
            }
        }
    }

    let intrusive_path = quote! { #crate_path::linked_list::intrusive };

    let mut link_field = None;
    let mut data_field = None;

    if let Data::Struct(DataStruct {
        fields: Fields::Named(ref fields),
        ..
    }) = input.data
    {
        for field in fields.named.iter() {
            let marked = match is_marked_data(field) {
                Ok(marked) => marked,
                Err(e) => return e.to_compile_error().into(),
            };
            let Some(ident) = &field.ident else { continue };
            if ident == "link" {
                link_field = Some(field.clone());
            } else if marked || (ident == "data" && data_field.is_none()) {
                if marked && data_field.as_ref().is_some_and(|(_, was_marked)| *was_marked) {
                    return syn::Error::new_spanned(
                        ident,
                        "only one field may be marked `#[node(data)]`",
                    )
                    .to_compile_error()
                    .into();
                }
                data_field = Some((field.clone(), marked));
            }
        }
    } else {
        return syn::Error::new_spanned(
            input,
            "Node derive macro only supports structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let link_field = match link_field {
        Some(field) => field,
        None => {
            return syn::Error::new_spanned(struct_name, "Struct must have a field named 'link'")
                .to_compile_error()
                .into();
        }
    };
    let link_type = &link_field.ty;

    let type_ident = if let Type::Path(TypePath { path, .. }) = link_type {
        match path.segments.last() {
            Some(segment) => segment.ident.clone(),
            None => {
                return syn::Error::new_spanned(link_type, "Field 'link' must name a type")
                    .to_compile_error()
                    .into();
            }
        }
    } else {
        return syn::Error::new_spanned(link_type, "Field 'link' must be a Link type")
            .to_compile_error()
            .into();
    };

    if type_ident != "DoubleLink" {
        return syn::Error::new_spanned(type_ident, "Field 'link' must be a 'DoubleLink<Self>'")
            .to_compile_error()
            .into();
    }

    // The link field targets `Self`, so forwarding needs no pointer casts.
    let link_impl = quote! {
        impl #impl_generics #intrusive_path::traits::Link for #struct_name #ty_generics #where_clause {
            type Target = Self;

            #[inline]
            fn next(&self) -> Option<::core::ptr::NonNull<Self::Target>> {
                #intrusive_path::traits::Link::next(&self.link)
            }

            #[inline]
            fn set_next(&mut self, next: Option<::core::ptr::NonNull<Self::Target>>) {
                #intrusive_path::traits::Link::set_next(&mut self.link, next);
            }
        }

        impl #impl_generics #intrusive_path::traits::LinkWithPrev for #struct_name #ty_generics #where_clause {
            #[inline]
            fn prev(&self) -> Option<::core::ptr::NonNull<Self>> {
                #intrusive_path::traits::LinkWithPrev::prev(&self.link)
            }

            #[inline]
            fn set_prev(&mut self, prev: Option<::core::ptr::NonNull<Self>>) {
                #intrusive_path::traits::LinkWithPrev::set_prev(&mut self.link, prev);
            }
        }

        impl #impl_generics #intrusive_path::traits::Node for #struct_name #ty_generics #where_clause {}
    };

    let data_impl = if let Some((data_field, _)) = data_field {
        let data_type = &data_field.ty;
        let data_ident = &data_field.ident;
        quote! {
            impl #impl_generics #intrusive_path::traits::NodeWithData for #struct_name #ty_generics #where_clause {
                type Data = #data_type;

                #[inline]
                fn data(&self) -> &Self::Data {
                    &self.#data_ident
                }

                #[inline]
                fn data_mut(&mut self) -> &mut Self::Data {
                    &mut self.#data_ident
                }
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #link_impl
        #data_impl
    };

    TokenStream::from(expanded)
}
