//! Code generation for the color models in `chromata`.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

/// Generate a color model from a struct with one named field per color
/// component.
///
/// Models with three components get `new`, `to_components` and a
/// `From<Components>` implementation. Every model gets an implementation of
/// `Model` as long as it also implements `HasSpace`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    let field_count = input.fields.len();
    if field_count != 3 && field_count != 4 {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != field_count {
        return quote! {
            compile_error!("Model components must be named fields.")
        }
        .into();
    }

    // Components are always accessible by name.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Debug)]
    });

    let mut phantom_fields: Vec<syn::Ident> = vec![];

    if let syn::Fields::Named(ref mut named) = input.fields {
        let generic_idents = input
            .generics
            .params
            .iter()
            .filter_map(|g| match g {
                syn::GenericParam::Type(type_param) => Some(type_param.ident.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();

        for ident in generic_idents {
            let field_name = format!("_{}", ident.to_string().to_lowercase());
            let field_name = syn::Ident::new(field_name.as_str(), Span::call_site());
            phantom_fields.push(field_name.clone());

            let field: syn::FieldsNamed = syn::parse_quote! {
                { #field_name: std::marker::PhantomData<#ident> }
            };
            named.named.extend(field.named);
        }
    }

    let struct_name = input.ident.clone();
    let (impl_gen, type_gen, where_clause) = input.generics.split_for_impl();
    let indices = (0..field_count).map(syn::Index::from).collect::<Vec<_>>();

    let new_impl = quote! {
        impl #impl_gen #struct_name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self {
                    #(#field_names,)*
                    #(#phantom_fields: std::marker::PhantomData,)*
                }
            }
        }
    };

    let components_impl = if field_count == 3 {
        let (f0, f1, f2) = (&field_names[0], &field_names[1], &field_names[2]);
        quote! {
            impl #impl_gen #struct_name #type_gen #where_clause {
                /// Convert this model into generic components.
                pub fn to_components(&self) -> crate::color::Components {
                    crate::color::Components(self.#f0, self.#f1, self.#f2)
                }
            }

            impl #impl_gen From<crate::color::Components> for #struct_name #type_gen #where_clause {
                fn from(value: crate::color::Components) -> Self {
                    Self::new(value.0, value.1, value.2)
                }
            }
        }
    } else {
        quote! {}
    };

    let model_impl = quote! {
        impl #impl_gen crate::models::Model for #struct_name #type_gen
        where
            Self: crate::color::HasSpace
        {
            fn to_color(&self, alpha: Option<crate::color::Component>) -> crate::color::Color {
                crate::color::Color::from_values(
                    <Self as crate::color::HasSpace>::SPACE,
                    &[#(crate::math::nan_to_none(self.#field_names)),*],
                    alpha,
                )
            }

            fn from_color(color: &crate::color::Color) -> Self {
                let values = color.raw_values();
                Self::new(#(values[#indices]),*)
            }
        }
    };

    quote! {
        #input
        #new_impl
        #components_impl
        #model_impl
    }
    .into()
}
