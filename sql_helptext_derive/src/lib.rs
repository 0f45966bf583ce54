//! Contains a derive macro for [`TryFromRow`] which converts from a tiberius Row (or any other `ColumnSource`)
//!
//! The generated code refers to `TryFromRow`, `FromColumn`, `ColumnSource` and `SqlError` unqualified, so they must be in scope (`use sql_helptext_core::*;`)
//!
//! [`TryFromRow`]: ../sql_helptext_core/trait.TryFromRow.html

extern crate proc_macro;

use proc_macro2::{
	TokenStream,
};

use quote::quote;

use syn::{
	parse_macro_input,
	DeriveInput,
};

#[proc_macro_derive(TryFromRow)]
/// A derive macro for [`TryFromRow`] which converts from a tiberius Row
///
/// Field `n` of the struct is read from column `n` of the row
///
/// [`TryFromRow`]: ../sql_helptext_core/trait.TryFromRow.html
pub fn try_from_tiberius_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
	let input = parse_macro_input!(input as DeriveInput);

	// get the name of the type we want to implement the trait for
	let name = &input.ident;
	let generics = &input.generics;
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

	let fields = match &input.data {
		syn::Data::Struct(x) => &x.fields,
		syn::Data::Enum(_) | syn::Data::Union(_) => {
			return syn::Error::new_spanned(&input.ident, "TryFromRow can only be derived for structs")
				.to_compile_error()
				.into();
		},
	};

	let from_row_code = match fields {
		syn::Fields::Named(_) => {
			let tmp : TokenStream = fields
				.iter()
				.filter_map(|v| v.ident.as_ref())
				.enumerate()
				.map(|(i,v)| {
					quote!{ #v : FromColumn::from_column(row, #i)?, }
				}).collect();
			quote!{ Ok(Self { #tmp }) }
		},
		syn::Fields::Unnamed(_) => {
			let tmp : TokenStream = fields
				.iter()
				.enumerate()
				.map(|(i,_v)| {
					quote!{ FromColumn::from_column(row, #i)?, }
				}).collect();
			quote!{ Ok(Self ( #tmp )) }
		},
		syn::Fields::Unit => {
			return quote! {
				impl #impl_generics TryFromRow for #name #ty_generics #where_clause {
					fn from_row<__R: ColumnSource>(_row: &__R) -> ::core::result::Result<Self, SqlError> {
						Ok(Self)
					}
				}
			}.into();
		},
	};

	let expanded = quote! {
		impl #impl_generics TryFromRow for #name #ty_generics #where_clause {
			fn from_row<__R: ColumnSource>(row: &__R) -> ::core::result::Result<Self, SqlError> {
				#from_row_code
			}
		}
	};

	expanded.into()
}
