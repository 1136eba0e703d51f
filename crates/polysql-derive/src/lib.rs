//! Derive macros for polysql records and enums.
//!
//! `#[derive(Record)]` generates the schema descriptor that statement
//! builders read column lists and keys from. `#[derive(SqlEnum)]` captures
//! enum names, descriptions and string tags for the value formatter.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Expr, Fields, Ident, Lit, LitStr, Meta,
};

/// Derives `polysql_core::record::Record` for a struct with named fields.
///
/// # Attributes
///
/// - `#[table(name = "table_name")]` - Specifies the SQL table name (optional,
///   defaults to snake_case of struct name)
///
/// # Field Attributes
///
/// - `#[column(name = "column_name")]` - SQL column name (defaults to the
///   field name)
/// - `#[column(primary_key)]` - Marks the field as part of the primary key
/// - `#[column(rule = "enum_description | use_varchar_type")]` - Column rule
///   flags, joined with `|`
/// - `#[column(direction = "to_db")]` - `to_db`, `from_db` or `two_way`
///   (the default)
/// - `#[column(skip)]` - Leaves the field unmapped
///
/// Every mapped field type must be `Clone` and implement `ToValue`.
#[proc_macro_derive(Record, attributes(table, column))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_record_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derives `polysql_core::value::SqlEnum` and `ToValue` for a fieldless enum.
///
/// The type must also derive `Clone` and `Copy`.
///
/// # Variant Attributes
///
/// - `#[sql(description = "...")]` - Text used by the `enum_description` rules
/// - `#[sql(string_value = "...")]` - Text used by the `enum_string_value` rules
#[proc_macro_derive(SqlEnum, attributes(sql))]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_sql_enum_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

struct ColumnInfo {
    field_name: Ident,
    column_name: String,
    primary_key: bool,
    rule: Vec<Ident>,
    direction: Ident,
}

#[derive(Default)]
struct ColumnAttrs {
    name: Option<String>,
    primary_key: bool,
    rule: Option<LitStr>,
    direction: Option<LitStr>,
    skip: bool,
}

fn derive_record_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let table_name = get_table_name(&input.attrs, struct_name)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record derive only supports structs",
            ));
        }
    };

    let mut columns: Vec<ColumnInfo> = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.clone() else {
            continue;
        };
        let attrs = parse_column_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let rule = match &attrs.rule {
            Some(lit) => parse_rule(lit)?,
            None => Vec::new(),
        };
        let direction = match &attrs.direction {
            Some(lit) => parse_direction(lit)?,
            None => format_ident!("TwoWay"),
        };
        columns.push(ColumnInfo {
            column_name: attrs.name.unwrap_or_else(|| field_name.to_string()),
            field_name,
            primary_key: attrs.primary_key,
            rule,
            direction,
        });
    }

    let schema_entries: Vec<TokenStream2> = columns
        .iter()
        .map(|info| {
            let name = &info.column_name;
            let rule = &info.rule;
            let direction = &info.direction;
            let primary_key = if info.primary_key {
                quote! { .primary_key() }
            } else {
                quote! {}
            };
            quote! {
                ::polysql_core::record::ColumnSchema::new(#name)
                    #primary_key
                    .rule(::polysql_core::schema::ColumnRule::NONE
                        #(.union(::polysql_core::schema::ColumnRule::#rule))*)
                    .direction(::polysql_core::record::ConvertDirection::#direction)
            }
        })
        .collect();

    let field_names: Vec<&Ident> = columns.iter().map(|c| &c.field_name).collect();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::polysql_core::record::Record for #struct_name #ty_generics #where_clause {
            const TABLE: &'static str = #table_name;

            fn columns() -> &'static [::polysql_core::record::ColumnSchema] {
                const COLUMNS: &[::polysql_core::record::ColumnSchema] = &[
                    #(#schema_entries),*
                ];
                COLUMNS
            }

            fn values(&self) -> ::std::vec::Vec<::polysql_core::value::Value> {
                ::std::vec![
                    #(::polysql_core::value::ToValue::to_value(
                        ::core::clone::Clone::clone(&self.#field_names)
                    )),*
                ]
            }
        }
    })
}

fn derive_sql_enum_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let enum_name = &input.ident;
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input,
            "SqlEnum derive only supports enums",
        ));
    };

    let mut name_arms = Vec::new();
    let mut description_arms = Vec::new();
    let mut string_value_arms = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "SqlEnum derive only supports fieldless variants",
            ));
        }
        let ident = &variant.ident;
        let name = ident.to_string();
        let (description, string_value) = parse_sql_attrs(&variant.attrs)?;
        let description = option_tokens(description.as_deref());
        let string_value = option_tokens(string_value.as_deref());
        name_arms.push(quote! { Self::#ident => #name });
        description_arms.push(quote! { Self::#ident => #description });
        string_value_arms.push(quote! { Self::#ident => #string_value });
    }

    Ok(quote! {
        impl ::polysql_core::value::SqlEnum for #enum_name {
            fn ordinal(self) -> i64 {
                self as i64
            }

            fn name(self) -> &'static str {
                match self {
                    #(#name_arms),*
                }
            }

            fn description(self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#description_arms),*
                }
            }

            fn string_value(self) -> ::core::option::Option<&'static str> {
                match self {
                    #(#string_value_arms),*
                }
            }
        }

        impl ::polysql_core::value::ToValue for #enum_name {
            fn to_value(self) -> ::polysql_core::value::Value {
                ::polysql_core::value::Value::Enum(
                    ::polysql_core::value::SqlEnum::to_enum_value(self),
                )
            }
        }
    })
}

fn option_tokens(value: Option<&str>) -> TokenStream2 {
    match value {
        Some(text) => quote! { ::core::option::Option::Some(#text) },
        None => quote! { ::core::option::Option::None },
    }
}

fn get_table_name(attrs: &[Attribute], struct_name: &Ident) -> syn::Result<String> {
    for attr in attrs {
        if attr.path().is_ident("table") {
            let mut table_name = None;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    table_name = Some(string_value(&meta.value()?.parse::<Expr>()?)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported table attribute"))
                }
            })?;
            if let Some(name) = table_name {
                return Ok(name);
            }
        }
    }
    Ok(to_snake_case(&struct_name.to_string()))
}

fn parse_column_attrs(attrs: &[Attribute]) -> syn::Result<ColumnAttrs> {
    let mut result = ColumnAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("column") || matches!(attr.meta, Meta::Path(_)) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("primary_key") {
                result.primary_key = true;
            } else if meta.path.is_ident("skip") {
                result.skip = true;
            } else if meta.path.is_ident("name") {
                result.name = Some(string_value(&meta.value()?.parse::<Expr>()?)?);
            } else if meta.path.is_ident("rule") {
                result.rule = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("direction") {
                result.direction = Some(meta.value()?.parse()?);
            } else {
                return Err(meta.error("unsupported column attribute"));
            }
            Ok(())
        })?;
    }

    Ok(result)
}

fn parse_sql_attrs(attrs: &[Attribute]) -> syn::Result<(Option<String>, Option<String>)> {
    let mut description = None;
    let mut string_value_attr = None;
    for attr in attrs {
        if !attr.path().is_ident("sql") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("description") {
                description = Some(string_value(&meta.value()?.parse::<Expr>()?)?);
            } else if meta.path.is_ident("string_value") {
                string_value_attr = Some(string_value(&meta.value()?.parse::<Expr>()?)?);
            } else {
                return Err(meta.error("unsupported sql attribute"));
            }
            Ok(())
        })?;
    }
    Ok((description, string_value_attr))
}

fn string_value(expr: &Expr) -> syn::Result<String> {
    if let Expr::Lit(lit) = expr {
        if let Lit::Str(s) = &lit.lit {
            return Ok(s.value());
        }
    }
    Err(syn::Error::new_spanned(expr, "expected a string literal"))
}

/// Maps `"a | b"` onto `ColumnRule` constant names.
fn parse_rule(lit: &LitStr) -> syn::Result<Vec<Ident>> {
    let value = lit.value();
    let mut flags = Vec::new();
    for part in value.split('|').map(str::trim).filter(|p| !p.is_empty()) {
        match rule_constant(part) {
            Some(name) => flags.push(Ident::new(name, lit.span())),
            None => {
                return Err(syn::Error::new_spanned(
                    lit,
                    format!("unknown column rule `{part}`"),
                ));
            }
        }
    }
    Ok(flags)
}

fn rule_constant(flag: &str) -> Option<&'static str> {
    Some(match flag {
        "none" => "NONE",
        "use_varchar_type" => "USE_VARCHAR_TYPE",
        "enum_to_string" => "ENUM_TO_STRING",
        "enum_description" => "ENUM_DESCRIPTION",
        "enum_description_ignore_case" => "ENUM_DESCRIPTION_IGNORE_CASE",
        "enum_string_value" => "ENUM_STRING_VALUE",
        "enum_string_value_ignore_case" => "ENUM_STRING_VALUE_IGNORE_CASE",
        _ => return None,
    })
}

fn parse_direction(lit: &LitStr) -> syn::Result<Ident> {
    let name = match lit.value().as_str() {
        "to_db" => "ToDb",
        "from_db" => "FromDb",
        "two_way" => "TwoWay",
        other => {
            return Err(syn::Error::new_spanned(
                lit,
                format!("unknown direction `{other}`, expected to_db, from_db or two_way"),
            ));
        }
    };
    Ok(Ident::new(name, lit.span()))
}

fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
