//! This crate serves as the backbone for the `str-enum` crate.


#[macro_use]
pub(crate) mod enumeration;

/// Generates the `str_enum::StrEnum` and `core::fmt::Display` implementations for a C-like
/// enumeration.
///
/// The enumeration must be `Copy` and may only contain unit variants without explicit
/// discriminants, so that each variant's ordinal equals its position in the declaration.
///
/// ```ignore
/// #[derive(Clone, Copy, Debug, str_enum::StrEnum)]
/// enum Level {
///     Debug,
///     Info,
///     Warning
/// }
///
/// assert_eq!(str_enum::to_string(Level::Info), "Info");
/// assert_eq!(str_enum::to_enum("Warning", Level::Debug), Level::Warning);
/// ```
#[proc_macro_derive(StrEnum)]
pub fn str_enum(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let generated = match enumeration::Enumeration::parse(item.into()) {
        Ok(enumeration) => enumeration.generate(),
        Err(error) => error.to_compile_error()
    };

    generated.into()
}
