//! Contains code to generate the conversion implementations.

impl super::Enumeration {
    /// Generates a `str_enum::StrEnum` implementation.
    ///
    /// The table is registered with the variant names stringified and joined with `", "`, exactly
    /// as if the declared identifier list had been written as literal text.
    pub(crate) fn generate_str_enum(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let span = ident.span();
        let variants = &self.variants;
        let ordinals = (0..variants.len())
            .map(proc_macro2::Literal::usize_unsuffixed)
            .collect::<Vec<_>>();
        let raw = variants.iter()
            .map(|variant| variant.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        quote::quote_spanned!(span =>
            impl str_enum::StrEnum for #ident {
                fn table() -> &'static str_enum::EnumTable {
                    static TABLE: std::sync::OnceLock<str_enum::EnumTable> = std::sync::OnceLock::new();
                    TABLE.get_or_init(|| str_enum::EnumTable::build(#raw))
                }

                #[inline(always)]
                fn ordinal(self) -> usize {
                    self as usize
                }

                fn from_ordinal(ordinal: usize) -> core::option::Option<Self> {
                    match ordinal {
                        #(#ordinals => core::option::Option::Some(#ident::#variants),)*
                        _ => core::option::Option::None
                    }
                }
            }
        )
    }

    /// Generates a `core::fmt::Display` implementation.
    pub(crate) fn generate_display(&self) -> proc_macro2::TokenStream {
        let ident = &self.ident;
        let span = ident.span();

        quote::quote_spanned!(span =>
            impl core::fmt::Display for #ident {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    f.write_str(str_enum::to_string(*self))
                }
            }
        )
    }

    /// Generates all implementations.
    pub(crate) fn generate(&self) -> proc_macro2::TokenStream {
        let str_enum = self.generate_str_enum();
        let display = self.generate_display();

        quote::quote!(#str_enum #display)
    }
}

#[cfg(test)]
mod tests {
    macro_rules! assert_compare {
        ($generator:ident, $item:expr, $result:expr) => {{
            let generated = parse_valid!($item).$generator().to_string();
            let expected = $result.to_string();

            assert_eq!(&generated, &expected);
        }};
    }

    // Test macros.

    #[test]
    #[should_panic]
    fn test_assert_compare() {
        assert_compare!(generate_display, "enum A { B }", quote::quote! {});
    }

    // Test generation.

    #[test]
    fn str_enum() {
        assert_compare!(generate_str_enum, "enum A { B }", quote::quote! {
            impl str_enum::StrEnum for A {
                fn table() -> &'static str_enum::EnumTable {
                    static TABLE: std::sync::OnceLock<str_enum::EnumTable> = std::sync::OnceLock::new();
                    TABLE.get_or_init(|| str_enum::EnumTable::build("B"))
                }

                #[inline(always)]
                fn ordinal(self) -> usize {
                    self as usize
                }

                fn from_ordinal(ordinal: usize) -> core::option::Option<Self> {
                    match ordinal {
                        0 => core::option::Option::Some(A::B),
                        _ => core::option::Option::None
                    }
                }
            }
        });

        assert_compare!(generate_str_enum, "enum B { C, D }", quote::quote! {
            impl str_enum::StrEnum for B {
                fn table() -> &'static str_enum::EnumTable {
                    static TABLE: std::sync::OnceLock<str_enum::EnumTable> = std::sync::OnceLock::new();
                    TABLE.get_or_init(|| str_enum::EnumTable::build("C, D"))
                }

                #[inline(always)]
                fn ordinal(self) -> usize {
                    self as usize
                }

                fn from_ordinal(ordinal: usize) -> core::option::Option<Self> {
                    match ordinal {
                        0 => core::option::Option::Some(B::C),
                        1 => core::option::Option::Some(B::D),
                        _ => core::option::Option::None
                    }
                }
            }
        });
    }

    #[test]
    fn display() {
        assert_compare!(generate_display, "enum A { B }", quote::quote! {
            impl core::fmt::Display for A {
                fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                    f.write_str(str_enum::to_string(*self))
                }
            }
        });
    }
}
