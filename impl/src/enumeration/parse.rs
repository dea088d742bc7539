use syn::spanned::Spanned;

impl super::Enumeration {
    pub(crate) fn parse(item: proc_macro2::TokenStream) -> syn::Result<Self> {
        let input: syn::DeriveInput = syn::parse2(item)?;

        Ok(Self {
            variants: match input.data {
                syn::Data::Enum(e) => {
                    if e.variants.is_empty() { return Err(syn::Error::new(
                        e.brace_token.span, "expected variants"
                    )) }

                    e.variants.into_iter().map(|variant| {
                        // Ordinals are positional, explicit values would introduce gaps.
                        if let Some((_, discriminant)) = &variant.discriminant {
                            return Err(syn::Error::new(
                                discriminant.span(), "expected implicit discriminant"
                            ));
                        }

                        match variant.fields {
                            syn::Fields::Unit => Ok(variant.ident),

                            fields => Err(syn::Error::new(
                                fields.span(), "expected unit variant"
                            ))
                        }
                    }).collect::<syn::Result<Vec<_>>>()?
                },

                syn::Data::Struct(s) => return Err(syn::Error::new(
                    s.struct_token.span(), "expected enum"
                )),

                syn::Data::Union(u) => return Err(syn::Error::new(
                    u.union_token.span(), "expected enum"
                ))
            },
            ident: input.ident
        })
    }
}
