//! Declarative generator for operand-word enums.

/// Define a `#[repr(u8)]` enum whose variants map 1:1 onto SPIR-V operand words.
///
/// Generates `ALL`, `word`, `from_word`, `name` and the `Debug`/`Display`
/// impls. `from_word` rejects anything outside the listed words.
macro_rules! word_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($what:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $word:literal => $text:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant = $word,
            )+
        }

        impl $name {
            /// Every variant, in operand-word order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The operand word encoding this value.
            #[inline]
            pub const fn word(self) -> $crate::Word {
                self as $crate::Word
            }

            /// Decode an operand word.
            pub fn from_word(word: $crate::Word) -> Result<Self, $crate::WordError> {
                match word {
                    $( $word => Ok(Self::$variant), )+
                    _ => Err($crate::WordError::UnknownEnum { kind: $what, word }),
                }
            }

            /// The spelling used in the SPIR-V grammar.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )+
                }
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}::{}", stringify!($name), self.name())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use word_enum;
