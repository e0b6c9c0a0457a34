//! Closed enums with a display label and a badge variant.
//!
//! Every enum rendered in a table cell is declared through [`status_enum!`],
//! so the label and badge lookups are exhaustive matches and the wire code
//! is the same string the lookup uses.

use super::badge::BadgeVariant;

pub trait StatusDisplay: Sized + Copy + PartialEq + 'static {
    /// All variants in declaration order
    const ALL: &'static [Self];

    /// Wire code, e.g. "pending_approval"
    fn code(&self) -> &'static str;

    /// Human readable label, e.g. "Pending approval"
    fn display_name(&self) -> &'static str;

    fn badge(&self) -> BadgeVariant;

    fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    /// (code, label) pairs for select controls
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::ALL
            .iter()
            .map(|v| (v.code(), v.display_name()))
            .collect()
    }
}

/// Declares a closed enum together with its code, label and badge.
///
/// ```ignore
/// status_enum! {
///     pub enum PayoutStatus {
///         Pending => ("pending", "Pending", Warning),
///         Processed => ("processed", "Processed", Success),
///     }
/// }
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => ($code:literal, $label:literal, $badge:ident) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $variant, )+
        }

        impl $crate::shared::status::StatusDisplay for $name {
            const ALL: &'static [Self] = &[ $( $name::$variant ),+ ];

            fn code(&self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            fn display_name(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn badge(&self) -> $crate::shared::badge::BadgeVariant {
                match self {
                    $( $name::$variant => $crate::shared::badge::BadgeVariant::$badge, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::shared::status::StatusDisplay::display_name(self))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::shared::status::StatusDisplay::code(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                <$name as $crate::shared::status::StatusDisplay>::from_code(&code).ok_or_else(|| {
                    <D::Error as ::serde::de::Error>::unknown_variant(&code, &[ $( $code ),+ ])
                })
            }
        }
    };
}
