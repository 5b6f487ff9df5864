//! Wire types (DTOs) exchanged with API clients.

/// Declares a string-backed wire enum.
///
/// Generates serde (de)serialization using the given wire strings, an OpenAPI schema,
/// `as_str`, `Display` and a `FromStr` impl whose error names the enum by its label.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident($label:tt) {
            $($variant:ident => $value:tt),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            ::serde::Serialize,
            ::serde::Deserialize,
            ::utoipa::ToSchema,
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
        )]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = String;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(format!("Invalid {} '{}'", $label, other)),
                }
            }
        }
    };
}

pub mod api;
pub mod auth;
pub mod hackathon;
pub mod mentor_judge;
pub mod organizer;
pub mod participant;
pub mod team;
pub mod timeline;
