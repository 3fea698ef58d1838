//! Helper macro for declaring port error enums.
//!
//! Each declared variant gets a `thiserror` message, a snake_case constructor
//! accepting `impl Into<_>` for every field, and a stable `kind()` label used
//! in structured log fields.

macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };

    (@kind $variant:ident) => {
        ::paste::paste! { stringify!([<$variant:snake>]) }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant { $($field : $ty),* });
            )*

            /// Stable snake_case label for the failure category.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => define_port_error!(@kind $variant), )*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
