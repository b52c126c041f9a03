//! Error types for the wayfind core library.
//!
//! Defines the error enum exposed by the public API, stable machine-readable
//! error codes, and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            /// Retrieve the stable error code for this error.
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while constructing or interrogating a [`crate::Graph`].
///
/// Query operations deliberately never fail: an unknown vertex name yields a
/// neutral result (`false`, `0`, an empty sequence, or `None`). Errors arise
/// only at construction time or through the strict [`crate::Graph::require`]
/// lookup.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The supplied [`crate::EdgeSource`] contained no edge records.
    #[error("edge source `{edge_source}` contains no records")]
    EmptySource {
        /// Identifier for the empty edge source.
        edge_source: Arc<str>,
    },
    /// A strict lookup referenced a vertex name the registry has never seen.
    #[error("vertex `{name}` is not part of the graph")]
    UnknownVertex {
        /// The unregistered vertex name.
        name: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The supplied [`crate::EdgeSource`] contained no edge records.
        EmptySource => EmptySource { .. } => "WAYFIND_EMPTY_SOURCE",
        /// A strict lookup referenced an unregistered vertex name.
        UnknownVertex => UnknownVertex { .. } => "WAYFIND_UNKNOWN_VERTEX",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
