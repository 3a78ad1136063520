//! Newtype IDs for type-safe entity references.
//!
//! WordPress exposes two identifiers per object: an opaque global `ID` string
//! and the numeric `databaseId` row key. The global ID stays a plain `String`
//! at the edges; the database IDs get newtype wrappers via `define_id!` so
//! that IDs from different post types cannot be mixed up.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` (the width WPGraphQL `Int` fields
/// deserialize to) with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Ord`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use vitrine_core::define_id;
/// define_id!(AutorId);
/// define_id!(ObraId);
///
/// let autor_id = AutorId::new(1);
/// let obra_id = ObraId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: AutorId = obra_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Database IDs for the post types and taxonomies the site exposes
define_id!(CelebridadeId);
define_id!(DepoimentoId);
define_id!(LojaId);
define_id!(ProjetoId);
define_id!(PageId);
define_id!(MediaItemId);
define_id!(CategoriaPortfolioId);
define_id!(CommentId);

/// Ensure the macro derives work with serde.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProjetoId::new(42);
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_id_from_i64() {
        let id: LojaId = 7.into();
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_id_display() {
        let id = CelebridadeId::new(123);
        assert_eq!(format!("{id}"), "123");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = MediaItemId::new(99);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "99");

        let parsed: MediaItemId = serde_json::from_str("99").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; documented here for readers.
        let projeto = ProjetoId::new(1);
        let loja = LojaId::new(1);
        assert_eq!(projeto.as_i64(), loja.as_i64());
    }

    #[test]
    fn test_id_ordering() {
        let a = CategoriaPortfolioId::new(1);
        let b = CategoriaPortfolioId::new(2);
        assert!(a < b);
    }
}
