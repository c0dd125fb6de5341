//! Integer IDs of backend records.
//!
//! Each record kind gets its own newtype so a project ID cannot be passed
//! where a material ID is expected.

/// Declare an integer ID newtype.
///
/// The generated type is `Copy`, serializes as a bare JSON number, displays
/// as the number, parses from a (trimmed) decimal string, and converts to
/// and from `i32`. Leading attributes, such as doc comments, are forwarded
/// to the struct.
///
/// ```rust
/// # use precios_unitarios_core::define_id;
/// define_id!(
///     /// A partida (line item) inside a budget.
///     PartidaId
/// );
///
/// let partida: PartidaId = "15".parse().unwrap();
/// assert_eq!(i32::from(partida), 15);
/// ```
#[macro_export]
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
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
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Raw value as sent on the wire.
            #[must_use]
            pub const fn as_i32(self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse().map(Self)
            }
        }

        impl ::core::convert::From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl ::core::convert::From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Account of a logged-in user.
    UserId
);
define_id!(
    /// Saved project (`/proyectos/{id}`).
    ProyectoId
);
define_id!(
    /// Catalog material.
    MaterialId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_transparently() {
        let id = ProyectoId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let parsed: ProyectoId = serde_json::from_str("42").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_from_str() {
        let id: MaterialId = " 7 ".parse().unwrap();
        assert_eq!(id.as_i32(), 7);
        assert!("siete".parse::<MaterialId>().is_err());
    }

    #[test]
    fn test_id_display_and_conversions() {
        assert_eq!(UserId::new(3).to_string(), "3");
        assert_eq!(i32::from(UserId::from(9)), 9);
        assert!(ProyectoId::new(1) < ProyectoId::new(2));
    }
}
