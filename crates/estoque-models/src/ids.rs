//! Strongly-typed ID newtypes.
//!
//! Each wraps a `Uuid` and is transparent on the wire and in Postgres, so a
//! `UserId` cannot be passed where an `EstoqueItemId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema, sqlx::Type)]
        #[serde(transparent)]
        #[sqlx(transparent)]
        #[schema(value_type = String, format = "uuid")]
        pub struct $name(pub Uuid);

        impl $name {
            #[inline]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            #[inline]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            #[inline]
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            #[inline]
            fn from(id: $name) -> Uuid {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Identity issued by the auth service; also the primary key of `profiles`.
    UserId
);

define_id!(
    /// Row in `estoque_items`.
    EstoqueItemId
);

define_id!(
    /// Row in `comodato_items`.
    ComodatoItemId
);

define_id!(
    /// Row in `movimentacoes`.
    MovimentacaoId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::parse_str("0b7e1d64-2f7a-4c1e-9d3b-5a6f7e8d9c0b").unwrap();
        let id = UserId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_from_str() {
        let id: EstoqueItemId = "0b7e1d64-2f7a-4c1e-9d3b-5a6f7e8d9c0b".parse().unwrap();
        assert_eq!(id.to_string(), "0b7e1d64-2f7a-4c1e-9d3b-5a6f7e8d9c0b");
        assert!("nope".parse::<EstoqueItemId>().is_err());
    }

    #[test]
    fn test_debug_names_the_type() {
        let id = ComodatoItemId::from_uuid(Uuid::nil());
        assert!(format!("{:?}", id).starts_with("ComodatoItemId("));
    }
}
