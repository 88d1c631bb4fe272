use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prelude::*;

/// Stable identity token minted once per [`Stat`].
///
/// Two stats compare by token whenever either of them has no derived name. A token is
/// never nil: [`StatGuid::new`] always mints a random v4 UUID and
/// [`StatGuid::from_uuid`] rejects `Uuid::nil()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct StatGuid(Uuid);

impl StatGuid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, e.g. one handed out by an external entity registry.
    pub fn from_uuid(uuid: Uuid) -> StatResult<Self> {
        if uuid.is_nil() {
            return Err(StatError::NilGuid);
        }
        Ok(Self(uuid))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TryFrom<Uuid> for StatGuid {
    type Error = StatError;

    fn try_from(uuid: Uuid) -> StatResult<Self> {
        Self::from_uuid(uuid)
    }
}

impl From<StatGuid> for Uuid {
    fn from(guid: StatGuid) -> Self {
        guid.0
    }
}

impl Default for StatGuid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StatGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_guids_are_unique() {
        let a = StatGuid::new();
        let b = StatGuid::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_nil_uuid_is_rejected() {
        assert_eq!(StatGuid::from_uuid(Uuid::nil()), Err(StatError::NilGuid));

        let uuid = Uuid::new_v4();
        let guid = StatGuid::from_uuid(uuid).unwrap();
        assert_eq!(guid.as_uuid(), &uuid);
    }

    #[test]
    fn test_nil_uuid_is_rejected_when_deserializing() {
        let nil = serde_json::from_str::<StatGuid>("\"00000000-0000-0000-0000-000000000000\"");
        assert!(nil.is_err());

        let guid = StatGuid::new();
        let json = serde_json::to_string(&guid).unwrap();
        assert_eq!(json, format!("\"{}\"", guid));
        assert_eq!(serde_json::from_str::<StatGuid>(&json).unwrap(), guid);
    }
}
