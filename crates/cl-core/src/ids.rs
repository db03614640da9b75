use core::fmt;

use crate::{ClError, ClResult};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(String);

        impl $name {
            /// Build an identifier, rejecting blank names.
            pub fn new(raw: impl Into<String>) -> ClResult<Self> {
                let raw = raw.into();
                if raw.trim().is_empty() {
                    return Err(ClError::InvalidArg { what: $what });
                }
                Ok(Self(raw))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl core::borrow::Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ClError;

            fn try_from(raw: &str) -> ClResult<Self> {
                Self::new(raw)
            }
        }
    };
}

string_id!(
    /// Identifier of a drop slot on the circuit board (e.g. `resistor`, `v2`).
    SlotId,
    "slot id must not be blank"
);

string_id!(
    /// Identifier of an editable numeric parameter (e.g. `v`, `r3`).
    ParamId,
    "parameter id must not be blank"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_ids_are_rejected() {
        assert!(SlotId::new("").is_err());
        assert!(ParamId::new("   ").is_err());
    }

    #[test]
    fn ids_borrow_as_str_for_map_lookups() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(SlotId::new("led").unwrap(), true);
        assert_eq!(map.get("led"), Some(&true));
        assert_eq!(SlotId::new("led").unwrap().to_string(), "led");
    }
}
