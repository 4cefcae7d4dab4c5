// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(ItemId);
string_id!(RecordId);

#[cfg(test)]
mod tests {
    use super::{ItemId, RecordId};
    use std::collections::HashSet;

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(ItemId::new("figma"), ItemId::from("figma"));
        assert_ne!(RecordId::new("1"), RecordId::new("2"));
    }

    #[test]
    fn ids_can_be_looked_up_by_str() {
        let ids: HashSet<ItemId> = ["figma", "sketch"].into_iter().map(ItemId::from).collect();
        assert!(ids.contains("figma"));
        assert!(!ids.contains("xd"));
    }
}
