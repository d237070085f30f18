//! Domain identifier types for catalog items and their attributes.
//!
//! These types provide type-safe wrappers around the string names used in the
//! catalog so item names and attribute names cannot be mixed up.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Name of a boolean attribute (e.g. `Vegetarian`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeId(String);

impl AttributeId {
    /// Create a new attribute identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use akinator::AttributeId;
    ///
    /// let attribute = AttributeId::new("Spicy");
    /// assert_eq!(attribute.as_str(), "Spicy");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AttributeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for AttributeId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for AttributeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for AttributeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for AttributeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Name of a catalog item (e.g. `pizza`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use akinator::ItemId;
    ///
    /// let item = ItemId::new("ice cream");
    /// assert_eq!(item, "ice cream");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the identifier into its inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for ItemId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<ItemId> for &str {
    fn eq(&self, other: &ItemId) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
