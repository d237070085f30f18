//! Fixed item catalog and its ordered attribute list.
//!
//! A [`Catalog`] is immutable configuration: it is validated once when built
//! and then shared read-only (behind an `Arc`) by every session. Items keep
//! their declaration order, which is the tie-break order for match scoring.

use std::{
    collections::{BTreeMap, HashSet},
    fs,
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    identifiers::{AttributeId, ItemId},
};

/// One catalog entry: a name plus its boolean attribute record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: ItemId,
    pub attributes: BTreeMap<AttributeId, bool>,
}

impl Item {
    pub fn new<I, A>(name: impl Into<ItemId>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (A, bool)>,
        A: Into<AttributeId>,
    {
        Self {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(attribute, value)| (attribute.into(), value))
                .collect(),
        }
    }

    /// Value of `attribute` for this item, `None` if the item does not define it.
    pub fn value(&self, attribute: &str) -> Option<bool> {
        self.attributes.get(attribute).copied()
    }
}

/// On-disk catalog layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    attributes: Vec<AttributeId>,
    items: Vec<Item>,
}

/// Validated, immutable catalog of items described by boolean attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
    attributes: Vec<AttributeId>,
}

impl Catalog {
    /// Build a catalog, failing fast on malformed configuration.
    ///
    /// Every item must define every attribute in `attributes`; item and
    /// attribute names must be unique.
    ///
    /// # Examples
    ///
    /// ```
    /// use akinator::{Catalog, Item};
    ///
    /// let catalog = Catalog::new(
    ///     vec![
    ///         Item::new("soup", [("Hot", true)]),
    ///         Item::new("sorbet", [("Hot", false)]),
    ///     ],
    ///     vec!["Hot".into()],
    /// )?;
    /// assert_eq!(catalog.len(), 2);
    /// # Ok::<(), akinator::Error>(())
    /// ```
    pub fn new(items: Vec<Item>, attributes: Vec<AttributeId>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        if attributes.is_empty() {
            return Err(Error::NoAttributes);
        }

        let mut seen_attributes = HashSet::new();
        for attribute in &attributes {
            if !seen_attributes.insert(attribute.as_str()) {
                return Err(Error::DuplicateAttribute {
                    attribute: attribute.to_string(),
                });
            }
        }

        let mut seen_items = HashSet::new();
        for item in &items {
            if !seen_items.insert(item.name.as_str()) {
                return Err(Error::DuplicateItem {
                    item: item.name.to_string(),
                });
            }
            if let Some(missing) = attributes
                .iter()
                .find(|attribute| !item.attributes.contains_key(attribute.as_str()))
            {
                return Err(Error::MissingAttribute {
                    item: item.name.to_string(),
                    attribute: missing.to_string(),
                });
            }
        }

        Ok(Self { items, attributes })
    }

    /// The built-in 14-item food catalog.
    pub fn food() -> Self {
        const ATTRIBUTES: [&str; 6] = [
            "Vegetarian",
            "Spicy",
            "Vegan",
            "Solid",
            "MainDish",
            "ServedHot",
        ];
        // name, then values in ATTRIBUTES order
        const FOODS: [(&str, [bool; 6]); 14] = [
            ("pizza", [true, false, false, true, true, true]),
            ("sushi", [false, false, false, true, true, false]),
            ("ice cream", [true, false, false, false, false, false]),
            ("biryani", [false, true, false, true, true, true]),
            ("salad", [true, false, true, false, false, false]),
            ("burger", [true, true, false, true, true, true]),
            ("pasta", [true, false, false, true, true, false]),
            ("sandwich", [true, false, true, true, false, false]),
            ("tacos", [false, true, false, true, true, true]),
            ("noodles", [false, true, false, true, true, false]),
            ("quesadilla", [false, true, false, true, true, true]),
            ("smoothie", [true, false, true, false, false, false]),
            ("ramen", [false, true, false, true, true, true]),
            ("falafel", [true, false, true, true, false, false]),
        ];

        let items = FOODS
            .iter()
            .map(|(name, values)| Item::new(*name, ATTRIBUTES.iter().copied().zip(*values)))
            .collect();
        Self {
            items,
            attributes: ATTRIBUTES.iter().copied().map(AttributeId::from).collect(),
        }
    }

    /// Parse and validate a catalog from its JSON form.
    ///
    /// ```
    /// use akinator::Catalog;
    ///
    /// let catalog = Catalog::from_json_str(r#"{
    ///     "attributes": ["Sweet"],
    ///     "items": [
    ///         { "name": "cake", "attributes": { "Sweet": true } },
    ///         { "name": "bread", "attributes": { "Sweet": false } }
    ///     ]
    /// }"#)?;
    /// assert_eq!(catalog.attributes()[0], "Sweet");
    /// # Ok::<(), akinator::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.items, file.attributes)
    }

    /// Load and validate a catalog file.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read catalog {}", path.display()),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serialize the catalog back to its JSON form.
    pub fn to_json_string(&self) -> Result<String> {
        let file = CatalogFile {
            attributes: self.attributes.clone(),
            items: self.items.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Items in declaration order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The catalog's default ordered attribute list.
    pub fn attributes(&self) -> &[AttributeId] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name.as_str() == name)
    }

    /// Check that an attribute list is usable against this catalog.
    ///
    /// Every listed attribute must be defined by every item (guaranteed once it
    /// is one of the catalog's own attributes) and appear only once.
    pub fn check_attributes(&self, attributes: &[AttributeId]) -> Result<()> {
        if attributes.is_empty() {
            return Err(Error::NoAttributes);
        }
        let mut seen = HashSet::new();
        for attribute in attributes {
            if !self.attributes.contains(attribute) {
                return Err(Error::UnknownAttribute {
                    attribute: attribute.to_string(),
                });
            }
            if !seen.insert(attribute.as_str()) {
                return Err(Error::DuplicateAttribute {
                    attribute: attribute.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::food()
    }
}
