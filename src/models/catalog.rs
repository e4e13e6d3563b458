//! Product catalog
//!
//! Maps product IDs to products. Entries keep the order they were inserted
//! in (or the order they appear in the catalog file), which is the order
//! listings are shown in.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::product::Product;

/// Insertion-ordered mapping from product ID to product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<(String, Product)>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no products
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if a product ID is present
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Get a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.position(id).map(|i| &self.entries[i].1)
    }

    /// Get a mutable product by ID
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Product> {
        let i = self.position(id)?;
        Some(&mut self.entries[i].1)
    }

    /// Insert a product, replacing any existing product with the same ID
    ///
    /// A replaced product keeps its original position.
    pub fn insert(&mut self, id: impl Into<String>, product: Product) -> Option<Product> {
        let id = id.into();
        match self.position(&id) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, product)),
            None => {
                self.entries.push((id, product));
                None
            }
        }
    }

    /// Remove a product by ID
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        self.position(id).map(|i| self.entries.remove(i).1)
    }

    /// Iterate over `(id, product)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Product)> {
        self.entries.iter().map(|(id, p)| (id.as_str(), p))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(key, _)| key == id)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, product) in &self.entries {
            map.serialize_entry(id, product)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = Catalog;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of product IDs to products")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut catalog = Catalog::new();
        // A repeated key replaces the earlier entry
        while let Some((id, product)) = access.next_entry::<String, Product>()? {
            if let Err(e) = product.validate() {
                return Err(de::Error::custom(format!("product {}: {}", id, e)));
            }
            catalog.insert(id, product);
        }
        Ok(catalog)
    }
}
