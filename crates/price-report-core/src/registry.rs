//! Category Registry
//!
//! Price categories in declaration order. Each category keeps an index
//! table from its own sequential [`LocalId`] to the shared product record.

use std::collections::HashMap;

use crate::product::{LocalId, ProductId};

/// Category key for products whose price is only shown at checkout
pub const PRICE_IN_CART_KEY: &str = "price_in_cart";

#[derive(Debug, Clone)]
pub struct Category {
    key: String,
    display_name: String,
    declared_at: usize,
    products: Vec<ProductId>,
}

impl Category {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        declared_at: usize,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            declared_at,
            products: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// 1-based input line of the declaration that created this category
    pub fn declared_at(&self) -> usize {
        self.declared_at
    }

    /// Append a product and return the sequential id it received here
    pub fn add(&mut self, product: ProductId) -> LocalId {
        self.products.push(product);
        LocalId::new(self.products.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product ids in insertion order, paired with their local ids
    pub fn products(&self) -> impl Iterator<Item = (LocalId, ProductId)> + '_ {
        self.products
            .iter()
            .enumerate()
            .map(|(i, id)| (LocalId::new(i), *id))
    }

    pub fn product_at(&self, local: LocalId) -> Option<ProductId> {
        self.products.get(local.get()).copied()
    }

    /// Local id of `product` in this category, `None` if it was never placed here.
    ///
    /// Linear scan; used for inspection and diagnostics, not during ingestion.
    pub fn local_id_of(&self, product: ProductId) -> Option<LocalId> {
        self.products
            .iter()
            .position(|id| *id == product)
            .map(LocalId::new)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Registry {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a category.
    ///
    /// A repeated key replaces the earlier category (new display name, no
    /// products) but keeps the position of the first declaration.
    /// Returns `true` when an existing category was replaced.
    pub fn declare(&mut self, key: &str, display_name: &str, line: usize) -> bool {
        let category = Category::new(key, display_name, line);
        match self.index.get(key) {
            Some(&pos) => {
                self.categories[pos] = category;
                true
            }
            None => {
                self.index.insert(key.to_string(), self.categories.len());
                self.categories.push(category);
                false
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Category> {
        self.index.get(key).map(|&pos| &self.categories[pos])
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Category> {
        self.index.get(key).map(|&pos| &mut self.categories[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Categories in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Every category `product` was placed into, with its local id there.
    /// Scans every category via [`Category::local_id_of`].
    pub fn placements(&self, product: ProductId) -> Vec<(&str, LocalId)> {
        self.categories
            .iter()
            .filter_map(|c| c.local_id_of(product).map(|local| (c.key(), local)))
            .collect()
    }
}
