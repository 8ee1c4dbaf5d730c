//! Product records and the arena that owns them.
//!
//! A product is stored exactly once. Categories refer to it through a
//! [`ProductId`] and give it their own sequential [`LocalId`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category key for products whose two prices are equal
pub const NORMAL_KEY: &str = "normal";

/// Category key for discounted products
pub const CLEARANCE_KEY: &str = "clearance";

/// Derived pricing classification of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceKind {
    Normal,
    Clearance,
}

impl PriceKind {
    /// Registry key of the category this kind is placed into
    pub fn key(&self) -> &'static str {
        match self {
            Self::Normal => NORMAL_KEY,
            Self::Clearance => CLEARANCE_KEY,
        }
    }
}

impl fmt::Display for PriceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    normal_price: f64,
    clearance_price: f64,
    quantity: f64,
    price_hidden: bool,
}

impl Product {
    pub fn new(normal_price: f64, clearance_price: f64, quantity: f64, price_hidden: bool) -> Self {
        Self {
            normal_price,
            clearance_price,
            quantity,
            price_hidden,
        }
    }

    pub fn normal_price(&self) -> f64 {
        self.normal_price
    }

    pub fn clearance_price(&self) -> f64 {
        self.clearance_price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn is_price_hidden(&self) -> bool {
        self.price_hidden
    }

    pub fn kind(&self) -> PriceKind {
        if self.normal_price == self.clearance_price {
            PriceKind::Normal
        } else {
            PriceKind::Clearance
        }
    }

    /// Price shown to the shopper: the normal price for normal products,
    /// the clearance price otherwise
    pub fn effective_price(&self) -> f64 {
        match self.kind() {
            PriceKind::Normal => self.normal_price,
            PriceKind::Clearance => self.clearance_price,
        }
    }
}

/// Arena index of a stored product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(usize);

impl ProductId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Zero-based insertion index of a product within one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct LocalId(usize);

impl LocalId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for LocalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct ProductArena {
    products: Vec<Product>,
}

impl ProductArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, product: Product) -> ProductId {
        self.products.push(product);
        ProductId(self.products.len() - 1)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, &Product)> {
        self.products
            .iter()
            .enumerate()
            .map(|(i, p)| (ProductId(i), p))
    }
}
