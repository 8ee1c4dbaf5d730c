//! Report Builder
//!
//! Aggregates each category into a [`CategorySummary`] and renders the
//! text report:
//!
//! ```text
//! Normal Price: 1 product @ 10
//! Clearance: 2 products @ 15-22.5
//! Price In Cart: 0 products
//! ```

use std::cmp::Reverse;
use std::fmt;

use serde::Serialize;

use crate::ingest::Inventory;
use crate::registry::Category;

/// Min/max over the effective price of a category's products
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 + 0.0 is 0.0, so a zero price never prints as "-0"
        let (min, max) = (self.min + 0.0, self.max + 0.0);
        if min == max {
            write!(f, "{}", min)
        } else {
            write!(f, "{}-{}", min, max)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub display_name: String,
    pub count: usize,
    /// Both `None` when the category is empty
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl CategorySummary {
    pub fn price_range(&self) -> Option<PriceRange> {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => Some(PriceRange { min, max }),
            _ => None,
        }
    }
}

impl fmt::Display for CategorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.count == 1 { "" } else { "s" };
        write!(f, "{}: {} product{}", self.display_name, self.count, plural)?;
        if let Some(range) = self.price_range() {
            write!(f, " @ {}", range)?;
        }
        Ok(())
    }
}

/// Categories ordered by descending product count
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub categories: Vec<CategorySummary>,
}

impl Summary {
    pub fn build(inventory: &Inventory) -> Self {
        let mut categories: Vec<CategorySummary> = inventory
            .registry()
            .iter()
            .map(|category| summarize(inventory, category))
            .collect();

        // stable: equal counts stay in declaration order
        categories.sort_by_key(|c| Reverse(c.count));

        Self { categories }
    }

    /// One newline-terminated line per category
    pub fn render(&self) -> String {
        self.categories
            .iter()
            .map(|c| format!("{}\n", c))
            .collect()
    }
}

fn summarize(inventory: &Inventory, category: &Category) -> CategorySummary {
    let price_range = category
        .products()
        .filter_map(|(_, id)| inventory.product(id))
        .map(|product| product.effective_price() + 0.0)
        .fold(None, |range: Option<PriceRange>, price| {
            Some(match range {
                None => PriceRange {
                    min: price,
                    max: price,
                },
                Some(r) => PriceRange {
                    min: r.min.min(price),
                    max: r.max.max(price),
                },
            })
        });

    CategorySummary {
        key: category.key().to_string(),
        display_name: category.display_name().to_string(),
        count: category.len(),
        min_price: price_range.map(|r| r.min),
        max_price: price_range.map(|r| r.max),
    }
}
