//! Ingestion Pipeline
//!
//! Ingestion runs in two phases over the fully loaded input:
//!
//! 1. every line is parsed and every `Type` declaration is applied to the
//!    [`Registry`]
//! 2. every `Product` line that passes the quantity filter is placed into
//!    the category named after its [`PriceKind`](crate::product::PriceKind),
//!    and into the price-in-cart category when its price is hidden
//!
//! Whether a product may land in a category declared on a later line is
//! governed by [`ForwardReferences`].

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::{ForwardReferences, ReportConfig};
use crate::error::{ReportError, Result};
use crate::product::{Product, ProductArena, ProductId};
use crate::record::{parse_line, Record};
use crate::registry::{Category, Registry};

/// Counters collected while ingesting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub lines: usize,
    pub categories_declared: usize,
    pub product_rows: usize,
    /// Product rows skipped for low quantity
    pub filtered: usize,
    pub placements: usize,
    /// Placements skipped because the target category was missing or
    /// declared too late
    pub dropped_placements: usize,
}

/// Result of ingestion: the product arena plus the populated registry
#[derive(Debug, Default)]
pub struct Inventory {
    products: ProductArena,
    registry: Registry,
    stats: IngestStats,
}

impl Inventory {
    pub fn products(&self) -> &ProductArena {
        &self.products
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }
}

pub struct Ingestor<'a> {
    config: &'a ReportConfig,
}

impl<'a> Ingestor<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    /// Read `path` completely and ingest it
    pub fn ingest_file(&self, path: &Path) -> Result<Inventory> {
        let content = fs::read_to_string(path).map_err(|source| ReportError::InputRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "input loaded");
        self.ingest_str(&content)
    }

    pub fn ingest_str(&self, input: &str) -> Result<Inventory> {
        let mut inventory = Inventory::default();

        // Phase 1: parse everything, declare categories
        let mut pending = Vec::new();
        for (index, text) in input.lines().enumerate() {
            let line = index + 1;
            inventory.stats.lines += 1;

            match parse_line(line, text)? {
                Some(Record::Category { key, display_name }) => {
                    inventory.stats.categories_declared += 1;
                    if inventory.registry.declare(&key, &display_name, line) {
                        debug!(line, key = %key, "category redeclared, earlier products discarded");
                    }
                }
                Some(Record::Product(product)) => {
                    inventory.stats.product_rows += 1;
                    pending.push((line, product));
                }
                None => {}
            }
        }

        // Phase 2: place products
        for (line, product) in pending {
            self.place(&mut inventory, line, product);
        }

        info!(
            lines = inventory.stats.lines,
            categories = inventory.registry.len(),
            products = inventory.products.len(),
            filtered = inventory.stats.filtered,
            dropped = inventory.stats.dropped_placements,
            "ingestion complete"
        );
        Ok(inventory)
    }

    fn place(&self, inventory: &mut Inventory, line: usize, product: Product) {
        if product.quantity() < self.config.filter.min_quantity {
            debug!(line, quantity = product.quantity(), "product below minimum quantity");
            inventory.stats.filtered += 1;
            return;
        }

        let primary = product.kind().key();
        let cart = self.config.categories.price_in_cart.as_str();

        let mut targets = vec![primary];
        if product.is_price_hidden() && cart != primary {
            targets.push(cart);
        }

        let mut visible = Vec::with_capacity(targets.len());
        for key in targets {
            let found = inventory
                .registry
                .get(key)
                .is_some_and(|category| self.is_visible(category, line));
            if found {
                visible.push(key);
            } else {
                debug!(line, category = %key, "no category available for product");
                inventory.stats.dropped_placements += 1;
            }
        }

        if visible.is_empty() {
            return;
        }

        let id = inventory.products.insert(product);
        for key in visible {
            if let Some(category) = inventory.registry.get_mut(key) {
                let local = category.add(id);
                inventory.stats.placements += 1;
                debug!(line, category = %key, local_id = %local, "product placed");
            }
        }
    }

    fn is_visible(&self, category: &Category, line: usize) -> bool {
        match self.config.ingest.forward_references {
            ForwardReferences::Drop => category.declared_at() < line,
            ForwardReferences::Resolve => true,
        }
    }
}
