pub mod config;
pub mod error;
pub mod ingest;
pub mod path;
pub mod product;
pub mod record;
pub mod registry;
pub mod report;

pub use config::{
    CategoryKeys, FilterConfig, ForwardReferences, IngestConfig, ReportConfig,
    DEFAULT_MIN_QUANTITY,
};
pub use error::{ReportError, Result};
pub use ingest::{IngestStats, Ingestor, Inventory};
pub use path::expand_home;
pub use product::{
    LocalId, PriceKind, Product, ProductArena, ProductId, CLEARANCE_KEY, NORMAL_KEY,
};
pub use record::{parse_line, Record};
pub use registry::{Category, Registry, PRICE_IN_CART_KEY};
pub use report::{CategorySummary, PriceRange, Summary};
