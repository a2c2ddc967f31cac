pub mod assemble;
pub mod classify;
pub mod clean;
pub mod error;
pub mod group;
pub mod output;
pub mod parse;
pub mod pipeline;
pub mod reader;
pub mod static_source;

pub use assemble::{assemble_product, assemble_products, product_slug, CategoryLookup, FlagPolicy};
pub use classify::{assign_collections, assign_material, assign_materials};
pub use clean::{clean_row, clean_row_with};
pub use error::ImportError;
pub use group::{group_records, Grouping};
pub use output::write_catalog_json;
pub use pipeline::{build_catalog, catalog_from_records, catalog_from_rows, ImportOptions, Source};
pub use reader::{parse_rows_csv, parse_rows_simple, read_rows, ReaderKind};
pub use static_source::static_records;
