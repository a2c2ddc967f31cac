//! Read-back queries for stored catalog products.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub public_id: Uuid,
    pub doc_id: String,
    pub name: String,
    pub slug: String,
    pub description: Vec<String>,
    /// `NULL` when the product's category was never registered.
    pub category_doc_id: Option<String>,
    pub base_weight_grams: Decimal,
    pub total_weight_grams: Decimal,
    pub featured: bool,
    pub available: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row from the `product_variants` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VariantRow {
    pub id: i64,
    pub product_id: i64,
    pub variant_key: String,
    /// 0-based, ascending by weight.
    pub position: i32,
    pub weight_grams: Decimal,
    pub height_inches: Option<Decimal>,
    pub diameter_inches: Option<Decimal>,
    pub length_inches: Option<Decimal>,
    /// `available` or `out_of_stock`.
    pub status: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Row counts per catalog table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct CatalogCounts {
    pub categories: i64,
    pub materials: i64,
    pub collections: i64,
    pub products: i64,
    pub variants: i64,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Count rows in every catalog table.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn catalog_counts(pool: &PgPool) -> Result<CatalogCounts, DbError> {
    let counts = sqlx::query_as::<_, CatalogCounts>(
        "SELECT \
             (SELECT COUNT(*) FROM categories)       AS categories, \
             (SELECT COUNT(*) FROM materials)        AS materials, \
             (SELECT COUNT(*) FROM collections)      AS collections, \
             (SELECT COUNT(*) FROM products)         AS products, \
             (SELECT COUNT(*) FROM product_variants) AS variants",
    )
    .fetch_one(pool)
    .await?;

    Ok(counts)
}

/// Returns all products, ordered by slug.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_products(pool: &PgPool) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, public_id, doc_id, name, slug, description, category_doc_id, \
                base_weight_grams, total_weight_grams, featured, available, image, \
                created_at, updated_at \
         FROM products \
         ORDER BY slug",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Returns the variants of one product in weight order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_variants(pool: &PgPool, product_id: i64) -> Result<Vec<VariantRow>, DbError> {
    let rows = sqlx::query_as::<_, VariantRow>(
        "SELECT id, product_id, variant_key, position, weight_grams, \
                height_inches, diameter_inches, length_inches, status, notes, created_at \
         FROM product_variants \
         WHERE product_id = $1 \
         ORDER BY position",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Material document ids linked to a product, in link order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_product_materials(
    pool: &PgPool,
    product_id: i64,
) -> Result<Vec<String>, DbError> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT material_doc_id FROM product_materials \
         WHERE product_id = $1 ORDER BY position",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Collection document ids linked to a product, in link order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_product_collections(
    pool: &PgPool,
    product_id: i64,
) -> Result<Vec<String>, DbError> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT collection_doc_id FROM product_collections \
         WHERE product_id = $1 ORDER BY position",
    )
    .bind(product_id)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}
