//! Writes an assembled catalog into the database.
//!
//! Reference documents are upserted by document id. Products are replaced
//! wholesale on every reseed: existing rows are deleted, then each product is
//! inserted with its variants and links in its own transaction.

use sqlx::{PgPool, Postgres, Transaction};
use svcat_core::{Catalog, ProductDocument};

use crate::DbError;

/// What a [`reseed_catalog`] run changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReseedReport {
    pub reference_rows: usize,
    pub products_deleted: u64,
    pub products_inserted: usize,
    pub variants_inserted: usize,
}

/// Upsert every category, material, and collection in `catalog`.
///
/// Returns the number of rows processed. All upserts share one transaction;
/// if any fails the batch is rolled back.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn upsert_reference_data(pool: &PgPool, catalog: &Catalog) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for category in &catalog.categories {
        sqlx::query(
            "INSERT INTO categories (doc_id, title, slug, description) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (doc_id) DO UPDATE SET \
                 title       = EXCLUDED.title, \
                 slug        = EXCLUDED.slug, \
                 description = EXCLUDED.description, \
                 updated_at  = NOW()",
        )
        .bind(&category.id)
        .bind(&category.title)
        .bind(&category.slug.current)
        .bind(&category.description)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    for material in &catalog.materials {
        sqlx::query(
            "INSERT INTO materials (doc_id, title, slug, purity, description) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (doc_id) DO UPDATE SET \
                 title       = EXCLUDED.title, \
                 slug        = EXCLUDED.slug, \
                 purity      = EXCLUDED.purity, \
                 description = EXCLUDED.description, \
                 updated_at  = NOW()",
        )
        .bind(&material.id)
        .bind(&material.title)
        .bind(&material.slug.current)
        .bind(i16::try_from(material.purity).unwrap_or(i16::MAX))
        .bind(&material.description)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    for collection in &catalog.collections {
        sqlx::query(
            "INSERT INTO collections (doc_id, title, slug, description) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (doc_id) DO UPDATE SET \
                 title       = EXCLUDED.title, \
                 slug        = EXCLUDED.slug, \
                 description = EXCLUDED.description, \
                 updated_at  = NOW()",
        )
        .bind(&collection.id)
        .bind(&collection.title)
        .bind(&collection.slug.current)
        .bind(&collection.description)
        .execute(&mut *tx)
        .await?;
        count += 1;
    }

    tx.commit().await?;
    tracing::debug!(rows = count, "upserted reference data");
    Ok(count)
}

/// Delete every product. Variants and link rows cascade.
///
/// Returns the number of products removed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the delete fails.
pub async fn delete_catalog_products(pool: &PgPool) -> Result<u64, DbError> {
    let result = sqlx::query("DELETE FROM products").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Insert one product with its variants and material/collection links.
///
/// Everything for the product is written in a single transaction, so a
/// failure leaves no partial product behind. Returns the new product's `id`.
///
/// Weights and dimensions are bound as `f64` and cast to fixed-scale
/// `NUMERIC` columns, so values are rounded to three decimals on persistence.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails, including a foreign-key
/// violation when a referenced material or collection has not been upserted.
pub async fn insert_product(pool: &PgPool, product: &ProductDocument) -> Result<i64, DbError> {
    let mut tx = pool.begin().await?;

    let product_id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO products \
             (doc_id, name, slug, description, category_doc_id, \
              base_weight_grams, total_weight_grams, featured, available, image) \
         VALUES ($1, $2, $3, $4, $5, \
                 $6::numeric(12,3), $7::numeric(14,3), $8, $9, $10) \
         RETURNING id",
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(&product.slug.current)
    .bind(&product.description)
    .bind(product.category.as_ref().map(|r| r.target.as_str()))
    .bind(product.base_weight_grams)
    .bind(product.total_weight_grams)
    .bind(product.featured)
    .bind(product.available)
    .bind(&product.image)
    .fetch_one(&mut *tx)
    .await?;

    insert_variants(&mut tx, product_id, product).await?;
    insert_links(&mut tx, product_id, product).await?;

    tx.commit().await?;
    Ok(product_id)
}

async fn insert_variants(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i64,
    product: &ProductDocument,
) -> Result<(), DbError> {
    for (position, variant) in product.variants.iter().enumerate() {
        sqlx::query(
            "INSERT INTO product_variants \
                 (product_id, variant_key, position, weight_grams, \
                  height_inches, diameter_inches, length_inches, status, notes) \
             VALUES ($1, $2, $3, $4::numeric(12,3), \
                     $5::numeric(8,3), $6::numeric(8,3), $7::numeric(8,3), $8, $9)",
        )
        .bind(product_id)
        .bind(&variant.key)
        .bind(position_param(position))
        .bind(variant.weight_grams)
        .bind(variant.height_inches)
        .bind(variant.diameter_inches)
        .bind(variant.length_inches)
        .bind(variant.status.as_str())
        .bind(&variant.notes)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_links(
    tx: &mut Transaction<'_, Postgres>,
    product_id: i64,
    product: &ProductDocument,
) -> Result<(), DbError> {
    for (position, material) in product.materials.iter().enumerate() {
        sqlx::query(
            "INSERT INTO product_materials (product_id, material_doc_id, position) \
             VALUES ($1, $2, $3)",
        )
        .bind(product_id)
        .bind(&material.target)
        .bind(position_param(position))
        .execute(&mut **tx)
        .await?;
    }

    for (position, collection) in product.collections.iter().enumerate() {
        sqlx::query(
            "INSERT INTO product_collections (product_id, collection_doc_id, position) \
             VALUES ($1, $2, $3)",
        )
        .bind(product_id)
        .bind(&collection.target)
        .bind(position_param(position))
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

/// Replace the stored catalog with `catalog`.
///
/// Upserts reference data, deletes all products, then inserts products one by
/// one. The first failing product stops the run; products inserted before it
/// stay committed.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if reference data or the delete fails, or
/// [`DbError::ReseedAborted`] naming the product that could not be inserted.
pub async fn reseed_catalog(pool: &PgPool, catalog: &Catalog) -> Result<ReseedReport, DbError> {
    let mut report = ReseedReport {
        reference_rows: upsert_reference_data(pool, catalog).await?,
        ..ReseedReport::default()
    };

    report.products_deleted = delete_catalog_products(pool).await?;
    tracing::info!(
        deleted = report.products_deleted,
        "cleared existing products"
    );

    for product in &catalog.products {
        if let Err(e) = insert_product(pool, product).await {
            tracing::error!(
                slug = %product.slug.current,
                inserted = report.products_inserted,
                error = %e,
                "product insert failed; aborting reseed"
            );
            return Err(DbError::ReseedAborted {
                slug: product.slug.current.clone(),
                inserted: report.products_inserted,
                source: Box::new(e),
            });
        }
        report.products_inserted += 1;
        report.variants_inserted += product.variants.len();
        tracing::debug!(slug = %product.slug.current, "inserted product");
    }

    tracing::info!(
        products = report.products_inserted,
        variants = report.variants_inserted,
        reference_rows = report.reference_rows,
        "reseed complete"
    );
    Ok(report)
}

fn position_param(position: usize) -> i32 {
    i32::try_from(position).unwrap_or(i32::MAX)
}
