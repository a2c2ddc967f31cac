//! Live integration tests for svcat-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness. The `migrations` path is relative to the crate root
//! (`crates/svcat-db/`), so `"../../migrations"` resolves to the workspace
//! migration directory.

use rust_decimal::Decimal;
use svcat_core::{Catalog, ParsePolicy, RawRow, Reference};
use svcat_db::{
    catalog_counts, delete_catalog_products, insert_product, list_product_collections,
    list_product_materials, list_products, list_variants, reseed_catalog, upsert_reference_data,
    DbError,
};
use svcat_import::{catalog_from_rows, FlagPolicy};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn row(category: &str, name: &str, weight: &str, status: &str) -> RawRow {
    RawRow::from_pairs([
        ("Category", category),
        ("Product Name", name),
        ("Weight (Grams)", weight),
        ("Diameter (Inches)", "3.25"),
        ("Status", status),
    ])
}

fn sample_catalog() -> Catalog {
    catalog_from_rows(
        &[
            row("Bowl", "Plain Bowl", "150", "available"),
            row("Bowl", "Plain Bowl", "300", "sold out"),
            row("Coins", "Silver Coin", "10.5", "available"),
            row("Lamps", "Kamakshi Deepam", "620", "available"),
        ],
        ParsePolicy::Lenient,
        &FlagPolicy::default(),
        "test".to_string(),
    )
    .expect("sample catalog should assemble")
}

// ---------------------------------------------------------------------------
// Section 1: Reseed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn reseed_writes_every_document(pool: sqlx::PgPool) {
    let catalog = sample_catalog();

    let report = reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed_catalog failed");

    assert_eq!(report.products_deleted, 0);
    assert_eq!(report.products_inserted, 3);
    assert_eq!(report.variants_inserted, 4);
    assert_eq!(report.reference_rows, 3 + 3 + 8);

    let counts = catalog_counts(&pool).await.expect("catalog_counts failed");
    assert_eq!(counts.categories, 3);
    assert_eq!(counts.materials, 3);
    assert_eq!(counts.collections, 8);
    assert_eq!(counts.products, 3);
    assert_eq!(counts.variants, 4);
}

#[sqlx::test(migrations = "../../migrations")]
async fn reseed_twice_replaces_products(pool: sqlx::PgPool) {
    let catalog = sample_catalog();

    reseed_catalog(&pool, &catalog)
        .await
        .expect("first reseed failed");
    let report = reseed_catalog(&pool, &catalog)
        .await
        .expect("second reseed failed");

    assert_eq!(report.products_deleted, 3);
    assert_eq!(report.products_inserted, 3);

    let counts = catalog_counts(&pool).await.expect("catalog_counts failed");
    assert_eq!(counts.products, 3);
    assert_eq!(counts.variants, 4);
    assert_eq!(counts.categories, 3, "reference rows are upserted, not duplicated");
}

#[sqlx::test(migrations = "../../migrations")]
async fn reseed_stops_at_first_failure_and_keeps_earlier_products(pool: sqlx::PgPool) {
    let mut catalog = sample_catalog();
    // Second product links a material that does not exist.
    catalog.products[1].materials = vec![Reference::to("unknown-material")];

    let err = reseed_catalog(&pool, &catalog).await.unwrap_err();
    match err {
        DbError::ReseedAborted { slug, inserted, .. } => {
            assert_eq!(slug, catalog.products[1].slug.current);
            assert_eq!(inserted, 1);
        }
        other => panic!("expected ReseedAborted, got {other:?}"),
    }

    let products = list_products(&pool).await.expect("list_products failed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].slug, catalog.products[0].slug.current);
    let counts = catalog_counts(&pool).await.expect("catalog_counts failed");
    assert_eq!(counts.variants, 2, "failed product left no partial variants");
}

// ---------------------------------------------------------------------------
// Section 2: Product round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn inserted_product_reads_back_with_variants_and_links(pool: sqlx::PgPool) {
    let catalog = sample_catalog();
    upsert_reference_data(&pool, &catalog)
        .await
        .expect("upsert_reference_data failed");

    let bowl = &catalog.products[0];
    let id = insert_product(&pool, bowl)
        .await
        .expect("insert_product failed");

    let products = list_products(&pool).await.expect("list_products failed");
    assert_eq!(products.len(), 1);
    let stored = &products[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.doc_id, "product-plain-bowl-450g");
    assert_eq!(stored.category_doc_id.as_deref(), Some("category-bowl"));
    assert_eq!(stored.base_weight_grams, Decimal::new(150, 0));
    assert_eq!(stored.total_weight_grams, Decimal::new(450, 0));
    assert!(stored.featured);
    assert!(stored.available);
    assert_eq!(stored.description.len(), 2);

    let variants = list_variants(&pool, id).await.expect("list_variants failed");
    assert_eq!(variants.len(), 2);
    assert_eq!(variants[0].variant_key, "plain-bowl-450g-v1");
    assert_eq!(variants[0].weight_grams, Decimal::new(150, 0));
    assert_eq!(variants[1].status, "out_of_stock");
    assert_eq!(variants[0].diameter_inches, Some(Decimal::new(325, 2)));

    let materials = list_product_materials(&pool, id)
        .await
        .expect("list_product_materials failed");
    assert_eq!(materials, vec!["sterling-silver-925".to_string()]);
    let collections = list_product_collections(&pool, id)
        .await
        .expect("list_product_collections failed");
    assert_eq!(collections, vec!["plain-heritage".to_string()]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn fractional_weight_is_preserved(pool: sqlx::PgPool) {
    let catalog = sample_catalog();
    upsert_reference_data(&pool, &catalog)
        .await
        .expect("upsert_reference_data failed");

    let coin = catalog
        .products
        .iter()
        .find(|p| p.name == "Silver Coin")
        .expect("coin product");
    let id = insert_product(&pool, coin)
        .await
        .expect("insert_product failed");

    let variants = list_variants(&pool, id).await.expect("list_variants failed");
    assert_eq!(variants[0].weight_grams, Decimal::new(105, 1));
}

#[sqlx::test(migrations = "../../migrations")]
async fn product_without_category_stores_null(pool: sqlx::PgPool) {
    let mut catalog = sample_catalog();
    upsert_reference_data(&pool, &catalog)
        .await
        .expect("upsert_reference_data failed");
    catalog.products[0].category = None;

    insert_product(&pool, &catalog.products[0])
        .await
        .expect("insert_product failed");

    let products = list_products(&pool).await.expect("list_products failed");
    assert!(products[0].category_doc_id.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_cascades_to_variants_and_links(pool: sqlx::PgPool) {
    let catalog = sample_catalog();
    reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed_catalog failed");

    let deleted = delete_catalog_products(&pool)
        .await
        .expect("delete_catalog_products failed");
    assert_eq!(deleted, 3);

    let counts = catalog_counts(&pool).await.expect("catalog_counts failed");
    assert_eq!(counts.products, 0);
    assert_eq!(counts.variants, 0);
    assert_eq!(counts.materials, 3, "reference data survives product deletes");

    let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM product_materials")
        .fetch_one(&pool)
        .await
        .expect("count product_materials");
    assert_eq!(links, 0);
}

// ---------------------------------------------------------------------------
// Section 3: Storage bounds
// ---------------------------------------------------------------------------

fn lenient_catalog(rows: &[RawRow]) -> Catalog {
    catalog_from_rows(
        rows,
        ParsePolicy::Lenient,
        &FlagPolicy::default(),
        "test".to_string(),
    )
    .expect("catalog should assemble")
}

#[sqlx::test(migrations = "../../migrations")]
async fn oversized_height_is_dropped_before_reseed(pool: sqlx::PgPool) {
    let catalog = lenient_catalog(&[RawRow::from_pairs([
        ("Category", "Lamps"),
        ("Product Name", "Kamakshi Deepam"),
        ("Weight (Grams)", "620"),
        ("Height (Inches)", "1e6"),
        ("Status", "available"),
    ])]);

    let report = reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed with oversized height failed");
    assert_eq!(report.products_inserted, 1);

    let products = list_products(&pool).await.expect("list_products failed");
    let variants = list_variants(&pool, products[0].id)
        .await
        .expect("list_variants failed");
    assert!(variants[0].height_inches.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn weight_below_storage_precision_is_dropped_before_reseed(pool: sqlx::PgPool) {
    let catalog = lenient_catalog(&[
        row("Coins", "Silver Coin", "0.0004", "available"),
        row("Bowl", "Plain Bowl", "150", "available"),
    ]);
    assert_eq!(catalog.summary.groups_dropped, 1);

    let report = reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed with tiny weight failed");
    assert_eq!(report.products_inserted, 1);

    let products = list_products(&pool).await.expect("list_products failed");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].doc_id, "product-plain-bowl-150g");
}

#[sqlx::test(migrations = "../../migrations")]
async fn colliding_names_reseed_without_unique_violation(pool: sqlx::PgPool) {
    let catalog = lenient_catalog(&[
        row("Bowl", "Plain Bowl", "150", "available"),
        row("Bowl", "PLAIN BOWL", "150", "available"),
        row("Coins", "Silver Coin 10", "5", "available"),
        row("Coins", "Silver Coin", "10.5", "available"),
    ]);

    let report = reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed with colliding names failed");
    assert_eq!(report.products_inserted, 4);

    let mut doc_ids: Vec<String> = list_products(&pool)
        .await
        .expect("list_products failed")
        .into_iter()
        .map(|p| p.doc_id)
        .collect();
    doc_ids.sort();
    assert_eq!(
        doc_ids,
        vec![
            "product-plain-bowl-150g".to_string(),
            "product-plain-bowl-150g-2".to_string(),
            "product-silver-coin-10-5g".to_string(),
            "product-silver-coin-10p5g".to_string(),
        ]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn summed_total_weight_is_stored_rounded(pool: sqlx::PgPool) {
    let catalog = lenient_catalog(&[
        row("Coins", "Silver Coin", "10.1", "available"),
        row("Coins", "Silver Coin", "20.2", "available"),
    ]);
    reseed_catalog(&pool, &catalog)
        .await
        .expect("reseed_catalog failed");

    let products = list_products(&pool).await.expect("list_products failed");
    assert_eq!(products[0].slug, "silver-coin-30p3g");
    assert_eq!(products[0].total_weight_grams, Decimal::new(303, 1));
}
