//! End-to-end import of the bundled sample spreadsheet and static list.
//!
//! Reads `data/silverware-catalog.csv` and `config/static-products.yaml` from
//! the workspace root and writes JSON into a temp directory.

use std::path::PathBuf;

use svcat_core::{Catalog, ParsePolicy, ProductDocument, Reference};
use svcat_import::{
    build_catalog, write_catalog_json, FlagPolicy, ImportError, ImportOptions, ReaderKind, Source,
};

fn workspace_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

fn sample_csv(reader: ReaderKind, policy: ParsePolicy) -> ImportOptions {
    ImportOptions {
        source: Source::Csv {
            path: workspace_file("data/silverware-catalog.csv"),
            reader,
        },
        parse_policy: policy,
        flags: FlagPolicy::default(),
    }
}

fn product<'a>(catalog: &'a Catalog, name: &str) -> &'a ProductDocument {
    catalog
        .products
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("missing product {name}"))
}

#[test]
fn sample_spreadsheet_builds_expected_catalog() {
    let catalog = build_catalog(&sample_csv(ReaderKind::Csv, ParsePolicy::Lenient))
        .expect("sample import failed");

    let summary = &catalog.summary;
    assert_eq!(summary.rows_read, 11);
    assert_eq!(summary.groups_formed, 8);
    assert_eq!(summary.groups_dropped, 1);
    assert_eq!(summary.products, 7);
    assert_eq!(summary.variants, 10);
    assert_eq!(summary.categories, 7);
    assert_eq!(summary.dangling_category_refs, 0);

    assert!(catalog.products.iter().all(|p| p.name != "Custom Tray"));

    let bowl = product(&catalog, "Plain Bowl");
    assert_eq!(bowl.slug.current, "plain-bowl-450g");
    assert!(bowl.featured);

    let nagas = product(&catalog, "Nagas Design Bowl");
    assert_eq!(
        nagas.variants[0].notes.as_deref(),
        Some("Hand finished, made to order")
    );
    assert_eq!(nagas.materials, vec![Reference::to("traditional-silver-alloy")]);

    let coin = product(&catalog, "Silver Coin");
    assert!(coin.available);
    assert!(!coin.featured);

    let plate = product(&catalog, "Matte Finish Plate");
    assert!(!plate.available);
    assert_eq!(plate.collections, vec![Reference::to("matte-finish")]);
}

#[test]
fn sample_spreadsheet_is_valid_under_strict_policy() {
    let catalog = build_catalog(&sample_csv(ReaderKind::Csv, ParsePolicy::Strict))
        .expect("strict import failed");
    assert_eq!(catalog.summary.products, 7);
}

#[test]
fn sample_spreadsheet_writes_json_files() {
    let catalog = build_catalog(&sample_csv(ReaderKind::Csv, ParsePolicy::Lenient))
        .expect("sample import failed");
    let out = tempfile::tempdir().expect("tempdir");

    let written = write_catalog_json(&catalog, out.path()).expect("write failed");
    assert_eq!(written.len(), 6);

    let complete = std::fs::read_to_string(out.path().join("complete-data.json")).unwrap();
    let parsed: Catalog = serde_json::from_str(&complete).unwrap();
    assert_eq!(parsed.products.len(), 7);
    assert_eq!(parsed.summary.run_id, catalog.summary.run_id);

    let products: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path().join("products.json")).unwrap())
            .unwrap();
    assert_eq!(products[0]["_type"], "product");
    assert_eq!(products[0]["category"]["_ref"], "category-bowl");
    assert_eq!(products[0]["variants"][0]["_key"], "plain-bowl-450g-v1");
}

#[test]
fn bundled_static_list_builds() {
    let options = ImportOptions {
        source: Source::Static {
            path: workspace_file("config/static-products.yaml"),
        },
        parse_policy: ParsePolicy::Lenient,
        flags: FlagPolicy::default(),
    };
    let catalog = build_catalog(&options).expect("static import failed");

    assert_eq!(catalog.summary.rows_read, 4);
    assert_eq!(catalog.summary.products, 3);
    let pooja = product(&catalog, "Panchapathram Set");
    assert_eq!(pooja.collections, vec![Reference::to("pooja-essentials")]);
    assert_eq!(pooja.image.as_deref(), Some("/images/products/panchapathram.jpg"));
}

#[test]
fn missing_static_list_is_config_error() {
    let options = ImportOptions {
        source: Source::Static {
            path: workspace_file("config/does-not-exist.yaml"),
        },
        parse_policy: ParsePolicy::Lenient,
        flags: FlagPolicy::default(),
    };
    assert!(matches!(
        build_catalog(&options),
        Err(ImportError::Config(_))
    ));
}
