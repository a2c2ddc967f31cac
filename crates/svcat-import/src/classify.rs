//! Material and collection heuristics.
//!
//! Both are fixed substring/threshold rules with a defined fallback, so
//! neither can fail.

use svcat_core::{CollectionId, MaterialId, ProductGroup};

/// Heavier than this is cast in the traditional alloy.
pub const ALLOY_MIN_EXCLUSIVE_GRAMS: f64 = 500.0;
/// Lighter than this is fine silver.
pub const PURE_MAX_EXCLUSIVE_GRAMS: f64 = 50.0;

const PURE_NAME_KEYWORDS: [&str; 2] = ["coin", "bar"];

const COLLECTION_KEYWORDS: [(&str, CollectionId); 6] = [
    ("plain", CollectionId::PlainHeritage),
    ("hand engraving", CollectionId::HandEngraving),
    ("machine engraving", CollectionId::MachineEngraving),
    ("nagas", CollectionId::NagasDesign),
    ("ashtalakshmi", CollectionId::Ashtalakshmi),
    ("matte", CollectionId::MatteFinish),
];

const CEREMONIAL_KEYWORDS: [&str; 2] = ["kamakshi", "panchapathram"];

/// Picks the material for one piece. The first matching rule wins:
///
/// 1. weight > 500 g → traditional alloy
/// 2. weight < 50 g, or the name mentions a coin or bar → pure silver
/// 3. otherwise → sterling silver
#[must_use]
pub fn assign_material(name: &str, weight_grams: f64) -> MaterialId {
    if weight_grams > ALLOY_MIN_EXCLUSIVE_GRAMS {
        return MaterialId::TraditionalSilverAlloy;
    }

    let lower = name.to_lowercase();
    if weight_grams < PURE_MAX_EXCLUSIVE_GRAMS
        || PURE_NAME_KEYWORDS.iter().any(|kw| lower.contains(kw))
    {
        return MaterialId::PureSilver999;
    }

    MaterialId::SterlingSilver925
}

/// Materials across every variant of a product, deduplicated, in variant
/// (ascending weight) order.
#[must_use]
pub fn assign_materials(group: &ProductGroup) -> Vec<MaterialId> {
    let mut materials = Vec::new();
    for variant in &group.variants {
        let material = assign_material(&group.name, variant.weight_grams);
        if !materials.contains(&material) {
            materials.push(material);
        }
    }
    materials
}

/// Collections a product name belongs to.
///
/// Every matching design keyword contributes its collection, in keyword
/// order. Ceremonial names only count when no design keyword matched, and
/// anything still unmatched lands in daily use.
#[must_use]
pub fn assign_collections(name: &str) -> Vec<CollectionId> {
    let lower = name.to_lowercase();

    let mut collections: Vec<CollectionId> = COLLECTION_KEYWORDS
        .iter()
        .filter(|(kw, _)| lower.contains(kw))
        .map(|(_, id)| *id)
        .collect();

    if collections.is_empty() && CEREMONIAL_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        collections.push(CollectionId::PoojaEssentials);
    }

    if collections.is_empty() {
        collections.push(CollectionId::DailyUse);
    }

    collections
}

#[cfg(test)]
mod tests {
    use svcat_core::{Variant, VariantStatus};

    use super::*;

    #[test]
    fn heavy_piece_is_traditional_alloy() {
        assert_eq!(
            assign_material("Plain Bowl", 600.0),
            MaterialId::TraditionalSilverAlloy
        );
    }

    #[test]
    fn light_coin_is_pure_silver() {
        assert_eq!(assign_material("Silver Coin", 30.0), MaterialId::PureSilver999);
    }

    #[test]
    fn mid_weight_bowl_is_sterling() {
        assert_eq!(
            assign_material("Plain Bowl", 150.0),
            MaterialId::SterlingSilver925
        );
    }

    #[test]
    fn coin_name_is_pure_at_any_mid_weight() {
        assert_eq!(assign_material("Lakshmi COIN", 100.0), MaterialId::PureSilver999);
        assert_eq!(assign_material("Silver Bar", 250.0), MaterialId::PureSilver999);
    }

    #[test]
    fn weight_rule_precedes_name_rule() {
        assert_eq!(
            assign_material("Silver Bar", 1000.0),
            MaterialId::TraditionalSilverAlloy
        );
    }

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(assign_material("Tray", 500.0), MaterialId::SterlingSilver925);
        assert_eq!(assign_material("Tray", 50.0), MaterialId::SterlingSilver925);
        assert_eq!(assign_material("Tray", 49.9), MaterialId::PureSilver999);
    }

    #[test]
    fn materials_span_variants_without_duplicates() {
        let variant = |w: f64| Variant {
            weight_grams: w,
            height_inches: None,
            diameter_inches: None,
            length_inches: None,
            status: VariantStatus::Available,
            notes: None,
        };
        let group = ProductGroup {
            name: "Plain Bowl".to_string(),
            category: "Bowl".to_string(),
            variants: vec![variant(30.0), variant(150.0), variant(200.0), variant(750.0)],
            image: None,
            source_rows: 4,
        };
        assert_eq!(
            assign_materials(&group),
            vec![
                MaterialId::PureSilver999,
                MaterialId::SterlingSilver925,
                MaterialId::TraditionalSilverAlloy,
            ]
        );
    }

    #[test]
    fn plain_bowl_is_plain_heritage() {
        assert_eq!(
            assign_collections("Plain Bowl"),
            vec![CollectionId::PlainHeritage]
        );
    }

    #[test]
    fn multiple_keywords_all_match() {
        assert_eq!(
            assign_collections("Nagas Ashtalakshmi Design"),
            vec![CollectionId::NagasDesign, CollectionId::Ashtalakshmi]
        );
    }

    #[test]
    fn generic_item_defaults_to_daily_use() {
        assert_eq!(assign_collections("Generic Item"), vec![CollectionId::DailyUse]);
    }

    #[test]
    fn keyword_matching_is_case_insensitive() {
        assert_eq!(
            assign_collections("HAND ENGRAVING Tumbler, Matte"),
            vec![CollectionId::HandEngraving, CollectionId::MatteFinish]
        );
    }

    #[test]
    fn ceremonial_names_go_to_pooja_essentials() {
        assert_eq!(
            assign_collections("Kamakshi Deepam"),
            vec![CollectionId::PoojaEssentials]
        );
        assert_eq!(
            assign_collections("Panchapathram Set"),
            vec![CollectionId::PoojaEssentials]
        );
    }

    #[test]
    fn ceremonial_only_when_no_design_keyword() {
        assert_eq!(
            assign_collections("Machine Engraving Kamakshi Deepam"),
            vec![CollectionId::MachineEngraving]
        );
    }
}
