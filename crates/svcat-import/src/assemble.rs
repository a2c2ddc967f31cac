//! Assembly of grouped products into catalog documents.

use std::collections::{HashMap, HashSet};

use svcat_core::{
    round_measure, slugify, AppConfig, CategoryDocument, CleanedRecord, ProductDocument, ProductGroup, Reference,
    SlugField, VariantDocument,
};

use crate::classify::{assign_collections, assign_materials};

/// Category name → document id, built once per run and passed to the
/// assembler.
#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    documents: Vec<CategoryDocument>,
    ids: HashMap<String, String>,
}

impl CategoryLookup {
    /// Register every distinct non-blank category in `records`, in first-seen
    /// order.
    #[must_use]
    pub fn from_records(records: &[CleanedRecord]) -> Self {
        Self::from_names(records.iter().map(|r| r.category.as_str()))
    }

    /// Register category display names. Names that slug identically share
    /// the first registered document.
    #[must_use]
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lookup = Self::default();
        for name in names {
            lookup.register(name);
        }
        lookup
    }

    fn register(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || slugify(name).is_empty() || self.ids.contains_key(name) {
            return;
        }

        let doc = CategoryDocument::from_name(name);
        let id = match self.documents.iter().find(|d| d.id == doc.id) {
            Some(existing) => existing.id.clone(),
            None => {
                let id = doc.id.clone();
                self.documents.push(doc);
                id
            }
        };
        self.ids.insert(name.to_string(), id);
    }

    /// Document id for a category name, if it was registered.
    #[must_use]
    pub fn id_for(&self, name: &str) -> Option<&str> {
        self.ids.get(name.trim()).map(String::as_str)
    }

    #[must_use]
    pub fn documents(&self) -> &[CategoryDocument] {
        &self.documents
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<CategoryDocument> {
        self.documents
    }
}

/// How the `featured` flag is decided.
///
/// A product is featured when its lightest variant falls inside the
/// inclusive `[featured_min_grams, featured_max_grams]` band. `available` is
/// not configurable: a product is available when any variant is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlagPolicy {
    pub featured_min_grams: f64,
    pub featured_max_grams: f64,
}

impl Default for FlagPolicy {
    fn default() -> Self {
        Self {
            featured_min_grams: 100.0,
            featured_max_grams: 300.0,
        }
    }
}

impl FlagPolicy {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            featured_min_grams: config.featured_min_grams,
            featured_max_grams: config.featured_max_grams,
        }
    }

    #[must_use]
    pub fn is_featured(&self, group: &ProductGroup) -> bool {
        if group.variants.is_empty() {
            return false;
        }
        let base = group.base_weight();
        (self.featured_min_grams..=self.featured_max_grams).contains(&base)
    }
}

/// Products plus the number whose category could not be resolved.
#[derive(Debug, Clone, Default)]
pub struct AssembledProducts {
    pub products: Vec<ProductDocument>,
    pub dangling_category_refs: usize,
}

/// Build one product document per group.
///
/// A group whose category is not in `categories` gets no category reference;
/// it is counted and logged, not rejected.
///
/// Slugs are unique within the batch. When two groups produce the same slug
/// (names differing only in case or punctuation), later groups get `-2`,
/// `-3`, ... appended in input order.
#[must_use]
pub fn assemble_products(
    groups: &[ProductGroup],
    categories: &CategoryLookup,
    flags: &FlagPolicy,
) -> AssembledProducts {
    let mut assembled = AssembledProducts::default();
    let mut taken: HashSet<String> = HashSet::with_capacity(groups.len());

    for group in groups {
        let slug = unique_slug(product_slug(group), &mut taken);
        let product = build_product(group, slug, categories, flags);
        if product.category.is_none() {
            tracing::warn!(
                product = %group.name,
                category = %group.category,
                "category not registered; leaving reference unresolved"
            );
            assembled.dangling_category_refs += 1;
        }
        assembled.products.push(product);
    }

    assembled
}

/// Build the document for a single product group.
#[must_use]
pub fn assemble_product(
    group: &ProductGroup,
    categories: &CategoryLookup,
    flags: &FlagPolicy,
) -> ProductDocument {
    build_product(group, product_slug(group), categories, flags)
}

/// Claim `slug` in `taken`, suffixing `-2`, `-3`, ... until it is free.
///
/// Natural slugs end in the `g` of the weight token, so a suffixed slug never
/// shadows a later natural one.
fn unique_slug(slug: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(slug.clone()) {
        return slug;
    }
    let mut n = 2_usize;
    loop {
        let candidate = format!("{slug}-{n}");
        if taken.insert(candidate.clone()) {
            tracing::warn!(slug = %slug, assigned = %candidate, "duplicate product slug; suffixed");
            return candidate;
        }
        n += 1;
    }
}

fn build_product(
    group: &ProductGroup,
    slug: String,
    categories: &CategoryLookup,
    flags: &FlagPolicy,
) -> ProductDocument {
    let variants = group
        .variants
        .iter()
        .enumerate()
        .map(|(idx, v)| VariantDocument {
            key: format!("{slug}-v{}", idx + 1),
            weight_grams: v.weight_grams,
            height_inches: v.height_inches,
            diameter_inches: v.diameter_inches,
            length_inches: v.length_inches,
            status: v.status,
            notes: v.notes.clone(),
        })
        .collect();

    ProductDocument {
        id: format!("product-{slug}"),
        doc_type: "product".to_string(),
        name: group.name.clone(),
        slug: SlugField::new(slug),
        description: describe(group),
        category: categories.id_for(&group.category).map(Reference::to),
        materials: assign_materials(group)
            .into_iter()
            .map(|m| Reference::to(m.slug()))
            .collect(),
        collections: assign_collections(&group.name)
            .into_iter()
            .map(|c| Reference::to(c.slug()))
            .collect(),
        variants,
        base_weight_grams: round_measure(group.base_weight()),
        total_weight_grams: group.total_weight(),
        featured: flags.is_featured(group),
        available: group.has_available_variant(),
        image: group.image.clone(),
    }
}

/// Slug from the product name and its total weight, e.g. `plain-bowl-450g`.
///
/// A fractional total keeps its decimal point as `p` (`silver-coin-10p5g`),
/// so it cannot be confused with a name ending in a number.
#[must_use]
pub fn product_slug(group: &ProductGroup) -> String {
    let grams = format_grams(group.total_weight()).replace('.', "p");
    slugify(&format!("{} {grams}g", group.name))
}

/// Two paragraphs of storefront copy.
#[must_use]
pub fn describe(group: &ProductGroup) -> Vec<String> {
    let category = if group.category.is_empty() {
        "silverware".to_string()
    } else {
        group.category.to_lowercase()
    };

    let first = format!(
        "The {} is a handcrafted silver {} piece from our {} range, starting at {}g.",
        group.name,
        category,
        category,
        format_grams(group.base_weight()),
    );

    let second = if group.variants.len() > 1 {
        format!(
            "Available in {} weights from {}g to {}g, each piece is finished by hand.",
            group.variants.len(),
            format_grams(group.base_weight()),
            format_grams(group.max_weight()),
        )
    } else {
        format!(
            "Offered at {}g and finished by hand.",
            format_grams(group.base_weight()),
        )
    };

    vec![first, second]
}

/// `150.0` → `"150"`, `150.5` → `"150.5"`, `30.299999999999997` → `"30.3"`.
fn format_grams(grams: f64) -> String {
    format!("{}", round_measure(grams))
}

#[cfg(test)]
#[path = "assemble_test.rs"]
mod tests;
