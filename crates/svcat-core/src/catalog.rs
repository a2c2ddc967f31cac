//! Catalog documents as written to JSON and loaded into the database.
//!
//! Every document carries an `_id` and a `_type` discriminator; links between
//! documents are `{ "_type": "reference", "_ref": <id> }` objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::app_config::ParsePolicy;
use crate::records::VariantStatus;
use crate::slug::slugify;
use crate::taxonomy::{CollectionId, MaterialId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_type")]
    pub doc_type: String,
    #[serde(rename = "_ref")]
    pub target: String,
}

impl Reference {
    #[must_use]
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            doc_type: "reference".to_string(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugField {
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub current: String,
}

impl SlugField {
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            doc_type: "slug".to_string(),
            current: current.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub title: String,
    pub slug: SlugField,
    pub description: String,
}

impl CategoryDocument {
    /// Build the category document for a display name seen in the input.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let slug = slugify(name);
        Self {
            id: format!("category-{slug}"),
            doc_type: "category".to_string(),
            title: name.to_string(),
            slug: SlugField::new(slug),
            description: format!("Handcrafted silver {} pieces.", name.to_lowercase()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub title: String,
    pub slug: SlugField,
    pub purity: u16,
    pub description: String,
}

impl From<MaterialId> for MaterialDocument {
    fn from(material: MaterialId) -> Self {
        Self {
            id: material.slug().to_string(),
            doc_type: "material".to_string(),
            title: material.title().to_string(),
            slug: SlugField::new(material.slug()),
            purity: material.purity(),
            description: material.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub title: String,
    pub slug: SlugField,
    pub description: String,
}

impl From<CollectionId> for CollectionDocument {
    fn from(collection: CollectionId) -> Self {
        Self {
            id: collection.slug().to_string(),
            doc_type: "collection".to_string(),
            title: collection.title().to_string(),
            slug: SlugField::new(collection.slug()),
            description: collection.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDocument {
    #[serde(rename = "_key")]
    pub key: String,
    pub weight_grams: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter_inches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_inches: Option<f64>,
    pub status: VariantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: String,
    pub name: String,
    pub slug: SlugField,
    /// Two paragraphs of storefront copy.
    pub description: Vec<String>,
    /// `None` when the category was never registered for this run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Reference>,
    pub materials: Vec<Reference>,
    pub collections: Vec<Reference>,
    pub variants: Vec<VariantDocument>,
    pub base_weight_grams: f64,
    pub total_weight_grams: f64,
    pub featured: bool,
    pub available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Metadata describing one import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Where the rows came from, e.g. `"csv:./data/catalog.csv"`.
    pub source: String,
    pub parse_policy: ParsePolicy,
    pub rows_read: usize,
    /// Cleaned records fed to grouping. Static products expand to one per weight.
    pub rows_cleaned: usize,
    /// Rows skipped because the product name was blank.
    pub rows_without_name: usize,
    /// Rows that produced no variant because their weight was zero.
    pub rows_without_weight: usize,
    pub groups_formed: usize,
    /// Groups left with no variants and therefore excluded.
    pub groups_dropped: usize,
    pub dangling_category_refs: usize,
    pub categories: usize,
    pub materials: usize,
    pub collections: usize,
    pub products: usize,
    pub variants: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<CategoryDocument>,
    pub materials: Vec<MaterialDocument>,
    pub collections: Vec<CollectionDocument>,
    pub products: Vec<ProductDocument>,
    pub summary: RunSummary,
}
