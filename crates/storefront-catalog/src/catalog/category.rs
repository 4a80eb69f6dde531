//! Category types for product organization.

use crate::error::CatalogError;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Label shown in place of a category name when a product has none.
pub const UNCATEGORIZED_LABEL: &str = "uncategorized";

/// The category reference embedded in a product record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Category identifier.
    pub id: CategoryId,
    /// Category display name.
    pub name: String,
}

/// A category as listed by the category endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category identifier.
    pub id: CategoryId,
    /// Category display name.
    pub name: String,
    /// Optional icon or cover image.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Category {
    /// Create a category without an image.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
        }
    }

    /// Path of the category browse page.
    pub fn browse_path(&self) -> String {
        format!("/category/{}", self.id)
    }

    /// The reference form embedded in product records.
    pub fn as_ref_entry(&self) -> CategoryRef {
        CategoryRef {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Decode a JSON array of categories.
pub fn decode_categories(bytes: &[u8]) -> Result<Vec<Category>, CatalogError> {
    Ok(serde_json::from_slice(bytes)?)
}
