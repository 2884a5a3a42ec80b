//! Shared domain types: menu items, generated menus, and style tags.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Style constants
// ---------------------------------------------------------------------------

/// Modern clean design.
pub const STYLE_MODERN: &str = "modern";
/// Vintage rustic, chalkboard aesthetic.
pub const STYLE_VINTAGE: &str = "vintage";
/// Elegant upscale design.
pub const STYLE_ELEGANT: &str = "elegant";
/// Casual friendly design.
pub const STYLE_CASUAL: &str = "casual";

/// All valid menu style tags.
pub const VALID_STYLES: &[&str] = &[STYLE_MODERN, STYLE_VINTAGE, STYLE_ELEGANT, STYLE_CASUAL];

/// Style used when a request does not specify one.
pub const DEFAULT_STYLE: &str = STYLE_MODERN;

/// Validate that a style tag is one of the known constants.
pub fn validate_style(style: &str) -> Result<(), CoreError> {
    if VALID_STYLES.contains(&style) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown style '{style}'. Must be one of: {}",
            VALID_STYLES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Category constants
// ---------------------------------------------------------------------------

// Categories are suggestions, not an exhaustive set: menu items accept
// free-text categories from both the form and the content generator.

pub const CATEGORY_APPETIZERS: &str = "Appetizers";
pub const CATEGORY_MAIN_COURSE: &str = "Main Course";
pub const CATEGORY_SIDES: &str = "Sides";
pub const CATEGORY_DESSERTS: &str = "Desserts";
pub const CATEGORY_DRINKS: &str = "Drinks";

/// Suggested menu categories, in display order.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    CATEGORY_APPETIZERS,
    CATEGORY_MAIN_COURSE,
    CATEGORY_SIDES,
    CATEGORY_DESSERTS,
    CATEGORY_DRINKS,
];

// ---------------------------------------------------------------------------
// Menu items
// ---------------------------------------------------------------------------

/// A single entry on a menu.
///
/// Created either by manual form entry or by content generation. Items are
/// immutable once added; an edit is a remove-and-re-add on the client side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Category heading this item appears under (free text allowed).
    pub category: String,
    /// Dish name.
    pub name: String,
    /// Price in whole currency units. Must be non-negative.
    pub price: f64,
    /// Short one-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of a food photograph for this item, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Output of the content-generation capability: a restaurant name plus its
/// menu items. Also the response body of the `/api/surprise` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuContent {
    pub restaurant_name: String,
    pub items: Vec<MenuItem>,
}

/// Result of the single (non-variant) generation path.
///
/// The edit coordinator replaces `image_url` in place and preserves
/// everything else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMenu {
    pub restaurant_name: String,
    /// One of [`VALID_STYLES`].
    pub style: String,
    pub items: Vec<MenuItem>,
    pub image_url: String,
    /// The prompt text the image was generated from, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
