//! Menu input validation, prompt construction, and the fallback menu.
//!
//! Prompt text lives here so the provider client and the single-generation
//! handler produce identical wording for the same menu.

use crate::error::CoreError;
use crate::types::{
    MenuContent, MenuItem, CATEGORY_APPETIZERS, CATEGORY_DESSERTS, CATEGORY_MAIN_COURSE,
    STYLE_CASUAL, STYLE_ELEGANT, STYLE_VINTAGE,
};

// ---------------------------------------------------------------------------
// Style descriptions
// ---------------------------------------------------------------------------

/// Map a style tag to the descriptive phrase embedded in image prompts.
///
/// Unknown tags fall back to the modern description so a stale client can
/// never break image generation.
pub fn style_description(style: &str) -> &'static str {
    match style {
        STYLE_VINTAGE => {
            "Vintage rustic style, chalkboard aesthetic, hand-drawn feel, warm colors"
        }
        STYLE_ELEGANT => {
            "Elegant upscale design, sophisticated fonts, gold accents, luxury feel"
        }
        STYLE_CASUAL => "Casual friendly design, bright colors, fun fonts, approachable layout",
        // STYLE_MODERN and anything unrecognized.
        _ => "Modern clean design, minimalist, sharp typography, high contrast",
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a concept prompt: must be non-empty after trimming.
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation(
            "Prompt must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a natural-language edit instruction: must be non-empty after
/// trimming.
pub fn validate_edit_instruction(instruction: &str) -> Result<(), CoreError> {
    if instruction.trim().is_empty() {
        return Err(CoreError::Validation(
            "Edit instruction must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate an image reference: non-empty and http(s).
///
/// Image references are provider-hosted URLs, so anything that is not an
/// http(s) URL cannot refer to a previously produced image.
pub fn validate_image_url(url: &str) -> Result<(), CoreError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "Image URL must not be empty".to_string(),
        ));
    }
    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err(CoreError::Validation(format!(
            "Image URL must start with http:// or https://, got: '{trimmed}'"
        )));
    }
    Ok(())
}

/// Validate the inputs of the single-generation path.
///
/// Rules:
/// - Restaurant name must not be empty after trimming.
/// - At least one menu item.
/// - Every item must have a non-empty name and a non-negative price.
pub fn validate_menu_input(restaurant_name: &str, items: &[MenuItem]) -> Result<(), CoreError> {
    if restaurant_name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Restaurant name must not be empty".to_string(),
        ));
    }
    if items.is_empty() {
        return Err(CoreError::Validation(
            "Menu must contain at least one item".to_string(),
        ));
    }
    for (i, item) in items.iter().enumerate() {
        if item.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Menu item at index {i} must have a name"
            )));
        }
        if item.price < 0.0 || !item.price.is_finite() {
            return Err(CoreError::Validation(format!(
                "Menu item '{}' must have a non-negative price",
                item.name
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompt construction
// ---------------------------------------------------------------------------

/// Build the content-generation prompt for a restaurant concept.
pub fn content_prompt(user_prompt: &str) -> String {
    format!(
        r#"You are a restaurant menu creator AI. Given a description of a restaurant type or concept,
generate a complete restaurant menu with a creative name, menu items organized by category, with prices and descriptions.

User request: {user_prompt}

Return ONLY valid JSON in this exact format (no markdown, no code blocks, just raw JSON):
{{
    "restaurantName": "Creative Restaurant Name",
    "items": [
        {{"category": "Category Name", "name": "Item Name", "price": 12, "description": "Brief description"}},
        ...
    ]
}}

Guidelines:
- Create 3-6 menu items total
- Use appropriate categories (Appetizers, Main Course, Sides, Desserts, Drinks, etc.)
- Prices should be realistic numbers (no $ symbol, just the number)
- Descriptions should be brief (under 15 words)
- Make the restaurant name creative and fitting to the concept"#
    )
}

/// Build the prompt for a single item's food photograph.
pub fn food_image_prompt(name: &str, description: Option<&str>) -> String {
    let mut prompt = format!("Professional food photography of {name}");
    if let Some(desc) = description {
        if !desc.trim().is_empty() {
            prompt.push_str(", ");
            prompt.push_str(desc);
        }
    }
    prompt.push_str(
        ". High quality, appetizing, restaurant menu style, natural lighting, close-up shot, realistic",
    );
    prompt
}

/// Build the full menu-image prompt: header, items grouped by category in
/// first-seen order, then the style description and layout directives.
pub fn build_menu_prompt(restaurant_name: &str, items: &[MenuItem], style: &str) -> String {
    // Group by category, preserving the order categories first appear in.
    let mut categories: Vec<(&str, Vec<&MenuItem>)> = Vec::new();
    for item in items {
        match categories.iter_mut().find(|(c, _)| *c == item.category) {
            Some((_, group)) => group.push(item),
            None => categories.push((item.category.as_str(), vec![item])),
        }
    }

    let mut prompt = format!(
        "Professional restaurant menu for '{restaurant_name}' with food photography layout.\n\n"
    );

    for (category, group) in &categories {
        prompt.push_str(&category.to_uppercase());
        prompt.push_str(":\n");
        for item in group {
            prompt.push_str(&format!("- {} ${}", item.name, item.price));
            if let Some(desc) = &item.description {
                if !desc.is_empty() {
                    prompt.push_str(&format!(" - {desc}"));
                }
            }
            if item.image_url.is_some() {
                prompt.push_str(" [with food photo]");
            }
            prompt.push('\n');
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!(
        "\n{}. Include space for food photographs next to items. Sharp, crisp, highly readable text. Clear prices. Professional layout with image placeholders.",
        style_description(style)
    ));

    prompt
}

// ---------------------------------------------------------------------------
// Fallback menu
// ---------------------------------------------------------------------------

/// Canned menu returned by the synchronous content path when the provider
/// fails. The variant pipeline never uses this; failed variants report an
/// error status instead.
pub fn fallback_menu() -> MenuContent {
    MenuContent {
        restaurant_name: "The Restaurant".to_string(),
        items: vec![
            MenuItem {
                category: CATEGORY_APPETIZERS.to_string(),
                name: "Soup of the Day".to_string(),
                price: 6.0,
                description: Some("Fresh daily soup".to_string()),
                image_url: None,
            },
            MenuItem {
                category: CATEGORY_MAIN_COURSE.to_string(),
                name: "Grilled Chicken".to_string(),
                price: 16.0,
                description: Some("Herb-marinated chicken breast".to_string()),
                image_url: None,
            },
            MenuItem {
                category: CATEGORY_DESSERTS.to_string(),
                name: "Cheesecake".to_string(),
                price: 7.0,
                description: Some("Classic New York style".to_string()),
                image_url: None,
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CATEGORY_DRINKS, STYLE_MODERN};

    fn item(category: &str, name: &str, price: f64) -> MenuItem {
        MenuItem {
            category: category.to_string(),
            name: name.to_string(),
            price,
            description: None,
            image_url: None,
        }
    }

    // -- validate_prompt -----------------------------------------------------

    #[test]
    fn prompt_accepted() {
        assert!(validate_prompt("burger joint").is_ok());
    }

    #[test]
    fn empty_prompt_rejected() {
        assert!(validate_prompt("").is_err());
        assert!(validate_prompt("   \t\n").is_err());
    }

    // -- validate_edit_instruction --------------------------------------------

    #[test]
    fn edit_instruction_accepted() {
        assert!(validate_edit_instruction("make text larger").is_ok());
    }

    #[test]
    fn blank_edit_instruction_rejected() {
        assert!(validate_edit_instruction("  ").is_err());
    }

    // -- validate_image_url ---------------------------------------------------

    #[test]
    fn http_urls_accepted() {
        assert!(validate_image_url("https://cdn.example.com/menu.png").is_ok());
        assert!(validate_image_url("http://cdn.example.com/menu.png").is_ok());
    }

    #[test]
    fn non_http_url_rejected() {
        assert!(validate_image_url("").is_err());
        assert!(validate_image_url("file:///tmp/menu.png").is_err());
        assert!(validate_image_url("just-a-path").is_err());
    }

    // -- validate_menu_input --------------------------------------------------

    #[test]
    fn menu_input_accepted() {
        let items = vec![item(CATEGORY_MAIN_COURSE, "Burger", 12.0)];
        assert!(validate_menu_input("The Patty Shack", &items).is_ok());
    }

    #[test]
    fn blank_restaurant_name_rejected() {
        let items = vec![item(CATEGORY_MAIN_COURSE, "Burger", 12.0)];
        assert!(validate_menu_input("  ", &items).is_err());
    }

    #[test]
    fn empty_item_list_rejected() {
        assert!(validate_menu_input("The Patty Shack", &[]).is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let items = vec![item(CATEGORY_MAIN_COURSE, "Burger", -1.0)];
        assert!(validate_menu_input("The Patty Shack", &items).is_err());
    }

    #[test]
    fn unnamed_item_rejected() {
        let items = vec![item(CATEGORY_MAIN_COURSE, "", 12.0)];
        assert!(validate_menu_input("The Patty Shack", &items).is_err());
    }

    // -- prompt construction --------------------------------------------------

    #[test]
    fn content_prompt_embeds_user_request() {
        let prompt = content_prompt("a burger joint");
        assert!(prompt.contains("User request: a burger joint"));
        assert!(prompt.contains("restaurantName"));
    }

    #[test]
    fn food_image_prompt_with_description() {
        let prompt = food_image_prompt("Smash Burger", Some("double patty"));
        assert!(prompt.starts_with("Professional food photography of Smash Burger, double patty"));
        assert!(prompt.ends_with("realistic"));
    }

    #[test]
    fn food_image_prompt_without_description() {
        let prompt = food_image_prompt("Lemonade", None);
        assert!(prompt.starts_with("Professional food photography of Lemonade."));
    }

    #[test]
    fn menu_prompt_groups_by_category_in_first_seen_order() {
        let items = vec![
            item(CATEGORY_DRINKS, "Lemonade", 4.0),
            item(CATEGORY_MAIN_COURSE, "Burger", 12.0),
            item(CATEGORY_DRINKS, "Iced Tea", 3.0),
        ];
        let prompt = build_menu_prompt("The Patty Shack", &items, STYLE_MODERN);

        let drinks_pos = prompt.find("DRINKS:").unwrap();
        let mains_pos = prompt.find("MAIN COURSE:").unwrap();
        assert!(drinks_pos < mains_pos, "categories must keep input order");

        // Both drinks listed under the single DRINKS heading.
        assert!(prompt.contains("- Lemonade $4"));
        assert!(prompt.contains("- Iced Tea $3"));
        assert_eq!(prompt.matches("DRINKS:").count(), 1);
    }

    #[test]
    fn menu_prompt_marks_items_with_photos() {
        let mut with_photo = item(CATEGORY_MAIN_COURSE, "Burger", 12.0);
        with_photo.image_url = Some("https://cdn.example.com/burger.png".into());
        let prompt = build_menu_prompt("The Patty Shack", &[with_photo], STYLE_MODERN);
        assert!(prompt.contains("- Burger $12 [with food photo]"));
    }

    #[test]
    fn menu_prompt_uses_style_description() {
        let items = vec![item(CATEGORY_MAIN_COURSE, "Burger", 12.0)];
        let prompt = build_menu_prompt("The Patty Shack", &items, STYLE_ELEGANT);
        assert!(prompt.contains("gold accents"));
    }

    #[test]
    fn unknown_style_falls_back_to_modern() {
        assert_eq!(style_description("brutalist"), style_description(STYLE_MODERN));
    }

    // -- fallback menu --------------------------------------------------------

    #[test]
    fn fallback_menu_is_valid_menu_input() {
        let menu = fallback_menu();
        assert!(validate_menu_input(&menu.restaurant_name, &menu.items).is_ok());
    }
}
