//! Parsing and structural validation of content-generation responses.
//!
//! Models routinely wrap JSON answers in markdown code fences despite being
//! told not to, so the raw text is cleaned before parsing.

use menugen_core::types::MenuContent;

use crate::capability::ProviderError;

/// Strip surrounding markdown code fences (```json ... ``` or ``` ... ```)
/// and whitespace from a model response.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Parse a model response into [`MenuContent`] and check it is usable.
///
/// A structurally valid but empty menu (no items, blank name) counts as a
/// parse failure: downstream image generation has nothing to work with.
pub fn parse_menu_content(raw: &str) -> Result<MenuContent, ProviderError> {
    let cleaned = strip_code_fences(raw);

    let content: MenuContent = serde_json::from_str(cleaned)
        .map_err(|e| ProviderError::Parse(format!("Invalid menu JSON: {e}")))?;

    if content.restaurant_name.trim().is_empty() {
        return Err(ProviderError::Parse(
            "Menu response is missing a restaurant name".to_string(),
        ));
    }
    if content.items.is_empty() {
        return Err(ProviderError::Parse(
            "Menu response contains no items".to_string(),
        ));
    }
    Ok(content)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{"restaurantName":"The Patty Shack","items":[
        {"category":"Main Course","name":"Classic Burger","price":11,"description":"Beef, cheddar, pickles"}
    ]}"#;

    // -- strip_code_fences -----------------------------------------------------

    #[test]
    fn plain_json_untouched() {
        assert_eq!(strip_code_fences(VALID), VALID.trim());
    }

    #[test]
    fn json_fence_stripped() {
        let wrapped = format!("```json\n{VALID}\n```");
        assert_eq!(strip_code_fences(&wrapped), VALID.trim());
    }

    #[test]
    fn bare_fence_stripped() {
        let wrapped = format!("```\n{VALID}\n```");
        assert_eq!(strip_code_fences(&wrapped), VALID.trim());
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        assert_eq!(strip_code_fences("  \n{}\n  "), "{}");
    }

    // -- parse_menu_content ----------------------------------------------------

    #[test]
    fn valid_response_parses() {
        let content = parse_menu_content(VALID).unwrap();
        assert_eq!(content.restaurant_name, "The Patty Shack");
        assert_eq!(content.items[0].name, "Classic Burger");
    }

    #[test]
    fn fenced_response_parses() {
        let wrapped = format!("```json\n{VALID}\n```");
        assert!(parse_menu_content(&wrapped).is_ok());
    }

    #[test]
    fn garbage_rejected() {
        assert!(matches!(
            parse_menu_content("I'm sorry, I can't produce JSON"),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn empty_item_list_rejected() {
        let raw = r#"{"restaurantName":"The Patty Shack","items":[]}"#;
        assert!(matches!(parse_menu_content(raw), Err(ProviderError::Parse(_))));
    }

    #[test]
    fn blank_restaurant_name_rejected() {
        let raw = r#"{"restaurantName":"  ","items":[{"category":"Drinks","name":"Tea","price":3}]}"#;
        assert!(matches!(parse_menu_content(raw), Err(ProviderError::Parse(_))));
    }
}
