use crate::domain::{
    common::entities::app_errors::CoreError,
    menu_analysis::entities::{Dish, DishList},
};

/// Finds the first balanced `{...}` block in free text. Braces inside JSON
/// string literals are ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    text.match_indices('{')
        .find_map(|(start, _)| balanced_block(&text[start..]))
}

fn balanced_block(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Parses a model reply into dishes. A reply that is already a JSON object
/// (structured output mode) is used as is; otherwise the first JSON block
/// embedded in the prose is extracted.
pub fn parse_dish_list(raw: &str) -> Result<Vec<Dish>, CoreError> {
    let trimmed = raw.trim();

    let value = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(value) if value.is_object() => value,
        _ => {
            let candidate = extract_json_object(trimmed).ok_or_else(|| {
                tracing::error!("No JSON pattern found in content");
                CoreError::NoJsonFound
            })?;

            serde_json::from_str(candidate).map_err(|e| {
                tracing::error!(content = %candidate, "Failed to parse JSON response: {}", e);
                CoreError::InvalidResponse(e.to_string())
            })?
        }
    };

    let list: DishList = serde_json::from_value(value).map_err(|e| {
        tracing::error!("Invalid dishes format: {}", e);
        CoreError::SchemaMismatch(e.to_string())
    })?;

    Ok(list.dishes)
}
