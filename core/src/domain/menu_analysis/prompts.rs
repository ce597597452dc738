use crate::domain::{common::language::Language, menu_analysis::value_objects::ChatPrompt};

const OUTPUT_FORMAT: &str = r#"{"dishes": [{"name": "dish name", "type": "dish type", "description": "description"}]}"#;

/// Fixed instruction pair for the menu analyzer. Without a recognised
/// language hint the model answers in the language printed on the menu.
pub fn menu_analysis_prompt(language: Option<&str>) -> ChatPrompt {
    let language_clause = match language.and_then(Language::parse) {
        Some(language) => format!("written in {}", language.english_name()),
        None => "written in the same language as the menu".to_string(),
    };

    ChatPrompt {
        system: format!(
            "This is a restaurant menu. Extract the dishes on the menu and return the result as JSON. \
             The response must use exactly this format: {}. \
             Make sure the response is valid JSON, with every field {}.",
            OUTPUT_FORMAT, language_clause
        ),
        user: format!(
            "Analyze every dish in this image and list its name, type and description. \
             You must answer in JSON, {}.",
            language_clause
        ),
    }
}
