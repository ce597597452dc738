use serde_json::json;

/// Returns the JSON schema for menu analysis LLM responses
pub fn get_dish_list_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dishes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "description": { "type": "string" }
                    },
                    "required": ["name", "type", "description"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["dishes"],
        "additionalProperties": false
    })
}
