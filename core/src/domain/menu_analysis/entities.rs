use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub name: String,
    #[serde(rename = "type")]
    pub dish_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DishList {
    pub dishes: Vec<Dish>,
}

impl Dish {
    pub fn new(
        name: impl Into<String>,
        dish_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dish_type: dish_type.into(),
            description: description.into(),
        }
    }
}
