use serde::Deserialize;

use crate::error::RecipeError;

/// Category used when a record carries no cuisine.
pub const DEFAULT_CATEGORY: &str = "General";

/// Rating used when a record carries none.
pub const DEFAULT_RATING: f64 = 4.0;

/// A single catalog entry, built once from a fetched record and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub ingredients: Vec<String>,
    /// Steps in the order they are performed
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub rating: f64,
}

impl Recipe {
    /// Parse a recipe-list response body (`{"recipes": [...]}`) into catalog order.
    pub fn parse_catalog(body: &str) -> Result<Vec<Recipe>, RecipeError> {
        let response: CatalogResponse = serde_json::from_str(body)?;
        Ok(response.recipes.into_iter().map(Recipe::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    recipes: Vec<RecipeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipeRecord {
    id: RecordId,
    name: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    cuisine: Option<String>,
    #[serde(default)]
    ingredients: Option<Vec<String>>,
    #[serde(default)]
    instructions: Option<Vec<String>>,
    // Any JSON number is accepted and rendered as written
    #[serde(default)]
    prep_time_minutes: Option<serde_json::Number>,
    #[serde(default)]
    cook_time_minutes: Option<serde_json::Number>,
    #[serde(default)]
    servings: Option<serde_json::Number>,
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        }
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        Recipe {
            id: record.id.into(),
            title: record.name,
            image_url: record.image.unwrap_or_default(),
            category: record
                .cuisine
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            ingredients: record.ingredients.unwrap_or_default(),
            instructions: record.instructions.unwrap_or_default(),
            prep_time: format!("{} min", number_or_zero(record.prep_time_minutes)),
            cook_time: format!("{} min", number_or_zero(record.cook_time_minutes)),
            servings: format!("{} servings", number_or_zero(record.servings)),
            rating: record.rating.unwrap_or(DEFAULT_RATING),
        }
    }
}

fn number_or_zero(value: Option<serde_json::Number>) -> String {
    value.map_or_else(|| "0".to_string(), |n| n.to_string())
}
