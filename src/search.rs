use crate::model::Recipe;

/// Filter `recipes` by a free-text query, keeping catalog order.
///
/// Matching is a case-insensitive substring test against the title and the
/// category. A blank query matches everything.
pub fn search<'a>(recipes: &'a [Recipe], query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return recipes.iter().collect();
    }

    recipes
        .iter()
        .filter(|recipe| matches_query(recipe, &query))
        .collect()
}

/// `query` must already be trimmed and lowercased.
fn matches_query(recipe: &Recipe, query: &str) -> bool {
    recipe.title.to_lowercase().contains(query) || recipe.category.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, category: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            image_url: String::new(),
            category: category.to_string(),
            ingredients: vec![],
            instructions: vec![],
            prep_time: "0 min".to_string(),
            cook_time: "0 min".to_string(),
            servings: "0 servings".to_string(),
            rating: 4.0,
        }
    }

    fn catalog() -> Vec<Recipe> {
        vec![
            recipe("1", "Classic Margherita Pizza", "Italian"),
            recipe("2", "Vegetarian Stir-Fry", "Asian"),
            recipe("3", "Chocolate Chip Cookies", "American"),
            recipe("4", "Tiramisu", "Italian"),
        ]
    }

    fn ids(results: Vec<&Recipe>) -> Vec<&str> {
        results.into_iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let recipes = catalog();
        assert_eq!(ids(search(&recipes, "")), vec!["1", "2", "3", "4"]);
        assert_eq!(ids(search(&recipes, "   ")), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let recipes = catalog();
        assert_eq!(ids(search(&recipes, "PIZZA")), vec!["1"]);
        assert_eq!(ids(search(&recipes, " cookies ")), vec!["3"]);
    }

    #[test]
    fn test_matches_category_in_catalog_order() {
        let recipes = catalog();
        assert_eq!(ids(search(&recipes, "italian")), vec!["1", "4"]);
    }

    #[test]
    fn test_no_match() {
        let recipes = catalog();
        assert!(search(&recipes, "sushi").is_empty());
    }
}
