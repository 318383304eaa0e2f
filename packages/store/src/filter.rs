//! # Recipe filtering
//!
//! A recipe passes the filter when it satisfies both predicates:
//!
//! - **query**: case-insensitive substring of the name, the cuisine, any
//!   ingredient or any tag. An empty query matches everything.
//! - **cuisine**: exact match on the cuisine field. An empty selector matches
//!   everything.
//!
//! Filtering never reorders: the output keeps the relative order of the input.

use std::collections::BTreeSet;

use crate::models::RecipeRecord;

/// The user's current search text and cuisine selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub cuisine: String,
}

impl FilterState {
    pub fn new(query: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            cuisine: cuisine.into(),
        }
    }

    /// Build the predicate for this state, lowercasing the query once.
    pub fn predicate(&self) -> RecipePredicate<'_> {
        RecipePredicate {
            needle: self.query.to_lowercase(),
            cuisine: &self.cuisine,
        }
    }
}

/// Compiled form of a [`FilterState`].
#[derive(Clone, Debug)]
pub struct RecipePredicate<'a> {
    needle: String,
    cuisine: &'a str,
}

impl RecipePredicate<'_> {
    pub fn matches(&self, recipe: &RecipeRecord) -> bool {
        self.matches_query(recipe) && self.matches_cuisine(recipe)
    }

    fn matches_query(&self, recipe: &RecipeRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let hit = |text: &str| text.to_lowercase().contains(&self.needle);

        hit(&recipe.name)
            || hit(&recipe.cuisine)
            || recipe.ingredients.iter().any(|i| hit(i))
            || recipe.tags().iter().any(|t| hit(t))
    }

    fn matches_cuisine(&self, recipe: &RecipeRecord) -> bool {
        self.cuisine.is_empty() || recipe.cuisine == self.cuisine
    }
}

/// Recipes matching `query` and `cuisine`, in input order.
pub fn filter<'a>(records: &'a [RecipeRecord], query: &str, cuisine: &str) -> Vec<&'a RecipeRecord> {
    let state = FilterState::new(query, cuisine);
    let predicate = state.predicate();
    records.iter().filter(|r| predicate.matches(r)).collect()
}

/// Positions in `records` that match `state`, in input order.
pub fn filter_indices(records: &[RecipeRecord], state: &FilterState) -> Vec<usize> {
    let predicate = state.predicate();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| predicate.matches(r))
        .map(|(i, _)| i)
        .collect()
}

/// Distinct cuisines, sorted, for the cuisine selector.
pub fn cuisines(records: &[RecipeRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.cuisine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Difficulty;

    pub(crate) fn recipe(id: u32, name: &str, cuisine: &str) -> RecipeRecord {
        RecipeRecord {
            id,
            name: name.to_string(),
            image: String::new(),
            prep_time_minutes: 10,
            cook_time_minutes: 20,
            difficulty: Difficulty::Easy,
            rating: 4.5,
            cuisine: cuisine.to_string(),
            ingredients: Vec::new(),
            instructions: Vec::new(),
            tags: None,
            servings: None,
            meal_type: Vec::new(),
            review_count: None,
            calories_per_serving: None,
        }
    }

    fn sample() -> Vec<RecipeRecord> {
        vec![
            recipe(1, "Chocolate Cake", "Dessert"),
            recipe(2, "Veg Soup", "Soup"),
            recipe(3, "Choco Pudding", "Dessert"),
        ]
    }

    fn names(found: &[&RecipeRecord]) -> Vec<String> {
        found.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let records = sample();
        let found = filter(&records, "", "");
        assert_eq!(names(&found), ["Chocolate Cake", "Veg Soup", "Choco Pudding"]);
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let records = sample();
        assert_eq!(names(&filter(&records, "choc", "")), ["Chocolate Cake", "Choco Pudding"]);
        assert_eq!(names(&filter(&records, "CHOC", "")), ["Chocolate Cake", "Choco Pudding"]);
    }

    #[test]
    fn test_cuisine_selector_is_exact() {
        let records = sample();
        assert_eq!(names(&filter(&records, "", "Dessert")), ["Chocolate Cake", "Choco Pudding"]);
        assert!(filter(&records, "", "dessert").is_empty());
        assert!(filter(&records, "", "Dess").is_empty());
    }

    #[test]
    fn test_query_and_cuisine_combine_with_and() {
        let records = sample();
        assert!(filter(&records, "soup", "Dessert").is_empty());
        assert_eq!(names(&filter(&records, "soup", "Soup")), ["Veg Soup"]);
    }

    #[test]
    fn test_query_matches_cuisine_ingredients_and_tags() {
        let mut records = sample();
        records[1].ingredients = vec!["Carrots".to_string(), "Celery".to_string()];
        records[2].tags = Some(vec!["Quick".to_string()]);

        assert_eq!(names(&filter(&records, "dess", "")), ["Chocolate Cake", "Choco Pudding"]);
        assert_eq!(names(&filter(&records, "celery", "")), ["Veg Soup"]);
        assert_eq!(names(&filter(&records, "quick", "")), ["Choco Pudding"]);
    }

    #[test]
    fn test_missing_tags_do_not_fail() {
        let records = sample();
        assert!(records.iter().all(|r| r.tags.is_none()));
        assert!(filter(&records, "anything", "").is_empty());
    }

    #[test]
    fn test_filter_is_sound_and_complete() {
        let mut records = sample();
        records.push(recipe(4, "Tomato Soup", "Soup"));
        records[0].tags = Some(vec!["Soup-adjacent".to_string()]);

        for (query, cuisine) in [("soup", ""), ("soup", "Soup"), ("o", "Dessert"), ("", "Soup")] {
            let state = FilterState::new(query, cuisine);
            let predicate = state.predicate();
            let found = filter(&records, query, cuisine);

            assert!(found.iter().all(|r| predicate.matches(r)));
            let expected = records.iter().filter(|r| predicate.matches(r)).count();
            assert_eq!(found.len(), expected);
        }
    }

    #[test]
    fn test_filter_indices_keep_positions() {
        let records = sample();
        let state = FilterState::new("", "Dessert");
        assert_eq!(filter_indices(&records, &state), vec![0, 2]);
    }

    #[test]
    fn test_cuisines_are_distinct_and_sorted() {
        let mut records = sample();
        records.push(recipe(4, "Pad Thai", "Asian"));
        assert_eq!(cuisines(&records), ["Asian", "Dessert", "Soup"]);
    }
}
