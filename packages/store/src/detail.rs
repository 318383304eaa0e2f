//! # Recipe projections
//!
//! Pure conversions from a [`RecipeRecord`] to the text the UI shows:
//!
//! - [`RecipeCard`] — the grid summary (total time, difficulty, rating,
//!   cuisine, first three ingredients).
//! - [`RecipeDetail`] — everything, for the modal.
//!
//! [`DetailPresenter`] tracks which recipe, if any, the modal is showing.

use crate::error::{Error, Result};
use crate::models::{Difficulty, RecipeRecord};

/// Ingredients listed on a card before the ellipsis.
pub const CARD_INGREDIENTS: usize = 3;

/// Duration label: `45 min`, `1h`, `1h 30m`.
pub fn format_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{minutes} min");
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{hours}h")
    }
}

pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rating with at most one decimal, as the API reports it.
fn format_rating(rating: f32) -> String {
    let rounded = (rating * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeCard {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub total_time: String,
    pub difficulty: Difficulty,
    pub rating: String,
    pub cuisine: String,
    pub ingredients_preview: String,
}

impl From<&RecipeRecord> for RecipeCard {
    fn from(recipe: &RecipeRecord) -> Self {
        let mut preview = recipe
            .ingredients
            .iter()
            .take(CARD_INGREDIENTS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        if recipe.ingredients.len() > CARD_INGREDIENTS {
            preview.push_str("...");
        }

        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            total_time: format_time(recipe.total_time_minutes()),
            difficulty: recipe.difficulty,
            rating: format_rating(recipe.rating),
            cuisine: recipe.cuisine.clone(),
            ingredients_preview: preview,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecipeDetail {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: Option<u32>,
    pub difficulty: Difficulty,
    /// `"4.6/5"`
    pub rating: String,
    pub cuisine: String,
    /// Meal types joined with `", "`; empty when unknown.
    pub meal_types: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    /// `"Based on 98 reviews"`; `None` when there are no reviews.
    pub reviews: Option<String>,
    pub calories: Option<String>,
}

impl From<&RecipeRecord> for RecipeDetail {
    fn from(recipe: &RecipeRecord) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            image: recipe.image.clone(),
            prep_time: format_time(recipe.prep_time_minutes),
            cook_time: format_time(recipe.cook_time_minutes),
            servings: recipe.servings,
            difficulty: recipe.difficulty,
            rating: format!("{}/5", format_rating(recipe.rating)),
            cuisine: recipe.cuisine.clone(),
            meal_types: recipe
                .meal_type
                .iter()
                .map(|m| capitalize_first(m))
                .collect::<Vec<_>>()
                .join(", "),
            tags: recipe.tags().to_vec(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            reviews: recipe
                .review_count
                .filter(|&n| n > 0)
                .map(|n| format!("Based on {n} reviews")),
            calories: recipe
                .calories_per_serving
                .map(|c| format!("{c} kcal per serving")),
        }
    }
}

/// Which recipe the detail modal shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailPresenter {
    current: Option<u32>,
}

impl DetailPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show recipe `id` from `records`.
    pub fn present(&mut self, records: &[RecipeRecord], id: u32) -> Result<RecipeDetail> {
        let recipe = records
            .iter()
            .find(|r| r.id == id)
            .ok_or(Error::NotFound(id))?;
        self.current = Some(id);
        Ok(RecipeDetail::from(recipe))
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<u32> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
