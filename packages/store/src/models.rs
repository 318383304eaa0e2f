//! # Domain records
//!
//! Serde models for the two datasets served by the demo API and for the
//! session record kept in browser storage. Field names follow the API's
//! camelCase JSON so the structs decode straight from response bodies.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`RecipeRecord`] | One recipe. Immutable once fetched. Optional fields (`tags`, `servings`, `reviewCount`, ...) default so a sparse payload still decodes. |
//! | [`UserRecord`] | One user from the user search endpoint. Unknown fields are ignored. |
//! | [`SessionRecord`] | The subset of a [`UserRecord`] persisted after login. Its presence is the only gate for the recipes page. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// How hard a recipe is to prepare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(alias = "easy")]
    Easy,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "hard")]
    Hard,
}

impl Difficulty {
    /// Lowercase name, used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

/// A recipe as returned by the recipes endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub prep_time_minutes: u32,
    #[serde(default)]
    pub cook_time_minutes: u32,
    pub difficulty: Difficulty,
    /// Average rating in `0.0..=5.0`.
    #[serde(default)]
    pub rating: f32,
    pub cuisine: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub meal_type: Vec<String>,
    #[serde(default)]
    pub review_count: Option<u32>,
    #[serde(default)]
    pub calories_per_serving: Option<u32>,
}

impl RecipeRecord {
    /// Prep plus cook time, in minutes.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }

    /// Tags, or an empty slice when the payload had none.
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

/// A user as returned by the user search endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Minimal proof of a successful login, persisted in browser storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: u32,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl SessionRecord {
    /// Name shown in the page header.
    pub fn display_name(&self) -> &str {
        if self.first_name.is_empty() {
            &self.username
        } else {
            &self.first_name
        }
    }
}

impl From<&UserRecord> for SessionRecord {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}
