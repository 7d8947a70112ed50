use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SiteError;

/// Maximum lengths for the bounded text fields of a [`Recipe`].
///
/// Checked in one place ([`Recipe::validate`]) so the bounds stay
/// independent of whatever backend ends up persisting the records.
pub const RECIPE_FIELD_LIMITS: &[(&str, usize)] = &[
    ("title", 65),
    ("description", 165),
    ("preparation_time_unit", 65),
    ("servings_unit", 65),
];

pub const CATEGORY_NAME_MAX_LEN: usize = 65;

/// A recipe category, referenced by many recipes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.name.is_empty() {
            return Err(SiteError::validation("name", "must not be empty"));
        }
        if self.name.chars().count() > CATEGORY_NAME_MAX_LEN {
            return Err(SiteError::validation(
                "name",
                format!("must be at most {} characters", CATEGORY_NAME_MAX_LEN),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A recipe author, identified by a unique handle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub id: i64,
    pub username: String,
}

impl Author {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: 0,
            username: username.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.username.is_empty() {
            return Err(SiteError::validation("username", "must not be empty"));
        }
        Ok(())
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

/// The central entity: a recipe, published or not
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Assigned by the store on insert
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Unique human-readable identifier, distinct from the numeric id
    pub slug: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_step: String,
    /// When true the preparation step is rendered as markup rather than
    /// escaped text
    #[serde(default)]
    pub preparation_step_is_html: bool,
    /// Only published recipes are exposed through public read paths
    #[serde(default)]
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub category_id: i64,
    pub author_id: i64,
}

impl Recipe {
    /// Start building a recipe with the defaulted flags unset
    pub fn builder() -> crate::builder::RecipeBuilder {
        crate::builder::RecipeBuilder::default()
    }

    fn bounded_field(&self, name: &str) -> &str {
        match name {
            "title" => &self.title,
            "description" => &self.description,
            "preparation_time_unit" => &self.preparation_time_unit,
            "servings_unit" => &self.servings_unit,
            other => unreachable!("unknown bounded field: {}", other),
        }
    }

    /// Check the declarative field constraints.
    ///
    /// This is the single validation boundary: every write path goes
    /// through it before a recipe is persisted. Violations are reported,
    /// never corrected.
    pub fn validate(&self) -> Result<(), SiteError> {
        for (field, max_len) in RECIPE_FIELD_LIMITS {
            let value = self.bounded_field(field);
            if value.is_empty() {
                return Err(SiteError::validation(*field, "must not be empty"));
            }
            if value.chars().count() > *max_len {
                return Err(SiteError::validation(
                    *field,
                    format!("must be at most {} characters", max_len),
                ));
            }
        }

        if self.slug.is_empty() {
            return Err(SiteError::validation("slug", "must not be empty"));
        }
        if !self
            .slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(SiteError::validation(
                "slug",
                "may only contain letters, digits, hyphens and underscores",
            ));
        }
        if self.preparation_step.is_empty() {
            return Err(SiteError::validation(
                "preparation_step",
                "must not be empty",
            ));
        }
        if self.preparation_time < 0 {
            return Err(SiteError::validation(
                "preparation_time",
                "must not be negative",
            ));
        }
        if self.servings < 0 {
            return Err(SiteError::validation("servings", "must not be negative"));
        }

        Ok(())
    }
}

/// A recipe displays as its title
impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
