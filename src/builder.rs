use chrono::{DateTime, Utc};

use crate::model::Recipe;

/// Builder for constructing [`Recipe`] records.
///
/// Seeds and tests assemble recipes through it; the defaulted flags
/// (`preparation_step_is_html`, `is_published`) start out false. The id is
/// left at zero for the store to assign on insert.
///
/// # Example
/// ```
/// use recipe_site::Recipe;
///
/// let recipe = Recipe::builder()
///     .title("Classic Cottage Pie")
///     .description("A family favourite")
///     .slug("classic-cottage-pie")
///     .preparation_time(45)
///     .preparation_time_unit("Minutes")
///     .servings(4)
///     .servings_unit("Portions")
///     .preparation_step("Brown the mince, top with mash, bake.")
///     .category(1)
///     .author(1)
///     .build();
///
/// assert!(!recipe.is_published);
/// ```
#[derive(Debug, Default)]
pub struct RecipeBuilder {
    title: String,
    description: String,
    slug: String,
    preparation_time: i32,
    preparation_time_unit: String,
    servings: i32,
    servings_unit: String,
    preparation_step: String,
    preparation_step_is_html: bool,
    is_published: bool,
    created_at: Option<DateTime<Utc>>,
    category_id: i64,
    author_id: i64,
}

impl RecipeBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn preparation_time(mut self, minutes: i32) -> Self {
        self.preparation_time = minutes;
        self
    }

    pub fn preparation_time_unit(mut self, unit: impl Into<String>) -> Self {
        self.preparation_time_unit = unit.into();
        self
    }

    pub fn servings(mut self, servings: i32) -> Self {
        self.servings = servings;
        self
    }

    pub fn servings_unit(mut self, unit: impl Into<String>) -> Self {
        self.servings_unit = unit.into();
        self
    }

    pub fn preparation_step(mut self, step: impl Into<String>) -> Self {
        self.preparation_step = step.into();
        self
    }

    /// Mark the preparation step as markup instead of escaped text
    pub fn preparation_step_is_html(mut self, is_html: bool) -> Self {
        self.preparation_step_is_html = is_html;
        self
    }

    /// Mark the recipe as published; new recipes default to unpublished
    pub fn published(mut self, is_published: bool) -> Self {
        self.is_published = is_published;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    /// Assemble the recipe. Constraints are not checked here; the store
    /// validates at its insert boundary.
    pub fn build(self) -> Recipe {
        Recipe {
            id: 0,
            title: self.title,
            description: self.description,
            slug: self.slug,
            preparation_time: self.preparation_time,
            preparation_time_unit: self.preparation_time_unit,
            servings: self.servings,
            servings_unit: self.servings_unit,
            preparation_step: self.preparation_step,
            preparation_step_is_html: self.preparation_step_is_html,
            is_published: self.is_published,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            category_id: self.category_id,
            author_id: self.author_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let recipe = RecipeBuilder::default()
            .title("Recipe Title")
            .slug("recipe-slug")
            .build();

        assert_eq!(recipe.id, 0);
        assert!(!recipe.preparation_step_is_html);
        assert!(!recipe.is_published);
    }

    #[test]
    fn test_builder_published_flag() {
        let recipe = RecipeBuilder::default()
            .title("Recipe Title")
            .published(true)
            .build();

        assert!(recipe.is_published);
    }

    #[test]
    fn test_builder_keeps_explicit_created_at() {
        let stamp = "2024-05-01T12:00:00Z".parse().unwrap();
        let recipe = RecipeBuilder::default().created_at(stamp).build();
        assert_eq!(recipe.created_at, stamp);
    }
}
