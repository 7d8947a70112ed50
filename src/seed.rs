//! Seed fixtures.
//!
//! A JSON file of categories, authors and recipes loaded at startup for
//! local browsing. Rows go through the same store insert boundary as any
//! other write, so a malformed fixture aborts with the validation error
//! instead of half-loading.

use std::collections::HashMap;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::SiteError;
use crate::model::{Author, Category, Recipe};
use crate::store::RecipeStore;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    categories: Vec<SeedCategory>,
    #[serde(default)]
    authors: Vec<SeedAuthor>,
    #[serde(default)]
    recipes: Vec<SeedRecipe>,
}

#[derive(Debug, Deserialize)]
struct SeedCategory {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SeedAuthor {
    username: String,
}

/// One recipe row; references its category and author by name so fixture
/// files stay readable
#[derive(Debug, Deserialize)]
struct SeedRecipe {
    title: String,
    description: String,
    slug: String,
    preparation_time: i32,
    preparation_time_unit: String,
    servings: i32,
    servings_unit: String,
    preparation_step: String,
    #[serde(default)]
    preparation_step_is_html: bool,
    #[serde(default)]
    is_published: bool,
    category: String,
    author: String,
}

/// Counts of inserted records, for the startup log line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub categories: usize,
    pub authors: usize,
    pub recipes: usize,
}

/// Read a JSON fixture file and insert its rows into the store
pub async fn load_file(store: &dyn RecipeStore, path: &Path) -> Result<SeedStats, SiteError> {
    let raw = std::fs::read_to_string(path)?;
    load_str(store, &raw).await
}

/// Insert fixture rows from a JSON string
pub async fn load_str(store: &dyn RecipeStore, raw: &str) -> Result<SeedStats, SiteError> {
    let file: SeedFile = serde_json::from_str(raw)?;
    let mut stats = SeedStats::default();

    let mut category_ids: HashMap<String, i64> = HashMap::new();
    for row in file.categories {
        let stored = store.insert_category(Category::new(&row.name)).await?;
        debug!("seeded category '{}' as id {}", stored.name, stored.id);
        category_ids.insert(row.name, stored.id);
        stats.categories += 1;
    }

    let mut author_ids: HashMap<String, i64> = HashMap::new();
    for row in file.authors {
        let stored = store.insert_author(Author::new(&row.username)).await?;
        debug!("seeded author '{}' as id {}", stored.username, stored.id);
        author_ids.insert(row.username, stored.id);
        stats.authors += 1;
    }

    for row in file.recipes {
        let category_id = *category_ids.get(&row.category).ok_or_else(|| {
            SiteError::Seed(format!(
                "recipe '{}' references unknown category '{}'",
                row.slug, row.category
            ))
        })?;
        let author_id = *author_ids.get(&row.author).ok_or_else(|| {
            SiteError::Seed(format!(
                "recipe '{}' references unknown author '{}'",
                row.slug, row.author
            ))
        })?;

        let recipe: Recipe = Recipe::builder()
            .title(row.title)
            .description(row.description)
            .slug(row.slug)
            .preparation_time(row.preparation_time)
            .preparation_time_unit(row.preparation_time_unit)
            .servings(row.servings)
            .servings_unit(row.servings_unit)
            .preparation_step(row.preparation_step)
            .preparation_step_is_html(row.preparation_step_is_html)
            .published(row.is_published)
            .category(category_id)
            .author(author_id)
            .build();
        store.insert_recipe(recipe).await?;
        stats.recipes += 1;
    }

    Ok(stats)
}
