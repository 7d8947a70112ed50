//! Public read-only request handlers.
//!
//! Each handler composes the store with the visibility queries in
//! [`crate::query`]; no handler touches `is_published` itself. NotFound
//! propagates with `?` and converts to a 404 response.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use log::debug;
use tera::{Context, Tera};

use crate::error::SiteError;
use crate::query;
use crate::store::RecipeStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecipeStore>,
    pub templates: Arc<Tera>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecipeStore>, templates: Arc<Tera>) -> Self {
        Self { store, templates }
    }
}

/// GET `/` — every published recipe, newest first.
///
/// An empty listing is a normal page; the template shows its placeholder.
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, SiteError> {
    let recipes = query::published_recipes(state.store.as_ref()).await?;
    debug!("home: {} published recipe(s)", recipes.len());

    let mut context = Context::new();
    context.insert("recipes", &recipes);
    let body = state.templates.render("pages/home.html", &context)?;
    Ok(Html(body))
}

/// GET `/recipes/category/{category_id}/` — published recipes in one
/// category, 404 when there are none.
pub async fn category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Html<String>, SiteError> {
    let recipes = query::published_in_category(state.store.as_ref(), category_id).await?;
    // A non-empty listing implies the category exists; the fallback covers
    // a backend that does not enforce references.
    let category = state
        .store
        .get_category(category_id)
        .await?
        .ok_or_else(|| SiteError::not_found("Category"))?;

    let mut context = Context::new();
    context.insert("recipes", &recipes);
    context.insert("category", &category);
    context.insert("page_title", &format!("{} - Category  | ", category.name));
    let body = state.templates.render("pages/category.html", &context)?;
    Ok(Html(body))
}

/// GET `/recipes/{id}/` — one published recipe, 404 when the id is
/// unknown or the recipe is unpublished.
pub async fn recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, SiteError> {
    let recipe = query::published_recipe(state.store.as_ref(), id).await?;

    let mut context = Context::new();
    if let Some(category) = state.store.get_category(recipe.category_id).await? {
        context.insert("category", &category);
    }
    if let Some(author) = state.store.get_author(recipe.author_id).await? {
        context.insert("author", &author);
    }
    context.insert("recipe", &recipe);
    context.insert("is_detail_page", &true);
    let body = state.templates.render("pages/recipe-view.html", &context)?;
    Ok(Html(body))
}
