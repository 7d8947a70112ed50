//! Publication-visibility queries.
//!
//! Every public read path goes through these three operations, so the
//! `is_published` rule is enforced in exactly one place. Results are
//! ordered by descending id (most recently created first).

use crate::error::SiteError;
use crate::model::Recipe;
use crate::store::RecipeStore;

fn published_desc(mut recipes: Vec<Recipe>) -> Vec<Recipe> {
    recipes.retain(|r| r.is_published);
    recipes.sort_by(|a, b| b.id.cmp(&a.id));
    recipes
}

/// All published recipes. An empty result is valid, not an error.
pub async fn published_recipes(store: &dyn RecipeStore) -> Result<Vec<Recipe>, SiteError> {
    Ok(published_desc(store.list_recipes().await?))
}

/// Published recipes in one category.
///
/// Unlike the home listing, an empty result here is NotFound: a category
/// page with nothing to show is a dead link, the home page is not.
pub async fn published_in_category(
    store: &dyn RecipeStore,
    category_id: i64,
) -> Result<Vec<Recipe>, SiteError> {
    let recipes = published_desc(store.recipes_by_category(category_id).await?);
    if recipes.is_empty() {
        return Err(SiteError::not_found("Category"));
    }
    Ok(recipes)
}

/// A single published recipe by id.
///
/// "Does not exist" and "exists but unpublished" collapse into the same
/// NotFound so unpublished content is never leaked.
pub async fn published_recipe(store: &dyn RecipeStore, id: i64) -> Result<Recipe, SiteError> {
    match store.get_recipe(id).await? {
        Some(recipe) if recipe.is_published => Ok(recipe),
        _ => Err(SiteError::not_found("Recipe")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Author, Category, Recipe};
    use crate::store::MemoryStore;

    async fn seeded_store() -> (MemoryStore, i64, i64) {
        let store = MemoryStore::new();
        let category = store
            .insert_category(Category::new("Breakfast"))
            .await
            .unwrap();
        let author = store.insert_author(Author::new("newuser")).await.unwrap();
        (store, category.id, author.id)
    }

    fn recipe(slug: &str, category_id: i64, author_id: i64, published: bool) -> Recipe {
        Recipe::builder()
            .title("Recipe Title")
            .description("Recipe Description")
            .slug(slug)
            .preparation_time(10)
            .preparation_time_unit("Minutes")
            .servings(5)
            .servings_unit("Portions")
            .preparation_step("Recipe Preparation Steps")
            .category(category_id)
            .author(author_id)
            .published(published)
            .build()
    }

    #[tokio::test]
    async fn test_list_excludes_unpublished() {
        let (store, category_id, author_id) = seeded_store().await;
        store
            .insert_recipe(recipe("visible", category_id, author_id, true))
            .await
            .unwrap();
        store
            .insert_recipe(recipe("hidden", category_id, author_id, false))
            .await
            .unwrap();

        let recipes = published_recipes(&store).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].slug, "visible");
    }

    #[tokio::test]
    async fn test_list_empty_is_not_an_error() {
        let (store, _, _) = seeded_store().await;
        let recipes = published_recipes(&store).await.unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn test_list_orders_most_recent_first() {
        let (store, category_id, author_id) = seeded_store().await;
        for slug in ["oldest", "middle", "newest"] {
            store
                .insert_recipe(recipe(slug, category_id, author_id, true))
                .await
                .unwrap();
        }

        let recipes = published_recipes(&store).await.unwrap();
        let slugs: Vec<_> = recipes.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, ["newest", "middle", "oldest"]);
    }

    #[tokio::test]
    async fn test_category_empty_is_not_found() {
        let (store, category_id, author_id) = seeded_store().await;
        store
            .insert_recipe(recipe("hidden", category_id, author_id, false))
            .await
            .unwrap();

        let err = published_in_category(&store, category_id)
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_category_scopes_to_requested_category() {
        let (store, category_id, author_id) = seeded_store().await;
        let other = store
            .insert_category(Category::new("Dinner"))
            .await
            .unwrap();
        store
            .insert_recipe(recipe("here", category_id, author_id, true))
            .await
            .unwrap();
        store
            .insert_recipe(recipe("elsewhere", other.id, author_id, true))
            .await
            .unwrap();

        let recipes = published_in_category(&store, category_id).await.unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].slug, "here");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_not_found() {
        let (store, _, _) = seeded_store().await;
        let err = published_recipe(&store, 1000).await.unwrap_err();
        assert!(matches!(err, SiteError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_unpublished_is_not_found() {
        let (store, category_id, author_id) = seeded_store().await;
        let stored = store
            .insert_recipe(recipe("hidden", category_id, author_id, false))
            .await
            .unwrap();

        let err = published_recipe(&store, stored.id).await.unwrap_err();
        assert!(matches!(err, SiteError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_published_succeeds() {
        let (store, category_id, author_id) = seeded_store().await;
        let stored = store
            .insert_recipe(recipe("visible", category_id, author_id, true))
            .await
            .unwrap();

        let found = published_recipe(&store, stored.id).await.unwrap();
        assert_eq!(found.id, stored.id);
    }
}
