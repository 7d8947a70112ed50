use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::SiteError;
use crate::model::{Author, Category, Recipe};
use crate::store::RecipeStore;

/// In-process storage backend.
///
/// Plain maps behind a `RwLock`; ids are assigned from a per-entity
/// counter starting at 1. The lock is never held across an await.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: BTreeMap<i64, Category>,
    authors: BTreeMap<i64, Author>,
    recipes: BTreeMap<i64, Recipe>,
    next_category_id: i64,
    next_author_id: i64,
    next_recipe_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn list_recipes(&self) -> Result<Vec<Recipe>, SiteError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.recipes.values().cloned().collect())
    }

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, SiteError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.recipes.get(&id).cloned())
    }

    async fn recipes_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, SiteError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner
            .recipes
            .values()
            .filter(|r| r.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn insert_recipe(&self, mut recipe: Recipe) -> Result<Recipe, SiteError> {
        recipe.validate()?;

        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.categories.contains_key(&recipe.category_id) {
            return Err(SiteError::validation(
                "category_id",
                format!("no category with id {}", recipe.category_id),
            ));
        }
        if !inner.authors.contains_key(&recipe.author_id) {
            return Err(SiteError::validation(
                "author_id",
                format!("no author with id {}", recipe.author_id),
            ));
        }
        if inner.recipes.values().any(|r| r.slug == recipe.slug) {
            return Err(SiteError::validation(
                "slug",
                format!("a recipe with slug '{}' already exists", recipe.slug),
            ));
        }

        inner.next_recipe_id += 1;
        recipe.id = inner.next_recipe_id;
        inner.recipes.insert(recipe.id, recipe.clone());
        Ok(recipe)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, SiteError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.categories.get(&id).cloned())
    }

    async fn insert_category(&self, mut category: Category) -> Result<Category, SiteError> {
        category.validate()?;

        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.next_category_id += 1;
        category.id = inner.next_category_id;
        inner.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn get_author(&self, id: i64) -> Result<Option<Author>, SiteError> {
        let inner = self.inner.read().expect("store lock poisoned");
        Ok(inner.authors.get(&id).cloned())
    }

    async fn insert_author(&self, mut author: Author) -> Result<Author, SiteError> {
        author.validate()?;

        let mut inner = self.inner.write().expect("store lock poisoned");
        if inner.authors.values().any(|a| a.username == author.username) {
            return Err(SiteError::validation(
                "username",
                format!("an author named '{}' already exists", author.username),
            ));
        }
        inner.next_author_id += 1;
        author.id = inner.next_author_id;
        inner.authors.insert(author.id, author.clone());
        Ok(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;

    async fn store_with_refs() -> (MemoryStore, i64, i64) {
        let store = MemoryStore::new();
        let category = store
            .insert_category(Category::new("Breakfast"))
            .await
            .unwrap();
        let author = store.insert_author(Author::new("newuser")).await.unwrap();
        (store, category.id, author.id)
    }

    fn recipe(slug: &str, category_id: i64, author_id: i64) -> Recipe {
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
            .build()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let (store, category_id, author_id) = store_with_refs().await;
        let first = store
            .insert_recipe(recipe("first", category_id, author_id))
            .await
            .unwrap();
        let second = store
            .insert_recipe(recipe("second", category_id, author_id))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_slug() {
        let (store, category_id, author_id) = store_with_refs().await;
        store
            .insert_recipe(recipe("dup", category_id, author_id))
            .await
            .unwrap();

        let err = store
            .insert_recipe(recipe("dup", category_id, author_id))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("slug"));
    }

    #[tokio::test]
    async fn test_insert_rejects_dangling_references() {
        let (store, category_id, author_id) = store_with_refs().await;

        let err = store
            .insert_recipe(recipe("a", 999, author_id))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("category_id"));

        let err = store
            .insert_recipe(recipe("b", category_id, 999))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("author_id"));
    }

    #[tokio::test]
    async fn test_insert_enforces_field_constraints() {
        let (store, category_id, author_id) = store_with_refs().await;
        let mut bad = recipe("too-long", category_id, author_id);
        bad.title = "A".repeat(66);

        let err = store.insert_recipe(bad).await.unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let (store, category_id, author_id) = store_with_refs().await;
        let other = store
            .insert_category(Category::new("Dinner"))
            .await
            .unwrap();
        store
            .insert_recipe(recipe("one", category_id, author_id))
            .await
            .unwrap();
        store
            .insert_recipe(recipe("two", other.id, author_id))
            .await
            .unwrap();

        let in_first = store.recipes_by_category(category_id).await.unwrap();
        assert_eq!(in_first.len(), 1);
        assert_eq!(in_first[0].slug, "one");
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = MemoryStore::new();
        store.insert_author(Author::new("alice")).await.unwrap();
        let err = store
            .insert_author(Author::new("alice"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("username"));
    }
}
