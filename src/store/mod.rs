mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::SiteError;
use crate::model::{Author, Category, Recipe};

/// Storage seam for the site.
///
/// The capability set is deliberately small: list, get, filter-by and
/// insert. Visibility rules live above this trait (see [`crate::query`])
/// so every backend gets them for free; backends only enforce structural
/// integrity (field constraints, unique slug/username, live references).
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// All recipes, published or not, in id order
    async fn list_recipes(&self) -> Result<Vec<Recipe>, SiteError>;

    async fn get_recipe(&self, id: i64) -> Result<Option<Recipe>, SiteError>;

    /// All recipes in a category, published or not, in id order
    async fn recipes_by_category(&self, category_id: i64) -> Result<Vec<Recipe>, SiteError>;

    /// Validate and persist a recipe, assigning its id
    async fn insert_recipe(&self, recipe: Recipe) -> Result<Recipe, SiteError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, SiteError>;

    async fn insert_category(&self, category: Category) -> Result<Category, SiteError>;

    async fn get_author(&self, id: i64) -> Result<Option<Author>, SiteError>;

    async fn insert_author(&self, author: Author) -> Result<Author, SiteError>;
}
