use super::{
    model::{Recipe, RecipeDto},
    repository::Error,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use ulid::Ulid;

/// Process-local recipe catalogue, used when no database is configured.
#[derive(Clone, Default)]
pub struct InMemoryRecipes {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl InMemoryRecipes {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, payload: RecipeDto) -> Result<Recipe, Error> {
        let mut recipes = self.recipes.write().await;

        if recipes
            .iter()
            .any(|recipe| recipe.short_name == payload.short_name)
        {
            return Err(Error::ShortNameTaken);
        }

        let recipe = Recipe::from_dto(Ulid::new().to_string(), payload);
        recipes.push(recipe.clone());
        Ok(recipe)
    }

    pub async fn find_many(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    pub async fn find_by_short_name(&self, short_name: &str) -> Option<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.short_name == short_name)
            .cloned()
    }
}
