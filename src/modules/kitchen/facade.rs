use crate::{
    modules::recipe::{
        memory::InMemoryRecipes,
        model::{Recipe, RecipeDto},
        repository,
    },
    utils::database::DatabaseConnection,
};
use async_trait::async_trait;
use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Recipe {0} already exists")]
    RecipeAlreadyExists(String),
    #[error("Recipe {0} not found")]
    RecipeNotFound(String),
    #[error("Unexpected kitchen failure")]
    Unexpected,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::RecipeAlreadyExists(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "Recipe already exists" })),
            )
                .into_response(),
            Self::RecipeNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Recipe not found" })),
            )
                .into_response(),
            Self::Unexpected => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Sorry an error occurred" })),
            )
                .into_response(),
        }
    }
}

/// Business operations of the kitchen, as consumed by the HTTP layer.
#[async_trait]
pub trait KitchenFacade: Send + Sync {
    async fn add_new_recipe(&self, recipe_dto: RecipeDto) -> Result<Recipe, Error>;

    async fn find_all_recipes(&self) -> Result<Vec<Recipe>, Error>;

    async fn find_recipe_by_short_name(&self, short_name: String) -> Result<Recipe, Error>;
}

#[derive(Clone)]
pub enum RecipeStore {
    Database(DatabaseConnection),
    InMemory(InMemoryRecipes),
}

impl RecipeStore {
    pub fn in_memory() -> Self {
        Self::InMemory(InMemoryRecipes::new())
    }
}

#[derive(Clone)]
pub struct KitchenFacadeService {
    store: RecipeStore,
}

impl KitchenFacadeService {
    pub fn new(store: RecipeStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl KitchenFacade for KitchenFacadeService {
    async fn add_new_recipe(&self, recipe_dto: RecipeDto) -> Result<Recipe, Error> {
        let short_name = recipe_dto.short_name.clone();

        let created = match &self.store {
            RecipeStore::Database(db_conn) => repository::create(&db_conn.pool, recipe_dto).await,
            RecipeStore::InMemory(recipes) => recipes.create(recipe_dto).await,
        };

        match created {
            Ok(recipe) => {
                tracing::info!(id = %recipe.id, short_name = %recipe.short_name, "Recipe created");
                Ok(recipe)
            }
            Err(repository::Error::ShortNameTaken) => {
                tracing::warn!("Recipe {} already exists", short_name);
                Err(Error::RecipeAlreadyExists(short_name))
            }
            Err(repository::Error::UnexpectedError) => Err(Error::Unexpected),
        }
    }

    async fn find_all_recipes(&self) -> Result<Vec<Recipe>, Error> {
        match &self.store {
            RecipeStore::Database(db_conn) => repository::find_many(&db_conn.pool)
                .await
                .map_err(|_| Error::Unexpected),
            RecipeStore::InMemory(recipes) => Ok(recipes.find_many().await),
        }
    }

    async fn find_recipe_by_short_name(&self, short_name: String) -> Result<Recipe, Error> {
        let recipe = match &self.store {
            RecipeStore::Database(db_conn) => {
                repository::find_by_short_name(&db_conn.pool, short_name.clone())
                    .await
                    .map_err(|_| Error::Unexpected)?
            }
            RecipeStore::InMemory(recipes) => recipes.find_by_short_name(&short_name).await,
        };

        recipe.ok_or(Error::RecipeNotFound(short_name))
    }
}
