use super::model::{CookingPost, Recipe, RecipeDto};
use sqlx::{types::Json, PgExecutor};
use ulid::Ulid;

#[derive(sqlx::FromRow)]
pub struct DatabaseRecipe {
    pub id: String,
    pub short_name: String,
    pub cooking_post: String,
    pub cooking_steps: Json<Vec<String>>,
    pub mean_cooking_time_in_sec: i32,
}

impl TryFrom<DatabaseRecipe> for Recipe {
    type Error = Error;

    fn try_from(row: DatabaseRecipe) -> Result<Self, Self::Error> {
        let cooking_post = row.cooking_post.parse::<CookingPost>().map_err(|err| {
            tracing::error!("Stored recipe {} has unknown cooking post {}", row.id, err.0);
            Error::UnexpectedError
        })?;

        Ok(Recipe {
            id: row.id,
            short_name: row.short_name,
            cooking_post,
            cooking_steps: row.cooking_steps.0,
            mean_cooking_time_in_sec: i64::from(row.mean_cooking_time_in_sec),
        })
    }
}

#[derive(Debug)]
pub enum Error {
    ShortNameTaken,
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: RecipeDto) -> Result<Recipe, Error> {
    let mean_cooking_time_in_sec =
        i32::try_from(payload.mean_cooking_time_in_sec).map_err(|err| {
            tracing::error!(
                "Cooking time {} of recipe {} does not fit the recipes table: {}",
                payload.mean_cooking_time_in_sec,
                payload.short_name,
                err
            );
            Error::UnexpectedError
        })?;

    sqlx::query_as::<_, DatabaseRecipe>(
        "
        INSERT INTO recipes (
            id,
            short_name,
            cooking_post,
            cooking_steps,
            mean_cooking_time_in_sec
        )
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, short_name, cooking_post, cooking_steps, mean_cooking_time_in_sec
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.short_name)
    .bind(payload.cooking_post.to_string())
    .bind(Json(payload.cooking_steps))
    .bind(mean_cooking_time_in_sec)
    .fetch_one(e)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => Error::ShortNameTaken,
        err => {
            tracing::error!("Error occurred while trying to create a recipe: {}", err);
            Error::UnexpectedError
        }
    })
    .and_then(Recipe::try_from)
}

pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<Recipe>, Error> {
    sqlx::query_as::<_, DatabaseRecipe>(
        "
        SELECT id, short_name, cooking_post, cooking_steps, mean_cooking_time_in_sec
        FROM recipes
        ORDER BY created_at ASC, id ASC
        ",
    )
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch recipes: {}", err);
        Error::UnexpectedError
    })?
    .into_iter()
    .map(Recipe::try_from)
    .collect()
}

pub async fn find_by_short_name<'e, E: PgExecutor<'e>>(
    e: E,
    short_name: String,
) -> Result<Option<Recipe>, Error> {
    sqlx::query_as::<_, DatabaseRecipe>(
        "
        SELECT id, short_name, cooking_post, cooking_steps, mean_cooking_time_in_sec
        FROM recipes
        WHERE short_name = $1
        ",
    )
    .bind(short_name)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch recipe by name: {}", err);
        Error::UnexpectedError
    })?
    .map(Recipe::try_from)
    .transpose()
}
