use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    ctx.kitchen
        .add_new_recipe(payload.body)
        .await
        .map(response::Success::RecipeCreated)
        .map_err(response::Error::Kitchen)
}
