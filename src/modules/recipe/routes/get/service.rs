use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.kitchen
        .find_recipe_by_short_name(payload.short_name)
        .await
        .map(response::Success::Recipe)
        .map_err(response::Error::Kitchen)
}
