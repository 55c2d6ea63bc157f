use super::types::response;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    ctx.kitchen
        .find_all_recipes()
        .await
        .map(response::Success::Recipes)
        .map_err(response::Error::Kitchen)
}
