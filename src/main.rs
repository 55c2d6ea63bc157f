use kitchen_service_rs::{
    app::App,
    types::{AppEnvironment, Config, Context, ToContext},
};
use std::{error::Error, sync::Arc};
use tracing_subscriber::{prelude::*, EnvFilter};

fn init_tracing(environment: &AppEnvironment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match environment {
        AppEnvironment::Production => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        AppEnvironment::Development => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env()?;

    init_tracing(&config.app.environment);

    let ctx: Arc<Context> = Arc::new(config.to_context().await?);

    App::new(ctx).serve().await?;

    Ok(())
}
