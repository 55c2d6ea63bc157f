pub mod response {
    use crate::modules::{kitchen::facade, recipe::model::Recipe};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};

    pub enum Success {
        Recipes(Vec<Recipe>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Recipes(recipes) => (StatusCode::OK, Json(recipes)).into_response(),
            }
        }
    }

    pub enum Error {
        Kitchen(facade::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Kitchen(err) => err.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
