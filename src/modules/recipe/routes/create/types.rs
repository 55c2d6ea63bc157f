pub mod request {
    pub use crate::modules::recipe::model::RecipeDto as Body;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{
        modules::{kitchen::facade, recipe::model::Recipe},
        utils,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        RecipeCreated(Recipe),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RecipeCreated(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        Kitchen(facade::Error),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => utils::validation::into_response(errors),
                Self::Kitchen(err) => err.into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
