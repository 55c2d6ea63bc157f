use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt, str::FromStr};
use validator::{Validate, ValidationError};

/// Kitchen station a recipe is cooked at.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CookingPost {
    Bar,
    ColdDish,
    HotDish,
}

impl fmt::Display for CookingPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bar => write!(f, "BAR"),
            Self::ColdDish => write!(f, "COLD_DISH"),
            Self::HotDish => write!(f, "HOT_DISH"),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownCookingPost(pub String);

impl FromStr for CookingPost {
    type Err = UnknownCookingPost;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BAR" => Ok(Self::Bar),
            "COLD_DISH" => Ok(Self::ColdDish),
            "HOT_DISH" => Ok(Self::HotDish),
            other => Err(UnknownCookingPost(other.to_string())),
        }
    }
}

fn validate_cooking_steps(steps: &[String]) -> Result<(), ValidationError> {
    match steps.iter().all(|step| !step.trim().is_empty()) {
        true => Ok(()),
        false => Err(ValidationError::new("BLANK_COOKING_STEP")
            .with_message(Cow::from("Cooking steps must not be blank"))),
    }
}

/// Recipe as submitted by a client.
#[derive(Serialize, Deserialize, Validate, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    #[validate(length(
        min = 1,
        max = 64,
        code = "INVALID_SHORT_NAME",
        message = "Short name must be between 1 and 64 characters"
    ))]
    pub short_name: String,
    pub cooking_post: CookingPost,
    #[validate(
        length(
            min = 1,
            code = "MISSING_COOKING_STEPS",
            message = "At least one cooking step is required"
        ),
        custom(function = "validate_cooking_steps")
    )]
    pub cooking_steps: Vec<String>,
    #[validate(range(
        min = 1,
        max = 2147483647,
        code = "INVALID_COOKING_TIME",
        message = "Mean cooking time must be between 1 and 2147483647 seconds"
    ))]
    pub mean_cooking_time_in_sec: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: String,
    pub short_name: String,
    pub cooking_post: CookingPost,
    pub cooking_steps: Vec<String>,
    pub mean_cooking_time_in_sec: i64,
}

impl Recipe {
    pub fn from_dto(id: String, dto: RecipeDto) -> Self {
        Self {
            id,
            short_name: dto.short_name,
            cooking_post: dto.cooking_post,
            cooking_steps: dto.cooking_steps,
            mean_cooking_time_in_sec: dto.mean_cooking_time_in_sec,
        }
    }
}
