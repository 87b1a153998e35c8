use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Weekly limit of {limit} meal plans reached. Upgrade to Premium for unlimited plans!")]
    EntitlementExceeded { limit: u32 },

    #[error("Malformed completion response: {0}")]
    MalformedCompletion(String),

    #[error("Invalid meal plan: {0}")]
    InvalidPlan(String),

    #[error("Profile not found for user {0}")]
    ProfileNotFound(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Completion backend error: {0}")]
    Completion(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, PlanError>;
