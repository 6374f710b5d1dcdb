use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("engine error: {0}")]
    Engine(#[from] engine::EngineError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
