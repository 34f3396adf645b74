pub mod search_count;
pub mod wine;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Projection error: {0}")]
    ProjectionError(String),
    #[error("Database error: {0}")]
    DbErr(String),
}
