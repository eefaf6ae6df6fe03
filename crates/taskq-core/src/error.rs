use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed task data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Task document must be a JSON array or an object with a \"tasks\" array, found {0}")]
    InvalidTasksDocument(String),
}
