#[derive(Debug, thiserror::Error)]
pub enum KanbanError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("internal error: {0}")]
    Internal(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl KanbanError {
    /// Short tag used in log fields and serialized outcomes.
    pub fn kind(&self) -> &'static str {
        match self {
            KanbanError::NotFound(_) => "not_found",
            KanbanError::BadRequest(_) => "bad_request",
            KanbanError::Conflict(_) => "conflict",
            KanbanError::Internal(_) => "internal",
            KanbanError::Serialization(_) => "serialization",
        }
    }
}
