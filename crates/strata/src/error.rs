pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] crate::graphlib::Error),

    #[error("invalid layout config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
