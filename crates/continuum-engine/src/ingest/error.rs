/// A frame document that cannot be turned into a frame at all.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("frame is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame must be a JSON array or object, got {0}")]
    NotAFrame(&'static str),

    #[error("group `{key}` is not an array")]
    GroupNotArray { key: String },
}
