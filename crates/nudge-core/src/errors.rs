use thiserror::Error;

/// Rejections raised while validating a persisted record before it reaches
/// the transformer. The transformer itself never fails.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("record carries neither `config` nor `layers`")]
    MissingPayload,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
