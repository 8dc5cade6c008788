use crate::ParamKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    #[error("unknown parameter \"{0}\"")]
    Unknown(String),

    #[error("invalid value for \"{name}\": expected {expected}, got \"{value}\"")]
    Type {
        name: String,
        expected: ParamKind,
        value: String,
    },

    #[error("value \"{value}\" is not allowed for \"{name}\" (allowed: {allowed})")]
    NotAllowed {
        name: String,
        value: String,
        allowed: String,
    },

    #[error("missing required parameter \"{0}\"")]
    Missing(String),
}
