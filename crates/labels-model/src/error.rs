use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    #[error("label segment {index} has no '=' separator: {segment:?}")]
    MissingSeparator { index: usize, segment: String },

    #[error("environment variable {var} is not valid UTF-8")]
    NotUnicode { var: String },
}

pub type LabelResult<T> = Result<T, LabelError>;
