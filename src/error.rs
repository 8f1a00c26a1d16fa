use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("{value} {what} are not yet supported")]
    UnsupportedValue { what: &'static str, value: String },

    #[error("invalid `{option}` value `{value}`: must be in {expected}")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("column not found: {0}")]
    MissingColumn(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
