use thiserror::Error;

pub type WtResult<T> = Result<T, WtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
