use thiserror::Error;

pub type RawResult<T> = Result<T, RawValueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawValueError {
    #[error("no variant of {type_name} has raw value {raw}")]
    UnknownRawValue { type_name: &'static str, raw: String },
}

impl RawValueError {
    /// Builds an [`RawValueError::UnknownRawValue`] from any debuggable raw value.
    pub fn unknown<R: std::fmt::Debug + ?Sized>(type_name: &'static str, raw: &R) -> Self {
        RawValueError::UnknownRawValue {
            type_name,
            raw: format!("{:?}", raw),
        }
    }
}
