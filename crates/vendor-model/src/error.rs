use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid vendor id: {0:?}")]
    InvalidVendorId(String),
    #[error("unknown vendor status: {0}")]
    UnknownStatus(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
