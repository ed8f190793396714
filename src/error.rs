use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("birth date is after the reference date")]
    BirthAfterReference,

    #[error("age component out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: i32 },
}

pub type Result<T> = std::result::Result<T, AgeError>;
