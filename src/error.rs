use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before all fields were answered")]
    InputClosed,

    #[error("invalid age {input:?}: expected a non-negative integer")]
    InvalidAge { input: String },

    #[error("invalid date {input:?}: expected DD.MM.YYYY")]
    InvalidDate { input: String },

    #[error("invalid answer {input:?}: expected yes or no")]
    InvalidAnswer { input: String },

    #[error("no birthday on {day:02}.{month:02} in year {year}")]
    InvalidBirthday { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, ProfileError>;
