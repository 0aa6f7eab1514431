use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearError {
    #[error("no year given")]
    Empty,
    #[error("'{input}' is not an integer year")]
    NotAnInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },
}
