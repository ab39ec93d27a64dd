use std::borrow::Cow;

use derive_more::{Display, Error, From, IsVariant};

use crate::fs::ReadError;
use crate::util::error::AllocationError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("please provide a filename")]
pub struct MissingFileError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("too many arguments, expected only one")]
pub struct TooManyArgumentsError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("input file is empty")]
pub struct EmptyInputError;

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum ArgsError {
    MissingFile(MissingFileError),
    TooManyArguments(TooManyArgumentsError),
    Clap(clap::Error),
}

/// The reason a solution couldn't produce an answer.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("{message}")]
pub struct SolutionError {
    message: Cow<'static, str>,
}

impl SolutionError {
    pub fn new<M: Into<Cow<'static, str>>>(message: M) -> SolutionError {
        SolutionError {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AllocationError> for SolutionError {
    fn from(value: AllocationError) -> Self {
        SolutionError::new(value.to_string())
    }
}

/// Everything that can stop the driver from printing an answer.
#[derive(Debug, Display, Error, From, IsVariant)]
pub enum DriverError {
    Args(ArgsError),
    Read(ReadError),
    EmptyInput(EmptyInputError),
    Solution(SolutionError),
}
