use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

use super::{ArgsError, MissingFileError, TooManyArgumentsError};

/// The command line accepted by every solution program.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(about = "Runs a solution against an input file and prints the answer", long_about = None)]
pub struct Args {
    /// The input file handed to the solution. Names starting with `-` are accepted.
    #[arg(value_name = "FILE", allow_hyphen_values = true)]
    pub file: PathBuf,
}

impl Args {
    /// Parses `args`, where the first item is the program name.
    ///
    /// # Errors
    /// Returns [`ArgsError::MissingFile`] when no file is given and
    /// [`ArgsError::TooManyArguments`] when a second value follows it. Other problems, including
    /// unknown flags and a request for help, are passed through as [`ArgsError::Clap`].
    pub fn try_parse_args<I, T>(args: I) -> Result<Args, ArgsError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Args::try_parse_from(args).map_err(|err| match err.kind() {
            ErrorKind::MissingRequiredArgument => MissingFileError.into(),
            ErrorKind::UnknownArgument if is_extra_value(&err) => TooManyArgumentsError.into(),
            _ => ArgsError::Clap(err),
        })
    }
}

/// Whether clap rejected a plain value rather than an unknown flag. Once the file has been taken,
/// anything without a leading `-`, or a lone `-`, is a second positional value.
fn is_extra_value(err: &clap::Error) -> bool {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg == "-" || !arg.starts_with('-'),
        _ => false,
    }
}
