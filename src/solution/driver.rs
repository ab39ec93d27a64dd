use std::borrow::Cow;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use log::{debug, warn};

use super::{ArgsError, Args, DriverError, EmptyInputError, SolutionError};
use crate::buffer::SizedBuffer;
use crate::fs;

/// What a solution returns: the numeric answer, or the reason there isn't one.
pub type Solution = Result<i64, SolutionError>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Wraps a successful answer.
pub const fn answer(value: i64) -> Solution {
    Ok(value)
}

/// Wraps a failure with a message to show the user.
pub fn error<M: Into<Cow<'static, str>>>(message: M) -> Solution {
    Err(SolutionError::new(message))
}

/// Parses `args`, reads the input file they name and runs `solution` on its contents.
///
/// An empty input file is rejected before `solution` is called.
///
/// # Errors
/// Returns a [`DriverError`] describing whichever step failed.
pub fn run<I, T, F>(args: I, solution: F) -> Result<i64, DriverError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    F: FnOnce(&SizedBuffer) -> Solution,
{
    let args = Args::try_parse_args(args)?;
    debug!("reading input from {}", args.file.display());

    let input = fs::read_text(&args.file)?;
    if input.is_empty() {
        return Err(EmptyInputError.into());
    }
    debug!("read {} bytes of input", input.size());

    let answer = solution(&input)?;
    debug!("solution answered {answer}");
    Ok(answer)
}

/// Writes the outcome of [`run`] to `out` and returns the matching exit code: the answer on its
/// own line and [`EXIT_SUCCESS`], or `Error: <message>` and [`EXIT_FAILURE`]. A help request is
/// printed as is and counts as a success.
pub fn report<W: Write>(outcome: Result<i64, DriverError>, out: &mut W) -> u8 {
    let (written, code) = match outcome {
        Ok(answer) => (writeln!(out, "{answer}"), EXIT_SUCCESS),
        Err(DriverError::Args(ArgsError::Clap(err))) if !err.use_stderr() => {
            (write!(out, "{}", err.render()), EXIT_SUCCESS)
        },
        Err(err) => {
            warn!("solution failed: {err}");
            (writeln!(out, "Error: {err}"), EXIT_FAILURE)
        },
    };

    match written {
        Ok(()) => code,
        Err(_) => EXIT_FAILURE,
    }
}

/// Runs `solution` as the whole program: reads the process arguments, prints the result to stdout
/// and returns the exit code.
pub fn slh_main<F>(solution: F) -> ExitCode
where
    F: FnOnce(&SizedBuffer) -> Solution,
{
    let outcome = run(env::args_os(), solution);
    ExitCode::from(report(outcome, &mut io::stdout().lock()))
}
