//! The driver that turns a solution function into a program.
//!
//! A solution is any `FnOnce(&SizedBuffer) -> Solution`. [`slh_main`] parses the command line for a
//! single input file, reads it, hands it to the solution and reports the answer, so that a complete
//! program is just:
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! use slh::buffer::SizedBuffer;
//! use slh::solution::{self, Solution};
//!
//! fn solve(input: &SizedBuffer) -> Solution {
//!     solution::answer(input.lines().map_or(0, |lines| lines.count() as i64))
//! }
//!
//! fn main() -> ExitCode {
//!     solution::slh_main(solve)
//! }
//! ```
#![cfg(unix)]

mod args;
mod driver;
mod error;
mod tests;

pub use args::*;
pub use driver::*;
pub use error::*;
