#![cfg(test)]

use std::env;
use std::fs as std_fs;
use std::path::PathBuf;
use std::process;

use super::*;
use crate::buffer::SizedBuffer;
use crate::collections::contiguous::DynamicArray;
use crate::fs::{NotFoundError, ReadError};
use crate::util::result::ResultExtension;

fn temp_input(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("slh-solution-{}-{name}", process::id()));
    std_fs::write(&path, contents).throw();
    path
}

fn count_lines(input: &SizedBuffer) -> Solution {
    match input.lines() {
        Ok(lines) => answer(lines.count() as i64),
        Err(_) => error("input is not text"),
    }
}

#[test]
fn test_solution_constructors() {
    assert_eq!(answer(3), Ok(3));

    let err = error("message").unwrap_err();
    assert_eq!(err.message(), "message");
    assert_eq!(err.to_string(), "message");
}

#[test]
fn test_args() {
    let args = Args::try_parse_args(["slh", "input.txt"]).throw();
    assert_eq!(args.file, PathBuf::from("input.txt"));

    assert!(
        Args::try_parse_args(["slh"]).unwrap_err().is_missing_file(),
        "A missing filename should be reported."
    );
    assert!(
        Args::try_parse_args(["slh", "a.txt", "b.txt"]).unwrap_err().is_too_many_arguments(),
        "Extra arguments should be reported."
    );
}

#[test]
fn test_args_flags() {
    let args = Args::try_parse_args(["slh", "-input.txt"]).throw();
    assert_eq!(
        args.file,
        PathBuf::from("-input.txt"),
        "A filename starting with a hyphen is still the file."
    );

    let err = Args::try_parse_args(["slh", "input.txt", "--verbose"]).unwrap_err();
    assert!(err.is_clap(), "An unknown flag isn't an extra argument.");

    assert!(Args::try_parse_args(["slh", "input.txt", "-"]).unwrap_err().is_too_many_arguments());
}

#[test]
fn test_run_hyphenated_file() {
    // Relative, so that the argument itself begins with a hyphen.
    let name = format!("-slh-solution-{}-hyphen.txt", process::id());
    std_fs::write(&name, "5\n6\n").throw();

    let mut out = Vec::new();
    let outcome = run(["slh", name.as_str()], count_lines);
    assert_eq!(report(outcome, &mut out), EXIT_SUCCESS);
    assert_eq!(String::from_utf8(out).throw(), "2\n");

    std_fs::remove_file(&name).throw();
}

#[test]
fn test_run() {
    let path = temp_input("run", "1\n2\n3\n");
    let args = [PathBuf::from("slh"), path.clone()];

    assert_eq!(run(args, count_lines).throw(), 3);

    std_fs::remove_file(&path).throw();
}

#[test]
fn test_run_with_containers() {
    let path = temp_input("containers", "0\n1\n4\n9\n16\n25\n");
    let args = [PathBuf::from("slh"), path.clone()];

    let found = run(args, |input| {
        let mut squares = DynamicArray::new();
        for line in input.lines().map_err(|_| SolutionError::new("input is not text"))? {
            let value = line
                .parse::<i32>()
                .map_err(|_| SolutionError::new("not a number"))?;
            squares.append(value)?;
        }
        squares
            .find(&16)
            .map(|index| index as i64)
            .ok_or_else(|| SolutionError::new("16 is missing"))
    });
    assert_eq!(found.throw(), 4);

    std_fs::remove_file(&path).throw();
}

#[test]
fn test_run_failures() {
    let missing = env::temp_dir().join(format!("slh-solution-{}-missing", process::id()));
    assert!(matches!(
        run([PathBuf::from("slh"), missing], count_lines),
        Err(DriverError::Read(ReadError::NotFound(NotFoundError)))
    ));

    assert!(run(["slh"], count_lines).unwrap_err().is_args());

    let empty = temp_input("empty", "");
    let mut called = false;
    let outcome = run([PathBuf::from("slh"), empty.clone()], |_| {
        called = true;
        answer(0)
    });
    assert!(outcome.unwrap_err().is_empty_input());
    assert!(!called, "The solution shouldn't run on empty input.");
    std_fs::remove_file(&empty).throw();

    let path = temp_input("failing", "x\n");
    let outcome = run([PathBuf::from("slh"), path.clone()], |_| error("no answer"));
    assert_eq!(outcome.unwrap_err().to_string(), "no answer");
    std_fs::remove_file(&path).throw();
}

#[test]
fn test_report() {
    let mut out = Vec::new();
    assert_eq!(report(Ok(-42), &mut out), EXIT_SUCCESS);
    assert_eq!(String::from_utf8(out).throw(), "-42\n");

    let mut out = Vec::new();
    assert_eq!(report(Err(EmptyInputError.into()), &mut out), EXIT_FAILURE);
    assert_eq!(String::from_utf8(out).throw(), "Error: input file is empty\n");

    let mut out = Vec::new();
    let outcome = run(["slh"], count_lines);
    assert_eq!(report(outcome, &mut out), EXIT_FAILURE);
    assert_eq!(String::from_utf8(out).throw(), "Error: please provide a filename\n");

    let mut out = Vec::new();
    let outcome = run(["slh", "a", "b"], count_lines);
    assert_eq!(report(outcome, &mut out), EXIT_FAILURE);
    assert_eq!(
        String::from_utf8(out).throw(),
        "Error: too many arguments, expected only one\n"
    );

    let mut out = Vec::new();
    let outcome = run(["slh", "--help"], count_lines);
    assert_eq!(report(outcome, &mut out), EXIT_SUCCESS, "Asking for help isn't a failure.");
    assert!(String::from_utf8(out).throw().contains("FILE"));
}
