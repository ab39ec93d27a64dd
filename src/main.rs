use std::process::ExitCode;

use slh::buffer::SizedBuffer;
use slh::collections::contiguous::DynamicArray;
use slh::collections::linked::LinkedList;
use slh::solution::{self, Solution, SolutionError};

/// Pairs up two columns of integers by rank and sums the distance between each pair.
///
/// Each line of the input holds one value for either column, separated by whitespace. The left
/// column is sorted as a linked list and the right as a dynamic array, then the smallest left
/// value is paired with the smallest right value, and so on.
fn total_distance(input: &SizedBuffer) -> Solution {
    let lines = input
        .lines()
        .map_err(|_| SolutionError::new("input file isn't valid UTF-8"))?;

    let mut left = LinkedList::new();
    let mut right = DynamicArray::new();

    for (number, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut columns = line.split_whitespace().map(str::parse::<i32>);
        let (Some(Ok(l)), Some(Ok(r)), None) = (columns.next(), columns.next(), columns.next())
        else {
            return solution::error(format!("line {} should hold two integers", number + 1));
        };

        left.prepend(l)?;
        right.append(r)?;
    }

    left.sort();
    right.sort_unstable();

    let mut total = 0_i64;
    let mut index = 0;
    left.map(|node| {
        if let Some(&r) = right.at(index) {
            total += (i64::from(node.value()) - i64::from(r)).abs();
        }
        index += 1;
    });

    solution::answer(total)
}

fn main() -> ExitCode {
    solution::slh_main(total_distance)
}
