//! Day 01: Sonar Sweep.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

#[derive(Debug, Eq, PartialEq)]
pub struct ParseDepthError {
    line: String,
    error: ParseIntError,
}

impl Display for ParseDepthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "expected a depth, got '{}': {}", self.line, self.error)
    }
}

impl Error for ParseDepthError {}

pub fn parse_depths(s: &str) -> Result<Vec<u64>, ParseDepthError> {
    s.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u64>().map_err(|error| ParseDepthError {
                line: line.to_string(),
                error,
            })
        })
        .collect()
}

fn count_increases(depths: &[u64]) -> usize {
    depths.windows(2).filter(|w| w[1] > w[0]).count()
}

pub fn part1(input: &str) -> Result<usize, ParseDepthError> {
    Ok(count_increases(&parse_depths(input)?))
}

pub fn part2(input: &str) -> Result<usize, ParseDepthError> {
    let sums: Vec<u64> = parse_depths(input)?
        .windows(3)
        .map(|w| w.iter().sum())
        .collect();
    Ok(count_increases(&sums))
}

#[cfg(test)]
const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

#[test]
fn test_part1() {
    assert_eq!(part1(SAMPLE), Ok(7));
}

#[test]
fn test_part2() {
    assert_eq!(part2(SAMPLE), Ok(5));
}

#[test]
fn test_short_input() {
    assert_eq!(part1("100\n"), Ok(0));
    assert_eq!(part2("1\n2\n3\n"), Ok(0));
}

#[test]
fn test_bad_depth() {
    let err = part1("199\nabc\n").unwrap_err();
    assert!(err.to_string().contains("'abc'"));
}
