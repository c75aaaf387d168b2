//! Day 03: Binary Diagnostic.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Eq, PartialEq)]
pub enum ParseReadingError {
    NoData,
    NotBinary(String),
    WrongWidth { reading: String, expected: usize },
}

impl Display for ParseReadingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseReadingError::NoData => f.write_str("no data"),
            ParseReadingError::NotBinary(s) => {
                write!(f, "reading '{}' is not a binary number", s)
            }
            ParseReadingError::WrongWidth { reading, expected } => {
                write!(
                    f,
                    "reading '{}' should be {} bits wide",
                    reading, expected
                )
            }
        }
    }
}

impl Error for ParseReadingError {}

#[derive(Debug, Eq, PartialEq)]
pub struct Report {
    bitwidth: u32,
    readings: Vec<u32>,
}

pub fn parse_report(s: &str) -> Result<Report, ParseReadingError> {
    let lines: Vec<&str> = s
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let bitwidth = match lines.first() {
        Some(first) => first.len(),
        None => {
            return Err(ParseReadingError::NoData);
        }
    };
    if bitwidth > 32 {
        return Err(ParseReadingError::WrongWidth {
            reading: lines[0].to_string(),
            expected: 32,
        });
    }
    let readings = lines
        .iter()
        .map(|line| {
            if line.len() != bitwidth {
                Err(ParseReadingError::WrongWidth {
                    reading: line.to_string(),
                    expected: bitwidth,
                })
            } else if !line.chars().all(|ch| ch == '0' || ch == '1') {
                Err(ParseReadingError::NotBinary(line.to_string()))
            } else {
                u32::from_str_radix(line, 2)
                    .map_err(|_| ParseReadingError::NotBinary(line.to_string()))
            }
        })
        .collect::<Result<Vec<u32>, ParseReadingError>>()?;
    Ok(Report {
        bitwidth: bitwidth as u32,
        readings,
    })
}

fn power_consumption(report: &Report) -> u64 {
    let mut gamma: u64 = 0;
    let mut epsilon: u64 = 0;
    for bitpos in (0..report.bitwidth).rev() {
        let mask = 1 << bitpos;
        let count1 = report.readings.iter().filter(|&&n| n & mask != 0).count();
        let count0 = report.readings.len() - count1;
        gamma <<= 1;
        epsilon <<= 1;
        // Ties go to 1 for gamma; the puzzle never has them.
        if count1 >= count0 {
            gamma |= 1;
        } else {
            epsilon |= 1;
        }
    }
    gamma * epsilon
}

pub fn part1(input: &str) -> Result<u64, ParseReadingError> {
    Ok(power_consumption(&parse_report(input)?))
}

#[cfg(test)]
const SAMPLE: &str = "00100\n11110\n10110\n10111\n10101\n01111\n\
                      00111\n11100\n10000\n11001\n00010\n01010\n";

#[test]
fn test_part1() {
    assert_eq!(part1(SAMPLE), Ok(198));
}

#[test]
fn test_parse_errors() {
    assert_eq!(parse_report(""), Err(ParseReadingError::NoData));
    assert_eq!(
        parse_report("0101\n012\n"),
        Err(ParseReadingError::WrongWidth {
            reading: "012".to_string(),
            expected: 4
        })
    );
    assert_eq!(
        parse_report("0101\n0121\n"),
        Err(ParseReadingError::NotBinary("0121".to_string()))
    );
}
