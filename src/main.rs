use std::env;
use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::PathBuf;

use regex::Regex;
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use aoc2021::{day01, day02, day03, day11, input};

const DAY_PATTERN: &str = r"^day(\d{2})$";

#[derive(Debug, Eq, PartialEq)]
enum UsageError {
    MissingArgument(&'static str),
    BadDay(String),
    BadPart(String),
    NotFound(String),
}

impl Display for UsageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingArgument(what) => {
                write!(f, "missing {} argument; usage: aoc2021 dayNN 1|2 [input-file]", what)
            }
            UsageError::BadDay(s) => {
                write!(f, "command '{}' must match pattern {}", s, DAY_PATTERN)
            }
            UsageError::BadPart(s) => write!(f, "part must be 1 or 2, not '{}'", s),
            UsageError::NotFound(name) => write!(f, "command {} not found", name),
        }
    }
}

impl Error for UsageError {}

#[derive(Debug, Eq, PartialEq)]
struct Command {
    day: u32,
    part: u32,
    input: Option<PathBuf>,
}

fn parse_command(args: &[String]) -> Result<Command, UsageError> {
    let day_re = Regex::new(DAY_PATTERN).expect("day pattern should be a valid regex");
    let day_arg = args.first().ok_or(UsageError::MissingArgument("day"))?;
    let day: u32 = match day_re.captures(day_arg).and_then(|cap| cap.get(1)) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| UsageError::BadDay(day_arg.to_string()))?,
        None => {
            return Err(UsageError::BadDay(day_arg.to_string()));
        }
    };
    let part_arg = args.get(1).ok_or(UsageError::MissingArgument("part"))?;
    let part: u32 = match part_arg.as_str() {
        "1" => 1,
        "2" => 2,
        _ => {
            return Err(UsageError::BadPart(part_arg.to_string()));
        }
    };
    Ok(Command {
        day,
        part,
        input: args.get(2).map(PathBuf::from),
    })
}

type Solver = fn(&str) -> Result<String, Box<dyn Error>>;

fn solver(day: u32, part: u32) -> Option<Solver> {
    let f: Solver = match (day, part) {
        (1, 1) => |text| Ok(day01::part1(text)?.to_string()),
        (1, 2) => |text| Ok(day01::part2(text)?.to_string()),
        (2, 1) => |text| Ok(day02::part1(text)?.to_string()),
        (2, 2) => |text| Ok(day02::part2(text)?.to_string()),
        (3, 1) => |text| Ok(day03::part1(text)?.to_string()),
        (11, 1) => |text| Ok(day11::part1(text)?.to_string()),
        (11, 2) => |text| Ok(day11::part2(text)?.to_string()),
        _ => {
            return None;
        }
    };
    Some(f)
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let command = parse_command(args)?;
    let solve = solver(command.day, command.part).ok_or_else(|| {
        UsageError::NotFound(format!("day{:02}_part{}", command.day, command.part))
    })?;
    let text = match command.input {
        Some(path) => {
            event!(Level::DEBUG, "reading input from {}", path.display());
            fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {}", path.display(), e))?
        }
        None => input::read_input(command.day).map_err(|e| {
            format!(
                "failed to read {}: {}",
                input::input_filename(command.day).display(),
                e
            )
        })?,
    };
    let answer = solve(&text)?;
    println!("Day {} part {}: {}", command.day, command.part, answer);
    Ok(())
}

fn main() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(layer) => layer,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
fn args(words: &[&str]) -> Vec<String> {
    words.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_command() {
    assert_eq!(
        parse_command(&args(&["day11", "2"])),
        Ok(Command {
            day: 11,
            part: 2,
            input: None
        })
    );
    assert_eq!(
        parse_command(&args(&["day01", "1", "sample.txt"])),
        Ok(Command {
            day: 1,
            part: 1,
            input: Some(PathBuf::from("sample.txt"))
        })
    );
}

#[test]
fn test_parse_command_errors() {
    assert_eq!(
        parse_command(&args(&[])),
        Err(UsageError::MissingArgument("day"))
    );
    assert_eq!(
        parse_command(&args(&["day1", "1"])),
        Err(UsageError::BadDay("day1".to_string()))
    );
    assert_eq!(
        parse_command(&args(&["11", "1"])),
        Err(UsageError::BadDay("11".to_string()))
    );
    assert_eq!(
        parse_command(&args(&["day11"])),
        Err(UsageError::MissingArgument("part"))
    );
    assert_eq!(
        parse_command(&args(&["day11", "3"])),
        Err(UsageError::BadPart("3".to_string()))
    );
}

#[test]
fn test_solver() {
    let solve = solver(2, 1).expect("day 2 part 1 should be solved");
    assert_eq!(
        solve("forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n")
            .expect("should solve"),
        "150"
    );
    assert!(solver(11, 2).is_some());
    assert!(solver(3, 2).is_none());
    assert!(solver(4, 1).is_none());
}

#[test]
fn test_run_unknown_command() {
    let err = run(&args(&["day03", "2"])).unwrap_err();
    assert_eq!(err.to_string(), "command day03_part2 not found");
}
