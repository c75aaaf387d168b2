//! Day 02: Dive!

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{digit1, space1},
    combinator::{all_consuming, map, map_res, value},
    sequence::separated_pair,
    IResult,
};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Direction {
    Forward,
    Down,
    Up,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Move {
    direction: Direction,
    distance: i64,
}

#[derive(Debug, Eq, PartialEq)]
pub struct ParseMoveError(String);

impl Display for ParseMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "expected up/down/forward and a number, got '{}'", self.0)
    }
}

impl Error for ParseMoveError {}

fn parse_direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Forward, tag("forward")),
        value(Direction::Down, tag("down")),
        value(Direction::Up, tag("up")),
    ))(input)
}

fn parse_move(input: &str) -> IResult<&str, Move> {
    map(
        separated_pair(parse_direction, space1, map_res(digit1, i64::from_str)),
        |(direction, distance)| Move {
            direction,
            distance,
        },
    )(input)
}

impl FromStr for Move {
    type Err = ParseMoveError;
    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        match all_consuming(parse_move)(s.trim()) {
            Ok((_, m)) => Ok(m),
            Err(_) => Err(ParseMoveError(s.to_string())),
        }
    }
}

pub fn parse_moves(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.lines()
        .filter(|line| !line.trim().is_empty())
        .map(Move::from_str)
        .collect()
}

fn navigate(moves: &[Move]) -> i64 {
    let (h, v) = moves.iter().fold((0, 0), |(h, v), m| match m.direction {
        Direction::Forward => (h + m.distance, v),
        Direction::Down => (h, v + m.distance),
        Direction::Up => (h, v - m.distance),
    });
    h * v
}

fn navigate_with_aim(moves: &[Move]) -> i64 {
    struct Pos {
        aim: i64,
        h: i64,
        v: i64,
    }
    let end = moves
        .iter()
        .fold(Pos { aim: 0, h: 0, v: 0 }, |pos, m| match m.direction {
            Direction::Down => Pos {
                aim: pos.aim + m.distance,
                ..pos
            },
            Direction::Up => Pos {
                aim: pos.aim - m.distance,
                ..pos
            },
            Direction::Forward => Pos {
                h: pos.h + m.distance,
                v: pos.v + pos.aim * m.distance,
                ..pos
            },
        });
    end.h * end.v
}

pub fn part1(input: &str) -> Result<i64, ParseMoveError> {
    Ok(navigate(&parse_moves(input)?))
}

pub fn part2(input: &str) -> Result<i64, ParseMoveError> {
    Ok(navigate_with_aim(&parse_moves(input)?))
}

#[cfg(test)]
const SAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

#[test]
fn test_parse_move() {
    assert_eq!(
        "down 12".parse::<Move>(),
        Ok(Move {
            direction: Direction::Down,
            distance: 12
        })
    );
    assert!("sideways 3".parse::<Move>().is_err());
    assert!("up".parse::<Move>().is_err());
    assert!("up 3 4".parse::<Move>().is_err());
    assert!("forward -2".parse::<Move>().is_err());
}

#[test]
fn test_part1() {
    assert_eq!(part1(SAMPLE), Ok(150));
}

#[test]
fn test_part2() {
    assert_eq!(part2(SAMPLE), Ok(900));
}
