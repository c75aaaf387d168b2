//! Solutions to some of the Advent of Code 2021 puzzles.

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day11;
pub mod grid;
pub mod input;
