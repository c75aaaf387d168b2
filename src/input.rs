use std::fs;
use std::io;
use std::path::PathBuf;

const INPUT_DIR: &str = "inputs";

/// Puzzle inputs live in `inputs/dayNN.input.txt`, relative to the
/// current directory.
pub fn input_filename(day: u32) -> PathBuf {
    PathBuf::from(INPUT_DIR).join(format!("day{:02}.input.txt", day))
}

pub fn read_input(day: u32) -> io::Result<String> {
    fs::read_to_string(input_filename(day))
}

#[test]
fn test_input_filename() {
    assert_eq!(
        input_filename(1),
        PathBuf::from("inputs").join("day01.input.txt")
    );
    assert_eq!(
        input_filename(11),
        PathBuf::from("inputs").join("day11.input.txt")
    );
}
