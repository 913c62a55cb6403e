mod rule;

pub use self::rule::*;

use std::error;
use std::fmt;

use crate::Rules;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MalformedLine { number: usize, line: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedLine { number, line } => {
                write!(f, "malformed rule on line {}: {:?}", number, line)
            }
        }
    }
}

impl error::Error for Error {}

pub fn parse(input: &str) -> Result<Rules, Error> {
    parse_lines(input.lines())
}

// Lines may keep their terminators; the first bad line aborts the parse.
pub fn parse_lines<I, S>(lines: I) -> Result<Rules, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rules = Vec::new();
    for (i, line) in lines.into_iter().enumerate() {
        match rule(line.as_ref()) {
            Some(rule) => rules.push(rule),
            None => {
                return Err(Error::MalformedLine {
                    number: i + 1,
                    line: line.as_ref().to_string(),
                })
            }
        }
    }
    Ok(Rules(rules))
}
