use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{char, digit1};
use nom::combinator::{all_consuming, map, map_res, opt, verify};
use nom::sequence::{terminated, tuple};
use nom::Finish;
use nom::IResult;

use crate::{Label, Rule};

const CONTAIN_SEPARATOR: &str = " bags contain ";
const EMPTY_CONTENTS: &str = "no other bags";

// A trailing line terminator and the final period are both optional.
pub fn rule(line: &str) -> Option<Rule> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let (rest, container) = terminated(container_label, tag(CONTAIN_SEPARATOR))(line)
        .finish()
        .ok()?;
    let contents = rest.strip_suffix('.').unwrap_or(rest);

    if contents == EMPTY_CONTENTS {
        return Some(Rule::new(Label::new(container), Vec::new()));
    }

    // Labels cannot contain ", ", so clause boundaries are unambiguous even
    // when a label contains the word "bag".
    let mut parsed = Vec::new();
    for piece in contents.split(", ") {
        let (_, content) = all_consuming(clause)(piece).finish().ok()?;
        parsed.push(content);
    }
    Some(Rule::new(Label::new(container), parsed))
}

fn container_label(input: &str) -> IResult<&str, &str> {
    verify(take_until(CONTAIN_SEPARATOR), |label: &str| {
        !label.is_empty()
    })(input)
}

fn clause(input: &str) -> IResult<&str, (Label, u32)> {
    map(
        tuple((
            multiplicity,
            char(' '),
            content_label,
            tag(" bag"),
            opt(char('s')),
        )),
        |(count, _, label, _, _)| (Label::new(label), count),
    )(input)
}

// The label runs up to the last " bag" in the clause, so a label containing
// the word "bag" keeps all of it. A label carrying the container separator
// is off the grammar and rejected.
fn content_label(input: &str) -> IResult<&str, &str> {
    match input.rfind(" bag") {
        Some(at) if at > 0 && !input[..at].contains(CONTAIN_SEPARATOR) => {
            Ok((&input[at..], &input[..at]))
        }
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeUntil,
        ))),
    }
}

fn multiplicity(input: &str) -> IResult<&str, u32> {
    verify(map_res(digit1, |count: &str| count.parse::<u32>()), |count: &u32| {
        *count >= 1
    })(input)
}
