pub mod graph;
pub mod parser;
pub mod traversal;

#[cfg(test)]
mod arbitrary;

use std::error;
use std::fmt;

use crate::graph::Graph;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Parse(parser::Error),
    Traversal(traversal::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{}", err),
            Error::Traversal(err) => write!(f, "{}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Traversal(err) => Some(err),
        }
    }
}

pub fn solve(input: &str, start: &str) -> Result<(usize, u64), Error> {
    let rules = parser::parse(input).map_err(Error::Parse)?;
    let graph = Graph::build(&rules);
    let ancestors = traversal::count_ancestors(&graph, start).map_err(Error::Traversal)?;
    let nested = traversal::weighted_descendant_count(&graph, start).map_err(Error::Traversal)?;
    Ok((ancestors, nested))
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(pub String);

impl Label {
    pub fn new(s: &str) -> Label {
        Label(s.to_string())
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// An empty `contents` is the "no other bags" case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub container: Label,
    pub contents: Vec<(Label, u32)>,
}

impl Rule {
    pub fn new(container: Label, contents: Vec<(Label, u32)>) -> Rule {
        Rule {
            container,
            contents,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bags contain ", self.container)?;
        if self.contents.is_empty() {
            return write!(f, "no other bags.");
        }
        for (i, (label, count)) in self.contents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {} bag", count, label)?;
            if *count != 1 {
                write!(f, "s")?;
            }
        }
        write!(f, ".")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rules(pub Vec<Rule>);

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|rule| format!("{}", rule))
                .collect::<Vec<_>>()
                .join("\n")
        )
    }
}
