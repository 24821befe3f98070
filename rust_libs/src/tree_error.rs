use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub enum TreeError {
    /// Input violates the shape or range preconditions.
    InvalidInput(String),
    /// Parent walk from `start` never met `end`. Only reachable through a broken tree.
    PathNotFound { start: usize, end: usize },
    Parse(String),
    Io(std::io::Error),
}

impl TreeError {
    pub fn invalid<T>(s: &str) -> Result<T, TreeError> {
        Err(TreeError::InvalidInput(s.to_owned()))
    }

    pub fn parse<T>(s: &str) -> Result<T, TreeError> {
        Err(TreeError::Parse(s.to_owned()))
    }
}

impl Error for TreeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TreeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::InvalidInput(details) => write!(f, "invalid input: {details}"),
            TreeError::PathNotFound { start, end } => {
                write!(f, "no path from node {start} to node {end}")
            }
            TreeError::Parse(details) => write!(f, "parse error: {details}"),
            TreeError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl From<std::io::Error> for TreeError {
    fn from(e: std::io::Error) -> Self {
        TreeError::Io(e)
    }
}
