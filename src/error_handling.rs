use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// 1-based column in the input pattern; 0 means no particular position
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Position {
    pub column: usize
}

impl Position {
    pub fn none() -> Self {
        Position { column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.column == 0 {
            write!(f, "pattern")
        } else {
            write!(f, "pattern:{}", self.column)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub position: Position,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.position, self.error)
    }
}
