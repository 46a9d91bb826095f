use std::fmt::Formatter;
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    row: i8,
    col: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Position {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    pub fn col(&self) -> i8 {
        self.col
    }

    pub fn in_palace(&self, red: bool) -> bool {
        let rows = if red { 1..=3 } else { 8..=10 };
        rows.contains(&self.row) && (4..=6).contains(&self.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed.splitn(2, ',').map(str::trim);

        let parse = |part: Option<&str>| part.and_then(|part| part.parse::<i8>().ok());
        match (parse(parts.next()), parse(parts.next())) {
            (Some(row), Some(col)) => Ok(Self { row, col }),
            _ => Err(format!("expected row,col instead of '{value}'")),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut parts = value.trim().splitn(2, '-');

        let parse = |part: Option<&str>| part.map(Position::from_str);
        match (parse(parts.next()), parse(parts.next())) {
            (Some(Ok(from)), Some(Ok(to))) => Ok(Self { from, to }),
            _ => Err(format!("expected from-to instead of '{value}'")),
        }
    }
}
