use crate::display_format::DisplayFormat;
use crate::position::Position;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PieceKind {
    General,
    Guard,
    Rook,
    Horse,
    Cannon,
    Elephant,
    Soldier,
}

impl PieceKind {
    pub fn from_fen_char(value: char) -> Option<Self> {
        let kind = match value.to_ascii_lowercase() {
            'k' => Self::General,
            'a' => Self::Guard,
            'e' => Self::Elephant,
            'h' => Self::Horse,
            'r' => Self::Rook,
            'c' => Self::Cannon,
            'p' => Self::Soldier,
            _ => return None,
        };
        Some(kind)
    }
}

impl FromStr for PieceKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let kind = match value.to_ascii_lowercase().as_str() {
            "general" => Self::General,
            "guard" => Self::Guard,
            "rook" => Self::Rook,
            "horse" => Self::Horse,
            "cannon" => Self::Cannon,
            "elephant" => Self::Elephant,
            "soldier" => Self::Soldier,
            _ => return Err(format!("unknown piece kind '{value}'")),
        };
        Ok(kind)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    kind: PieceKind,
    red: bool,
    position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, red: bool, position: Position) -> Self {
        Self { kind, red, position }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn is_red(&self) -> bool {
        self.red
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn fen_char(&self) -> char {
        let result = match self.kind {
            PieceKind::General => 'k',
            PieceKind::Guard => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Rook => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        if self.red {
            result.to_ascii_uppercase()
        } else {
            result
        }
    }

    pub fn chinese_char(&self) -> char {
        match (self.red, self.kind) {
            (true, PieceKind::General) => '帥',
            (true, PieceKind::Guard) => '仕',
            (true, PieceKind::Elephant) => '相',
            (true, PieceKind::Horse) => '傌',
            (true, PieceKind::Rook) => '俥',
            (true, PieceKind::Cannon) => '炮',
            (true, PieceKind::Soldier) => '兵',
            (false, PieceKind::General) => '將',
            (false, PieceKind::Guard) => '士',
            (false, PieceKind::Elephant) => '象',
            (false, PieceKind::Horse) => '馬',
            (false, PieceKind::Rook) => '車',
            (false, PieceKind::Cannon) => '砲',
            (false, PieceKind::Soldier) => '卒',
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        let s = if format.chinese {
            self.chinese_char().to_string()
        } else {
            // doubled so letters occupy the same width as the glyphs
            let c = self.fen_char();
            format!("{c}{c}")
        };
        if format.color && self.red {
            format!("\x1B[31m{s}\x1B[0m")
        } else {
            s
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::default()))
    }
}
