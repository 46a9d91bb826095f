use crate::display_format::DisplayFormat;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use std::collections::HashMap;
use std::fmt::Formatter;

pub struct Board {
    pieces: HashMap<Position, Piece>,
}

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    pub fn new() -> Self {
        Self { pieces: HashMap::new() }
    }

    pub fn from_fen(fen: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut row = Self::HEIGHT;
        let mut col = 1;

        for current in fen.chars() {
            match current {
                ' ' => break,
                '/' => {
                    if col != Self::WIDTH + 1 || row == 1 {
                        return None;
                    }
                    col = 1;
                    row -= 1;
                }
                '0'..='9' => col += current.to_digit(10).unwrap() as i8,
                _ => {
                    let kind = PieceKind::from_fen_char(current)?;
                    board.add_piece(kind, current.is_ascii_uppercase(), Position::new(row, col));
                    col += 1;
                }
            }
        }

        if row == 1 && col == Self::WIDTH + 1 {
            Some(board)
        } else {
            None
        }
    }

    pub fn fen(&self) -> String {
        let mut result = String::new();
        for row in (1..=Self::HEIGHT).rev() {
            let mut empty = 0;
            for col in 1..=Self::WIDTH {
                if let Some(piece) = self.pieces.get(&Position::new(row, col)) {
                    if empty > 0 {
                        result.push(char::from_digit(empty, 10).unwrap());
                        empty = 0;
                    }
                    result.push(piece.fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                result.push(char::from_digit(empty, 10).unwrap());
            }
            if row > 1 {
                result.push('/');
            }
        }
        result
    }

    pub fn opening() -> Self {
        Self::from_fen("rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR").unwrap()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }

    pub fn add_piece(&mut self, kind: PieceKind, red: bool, position: Position) {
        self.pieces.insert(position, Piece::new(kind, red, position));
    }

    pub fn get_piece(&self, position: Position) -> Option<&Piece> {
        self.pieces.get(&position)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.values()
    }

    pub fn move_piece(&mut self, from: Position, to: Position) -> bool {
        let Some(piece) = self.pieces.get(&from).copied() else {
            return false;
        };

        if !self.is_move_legal(piece, to) {
            return false;
        }

        // apply speculatively, the facing check runs on the resulting position
        self.pieces.remove(&from);
        let mut moved = piece;
        moved.set_position(to);
        let captured = self.pieces.insert(to, moved);

        if moved.kind() == PieceKind::General && self.generals_face() {
            // restore the exact prior state, captured occupant included
            self.pieces.insert(from, piece);
            match captured {
                Some(captured) => self.pieces.insert(to, captured),
                None => self.pieces.remove(&to),
            };
            return false;
        }

        true
    }

    pub fn is_move_legal(&self, piece: Piece, to: Position) -> bool {
        match piece.kind() {
            PieceKind::General => self.is_general_move_legal(piece, to),
            PieceKind::Guard => self.is_guard_move_legal(piece, to),
            PieceKind::Rook => self.is_rook_move_legal(piece, to),
            PieceKind::Horse => self.is_horse_move_legal(piece, to),
            PieceKind::Cannon => self.is_cannon_move_legal(piece, to),
            PieceKind::Elephant => self.is_elephant_move_legal(piece, to),
            PieceKind::Soldier => self.is_soldier_move_legal(piece, to),
        }
    }

    pub fn is_general_move_legal(&self, piece: Piece, to: Position) -> bool {
        if !to.in_palace(piece.is_red()) {
            return false;
        }

        let from = piece.position();
        (from.row() - to.row()).abs() + (from.col() - to.col()).abs() == 1
    }

    pub fn is_guard_move_legal(&self, piece: Piece, to: Position) -> bool {
        if !to.in_palace(piece.is_red()) {
            return false;
        }

        let from = piece.position();
        (from.row() - to.row()).abs() == 1 && (from.col() - to.col()).abs() == 1
    }

    pub fn is_rook_move_legal(&self, piece: Piece, to: Position) -> bool {
        let from = piece.position();
        if from.row() != to.row() && from.col() != to.col() {
            return false;
        }
        self.count_between(from, to) == 0
    }

    pub fn is_horse_move_legal(&self, piece: Piece, to: Position) -> bool {
        let from = piece.position();
        let dr = to.row() - from.row();
        let dc = to.col() - from.col();

        // the hobbling leg sits one step along the longer axis
        let leg = match (dr.abs(), dc.abs()) {
            (2, 1) => Position::new(from.row() + dr.signum(), from.col()),
            (1, 2) => Position::new(from.row(), from.col() + dc.signum()),
            _ => return false,
        };
        !self.pieces.contains_key(&leg)
    }

    pub fn is_cannon_move_legal(&self, piece: Piece, to: Position) -> bool {
        let from = piece.position();
        if from.row() != to.row() && from.col() != to.col() {
            return false;
        }

        // capturing fires over exactly one screen, sliding over none
        let screens = self.count_between(from, to);
        if self.pieces.contains_key(&to) {
            screens == 1
        } else {
            screens == 0
        }
    }

    pub fn is_elephant_move_legal(&self, piece: Piece, to: Position) -> bool {
        let from = piece.position();
        if (to.row() - from.row()).abs() != 2 || (to.col() - from.col()).abs() != 2 {
            return false;
        }

        // elephants never cross the river
        if piece.is_red() && to.row() > 5 {
            return false;
        }
        if !piece.is_red() && to.row() < 6 {
            return false;
        }

        let mid = Position::new((from.row() + to.row()) / 2, (from.col() + to.col()) / 2);
        !self.pieces.contains_key(&mid)
    }

    pub fn is_soldier_move_legal(&self, piece: Piece, to: Position) -> bool {
        let from = piece.position();
        let dr = to.row() - from.row();
        let dc = (to.col() - from.col()).abs();
        if dr.abs() + dc != 1 {
            return false;
        }

        if piece.is_red() {
            // red advances by decreasing row and has crossed the river from row 6 up
            if from.row() >= 6 {
                if dr == 1 {
                    return false;
                }
            } else if dr != -1 || dc != 0 {
                return false;
            }
        } else {
            // black advances by increasing row and has crossed from row 5 down
            if from.row() <= 5 {
                if dr == -1 {
                    return false;
                }
            } else if dr != 1 || dc != 0 {
                return false;
            }
        }
        true
    }

    fn count_between(&self, from: Position, to: Position) -> usize {
        let mut count = 0;
        if from.row() == to.row() {
            let low = from.col().min(to.col());
            let high = from.col().max(to.col());
            for col in low + 1..high {
                if self.pieces.contains_key(&Position::new(from.row(), col)) {
                    count += 1;
                }
            }
        } else {
            let low = from.row().min(to.row());
            let high = from.row().max(to.row());
            for row in low + 1..high {
                if self.pieces.contains_key(&Position::new(row, from.col())) {
                    count += 1;
                }
            }
        }
        count
    }

    fn generals_face(&self) -> bool {
        let mut generals = self.pieces.values().filter(|piece| piece.kind() == PieceKind::General);
        let (Some(first), Some(second), None) = (generals.next(), generals.next(), generals.next())
        else {
            return false;
        };

        let col = first.position().col();
        if col != second.position().col() {
            return false;
        }

        let low = first.position().row().min(second.position().row());
        let high = first.position().row().max(second.position().row());
        (low + 1..high).all(|row| !self.pieces.contains_key(&Position::new(row, col)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let format = DisplayFormat::default();
        for row in (1..=Self::HEIGHT).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=Self::WIDTH {
                if let Some(piece) = self.pieces.get(&Position::new(row, col)) {
                    write!(f, "{} ", piece.display(format))?;
                } else {
                    write!(f, "   ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 1..=Self::WIDTH {
            write!(f, "  {col}")?;
        }
        writeln!(f)
    }
}
