use crate::board::{Color, Piece, Square};
use arrayvec::ArrayVec;
use std::fmt;
use std::ops::{Deref, DerefMut};

pub trait MoveBuffer: Deref<Target = [Move]> + DerefMut {
    fn push(&mut self, mv: Move);
    fn clear(&mut self);
}

impl MoveBuffer for Vec<Move> {
    fn push(&mut self, mv: Move) {
        Vec::push(self, mv);
    }
    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<const N: usize> MoveBuffer for ArrayVec<Move, N> {
    fn push(&mut self, mv: Move) {
        ArrayVec::push(self, mv);
    }
    fn clear(&mut self) {
        ArrayVec::clear(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Move {
    #[inline(always)]
    pub fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        Move { from, to, piece, captured }
    }

    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline(always)]
    pub fn is_quiet(&self) -> bool {
        self.captured.is_none()
    }

    pub fn to_uci(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Captures everything needed to reverse a `Board::apply` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undo {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<(Color, Piece)>,
    pub prev_hash: u64,
}
