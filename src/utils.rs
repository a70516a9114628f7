use std::ops::{Add, Sub};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

const NEIGHBOR_OFFSETS: [Pos; 8] = [
    pos!(-1, -1),
    pos!(-1, 0),
    pos!(-1, 1),
    pos!(0, -1),
    pos!(0, 1),
    pos!(1, -1),
    pos!(1, 0),
    pos!(1, 1),
];

impl Pos {
    /// the eight positions at chebyshev distance 1, in no particular order.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS.into_iter().map(move |offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        pos!(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Pos {
    fn from((x, y): (i64, i64)) -> Self {
        pos!(x, y)
    }
}
