use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }
}

/// Set of directions currently held.
///
/// Directions are independent: Up and Down may both be active at once, in
/// which case they cancel on that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovementIntent(u8);

impl MovementIntent {
    /// No direction held.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_directions(dirs: &[Direction]) -> Self {
        let mut intent = Self::new();
        for d in dirs {
            intent.press(*d);
        }
        intent
    }

    pub fn press(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    pub fn release(&mut self, dir: Direction) {
        self.0 &= !dir.bit();
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        if held {
            self.press(dir);
        } else {
            self.release(dir);
        }
    }

    pub fn is_active(&self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Active directions in `Direction::ALL` order.
    pub fn active(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_active(*d))
    }

    /// Net displacement per axis, each component in {-1, 0, 1}.
    ///
    /// Screen space: Up is negative y, Right is positive x.
    pub fn axis(&self) -> Vec2 {
        let net = |neg: Direction, pos: Direction| {
            self.is_active(pos) as i8 as f32 - self.is_active(neg) as i8 as f32
        };
        Vec2::new(
            net(Direction::Left, Direction::Right),
            net(Direction::Up, Direction::Down),
        )
    }
}
