use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows, columns, and positions.
pub type Coord = u8;

/// Count type used for wall counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Applies this direction's delta to `coords`, returning a value only when it remains in
    /// bounds.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(coords, self.delta(), bounds)
    }
}

fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_cell_within_bounds() {
        assert_eq!(Direction::Down.step((0, 0), (3, 3)), Some((1, 0)));
        assert_eq!(Direction::Right.step((1, 1), (3, 3)), Some((1, 2)));
        assert_eq!(Direction::Up.step((2, 2), (3, 3)), Some((1, 2)));
        assert_eq!(Direction::Left.step((2, 2), (3, 3)), Some((2, 1)));
    }

    #[test]
    fn step_rejects_moves_off_the_grid() {
        assert_eq!(Direction::Up.step((0, 1), (3, 3)), None);
        assert_eq!(Direction::Left.step((1, 0), (3, 3)), None);
        assert_eq!(Direction::Down.step((2, 1), (3, 3)), None);
        assert_eq!(Direction::Right.step((1, 2), (3, 3)), None);
    }

    #[test]
    fn every_direction_is_reachable_from_the_center() {
        for dir in Direction::ALL {
            assert!(dir.step((1, 1), (3, 3)).is_some());
        }
    }
}
