//! Helpers for rectangular grids addressed by `(row, column)`.

pub type Position = (usize, usize);

// Clockwise from north: N, NE, E, SE, S, SW, W, NW.
const NEIGHBOUR_DELTAS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

fn clamp_range(val: usize, limit: usize) -> Option<usize> {
    if val < limit {
        Some(val)
    } else {
        None
    }
}

fn offset(val: usize, delta: isize, limit: usize) -> Option<usize> {
    let moved = if delta < 0 {
        val.checked_sub(delta.unsigned_abs())
    } else {
        val.checked_add(delta.unsigned_abs())
    };
    moved.and_then(|v| clamp_range(v, limit))
}

/// Yields the in-bounds neighbours (including diagonals) of `pos` in a
/// grid of `rows` x `cols`, starting at north and going clockwise.
pub fn neighbours(pos: Position, rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    let (r, c) = pos;
    NEIGHBOUR_DELTAS
        .into_iter()
        .filter_map(move |(dr, dc)| Some((offset(r, dr, rows)?, offset(c, dc, cols)?)))
}

/// Every position of a `rows` x `cols` grid, in row-major order.
pub fn table_indexes(rows: usize, cols: usize) -> impl Iterator<Item = Position> {
    (0..rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbour_counts() {
        let count = |pos| neighbours(pos, 5, 5).count();
        // corners
        assert_eq!(count((0, 0)), 3);
        assert_eq!(count((0, 4)), 3);
        assert_eq!(count((4, 0)), 3);
        assert_eq!(count((4, 4)), 3);
        // edges
        assert_eq!(count((0, 2)), 5);
        assert_eq!(count((2, 0)), 5);
        assert_eq!(count((4, 3)), 5);
        assert_eq!(count((1, 4)), 5);
        // interior
        assert_eq!(count((2, 2)), 8);
        assert_eq!(count((1, 3)), 8);
    }

    #[test]
    fn test_neighbour_order() {
        let got: Vec<Position> = neighbours((1, 1), 3, 3).collect();
        assert_eq!(
            got,
            vec![(0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)]
        );
        let corner: Vec<Position> = neighbours((0, 0), 2, 2).collect();
        assert_eq!(corner, vec![(0, 1), (1, 1), (1, 0)]);
    }

    #[test]
    fn test_neighbours_small_grids() {
        assert_eq!(neighbours((0, 0), 1, 1).count(), 0);
        let row: Vec<Position> = neighbours((0, 1), 1, 3).collect();
        assert_eq!(row, vec![(0, 2), (0, 0)]);
    }

    #[test]
    fn test_table_indexes() {
        let got: Vec<Position> = table_indexes(2, 3).collect();
        assert_eq!(got, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(table_indexes(0, 4).count(), 0);
    }
}
