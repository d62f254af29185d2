use auto_keepout::Grid;

/// Intensity of unexplored space around the map.
pub const UNKNOWN: f64 = 205.0;
/// Occupied cells: walls and obstacles.
pub const OCCUPIED: f64 = 0.0;
/// Free space inside the walls.
pub const FREE: f64 = 254.0;

/// Axis-aligned obstacle covering `rows × cols` (half-open).
#[derive(Clone, Copy, Debug)]
pub struct Block {
    pub rows: (usize, usize),
    pub cols: (usize, usize),
}

impl Block {
    pub const fn new(rows: (usize, usize), cols: (usize, usize)) -> Self {
        Self { rows, cols }
    }
}

/// Occupancy map of `height × width` cells: a `rim`-wide band of unknown
/// space, a `wall`-wide occupied ring, free space inside, and `blocks`
/// painted as occupied on top.
pub fn occupancy_room(
    height: usize,
    width: usize,
    rim: usize,
    wall: usize,
    blocks: &[Block],
) -> Grid {
    assert!(height > 0 && width > 0, "map dimensions must be positive");

    let mut grid = Grid::new(height, width);
    for r in 0..height {
        for c in 0..width {
            let ring = r.min(c).min(height - 1 - r).min(width - 1 - c);
            let v = if ring < rim {
                UNKNOWN
            } else if ring < rim + wall {
                OCCUPIED
            } else {
                FREE
            };
            grid.set(r, c, v);
        }
    }
    for block in blocks {
        for r in block.rows.0..block.rows.1 {
            for c in block.cols.0..block.cols.1 {
                grid.set(r, c, OCCUPIED);
            }
        }
    }
    grid
}

/// `size × size` zeros with a centred `block × block` square of `value`.
pub fn centered_square(size: usize, block: usize, value: f64) -> Grid {
    assert!(block <= size, "block must fit inside the grid");
    let start = (size - block) / 2;
    let mut grid = Grid::new(size, size);
    for r in start..start + block {
        for c in start..start + block {
            grid.set(r, c, value);
        }
    }
    grid
}
