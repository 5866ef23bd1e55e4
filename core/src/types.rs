use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
///
/// Signed so that positions just outside the board (`-1`) are ordinary inputs.
pub type Coord = i16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;

    /// Converts to an ndarray index, or `None` when outside `bounds`.
    fn to_nd_index(self, bounds: Self) -> Option<Self::Output>;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self, (max_x, max_y): Coord2) -> Option<Self::Output> {
        let (x, y) = self;
        if (0..max_x).contains(&x) && (0..max_y).contains(&y) {
            Some([x as usize, y as usize])
        } else {
            None
        }
    }
}

/// Shape of an array holding a board of `size`, negative sides count as empty.
pub fn nd_shape((x, y): Coord2) -> [usize; 2] {
    [x.max(0) as usize, y.max(0) as usize]
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    if a <= 0 || b <= 0 {
        return 0;
    }
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Displacements to the 8 surrounding cells, used for adjacency counts.
pub const MOORE: [Coord2; 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Displacements north, south, east and west, used by the reveal cascade.
pub const ORTHOGONAL: [Coord2; 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Applies `delta` to `coords` without any bounds check.
pub fn offset(coords: Coord2, delta: Coord2) -> Option<Coord2> {
    Some((
        coords.0.checked_add(delta.0)?,
        coords.1.checked_add(delta.1)?,
    ))
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: Coord2, bounds: Coord2) -> Option<Coord2> {
    let next = offset(coords, delta)?;
    next.to_nd_index(bounds).map(|_| next)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2, displacements: &'static [Coord2]) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2, displacements: &'static [Coord2]) -> NeighborIter {
        let dim = self.dim();
        let size = (
            Coord::try_from(dim.0).unwrap_or(Coord::MAX),
            Coord::try_from(dim.1).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size, displacements)
    }
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    displacements: &'static [Coord2],
    index: usize,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2, displacements: &'static [Coord2]) -> Self {
        Self {
            center,
            bounds,
            displacements,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = self.displacements.get(self.index) {
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}
