//! # Color Grid
//!
//! Fixed 100x100 raster of palette indices. Bands are laid top to bottom;
//! each cell holds the pattern's output clamped into `[0, 4]`.
//!
//! Rows past the last band keep the mid-tone fill. Bands that would run
//! past row 99 are cut off.

use crate::sequence::Sequence;

/// Grid width in stitches.
pub const COLS: usize = 100;

/// Grid height in stitches.
pub const ROWS: usize = 100;

/// Index written to cells no band reaches.
pub const FILL_INDEX: u8 = 2;

/// Highest palette index.
pub const MAX_INDEX: u8 = 4;

/// Palette index raster (indexed as `[y][x]`).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Box<[[u8; COLS]; ROWS]>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("cols", &COLS)
            .field("rows", &ROWS)
            .finish_non_exhaustive()
    }
}

impl Grid {
    /// Creates a grid filled with [`FILL_INDEX`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: Box::new([[FILL_INDEX; COLS]; ROWS]),
        }
    }

    /// Rasterizes a band sequence.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn rasterize(sequence: &Sequence) -> Self {
        let mut grid = Self::new();
        let mut top = 0usize;

        for band in sequence.bands() {
            if top >= ROWS {
                break;
            }
            let height = band.height as usize;
            let definition = band.definition;

            for local_y in 0..height {
                let Some(row) = grid.cells.get_mut(top + local_y) else {
                    break;
                };
                for (x, cell) in row.iter_mut().enumerate() {
                    let index = definition.pattern.sample(
                        x as i32,
                        local_y as i32,
                        band.height as i32,
                        &definition.params,
                    );
                    *cell = index.clamp(0, i32::from(MAX_INDEX)) as u8;
                }
            }

            top += height;
        }

        grid
    }

    /// Gets the index at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Gets one row.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> Option<&[u8; COLS]> {
        self.cells.get(y)
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8; COLS]> {
        self.cells.iter()
    }

    /// Row-major copy of every cell.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.cells.concat()
    }

    /// Counts cells per palette index.
    #[must_use]
    pub fn histogram(&self) -> [usize; 5] {
        let mut counts = [0usize; 5];
        for &index in self.cells.iter().flatten() {
            counts[usize::from(index.min(MAX_INDEX))] += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::select_palette;
    use crate::rng::SeededRandom;
    use crate::seed::Seed;
    use crate::sequence::SequenceComposer;

    fn grid_for(raw: u32) -> Grid {
        let seed = Seed::from(raw);
        let mut rng = SeededRandom::new(seed.pattern_seed());
        let sequence = SequenceComposer::default().compose(&mut rng, select_palette(seed).index);
        Grid::rasterize(&sequence)
    }

    fn row_string(grid: &Grid, y: usize) -> String {
        grid.row(y)
            .map(|row| row.iter().map(|i| char::from(b'0' + i)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_new_grid_is_mid_tone() {
        let grid = Grid::new();
        assert_eq!(grid.histogram(), [0, 0, COLS * ROWS, 0, 0]);
        assert_eq!(grid.get(COLS, 0), None);
        assert_eq!(grid.get(0, ROWS), None);
    }

    #[test]
    fn test_reference_rows() {
        let grid = grid_for(0);
        assert_eq!(&row_string(&grid, 0)[..20], "00000000000000000000");
        assert_eq!(
            row_string(&grid, 50),
            "1111111144411111111111111144411111111111111144411111111111111144411111111111111144411111111111111144"
        );

        let grid = grid_for(42);
        assert_eq!(
            row_string(&grid, 50),
            "0044433444334440004443344433444000444334443344400044433444334440004443344433444000444334443344400044"
        );

        let grid = grid_for(424_242);
        assert_eq!(&row_string(&grid, 0)[..20], "33333333333333333333");
    }

    #[test]
    fn test_overflow_cut_at_bottom() {
        // seed 0 is 104 rows nominal: the mirrored double_line starts on the
        // last row and the closing solid_dark never lands
        let grid = grid_for(0);
        assert_eq!(row_string(&grid, 0), "0".repeat(COLS));
        assert_eq!(row_string(&grid, 2), "4".repeat(COLS));
        assert_eq!(grid.row(ROWS - 1), grid.row(2));
        assert_ne!(grid.row(ROWS - 1), grid.row(0));
    }

    #[test]
    fn test_short_layout_keeps_fill() {
        // seed 403 is 98 rows nominal
        let grid = grid_for(403);
        assert_eq!(row_string(&grid, 97), "0".repeat(COLS));
        assert_eq!(row_string(&grid, 98), "2".repeat(COLS));
        assert_eq!(row_string(&grid, 99), "2".repeat(COLS));
    }

    #[test]
    fn test_rows_past_nominal_height_are_fill() {
        for raw in 0..500u32 {
            let seed = Seed::from(raw);
            let mut rng = SeededRandom::new(seed.pattern_seed());
            let palette_index = select_palette(seed).index;
            let sequence = SequenceComposer::default().compose(&mut rng, palette_index);
            let grid = Grid::rasterize(&sequence);
            assert_eq!(grid.rows().count(), ROWS);

            let nominal = sequence.total_height() as usize;
            for y in nominal.min(ROWS)..ROWS {
                assert_eq!(grid.row(y), Some(&[FILL_INDEX; COLS]), "seed {raw} row {y}");
            }
        }
    }

    #[test]
    fn test_indices_in_range() {
        for raw in 0..50u32 {
            let grid = grid_for(raw);
            assert!(grid.to_bytes().iter().all(|&i| i <= MAX_INDEX));
            assert_eq!(grid.to_bytes().len(), COLS * ROWS);
        }
    }
}
