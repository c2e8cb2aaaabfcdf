//! Decorative pseudo-QR patterns.
//!
//! [`generate_pattern`] turns any string into a 25×25 grid of modules
//! that looks like a QR code.  The grid is fully determined by the
//! string but does not encode it: it cannot be scanned back.

use std::fmt;
use lazy_static::lazy_static;
use rgb::RGB8;
use crate::prng::{hash, next_seed};

/// Number of rows (and columns) of a pattern.
pub const GRID_SIZE: usize = 25;
/// Side of the square finder regions.
pub const FINDER_SIZE: usize = 7;
/// Percentage of free cells that are expected to be set.
pub const FILL_PERCENT: u32 = 45;

const FAR: usize = GRID_SIZE - FINDER_SIZE; // 18

/// Top-left corners `(row, col)` of the three finder regions.
pub const FINDER_ORIGINS: [(usize, usize); 3] = [(0, 0), (0, FAR), (FAR, 0)];

type Cells = [[bool; GRID_SIZE]; GRID_SIZE];

/// Whether `(row, col)` lies in one of the finder regions: top-left,
/// top-right or bottom-left 7×7 square.
#[inline]
pub fn is_finder(row: usize, col: usize) -> bool {
    (row < FINDER_SIZE && col < FINDER_SIZE)
        || (row < FINDER_SIZE && col >= FAR)
        || (row >= FAR && col < FINDER_SIZE)
}

lazy_static! {
    /// Finder markers: in each finder region, a dark 7×7 ring, a light
    /// 5×5 ring and a dark 3×3 center.  `false` everywhere else.
    static ref MARKERS: Cells = {
        let mut m = [[false; GRID_SIZE]; GRID_SIZE];
        for (r0, c0) in FINDER_ORIGINS {
            for r in 0 .. FINDER_SIZE {
                for c in 0 .. FINDER_SIZE {
                    let d = r.abs_diff(3).max(c.abs_diff(3));
                    m[r0 + r][c0 + c] = d != 2;
                }
            }
        }
        m
    };
}

/// A square grid of modules derived from a string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PatternGrid {
    cells: Cells,
}

/// Build the pattern of `text`.
///
/// The seed is [`hash`](crate::prng::hash)`(text)`.  Cells are visited
/// row by row; cells of the finder regions are skipped (left unset,
/// without advancing the seed) and every other cell advances the seed
/// once and is set when `seed % 100 < 45`.
///
/// Seeds advance in exact integer arithmetic.  Implementations of the
/// same generator that multiply in double precision lose low bits of
/// the product and draw different grids for the same text.
///
/// # Example
///
/// ```
/// use color_harmony::generate_pattern;
/// let p = generate_pattern("hello");
/// assert_eq!(p, generate_pattern("hello"));
/// assert_ne!(p, generate_pattern("world"));
/// assert!(!p.is_set(0, 0));
/// ```
pub fn generate_pattern(text: &str) -> PatternGrid {
    let mut seed = hash(text);
    let mut cells = [[false; GRID_SIZE]; GRID_SIZE];
    for (row, line) in cells.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            if is_finder(row, col) { continue }
            seed = next_seed(seed);
            *cell = seed % 100 < FILL_PERCENT;
        }
    }
    PatternGrid { cells }
}

impl PatternGrid {
    /// Whether the cell is set.  Cells outside the grid are unset.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells.get(row).and_then(|l| l.get(col)).copied()
            .unwrap_or(false)
    }

    /// The cells, row by row.
    #[inline]
    pub fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] { &self.cells }

    /// Number of set cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().flatten().filter(|&&b| b).count()
    }

    /// The cells with the finder markers drawn over the finder regions:
    /// what a renderer paints in the foreground color.
    pub fn modules(&self) -> [[bool; GRID_SIZE]; GRID_SIZE] {
        let mut m = self.cells;
        for (row, line) in m.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                if is_finder(row, col) { *cell = MARKERS[row][col] }
            }
        }
        m
    }

    /// Rasterize [`modules`](Self::modules) to `opts.size × opts.size`
    /// pixels, row-major.
    pub fn render(&self, opts: &RenderOptions) -> Vec<RGB8> {
        let size = opts.size as usize;
        let modules = self.modules();
        let mut pixels = Vec::with_capacity(size * size);
        for y in 0 .. size {
            let row = &modules[y * GRID_SIZE / size];
            pixels.extend((0 .. size).map(|x| {
                if row[x * GRID_SIZE / size] { opts.foreground }
                else { opts.background }
            }));
        }
        pixels
    }

    /// Text preview of [`modules`](Self::modules): `#` for a dark
    /// module, `.` for a light one, one line per row.
    pub fn to_text(&self) -> String {
        let mut s = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
        for line in self.modules() {
            s.extend(line.iter().map(|&b| if b { '#' } else { '.' }));
            s.push('\n');
        }
        s
    }
}

impl fmt::Debug for PatternGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let s: String = line.iter()
                .map(|&b| if b { '1' } else { '0' }).collect();
            writeln!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Rendering parameters for [`PatternGrid::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width and height in pixels.
    pub size: u32,
    pub foreground: RGB8,
    pub background: RGB8,
}

impl Default for RenderOptions {
    /// 200×200 pixels, black on white.
    fn default() -> Self {
        RenderOptions { size: 200,
                        foreground: RGB8::new(0, 0, 0),
                        background: RGB8::new(255, 255, 255) }
    }
}

impl RenderOptions {
    pub fn new() -> Self { Self::default() }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn foreground(mut self, c: RGB8) -> Self {
        self.foreground = c;
        self
    }

    pub fn background(mut self, c: RGB8) -> Self {
        self.background = c;
        self
    }
}
