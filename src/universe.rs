use crate::error::Result;
use crate::grid::{BoundaryMode, Grid};
use crate::pattern::{self, PatternSet};
use crate::rule::{Rule, GAME_OF_LIFE};

/// Owns one grid and advances it one synchronous generation at a time.
///
/// The grid is never handed out mutably; seeding goes through the
/// `insert_*` operations and readers get borrows or snapshot copies.
pub struct Universe {
  grid: Grid,
  rule: Rule,
  boundary: BoundaryMode,
  fast_mode: bool,
}

impl Universe {
  /// Wrap boundary, plain neighbor counting.
  pub fn new(size: usize) -> Result<Self> {
    Self::with_config(size, BoundaryMode::Wrap, false)
  }

  /// `fast_mode` is advisory: it selects the interior fast path for
  /// neighbor counting and never changes the computed generations.
  pub fn with_config(size: usize, boundary: BoundaryMode, fast_mode: bool) -> Result<Self> {
    Ok(Self {
      grid: Grid::new(size)?,
      rule: GAME_OF_LIFE,
      boundary,
      fast_mode,
    })
  }

  pub fn size(&self) -> usize {
    self.grid.size()
  }

  pub fn boundary(&self) -> BoundaryMode {
    self.boundary
  }

  pub fn rule(&self) -> Rule {
    self.rule
  }

  /// Borrow the current generation.
  pub fn grid(&self) -> &Grid {
    &self.grid
  }

  /// Snapshot copy of the current generation.
  pub fn states(&self) -> Grid {
    self.grid.clone()
  }

  pub fn debug(&self) -> String {
    self.grid.debug()
  }

  /// Advance one generation. The whole next grid is computed from a
  /// single snapshot of the current one, so no update reads another
  /// cell's already-updated value. Cannot fail.
  pub fn evolve(&mut self) {
    let counts = if self.fast_mode {
      self.grid.neighbor_counts_fast(self.boundary)
    } else {
      self.grid.neighbor_counts(self.boundary)
    };
    let next = self
      .grid
      .cells()
      .iter()
      .zip(counts)
      .map(|(&cell, neighbors)| self.rule.next_state(cell, neighbors))
      .collect();
    self.grid.replace_cells(next);
  }

  /// `num_gen` is number of generations.
  pub fn simulate(&mut self, num_gen: usize) {
    for _ in 0..num_gen {
      self.evolve();
    }
  }

  pub fn insert_blinker(&mut self, anchor: (usize, usize)) -> Result<()> {
    self.insert_cells(pattern::BLINKER, anchor)
  }

  pub fn insert_glider(&mut self, anchor: (usize, usize)) -> Result<()> {
    self.insert_cells(pattern::GLIDER, anchor)
  }

  pub fn insert_glider_gun(&mut self, anchor: (usize, usize)) -> Result<()> {
    self.insert_cells(pattern::GLIDER_GUN, anchor)
  }

  /// Overlay the live cells of a pattern at `anchor`. Cells of the grid
  /// not named by the pattern are left alone. If any target falls
  /// outside the grid the whole insertion is rejected and nothing is
  /// written.
  pub fn insert_cells(&mut self, cells: &[(usize, usize)], anchor: (usize, usize)) -> Result<()> {
    let targets = cells
      .iter()
      .map(|&(dr, dc)| (anchor.0 + dr, anchor.1 + dc))
      .collect();
    self.overlay(targets)
  }

  pub fn insert_named(
    &mut self,
    patterns: &PatternSet,
    name: &str,
    anchor: (usize, usize),
  ) -> Result<()> {
    self.insert_cells(patterns.get(name)?, anchor)
  }

  /// Overlay a plain-text pattern: within each line the character `O`
  /// marks a live cell, anything else is skipped.
  ///
  /// The mapping is transposed from the visual layout of the text: the
  /// character position within a line selects the grid **row** and the
  /// line number selects the grid **column**, both offset by `pad`.
  /// Existing pattern files depend on this orientation.
  pub fn insert_from_plaintext(&mut self, text: impl AsRef<str>, pad: usize) -> Result<()> {
    let mut targets = Vec::new();
    for (y, line) in text.as_ref().lines().enumerate() {
      for (x, ch) in line.chars().enumerate() {
        if ch == 'O' {
          targets.push((x + pad, y + pad));
        }
      }
    }
    self.overlay(targets)
  }

  /// Overlay a pattern already decoded from RLE text into a char
  /// matrix: `o` marks a live cell. Same transposed axis mapping as
  /// [`insert_from_plaintext`](Universe::insert_from_plaintext).
  pub fn insert_from_rle(&mut self, matrix: &[Vec<char>], pad: usize) -> Result<()> {
    let mut targets = Vec::new();
    for (y, row) in matrix.iter().enumerate() {
      for (x, &ch) in row.iter().enumerate() {
        if ch == 'o' {
          targets.push((x + pad, y + pad));
        }
      }
    }
    self.overlay(targets)
  }

  // Validate every target before the first write, so a rejected
  // insertion leaves the grid untouched.
  fn overlay(&mut self, targets: Vec<(usize, usize)>) -> Result<()> {
    for &(row, col) in &targets {
      self.grid.index_of(row, col)?;
    }
    for (row, col) in targets {
      self.grid.set_alive(row, col)?;
    }
    Ok(())
  }
}
