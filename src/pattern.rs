use indexmap::IndexMap;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;

use crate::error::{Error, Result};

/// Anchor-relative `(row, col)` offsets of the live cells of a pattern.
pub type Offsets = &'static [(usize, usize)];

/// Period-2 blinker: a vertical line of three cells.
pub const BLINKER: Offsets = &[(0, 1), (1, 1), (2, 1)];

/// The smallest spaceship. Translates one cell down and one cell right
/// every four generations.
pub const GLIDER: Offsets = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

/// Gosper glider gun, 36 cells, emitting one glider every 30
/// generations. The offsets keep a one-cell margin from the anchor on
/// both axes.
pub const GLIDER_GUN: Offsets = &[
  (1, 25),
  (2, 23), (2, 25),
  (3, 13), (3, 14), (3, 21), (3, 22), (3, 35), (3, 36),
  (4, 12), (4, 16), (4, 21), (4, 22), (4, 35), (4, 36),
  (5, 1), (5, 2), (5, 11), (5, 17), (5, 21), (5, 22),
  (6, 1), (6, 2), (6, 11), (6, 15), (6, 17), (6, 18), (6, 23), (6, 25),
  (7, 11), (7, 17), (7, 25),
  (8, 12), (8, 16),
  (9, 13), (9, 14),
];

/// Patterns looked up by name, kept in registration order.
pub struct PatternSet {
  map: IndexMap<&'static str, Offsets, BuildHasherDefault<FxHasher>>,
}

impl PatternSet {
  /// The three canonical constructs.
  pub fn builtin() -> Self {
    let mut set = Self {
      map: IndexMap::default(),
    };
    set.register("blinker", BLINKER);
    set.register("glider", GLIDER);
    set.register("glider-gun", GLIDER_GUN);
    set
  }

  pub fn register(&mut self, name: &'static str, cells: Offsets) {
    self.map.insert(name, cells);
  }

  pub fn get(&self, name: &str) -> Result<Offsets> {
    self
      .map
      .get(name)
      .copied()
      .ok_or_else(|| Error::UnknownPattern(name.to_owned()))
  }

  /// Names in registration order.
  pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.map.keys().copied()
  }
}
