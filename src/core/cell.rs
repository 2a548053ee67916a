//! Board cells: operators, numbers and fixed positions.
//!
//! ## CellIndex
//!
//! Type-safe board position `0..CELL_COUNT`, shown to players as a letter
//! label (`A`..`J`).
//!
//! ## Cell
//!
//! One operator plus one number. Cells are generated at round start and are
//! immutable for the rest of the round.

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::rng::RandomSource;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 10;

/// Arithmetic operator carried by a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in draw order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Does this operator bind tighter than addition/subtraction?
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Operator::Multiply | Operator::Divide)
    }

    /// Display symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Board position, `0..CELL_COUNT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIndex(pub u8);

impl CellIndex {
    /// Create a cell index.
    ///
    /// Returns `None` if the index is off the board.
    #[must_use]
    pub fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Parse a letter label (`A`..`J`, case-insensitive).
    #[must_use]
    pub fn from_label(label: char) -> Option<Self> {
        let upper = label.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Self::new((upper as u8 - b'A') as usize)
        } else {
            None
        }
    }

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Letter label shown to players.
    #[must_use]
    pub const fn label(self) -> char {
        (b'A' + self.0) as char
    }

    /// Iterate over every board position.
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT as u8).map(CellIndex)
    }
}

impl std::fmt::Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Operator applied when this cell is not the first of a combination.
    pub operator: Operator,
    /// Operand, within the configured number range.
    pub number: i64,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(operator: Operator, number: i64) -> Self {
        Self { operator, number }
    }

    /// Draw a cell: operator and number independently and uniformly.
    pub fn random<R: RandomSource>(rng: &mut R, config: &GameConfig) -> Self {
        let operator = Operator::ALL[rng.next_below(Operator::ALL.len())];
        let low = config.min_number.min(config.max_number);
        let span = config.max_number.abs_diff(config.min_number).saturating_add(1);
        let offset = rng.next_below(usize::try_from(span).unwrap_or(usize::MAX));
        let number = low.saturating_add_unsigned(offset as u64);
        Self { operator, number }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.operator, self.number)
    }
}

/// Generate a full board.
pub fn generate_cells<R: RandomSource>(rng: &mut R, config: &GameConfig) -> [Cell; CELL_COUNT] {
    std::array::from_fn(|_| Cell::random(rng, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    #[test]
    fn test_cell_index_bounds() {
        assert_eq!(CellIndex::new(0), Some(CellIndex(0)));
        assert_eq!(CellIndex::new(9), Some(CellIndex(9)));
        assert_eq!(CellIndex::new(10), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CellIndex(0).label(), 'A');
        assert_eq!(CellIndex(9).label(), 'J');
        assert_eq!(CellIndex::from_label('c'), Some(CellIndex(2)));
        assert_eq!(CellIndex::from_label('J'), Some(CellIndex(9)));
        assert_eq!(CellIndex::from_label('K'), None);
        assert_eq!(CellIndex::from_label('1'), None);
        assert_eq!(format!("{}", CellIndex(4)), "E");
    }

    #[test]
    fn test_all_indices() {
        let all: Vec<_> = CellIndex::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[0], CellIndex(0));
        assert_eq!(all[9], CellIndex(9));
    }

    #[test]
    fn test_operator_precedence_class() {
        assert!(!Operator::Add.is_multiplicative());
        assert!(!Operator::Subtract.is_multiplicative());
        assert!(Operator::Multiply.is_multiplicative());
        assert!(Operator::Divide.is_multiplicative());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::new(Operator::Multiply, 3).to_string(), "×3");
        assert_eq!(Cell::new(Operator::Subtract, 11).to_string(), "-11");
    }

    #[test]
    fn test_generated_cells_in_range() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);

        for _ in 0..50 {
            for cell in generate_cells(&mut rng, &config) {
                assert!((config.min_number..=config.max_number).contains(&cell.number));
            }
        }
    }

    #[test]
    fn test_generation_with_extreme_range() {
        let config = GameConfig {
            min_number: i64::MIN,
            max_number: i64::MAX,
            ..GameConfig::default()
        };
        let mut rng = GameRng::new(3);

        // Must not overflow
        let cells = generate_cells(&mut rng, &config);
        assert_eq!(cells.len(), CELL_COUNT);

        let single = GameConfig {
            min_number: i64::MAX,
            max_number: i64::MAX,
            ..GameConfig::default()
        };
        assert_eq!(Cell::random(&mut rng, &single).number, i64::MAX);
    }

    #[test]
    fn test_generation_covers_all_operators() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(1);
        let mut seen = [false; 4];

        for _ in 0..20 {
            for cell in generate_cells(&mut rng, &config) {
                let slot = Operator::ALL.iter().position(|&op| op == cell.operator).unwrap();
                seen[slot] = true;
            }
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = GameConfig::default();
        let a = generate_cells(&mut GameRng::new(9), &config);
        let b = generate_cells(&mut GameRng::new(9), &config);
        assert_eq!(a, b);
    }
}
