//! Combination keys: the ordered triple of cells behind one attempt.

use serde::{Deserialize, Serialize};

use super::cell::CellIndex;

/// Ordered triple of cell indices, in selection order.
///
/// Order is significant: the first cell contributes only its number, so
/// `(A, B, C)` and `(C, B, A)` are different expressions and different keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CombinationKey(pub [CellIndex; 3]);

impl CombinationKey {
    /// Create a key from three indices in selection order.
    #[must_use]
    pub const fn new(first: CellIndex, second: CellIndex, third: CellIndex) -> Self {
        Self([first, second, third])
    }

    /// Build a key from a completed selection buffer.
    ///
    /// Returns `None` unless the buffer holds exactly three distinct indices.
    #[must_use]
    pub fn from_selection(selection: &[CellIndex]) -> Option<Self> {
        match *selection {
            [a, b, c] if a != b && a != c && b != c => Some(Self([a, b, c])),
            _ => None,
        }
    }

    /// The three indices in selection order.
    #[must_use]
    pub const fn indices(&self) -> [CellIndex; 3] {
        self.0
    }

    /// Letter labels, e.g. `"ACB"`.
    #[must_use]
    pub fn labels(&self) -> String {
        self.0.iter().map(|index| index.label()).collect()
    }
}

impl std::fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels())
    }
}
