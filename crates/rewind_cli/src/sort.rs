//! Move list ordering.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    #[strum(to_string = "ascending")]
    Ascending,
    /// Latest move first.
    #[strum(to_string = "descending")]
    Descending,
}

impl SortOrder {
    /// Flips the order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Orders `items` in place.
    pub fn apply<T>(self, items: &mut [T]) {
        if self == Self::Descending {
            items.reverse();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_apply_descending_reverses() {
        let mut items = [0, 1, 2];
        SortOrder::Descending.apply(&mut items);
        assert_eq!(items, [2, 1, 0]);
        SortOrder::Ascending.apply(&mut items);
        assert_eq!(items, [2, 1, 0]);
    }
}
