//! Card rendering strategies.

use serde::{Deserialize, Serialize};

/// Which layout a product card renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Compact cell in a multi-column grid.
    #[default]
    Grid,
    /// Wide row in a single-column list.
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Container class for a collection of cards in this mode.
    pub fn container_class(&self) -> &'static str {
        match self {
            ViewMode::Grid => "product-grid",
            ViewMode::List => "product-list",
        }
    }

    /// The other mode.
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_grid() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.container_class(), "product-list");
    }
}
