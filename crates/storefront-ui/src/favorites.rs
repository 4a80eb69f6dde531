//! Liked-product state owned by the page.

use std::collections::HashSet;

use storefront_catalog::ProductId;

/// Products the shopper has liked during this visit.
///
/// Cards only display the liked flag and report toggles; this set is the
/// single owner of the state. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    liked: HashSet<ProductId>,
}

impl Favorites {
    /// Flip the liked state of a product, returning the new state.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if self.liked.remove(&id) {
            false
        } else {
            self.liked.insert(id);
            true
        }
    }

    /// Check whether a product is liked.
    pub fn contains(&self, id: ProductId) -> bool {
        self.liked.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::default();
        let id = ProductId::new(7);

        assert!(favorites.toggle(id));
        assert!(favorites.contains(id));
        assert!(!favorites.toggle(id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_independent_products() {
        let mut favorites = Favorites::default();
        favorites.toggle(ProductId::new(1));
        favorites.toggle(ProductId::new(2));
        favorites.toggle(ProductId::new(1));

        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(ProductId::new(2)));
    }
}
