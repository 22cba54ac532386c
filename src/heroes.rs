//! Hero catalog
//!
//! Heroes only change how the player looks; they never touch physics.

use serde::{Deserialize, Serialize};

/// A selectable player identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    pub name: String,
    /// Sprite reference resolved by the render backend (None = plain rectangle)
    pub sprite: Option<String>,
}

impl Hero {
    pub fn new(name: impl Into<String>, sprite: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sprite: Some(sprite.into()),
        }
    }
}

/// Ordered list of heroes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroCatalog {
    heroes: Vec<Hero>,
}

impl Default for HeroCatalog {
    fn default() -> Self {
        Self::new(vec![
            Hero::new("Lysaria", "images/hero-1.png"),
            Hero::new("Kaelrik", "images/hero-2.png"),
            Hero::new("Seraphine", "images/hero-3.png"),
        ])
    }
}

impl HeroCatalog {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Clamp an arbitrary index into the catalog (0 for an empty catalog)
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.heroes.len().saturating_sub(1))
    }

    /// Hero at `index`, clamped to the last entry
    pub fn get(&self, index: usize) -> Option<&Hero> {
        self.heroes.get(self.clamp_index(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = HeroCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0).map(|h| h.name.as_str()), Some("Lysaria"));
    }

    #[test]
    fn test_out_of_range_index_clamps() {
        let catalog = HeroCatalog::default();
        assert_eq!(catalog.clamp_index(42), 2);
        assert_eq!(catalog.get(42).map(|h| h.name.as_str()), Some("Seraphine"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = HeroCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.clamp_index(5), 0);
        assert!(catalog.get(0).is_none());
    }
}
