//! Placeholder text for days without sessions.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cell::RefCell;

/// "Nothing", in as many ways as we could find
const NOTHING: &[&str] = &[
    "Nothing",
    "Nada",
    "Rien",
    "Nichts",
    "Niente",
    "Nulla",
    "Nic",
    "Niets",
    "Ingenting",
    "Intet",
    "Ei mitään",
    "Semmi",
    "Nimic",
    "Ništa",
    "Tiada",
    "Wala",
    "Hiçbir şey",
    "Ничего",
    "Τίποτα",
    "Không có gì",
    "何もない",
    "没有",
    "아무것도",
    "कुछ नहीं",
    "لا شيء",
    "אין כלום",
    "Nenhum",
    "Cero",
    "Zilch",
    "Zip",
    "Nil",
    "Void",
    "¯\\_(ツ)_/¯",
];

/// Supplies the phrase shown in an empty day-slot
pub trait EmptyStateProvider {
    fn random(&self) -> String;
}

/// Picks uniformly from a fixed catalog of phrases
#[derive(Debug)]
pub struct Nothingator {
    catalog: Vec<String>,
    rng: RefCell<StdRng>,
}

impl Nothingator {
    /// Default catalog, seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(default_catalog(), StdRng::from_entropy())
    }

    /// Default catalog with a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(default_catalog(), StdRng::seed_from_u64(seed))
    }

    /// Custom catalog; falls back to the default one when empty
    pub fn with_catalog(catalog: Vec<String>, seed: u64) -> Self {
        let catalog = if catalog.is_empty() { default_catalog() } else { catalog };
        Self::with_rng(catalog, StdRng::seed_from_u64(seed))
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    fn with_rng(catalog: Vec<String>, rng: StdRng) -> Self {
        Self {
            catalog,
            rng: RefCell::new(rng),
        }
    }
}

impl Default for Nothingator {
    fn default() -> Self {
        Self::new()
    }
}

impl EmptyStateProvider for Nothingator {
    fn random(&self) -> String {
        let mut rng = self.rng.borrow_mut();
        self.catalog
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_else(|| NOTHING[0].to_string())
    }
}

fn default_catalog() -> Vec<String> {
    NOTHING.iter().map(|phrase| phrase.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_phrase_comes_from_catalog() {
        let nothingator = Nothingator::new();
        for _ in 0..50 {
            let phrase = nothingator.random();
            assert!(nothingator.catalog().contains(&phrase));
        }
    }

    #[test]
    fn test_seeded_sequences_repeat() {
        let first = Nothingator::seeded(42);
        let second = Nothingator::seeded(42);
        let a: Vec<String> = (0..10).map(|_| first.random()).collect();
        let b: Vec<String> = (0..10).map(|_| second.random()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_covers_catalog() {
        let nothingator = Nothingator::with_catalog(vec!["Nada".to_string(), "Rien".to_string()], 7);
        let seen: HashSet<String> = (0..200).map(|_| nothingator.random()).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_empty_catalog_uses_default() {
        let nothingator = Nothingator::with_catalog(Vec::new(), 1);
        assert_eq!(nothingator.catalog().len(), NOTHING.len());
        assert!(!nothingator.random().is_empty());
    }
}
