use serde::{Deserialize, Serialize};

use crate::*;

/// A hidden hint tied to one fixed grid cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    pub coords: Coord2,
    pub hint: String,
    #[serde(default)]
    discovered: bool,
}

impl Clue {
    pub fn new(coords: Coord2, hint: impl Into<String>) -> Self {
        Self {
            coords,
            hint: hint.into(),
            discovered: false,
        }
    }

    pub const fn discovered(&self) -> bool {
        self.discovered
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClueLedger {
    clues: Vec<Clue>,
}

impl ClueLedger {
    pub fn new(clues: Vec<Clue>) -> Self {
        Self { clues }
    }

    /// Marks the clue under `pos` discovered and hands back its hint; `None` when the cell holds
    /// no clue or the clue was already found.
    pub fn check_discovery(&mut self, pos: Coord2) -> Option<&str> {
        let clue = self
            .clues
            .iter_mut()
            .find(|clue| clue.coords == pos && !clue.discovered)?;

        clue.discovered = true;
        log::debug!("clue discovered at {:?}", pos);
        Some(clue.hint.as_str())
    }

    pub fn all_discovered(&self) -> bool {
        self.clues.iter().all(|clue| clue.discovered)
    }

    pub fn found_count(&self) -> usize {
        self.clues.iter().filter(|clue| clue.discovered).count()
    }

    pub fn total(&self) -> usize {
        self.clues.len()
    }

    /// Coordinates still worth drawing a marker for.
    pub fn undiscovered(&self) -> impl Iterator<Item = Coord2> {
        self.clues
            .iter()
            .filter(|clue| !clue.discovered)
            .map(|clue| clue.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> ClueLedger {
        ClueLedger::new(vec![
            Clue::new((1, 1), "first"),
            Clue::new((2, 2), "second"),
        ])
    }

    #[test]
    fn discovery_returns_the_hint_exactly_once() {
        let mut ledger = ledger();

        assert_eq!(ledger.check_discovery((1, 1)), Some("first"));
        assert_eq!(ledger.check_discovery((1, 1)), None);
        assert_eq!(ledger.found_count(), 1);
    }

    #[test]
    fn cells_without_clues_discover_nothing() {
        let mut ledger = ledger();

        assert_eq!(ledger.check_discovery((0, 0)), None);
        assert_eq!(ledger.found_count(), 0);
    }

    #[test]
    fn all_discovered_tracks_the_full_set() {
        let mut ledger = ledger();
        assert!(!ledger.all_discovered());

        ledger.check_discovery((1, 1));
        ledger.check_discovery((2, 2));

        assert!(ledger.all_discovered());
        assert_eq!(ledger.undiscovered().count(), 0);
    }

    #[test]
    fn empty_ledger_counts_as_fully_discovered() {
        assert!(ClueLedger::default().all_discovered());
    }
}
