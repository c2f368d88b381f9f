use super::CellState;
use std::sync::OnceLock;

/// Possible live-neighbor counts, `0..=8`
const NEIGHBOR_COUNTS: usize = 9;
type TransitionTable = [[Transition; NEIGHBOR_COUNTS]; 2];

/// What happens to a single cell between two generations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Live cell with fewer than two live neighbors dies
    Underpopulation,
    /// Live cell with two or three live neighbors lives on
    Survival,
    /// Live cell with more than three live neighbors dies
    Overpopulation,
    /// Dead cell with exactly three live neighbors comes alive
    Reproduction,
    /// Dead cell stays dead
    Unchanged,
}

impl Transition {
    pub fn classify(state: CellState, live_neighbors: u8) -> Self {
        match (state, live_neighbors) {
            (CellState::Alive, 0..=1) => Self::Underpopulation,
            (CellState::Alive, 2..=3) => Self::Survival,
            (CellState::Alive, _) => Self::Overpopulation,
            (CellState::Dead, 3) => Self::Reproduction,
            (CellState::Dead, _) => Self::Unchanged,
        }
    }

    #[inline]
    pub fn next_state(self) -> CellState {
        match self {
            Self::Survival | Self::Reproduction => CellState::Alive,
            Self::Underpopulation | Self::Overpopulation | Self::Unchanged => CellState::Dead,
        }
    }
}

/// Next state of a cell given its current state and live-neighbor count
///
/// Equivalent to `Transition::classify(state, live_neighbors).next_state()`,
/// served from a table built once.
#[inline]
pub fn next_state(state: CellState, live_neighbors: u8) -> CellState {
    debug_assert!(
        usize::from(live_neighbors) < NEIGHBOR_COUNTS,
        "a cell has at most 8 neighbors, got {live_neighbors}"
    );
    let row = usize::from(state.is_alive());
    transition_table()[row][usize::from(live_neighbors)].next_state()
}

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Indexed by `[is_alive][live_neighbors]`.
fn transition_table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(generate_transition_table)
}

fn generate_transition_table() -> TransitionTable {
    let mut table = [[Transition::Unchanged; NEIGHBOR_COUNTS]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        let state = CellState::from(alive == 1);
        for (count, slot) in (0u8..).zip(row.iter_mut()) {
            *slot = Transition::classify(state, count);
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        use CellState::{Alive, Dead};

        assert_eq!(next_state(Alive, 2), Alive);
        assert_eq!(next_state(Alive, 3), Alive);
        assert_eq!(next_state(Dead, 3), Alive);

        assert_eq!(next_state(Alive, 0), Dead);
        assert_eq!(next_state(Alive, 1), Dead);
        assert_eq!(next_state(Alive, 4), Dead);
        assert_eq!(next_state(Alive, 8), Dead);
        assert_eq!(next_state(Dead, 2), Dead);
        assert_eq!(next_state(Dead, 4), Dead);
        assert_eq!(next_state(Dead, 0), Dead);
    }

    #[test]
    fn classification_names_each_rule() {
        assert_eq!(
            Transition::classify(CellState::Alive, 1),
            Transition::Underpopulation
        );
        assert_eq!(
            Transition::classify(CellState::Alive, 3),
            Transition::Survival
        );
        assert_eq!(
            Transition::classify(CellState::Alive, 5),
            Transition::Overpopulation
        );
        assert_eq!(
            Transition::classify(CellState::Dead, 3),
            Transition::Reproduction
        );
        assert_eq!(
            Transition::classify(CellState::Dead, 6),
            Transition::Unchanged
        );
    }

    #[test]
    #[should_panic]
    fn counts_above_eight_are_rejected() {
        next_state(CellState::Alive, 9);
    }

    #[test]
    fn table_agrees_with_classification() {
        for state in [CellState::Alive, CellState::Dead] {
            for count in 0..=8 {
                assert_eq!(
                    next_state(state, count),
                    Transition::classify(state, count).next_state()
                );
            }
        }
    }
}
