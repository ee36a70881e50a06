//! The Steckerbrett: a symmetric letter-pair substitution applied on the
//! way into and out of the rotors.

use crate::letters::{self, IDENTITY, Wiring};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    table: Wiring,
}

impl Plugboard {
    /// Builds the board from disjoint uppercase letter pairs. Letters not
    /// named in any pair map to themselves.
    pub fn new(pairs: &[(u8, u8)]) -> Self {
        let mut table = IDENTITY;
        for &(a, b) in pairs {
            table[letters::index(a)] = b;
            table[letters::index(b)] = a;
        }
        Self { table }
    }

    pub fn substitute(&self, letter: u8) -> u8 {
        self.table[letters::index(letter)]
    }
}
