//! A single rotor fitted in the machine: ring-adjusted wiring plus the
//! current window position.

use crate::catalog::RotorSpec;
use crate::letters::{self, ALPHABET_LEN, Wiring};

/// Rewires a table for a ring setting (0 for `A`, 25 for `Z`).
///
/// Each exit letter is shifted up by `ring`, then the table is rotated so
/// that the shifted ring letter sits where `A` sat, `ring` contacts further
/// on. The shifted ring letter is the image of `A`, so that rotation is
/// always exactly `ring` places. The notch is not touched. A ring of 0
/// returns the wiring unchanged.
pub fn apply_ring_setting(wiring: &Wiring, ring: usize) -> Wiring {
    debug_assert!(
        letters::is_permutation(wiring),
        "wiring {:?} is not a permutation",
        wiring
    );
    let ring = ring % ALPHABET_LEN;

    let mut shifted = wiring.map(|c| letters::caesar_shift(c, ring));
    shifted.rotate_right(ring);
    shifted
}

/// Runtime state of one rotor. Owned by exactly one [`Enigma`](crate::Enigma).
#[derive(Debug, Clone)]
pub struct Rotor {
    spec: &'static RotorSpec,
    position: usize,
    forward: Wiring,
    reverse: Wiring,
}

impl Rotor {
    /// Fits a rotor with the given ring setting and start position,
    /// both as indices 0..26.
    pub fn new(spec: &'static RotorSpec, ring: usize, position: usize) -> Self {
        Self {
            spec,
            position: position % ALPHABET_LEN,
            forward: apply_ring_setting(&spec.forward, ring),
            reverse: apply_ring_setting(&spec.reverse, ring),
        }
    }

    pub fn spec(&self) -> &'static RotorSpec {
        self.spec
    }

    /// Current position as an index, 0 for `A`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Letter currently showing in the window.
    pub fn window(&self) -> u8 {
        letters::letter(self.position)
    }

    /// True when the window shows this rotor's turnover letter.
    pub fn notch_reached(&self) -> bool {
        self.window() == self.spec.notch
    }

    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Right-to-left substitution. `prev` is the position of the stage the
    /// signal comes from (0 for the entry wheel).
    pub fn forward(&self, input: u8, prev: usize) -> u8 {
        self.forward[letters::offset(letters::index(input), self.position, prev)]
    }

    /// Left-to-right substitution through the inverse wiring. `prev` is the
    /// position of the rotor to the left (0 next to the reflector).
    pub fn reverse(&self, input: u8, prev: usize) -> u8 {
        self.reverse[letters::offset(letters::index(input), self.position, prev)]
    }

    #[cfg(test)]
    pub(crate) fn wiring(&self) -> (&Wiring, &Wiring) {
        (&self.forward, &self.reverse)
    }
}
