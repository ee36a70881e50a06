//! The assembled machine: stepping and the full signal path.

use crate::letters;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::settings::KeySheet;

const LEFT: usize = 0;
const MIDDLE: usize = 1;
const RIGHT: usize = 2;

/// An Enigma I / M3 set up from one key sheet.
///
/// Each instance owns its rotor positions; enciphering mutates them, so a
/// machine must not be shared between concurrent callers. Build a fresh
/// machine from the same key sheet to decipher.
#[derive(Debug, Clone)]
pub struct Enigma {
    /// Left, middle, right.
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Enigma {
    pub fn new(sheet: &KeySheet) -> Self {
        let rings = sheet.rings();
        let positions = sheet.positions();
        let rotors = [LEFT, MIDDLE, RIGHT].map(|slot| {
            Rotor::new(
                sheet.rotor_spec(slot),
                usize::from(rings[slot]),
                usize::from(positions[slot]),
            )
        });

        Self {
            rotors,
            reflector: Reflector::new(sheet.reflector()),
            plugboard: Plugboard::new(sheet.plugboard()),
        }
    }

    /// Letters showing in the three windows, left to right.
    pub fn window(&self) -> [u8; 3] {
        self.rotors.each_ref().map(Rotor::window)
    }

    /// Advances the rotors as one key press does, including the middle
    /// rotor's double step. All decisions use the positions before the press.
    pub fn step(&mut self) {
        let right_at_notch = self.rotors[RIGHT].notch_reached();
        let middle_at_notch = self.rotors[MIDDLE].notch_reached();

        self.rotors[RIGHT].step();
        if right_at_notch || middle_at_notch {
            self.rotors[MIDDLE].step();
        }
        if middle_at_notch {
            self.rotors[LEFT].step();
        }
    }

    /// Presses one key: steps the rotors, then sends the letter through the
    /// plugboard, rotors, reflector and back. `letter` must be `b'A'..=b'Z'`.
    pub fn encipher_letter(&mut self, letter: u8) -> u8 {
        self.step();

        let mut signal = self.plugboard.substitute(letter);

        let mut prev = 0;
        for rotor in self.rotors.iter().rev() {
            signal = rotor.forward(signal, prev);
            prev = rotor.position();
        }

        signal = self
            .reflector
            .reflect(letters::offset(letters::index(signal), 0, prev));

        prev = 0;
        for rotor in &self.rotors {
            signal = rotor.reverse(signal, prev);
            prev = rotor.position();
        }
        signal = letters::letter(letters::offset(letters::index(signal), 0, prev));

        self.plugboard.substitute(signal)
    }

    /// Enciphers a message of uppercase letters, left to right, one key press
    /// per letter. Use [`sanitize_message`](crate::sanitize_message) first on
    /// anything a user typed.
    pub fn encipher_message(&mut self, text: &str) -> String {
        text.bytes()
            .map(|c| char::from(self.encipher_letter(c)))
            .collect()
    }
}
