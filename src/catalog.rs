//! Wiring of the five Enigma I / M3 rotors and the three reflectors.

use std::fmt;

use crate::letters::Wiring;

/// Number of rotor types the machine can be fitted with.
pub const ROTOR_TYPES: usize = 5;

/// Static data for one rotor type.
#[derive(Debug, PartialEq, Eq)]
pub struct RotorSpec {
    /// Roman numeral stamped on the rotor.
    pub name: &'static str,
    /// Right-to-left wiring: entry contact index to exit letter.
    pub forward: Wiring,
    /// Left-to-right wiring, the inverse of `forward`.
    pub reverse: Wiring,
    /// Window letter at which this rotor carries the rotor to its left.
    pub notch: u8,
}

pub static ROTORS: [RotorSpec; ROTOR_TYPES] = [
    RotorSpec {
        name: "I",
        forward: *b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        reverse: *b"UWYGADFPVZBECKMTHXSLRINQOJ",
        notch: b'Q',
    },
    RotorSpec {
        name: "II",
        forward: *b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
        reverse: *b"AJPCZWRLFBDKOTYUQGENHXMIVS",
        notch: b'E',
    },
    RotorSpec {
        name: "III",
        forward: *b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
        reverse: *b"TAGBPCSDQEUFVNZHYIXJWLRKOM",
        notch: b'V',
    },
    RotorSpec {
        name: "IV",
        forward: *b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
        reverse: *b"HZWVARTNLGUPXQCEJMBSKDYOIF",
        notch: b'J',
    },
    RotorSpec {
        name: "V",
        forward: *b"VZBRGITYUPSDNHLXAWMJQOFECK",
        reverse: *b"QCYLXWENFTZOSMVJUDKGIARPHB",
        notch: b'Z',
    },
];

impl RotorSpec {
    /// Looks up a rotor by its number, 1 through 5.
    pub fn get(number: u8) -> Option<&'static RotorSpec> {
        ROTORS.get(usize::from(number).checked_sub(1)?)
    }
}

/// One of the three reflectors used with the Enigma I / M3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectorId {
    A,
    B,
    C,
}

impl ReflectorId {
    pub const ALL: [ReflectorId; 3] = [ReflectorId::A, ReflectorId::B, ReflectorId::C];

    /// Parses a reflector letter, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(ReflectorId::A),
            'B' => Some(ReflectorId::B),
            'C' => Some(ReflectorId::C),
            _ => None,
        }
    }

    /// The wiring table of this reflector.
    pub fn table(self) -> &'static Wiring {
        match self {
            ReflectorId::A => b"EJMZALYXVBWFCRQUONTSPIKHGD",
            ReflectorId::B => b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorId::C => b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectorId::A => "A",
            ReflectorId::B => "B",
            ReflectorId::C => "C",
        };
        f.write_str(name)
    }
}
