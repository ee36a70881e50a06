//! Key sheet handling: turns user supplied machine settings into the
//! canonical values the machine is built from.
//!
//! A key sheet names the rotor order, ring settings, start positions,
//! reflector and plugboard cables, just like a historical daily key list.
//! [`RawKeySheet`] holds settings exactly as given (CLI flags or a JSON key
//! sheet file); [`RawKeySheet::validate`] checks them and produces a
//! [`KeySheet`].

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{ROTOR_TYPES, ROTORS, ReflectorId, RotorSpec};
use crate::error::{EnigmaError, ErrorCategory, ErrorKind, Result};
use crate::letters::{self, ALPHABET_LEN};

/// A ring setting or start position as a user wrote it.
///
/// Letters are case-insensitive; numbers count from 1 (`1` is `A`, `26` is `Z`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Dial {
    Number(i64),
    Letter(String),
}

impl Dial {
    /// Parses a list of dials.
    ///
    /// Comma or whitespace separated entries are taken one by one (`24,13,22`
    /// or `X M V`); a single run of letters is split per letter (`XMV`).
    pub fn parse_list(s: &str) -> Vec<Dial> {
        let s = s.trim();
        if s.contains(|c: char| c == ',' || c.is_whitespace()) {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .map(Dial::parse_one)
                .collect()
        } else if s.chars().all(|c| c.is_ascii_alphabetic()) {
            s.chars().map(|c| Dial::Letter(c.to_string())).collect()
        } else {
            vec![Dial::parse_one(s)]
        }
    }

    fn parse_one(token: &str) -> Dial {
        match token.parse::<i64>() {
            Ok(n) => Dial::Number(n),
            Err(_) => Dial::Letter(token.to_string()),
        }
    }

    /// Dial index 0..26, or `None` if this is not a valid dial value.
    fn to_index(&self) -> Option<u8> {
        match self {
            Dial::Number(n) if (1..=ALPHABET_LEN as i64).contains(n) => u8::try_from(n - 1).ok(),
            Dial::Number(_) => None,
            Dial::Letter(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(c.to_ascii_uppercase() as u8 - b'A')
                    }
                    _ => None,
                }
            }
        }
    }
}

impl fmt::Display for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dial::Number(n) => write!(f, "{}", n),
            Dial::Letter(s) => write!(f, "{:?}", s),
        }
    }
}

/// Machine settings as supplied, not yet checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawKeySheet {
    /// Rotor numbers, left to right.
    pub rotors: Vec<i64>,
    /// Ring settings, left to right.
    pub rings: Vec<Dial>,
    /// Start positions, left to right.
    pub positions: Vec<Dial>,
    pub reflector: String,
    /// Cable pairs such as `"AM"`.
    #[serde(default)]
    pub plugboard: Vec<String>,
}

impl RawKeySheet {
    /// Reads a JSON key sheet file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            let category = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCategory::Settings
            } else {
                ErrorCategory::Internal
            };
            EnigmaError::with_kind_and_source(
                category,
                ErrorKind::Io,
                format!("failed to read key sheet {}", path.display()),
                e,
            )
        })?;
        Self::from_json(&data)
            .map_err(|e| e.with_context(format!("invalid key sheet {}", path.display())))
    }

    /// Parses a JSON key sheet.
    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| {
            EnigmaError::with_kind_and_source(
                ErrorCategory::Settings,
                ErrorKind::KeySheetFormat,
                format!("malformed key sheet: {}", e),
                e,
            )
        })
    }

    /// Builds a key sheet from command-line style strings.
    ///
    /// `rotors` is `2,1,3`, `2 1 3` or `213`; `rings` and `positions` follow
    /// [`Dial::parse_list`]; `plugboard` is comma or whitespace separated
    /// pairs such as `AM,FI NV`. Nothing is validated beyond splitting.
    pub fn from_flags(
        rotors: &str,
        rings: &str,
        positions: &str,
        reflector: &str,
        plugboard: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            rotors: parse_rotor_list(rotors)?,
            rings: Dial::parse_list(rings),
            positions: Dial::parse_list(positions),
            reflector: reflector.trim().to_string(),
            plugboard: plugboard.map(split_list).unwrap_or_default(),
        })
    }

    /// Checks every setting, in key sheet order, and returns the canonical
    /// key sheet. The first problem found is reported.
    pub fn validate(&self) -> Result<KeySheet> {
        let rotors = check_rotors(&self.rotors)?;
        let plugboard = check_plugboard(&self.plugboard)?;
        let positions = check_dials("start positions", &self.positions)?;
        let rings = check_dials("ring settings", &self.rings)?;
        let reflector = check_reflector(&self.reflector)?;

        Ok(KeySheet {
            rotors,
            rings,
            positions,
            reflector,
            plugboard,
        })
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_rotor_list(s: &str) -> Result<Vec<i64>> {
    let tokens = split_list(s);
    // A single run of digits names one rotor per digit.
    let tokens = if tokens.len() == 1
        && tokens[0].len() > 1
        && tokens[0].chars().all(|c| c.is_ascii_digit())
    {
        tokens[0].chars().map(String::from).collect()
    } else {
        tokens
    };
    tokens
        .iter()
        .map(|t| {
            t.parse::<i64>().map_err(|e| {
                EnigmaError::with_kind_and_source(
                    ErrorCategory::Settings,
                    ErrorKind::RotorOutOfRange,
                    format!("rotor {:?} is not a number", t),
                    e,
                )
            })
        })
        .collect()
}

fn check_rotors(rotors: &[i64]) -> Result<[u8; 3]> {
    let rotors: [i64; 3] = rotors.try_into().map_err(|_| {
        EnigmaError::settings(
            ErrorKind::RotorCount,
            format!("expected 3 rotors, got {}", rotors.len()),
        )
    })?;

    let mut out = [0u8; 3];
    for (slot, &number) in rotors.iter().enumerate() {
        let number = u8::try_from(number)
            .ok()
            .filter(|&n| RotorSpec::get(n).is_some())
            .ok_or_else(|| {
                EnigmaError::settings(
                    ErrorKind::RotorOutOfRange,
                    format!("rotor {} is not one of 1 to {}", number, ROTOR_TYPES),
                )
            })?;
        if out[..slot].contains(&number) {
            return Err(EnigmaError::settings(
                ErrorKind::RotorRepeated,
                format!("rotor {} is used more than once", number),
            ));
        }
        out[slot] = number;
    }
    Ok(out)
}

fn check_plugboard(pairings: &[String]) -> Result<Vec<(u8, u8)>> {
    let mut used = [false; ALPHABET_LEN];
    let mut pairs = Vec::with_capacity(pairings.len());

    for pairing in pairings {
        let bytes = pairing.as_bytes();
        let (a, b) = match bytes {
            [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphabetic() => {
                (a.to_ascii_uppercase(), b.to_ascii_uppercase())
            }
            _ => {
                return Err(EnigmaError::settings(
                    ErrorKind::PlugboardPairing,
                    format!("plugboard pairing {:?} is not two letters", pairing),
                ));
            }
        };
        if a == b {
            return Err(EnigmaError::settings(
                ErrorKind::PlugboardPairing,
                format!("plugboard pairing {:?} connects a letter to itself", pairing),
            ));
        }
        for c in [a, b] {
            if used[letters::index(c)] {
                return Err(EnigmaError::settings(
                    ErrorKind::PlugboardRepeated,
                    format!("letter {} is plugged more than once", char::from(c)),
                ));
            }
            used[letters::index(c)] = true;
        }
        pairs.push((a, b));
    }
    Ok(pairs)
}

fn check_dials(what: &str, dials: &[Dial]) -> Result<[u8; 3]> {
    if dials.len() != 3 {
        return Err(EnigmaError::settings(
            ErrorKind::DialCount,
            format!("expected 3 {}, got {}", what, dials.len()),
        ));
    }
    let mut out = [0u8; 3];
    for (slot, dial) in dials.iter().enumerate() {
        out[slot] = dial.to_index().ok_or_else(|| {
            EnigmaError::settings(
                ErrorKind::DialInvalid,
                format!("{} entry {} is not a letter or 1 to 26", what, dial),
            )
        })?;
    }
    Ok(out)
}

fn check_reflector(reflector: &str) -> Result<ReflectorId> {
    let mut chars = reflector.chars();
    let id = match (chars.next(), chars.next()) {
        (Some(c), None) => ReflectorId::from_letter(c),
        _ => None,
    };
    id.ok_or_else(|| {
        EnigmaError::settings(
            ErrorKind::ReflectorInvalid,
            format!("reflector {:?} is not one of A, B or C", reflector),
        )
    })
}

/// Validated machine settings.
///
/// Rotors are numbers 1..=5, rings and positions are indices 0..26, all
/// ordered left to right; plugboard letters are uppercase and disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySheet {
    rotors: [u8; 3],
    rings: [u8; 3],
    positions: [u8; 3],
    reflector: ReflectorId,
    plugboard: Vec<(u8, u8)>,
}

impl KeySheet {
    /// Builds a key sheet from already decoded values, running the same
    /// checks as [`RawKeySheet::validate`]. Plugboard letters may be either case.
    pub fn new(
        rotors: [u8; 3],
        rings: [u8; 3],
        positions: [u8; 3],
        reflector: ReflectorId,
        plugboard: Vec<(u8, u8)>,
    ) -> Result<Self> {
        let rotors = check_rotors(&rotors.map(i64::from))?;
        let pairings: Vec<String> = plugboard
            .iter()
            .map(|&(a, b)| String::from_utf8_lossy(&[a, b]).into_owned())
            .collect();
        let plugboard = check_plugboard(&pairings)?;
        for (what, dials) in [("ring settings", &rings), ("start positions", &positions)] {
            if let Some(bad) = dials.iter().find(|&&d| usize::from(d) >= ALPHABET_LEN) {
                return Err(EnigmaError::settings(
                    ErrorKind::DialInvalid,
                    format!("{} entry {} is not an index 0 to 25", what, bad),
                ));
            }
        }

        Ok(Self {
            rotors,
            rings,
            positions,
            reflector,
            plugboard,
        })
    }

    /// Catalog entry of the rotor in `slot` (0 left, 2 right).
    pub fn rotor_spec(&self, slot: usize) -> &'static RotorSpec {
        // Validated to 1..=ROTOR_TYPES on construction.
        &ROTORS[usize::from(self.rotors[slot]) - 1]
    }

    pub fn rings(&self) -> [u8; 3] {
        self.rings
    }

    pub fn positions(&self) -> [u8; 3] {
        self.positions
    }

    pub fn reflector(&self) -> ReflectorId {
        self.reflector
    }

    pub fn plugboard(&self) -> &[(u8, u8)] {
        &self.plugboard
    }
}

impl fmt::Display for KeySheet {
    /// One line in key list order: rotors, rings, plugboard, start, reflector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = (0..3).map(|slot| self.rotor_spec(slot).name).collect();
        let dials = |d: [u8; 3]| -> String {
            d.iter()
                .map(|&i| char::from(letters::letter(i.into())))
                .collect()
        };
        let plugs: Vec<String> = self
            .plugboard
            .iter()
            .map(|&(a, b)| format!("{}{}", a as char, b as char))
            .collect();
        write!(
            f,
            "rotors {} rings {} plugboard [{}] start {} reflector {}",
            names.join("-"),
            dials(self.rings),
            plugs.join(" "),
            dials(self.positions),
            self.reflector
        )
    }
}
