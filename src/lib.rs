//! enigma-m3 - Enigma I / M3 rotor cipher machine
//!
//! Three rotors chosen from I-V, reflector A, B or C, ring settings and a
//! plugboard. The machine is its own inverse: a fresh machine with the same
//! key sheet deciphers what it enciphered.
//!
//! ```
//! use enigma_m3::{Dial, Enigma, RawKeySheet};
//!
//! let raw = RawKeySheet {
//!     rotors: vec![1, 2, 3],
//!     rings: Dial::parse_list("AAA"),
//!     positions: Dial::parse_list("AAA"),
//!     reflector: "B".to_string(),
//!     plugboard: Vec::new(),
//! };
//! let sheet = raw.validate().unwrap();
//! assert_eq!(Enigma::new(&sheet).encipher_message("AAAAA"), "BDZGO");
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod file_ops;
pub mod letters;
pub mod machine;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod settings;
pub mod text;

pub use catalog::{ReflectorId, RotorSpec};
pub use error::{EnigmaError, ErrorCategory, ErrorKind, Result};
pub use machine::Enigma;
pub use settings::{Dial, KeySheet, RawKeySheet};
pub use text::{Layout, format_groups, sanitize_message};

/// Validates the key sheet, prepares the message and enciphers it on a
/// fresh machine.
///
/// Settings are checked before the message, so a bad key sheet is reported
/// even when the message is bad too.
pub fn cipher_text(raw: &RawKeySheet, text: &str) -> Result<String> {
    let sheet = raw.validate().map_err(|e| {
        let msg = format!("bad Enigma settings: {}", e);
        e.with_context(msg)
    })?;
    let message = prepare_message(text)?;
    Ok(Enigma::new(&sheet).encipher_message(&message))
}

/// Sanitizes a message typed by a user, labelling any failure as bad input.
pub fn prepare_message(text: &str) -> Result<String> {
    sanitize_message(text).map_err(|e| {
        let msg = format!("bad input: {}", e);
        e.with_context(msg)
    })
}
