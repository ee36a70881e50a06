//! File enciphering
//!
//! Reads a message from a file, runs it through a machine and writes the
//! result. Enciphering and deciphering are the same operation.

use crate::error::{EnigmaError, ErrorCategory, ErrorKind, Result};
use crate::machine::Enigma;
use crate::text::{self, Layout};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Read a message file and prepare it for the machine
///
/// Whitespace (including line breaks from grouped output) is dropped; any
/// other non-letter is an input error.
pub fn read_message(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| read_error(path, e))?;
    let contents = String::from_utf8(bytes).map_err(|e| {
        EnigmaError::with_kind_and_source(
            ErrorCategory::Input,
            ErrorKind::InvalidCharacter,
            format!("bad input in {}: not valid UTF-8", path.display()),
            e,
        )
    })?;
    text::sanitize_message(&contents).map_err(|e| {
        let msg = format!("bad input in {}: {}", path.display(), e);
        e.with_context(msg)
    })
}

/// Encipher a file
///
/// Reads the message from `input_path`, enciphers it on `machine` and writes
/// the result to `output_path`, laid out per `layout`, with a trailing newline.
/// The machine's rotors are left where the message ended.
///
/// The output file is created with mode 0o600 (read/write for owner only) on Unix systems.
pub fn cipher_file(
    input_path: &Path,
    output_path: &Path,
    machine: &mut Enigma,
    layout: Layout,
) -> Result<()> {
    let message = read_message(input_path)?;
    let mut output = layout.apply(&machine.encipher_message(&message));
    output.push('\n');
    write_output(output_path, output.as_bytes())
}

/// Write enciphered output to `path`, replacing any existing file
///
/// The file is created with mode 0o600 on Unix systems.
pub fn write_output(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options
        .open(path)
        .map_err(|e| output_error(format!("cannot create output file {}", path.display()), e))?;
    file.write_all(contents).map_err(|e| {
        output_error(format!("cannot write cipher text to {}", path.display()), e)
    })
}

fn output_error(msg: String, err: io::Error) -> EnigmaError {
    EnigmaError::with_kind_and_source(ErrorCategory::Internal, ErrorKind::Io, msg, err)
}

fn read_error(path: &Path, err: io::Error) -> EnigmaError {
    let category = if err.kind() == io::ErrorKind::NotFound {
        ErrorCategory::Input
    } else {
        ErrorCategory::Internal
    };
    EnigmaError::with_kind_and_source(
        category,
        ErrorKind::Io,
        format!("failed to read from {}", path.display()),
        err,
    )
}
