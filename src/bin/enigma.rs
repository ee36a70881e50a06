//! Enigma CLI - Enigma I / M3 cipher machine
//!
//! Enciphers messages given on the command line, in a file, or on stdin,
//! using a key sheet given as flags or as a JSON file.

use clap::{Args, Parser, Subcommand};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use enigma_m3::file_ops;
use enigma_m3::{
    Enigma, EnigmaError, ErrorCategory, ErrorKind, KeySheet, Layout, RawKeySheet, prepare_message,
};

#[derive(Parser)]
#[command(name = "enigma")]
#[command(version)]
#[command(about = "Enigma I / M3 rotor cipher machine.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher a message
    #[command(alias = "e")]
    Encipher(CipherArgs),

    /// Decipher a message. The machine is reciprocal, so this is the same
    /// operation as encipher.
    #[command(alias = "d")]
    Decipher(CipherArgs),
}

#[derive(Args)]
struct KeyArgs {
    /// JSON key sheet holding every machine setting
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["rotors", "rings", "positions", "reflector", "plugboard"]
    )]
    key_sheet: Option<PathBuf>,

    /// Rotor order, left to right (e.g. 2,1,3)
    #[arg(long, value_name = "LIST")]
    rotors: Option<String>,

    /// Ring settings, left to right, as letters or 1-26 (e.g. XMV or 24,13,22)
    #[arg(long, value_name = "LIST")]
    rings: Option<String>,

    /// Start positions, left to right (e.g. ABL)
    #[arg(long, value_name = "LIST")]
    positions: Option<String>,

    /// Reflector: A, B or C
    #[arg(long, value_name = "ID")]
    reflector: Option<String>,

    /// Plugboard pairs (e.g. AM,FI,NV)
    #[arg(long, value_name = "PAIRS")]
    plugboard: Option<String>,
}

#[derive(Args)]
struct CipherArgs {
    #[command(flatten)]
    key: KeyArgs,

    /// Message to process: letters and spaces. Read from stdin when neither
    /// this nor --input is given.
    #[arg(conflicts_with = "input")]
    message: Option<String>,

    /// Path to a file holding the message
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to the file to write the result to (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write the result in five-letter groups, ten to a line
    #[arg(long)]
    grouped: bool,

    /// Print the key sheet and final rotor positions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Encipher(args) | Commands::Decipher(args) => run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: CipherArgs) -> enigma_m3::Result<()> {
    let sheet = key_sheet(&args.key).map_err(|e| {
        let msg = format!("bad Enigma settings: {}", e);
        e.with_context(msg)
    })?;
    if args.verbose {
        eprintln!("key sheet: {}", sheet);
    }

    let layout = if args.grouped {
        Layout::RADIO
    } else {
        Layout::Continuous
    };
    let mut machine = Enigma::new(&sheet);

    match (&args.input, &args.output) {
        (Some(input), Some(output)) => file_ops::cipher_file(input, output, &mut machine, layout)?,
        _ => {
            let message = match (&args.message, &args.input) {
                (Some(message), _) => prepare_message(message)?,
                (None, Some(input)) => file_ops::read_message(input)?,
                (None, None) => prepare_message(&read_stdin()?)?,
            };
            let mut result = layout.apply(&machine.encipher_message(&message));
            result.push('\n');
            match &args.output {
                Some(output) => file_ops::write_output(output, result.as_bytes())?,
                None => io::stdout()
                    .write_all(result.as_bytes())
                    .map_err(|e| io_error("failed to write to stdout", e))?,
            }
        }
    }

    if args.verbose {
        let window = machine.window();
        eprintln!("final positions: {}", String::from_utf8_lossy(&window));
    }
    Ok(())
}

fn key_sheet(key: &KeyArgs) -> enigma_m3::Result<KeySheet> {
    let raw = match &key.key_sheet {
        Some(path) => RawKeySheet::from_json_file(path)?,
        None => RawKeySheet::from_flags(
            required(&key.rotors, "--rotors")?,
            required(&key.rings, "--rings")?,
            required(&key.positions, "--positions")?,
            required(&key.reflector, "--reflector")?,
            key.plugboard.as_deref(),
        )?,
    };
    raw.validate()
}

fn required<'a>(value: &'a Option<String>, flag: &str) -> enigma_m3::Result<&'a str> {
    value.as_deref().ok_or_else(|| {
        EnigmaError::new(
            ErrorCategory::Settings,
            format!("{} is required unless --key-sheet is given", flag),
        )
    })
}

/// Reads the message from stdin, prompting first when stdin is a terminal.
fn read_stdin() -> enigma_m3::Result<String> {
    let mut stdin = io::stdin();
    let mut message = String::new();
    if stdin.is_terminal() {
        eprint!("Enter a string of letters and spaces only: ");
        io::stderr()
            .flush()
            .map_err(|e| io_error("failed to flush prompt", e))?;
        stdin
            .read_line(&mut message)
            .map_err(|e| io_error("failed to read message", e))?;
    } else {
        stdin
            .read_to_string(&mut message)
            .map_err(|e| io_error("failed to read message", e))?;
    }
    Ok(message)
}

fn io_error(msg: &str, err: io::Error) -> EnigmaError {
    EnigmaError::with_kind_and_source(ErrorCategory::Internal, ErrorKind::Io, msg, err)
}
