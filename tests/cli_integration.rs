//! CLI integration tests
//!
//! Tests the command-line interface end-to-end.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const MANUAL_PLAINTEXT: &str = "FEINDLIQEINFANTERIEKOLONNEBEOBAQTETXANFANGSUEDAUSGANGBAERWALDEXENDEDREIKMOSTWAERTSNEUSTADT";

/// Get path to the enigma binary
fn enigma_bin() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // Remove test binary name
    path.pop(); // Remove deps/
    path.push("enigma");
    path
}

/// Get path to testdata directory
fn testdata_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path.push(filename);
    path
}

/// Key flags for the 1930 instruction manual message
fn manual_flags() -> Vec<&'static str> {
    vec![
        "--rotors",
        "2,1,3",
        "--rings",
        "24,13,22",
        "--positions",
        "ABL",
        "--reflector",
        "A",
        "--plugboard",
        "AM,FI,NV,PS,TU,WZ",
    ]
}

/// Run enigma, feeding `stdin` to the process
fn run_enigma(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(enigma_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start enigma");

    {
        let child_stdin = child.stdin.as_mut().expect("failed to open stdin");
        // Ignore BrokenPipe errors - the command may exit before reading stdin
        let _ = child_stdin.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("failed to wait for enigma")
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "enigma failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_decipher_file_to_stdout() {
    let input = testdata_path("manual-1930.txt");
    let mut args = vec!["decipher", "-i", input.to_str().unwrap()];
    args.extend(manual_flags());

    let output = run_enigma(&args, "");
    assert_eq!(stdout_of(&output), format!("{}\n", MANUAL_PLAINTEXT));
}

#[test]
fn test_key_sheet_file() {
    let key_sheet = testdata_path("manual-1930.json");
    let input = testdata_path("manual-1930.txt");
    let output = run_enigma(
        &[
            "d",
            "--key-sheet",
            key_sheet.to_str().unwrap(),
            "-i",
            input.to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(stdout_of(&output), format!("{}\n", MANUAL_PLAINTEXT));
}

#[test]
fn test_message_from_stdin() {
    let mut args = vec!["encipher"];
    args.extend(manual_flags());

    let output = run_enigma(&args, "feind liqe infanterie\n");
    let ciphertext = stdout_of(&output);
    assert_eq!(ciphertext.trim_end().len(), "FEINDLIQEINFANTERIE".len());

    let mut args = vec!["decipher", ciphertext.trim_end()];
    args.extend(manual_flags());
    let output = run_enigma(&args, "");
    assert_eq!(stdout_of(&output), "FEINDLIQEINFANTERIE\n");
}

#[test]
fn test_file_roundtrip_grouped() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("crypt.txt");
    let decrypted = temp_dir.path().join("decrypted.txt");

    fs::write(&plain, "Angriff um null sechs hundert\nwiederholen\n").unwrap();

    let mut args = vec![
        "e",
        "--grouped",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        crypt.to_str().unwrap(),
    ];
    args.extend(manual_flags());
    stdout_of(&run_enigma(&args, ""));

    let crypt_text = fs::read_to_string(&crypt).unwrap();
    assert!(crypt_text.contains(' '));

    let mut args = vec![
        "d",
        "-i",
        crypt.to_str().unwrap(),
        "-o",
        decrypted.to_str().unwrap(),
    ];
    args.extend(manual_flags());
    stdout_of(&run_enigma(&args, ""));

    assert_eq!(
        fs::read_to_string(&decrypted).unwrap(),
        "ANGRIFFUMNULLSECHSHUNDERTWIEDERHOLEN\n"
    );
}

#[test]
fn test_verbose_reports_key_sheet() {
    let mut args = vec!["encipher", "--verbose", "AAAAA"];
    args.extend([
        "--rotors",
        "1,2,3",
        "--rings",
        "AAA",
        "--positions",
        "AAA",
        "--reflector",
        "B",
    ]);
    let output = run_enigma(&args, "");
    assert_eq!(stdout_of(&output), "BDZGO\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("rotors I-II-III"), "{}", stderr);
    assert!(stderr.contains("final positions: AAF"), "{}", stderr);
}

#[test]
fn test_bad_settings_fail() {
    let output = run_enigma(
        &[
            "encipher",
            "HELLO",
            "--rotors",
            "2,1,2",
            "--rings",
            "AAA",
            "--positions",
            "AAA",
            "--reflector",
            "B",
        ],
        "",
    );
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad Enigma settings"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_flag_fails() {
    let output = run_enigma(&["encipher", "HELLO", "--rotors", "1,2,3"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--rings"), "{}", stderr);
}

#[test]
fn test_bad_input_fails() {
    let mut args = vec!["encipher", "12A@#H"];
    args.extend(manual_flags());
    let output = run_enigma(&args, "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad input: invalid character '1'"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bad_input_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let plain = temp_dir.path().join("plain.txt");
    let crypt = temp_dir.path().join("crypt.txt");
    fs::write(&plain, "Angriff um 0600\n").unwrap();

    let mut args = vec![
        "encipher",
        "-i",
        plain.to_str().unwrap(),
        "-o",
        crypt.to_str().unwrap(),
    ];
    args.extend(manual_flags());
    let output = run_enigma(&args, "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad input in "), "{}", stderr);
    assert!(stderr.contains("invalid character '0'"), "{}", stderr);
    assert!(!crypt.exists());
}

#[test]
fn test_empty_stdin_fails() {
    let mut args = vec!["encipher"];
    args.extend(manual_flags());
    let output = run_enigma(&args, "   \n");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad input"), "{}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_decipher_nonexistent_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent = temp_dir.path().join("nonexistent.txt");
    let output_path = temp_dir.path().join("output.txt");

    let mut args = vec![
        "decipher",
        "-i",
        nonexistent.to_str().unwrap(),
        "-o",
        output_path.to_str().unwrap(),
    ];
    args.extend(manual_flags());
    let output = run_enigma(&args, "");

    assert!(!output.status.success());
    assert!(!output_path.exists());
}
