//! Convenience helpers shared across command handlers.

use std::ffi::OsString;
use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Long flags that older releases spelled with a single dash (`-file`).
const LEGACY_LONG_FLAGS: &[&str] = &["file", "format", "confirm", "tag", "json", "verbose"];

/// Print `label` and read one line of input without its line ending.
pub fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        bail!("unexpected end of input");
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// Ask a yes/no question; anything other than `y`/`yes` means no.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    let answer = prompt(input, output, &format!("{} [y/N]: ", question))?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Rewrite `-file`-style flags into the `--file` form clap understands.
///
/// The program name and anything after a bare `--` are left untouched.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut passthrough = false;
    for (idx, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if idx == 0 || passthrough {
            normalized.push(arg);
            continue;
        }
        if arg == "--" {
            passthrough = true;
            normalized.push(arg);
            continue;
        }
        match arg.to_str() {
            Some(flag) if is_legacy_flag(flag) => normalized.push(format!("-{}", flag).into()),
            _ => normalized.push(arg),
        }
    }
    normalized
}

fn is_legacy_flag(arg: &str) -> bool {
    let Some(body) = arg.strip_prefix('-') else {
        return false;
    };
    if body.starts_with('-') {
        return false;
    }
    let name = body.split_once('=').map_or(body, |(name, _)| name);
    LEGACY_LONG_FLAGS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn prompt_strips_line_ending() {
        let mut input = Cursor::new("apple\r\nnext\n");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "Word: ").unwrap(), "apple");
        assert_eq!(output, b"Word: ");
    }

    #[test]
    fn prompt_accepts_last_line_without_newline() {
        let mut input = Cursor::new("apple");
        let mut output = Vec::new();
        assert_eq!(prompt(&mut input, &mut output, "").unwrap(), "apple");
    }

    #[test]
    fn prompt_errors_on_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(prompt(&mut input, &mut output, "Word: ").is_err());
    }

    #[test]
    fn confirm_accepts_yes_only() {
        for (answer, expected) in [("y\n", true), ("YES\n", true), ("\n", false), ("nope\n", false)] {
            let mut input = Cursor::new(answer);
            let mut output = Vec::new();
            assert_eq!(confirm(&mut input, &mut output, "Sure?").unwrap(), expected);
        }
    }

    #[test]
    fn normalizes_single_dash_long_flags() {
        let args = normalize_legacy_flags([
            "wordy", "remove", "-file", "x", "-confirm=false", "-f", "y", "--json", "--", "-file",
        ]);
        let expected: Vec<OsString> = [
            "wordy", "remove", "--file", "x", "--confirm=false", "-f", "y", "--json", "--", "-file",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        assert_eq!(args, expected);
    }
}
