use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;

/// fzf exit status when nothing matched the query.
const EXIT_NO_MATCH: i32 = 1;
/// fzf exit status when the user pressed Esc or Ctrl-C.
const EXIT_INTERRUPTED: i32 = 130;

/// Shows `input` in fzf with a live preview and returns the chosen line, or
/// `None` when the user backed out without choosing.
pub fn select(input: &str, preview_command: &str) -> Result<Option<String>> {
    let mut input_file = NamedTempFile::new().context("Failed to create fzf input file")?;
    input_file
        .write_all(input.as_bytes())
        .context("Failed to write fzf input file")?;
    input_file.flush().context("Failed to write fzf input file")?;
    let output_file = NamedTempFile::new().context("Failed to create fzf output file")?;

    let args = finder_args(preview_command);
    log::debug!("fzf {}", args.join(" "));
    let status = Command::new("fzf")
        .args(&args)
        .stdin(File::open(input_file.path()).context("Failed to open fzf input file")?)
        .stdout(Stdio::from(
            output_file
                .reopen()
                .context("Failed to open fzf output file")?,
        ))
        .status()
        .context("Failed to execute fzf")?;

    match status.code() {
        Some(0) => {
            let line = read_selection(output_file.path())?;
            Ok(Some(line).filter(|line| !line.is_empty()))
        }
        Some(EXIT_NO_MATCH) | Some(EXIT_INTERRUPTED) => {
            log::debug!("fzf exited with {status}, nothing selected");
            Ok(None)
        }
        _ => bail!("fzf failed with {status}"),
    }
}

fn finder_args(preview_command: &str) -> Vec<String> {
    vec![
        "--ansi".to_string(),
        format!("--preview={preview_command}"),
        "--preview-window=right,wrap".to_string(),
        "--height=100%".to_string(),
        "--color=hl:white:underline,hl+:white:underline".to_string(),
    ]
}

fn read_selection(path: &Path) -> Result<String> {
    let selection = fs::read_to_string(path).context("Failed to read fzf selection")?;
    Ok(selection.trim_matches('\n').to_string())
}

/// fzf hands the preview command to the user's shell, with `{}` replaced by
/// the highlighted line (already quoted by fzf).
pub fn preview_command(program: &str, extra_args: &[&str]) -> String {
    let mut command = shell_quote(program);
    for arg in extra_args {
        command.push(' ');
        command.push_str(&shell_quote(arg));
    }
    command.push_str(" {}");
    command
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/-_.,:=+@%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
