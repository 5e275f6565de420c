use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::models::{Pane, PaneRecord};

const FIELD_SEPARATOR: char = '|';
const FIELD_COUNT: usize = 7;
const PANE_FORMAT: &str = "#{pane_id}|#{session_name}|#{window_index}|#{pane_index}|#{window_name}|#{pane_current_path}|#{session_id}";

/// Lists every pane of every session, resolving each working directory with
/// `resolve_path`.
pub fn list_panes(resolve_path: impl Fn(&str) -> String) -> Result<Vec<PaneRecord>> {
    log::debug!("tmux list-panes -a -F {PANE_FORMAT}");
    let output = Command::new("tmux")
        .args(["list-panes", "-a", "-F", PANE_FORMAT])
        .output()
        .context("Failed to execute tmux list-panes")?;

    if !output.status.success() {
        bail!(
            "tmux list-panes failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let stdout = String::from_utf8(output.stdout).context("Failed to parse tmux output")?;
    parse_panes(&stdout, resolve_path)
}

pub fn parse_panes(
    output: &str,
    resolve_path: impl Fn(&str) -> String,
) -> Result<Vec<PaneRecord>> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            parse_pane_line(line, &resolve_path)
                .with_context(|| format!("Malformed tmux pane line: {line:?}"))
        })
        .collect()
}

fn parse_pane_line(line: &str, resolve_path: &impl Fn(&str) -> String) -> Result<PaneRecord> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        bail!("expected {FIELD_COUNT} fields, found {}", fields.len());
    }

    let pane = Pane {
        id: parse_id(fields[0]).context("Invalid pane id")?,
        window_index: fields[2].parse().context("Invalid window index")?,
        pane_index: fields[3].parse().context("Invalid pane index")?,
        window_name: or_dash(fields[4]),
        path: resolve_path(fields[5]),
    };

    let session_id = parse_id(fields[6]).context("Invalid session id")?;
    log::trace!(
        "pane %{} at ${session_id}:{}.{} -> {}",
        pane.id,
        pane.window_index,
        pane.pane_index,
        pane.path
    );

    Ok(PaneRecord {
        session_id,
        session_name: or_dash(fields[1]),
        pane,
    })
}

/// Parses a tmux id such as `%12` or `$3`, dropping the one-character sigil.
fn parse_id(field: &str) -> Result<u32> {
    let mut chars = field.chars();
    chars.next();
    let digits = chars.as_str();
    digits
        .parse()
        .with_context(|| format!("not an id: {field:?}"))
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

pub fn switch_target(session_id: u32) -> String {
    format!("${session_id}")
}

pub fn switch_to_session(session_id: u32) -> Result<()> {
    let target = switch_target(session_id);
    log::debug!("tmux switch-client -t {target}");
    let output = Command::new("tmux")
        .args(["switch-client", "-t", &target])
        .output()
        .context("Failed to execute tmux switch-client")?;

    if !output.status.success() {
        bail!(
            "Failed to switch to session {target}: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keep_path(path: &str) -> String {
        path.to_string()
    }

    #[test]
    fn test_parse_single_pane() {
        let records =
            parse_panes("%4|work|1|0|edit|/home/me/proj|$1\n", keep_path).unwrap();

        assert_eq!(
            records,
            vec![PaneRecord {
                session_id: 1,
                session_name: "work".to_string(),
                pane: Pane {
                    id: 4,
                    window_index: 1,
                    pane_index: 0,
                    window_name: "edit".to_string(),
                    path: "/home/me/proj".to_string(),
                },
            }]
        );
    }

    #[test]
    fn test_parse_uses_resolved_path() {
        let records =
            parse_panes("%0|s|0|0|w|/home/me/proj/src|$0", |_| "proj".to_string()).unwrap();
        assert_eq!(records[0].pane.path, "proj");
    }

    #[test]
    fn test_empty_names_become_dash() {
        let records = parse_panes("%0||0|0||/tmp|$7", keep_path).unwrap();
        assert_eq!(records[0].session_name, "-");
        assert_eq!(records[0].pane.window_name, "-");
    }

    #[test]
    fn test_sigil_strips_exactly_one_character() {
        assert_eq!(parse_id("%12").unwrap(), 12);
        assert_eq!(parse_id("$0").unwrap(), 0);
        assert!(parse_id("$$3").is_err());
        assert!(parse_id("").is_err());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let output = "%1|a|0|0|w|/a|$1\n\n%2|b|0|0|w|/b|$2\n";
        assert_eq!(parse_panes(output, keep_path).unwrap().len(), 2);
    }

    #[test]
    fn test_wrong_field_count_is_an_error() {
        let err = parse_panes("%1|a|0|0|w|/a", keep_path).unwrap_err();
        assert!(format!("{err:#}").contains("expected 7 fields, found 6"));
    }

    #[test]
    fn test_non_numeric_index_is_an_error() {
        let err = parse_panes("%1|a|x|0|w|/a|$1", keep_path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid window index"));
    }

    #[test]
    fn test_switch_target_uses_session_sigil() {
        assert_eq!(switch_target(3), "$3");
    }
}
