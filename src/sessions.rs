use anyhow::{Context, Result};

use crate::git;
use crate::models::{PaneRecord, Session, SessionRow};
use crate::tmux;

/// Reads live tmux state and groups panes into sessions, in tmux's order.
pub fn collect_sessions() -> Result<Vec<Session>> {
    let records = tmux::list_panes(git::resolve_path_label)?;
    let sessions = group_panes(records);
    log::debug!("collected {} sessions", sessions.len());
    Ok(sessions)
}

/// Re-reads tmux state for one session. Only that session's paths go
/// through git.
pub fn find_session(session_id: u32) -> Result<Session> {
    let records = tmux::list_panes(|path: &str| path.to_string())?;
    session_from_records(records, session_id, git::resolve_path_label)
        .with_context(|| format!("No tmux session with id ${session_id}"))
}

fn session_from_records(
    records: Vec<PaneRecord>,
    session_id: u32,
    resolve_path: impl Fn(&str) -> String,
) -> Option<Session> {
    let records = records
        .into_iter()
        .filter(|record| record.session_id == session_id)
        .map(|mut record| {
            record.pane.path = resolve_path(&record.pane.path);
            record
        })
        .collect();
    group_panes(records).into_iter().next()
}

/// Groups records by session id. The first record of a session fixes its
/// name and its position in the result.
pub fn group_panes(records: Vec<PaneRecord>) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();

    for record in records {
        match sessions.iter_mut().find(|s| s.id == record.session_id) {
            Some(session) => session.panes.push(record.pane),
            None => sessions.push(Session {
                id: record.session_id,
                name: record.session_name,
                panes: vec![record.pane],
            }),
        }
    }

    sessions
}

pub fn summarize(session: &Session) -> SessionRow {
    let mut paths = distinct(session.panes.iter().map(|pane| pane.path.as_str()));
    // Stable, so equal lengths keep first-seen order.
    paths.sort_by_key(|path| path.chars().count());
    let windows = distinct(session.panes.iter().map(|pane| pane.window_name.as_str()));

    SessionRow {
        label: session_label(session),
        paths: paths.join(" "),
        windows: windows.join(" "),
    }
}

pub fn session_label(session: &Session) -> String {
    format!("{} {}", session.id, session.name)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
