#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    pub id: u32,
    pub window_index: u32,
    pub pane_index: u32,
    pub window_name: String,
    /// Repository name when the pane sits inside a git work tree, else the raw path
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: u32,
    pub name: String,
    pub panes: Vec<Pane>,
}

/// One line of `list-panes -a` output, before grouping by session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneRecord {
    pub session_id: u32,
    pub session_name: String,
    pub pane: Pane,
}

/// Uncolored summary of a session, one per line in the finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub label: String,
    pub paths: String,
    pub windows: String,
}
