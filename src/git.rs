use std::path::Path;
use std::process::{Command, Stdio};

/// Short label for a pane's working directory: the repository name when the
/// directory is inside a git work tree, otherwise the path unchanged.
pub fn resolve_path_label(path: &str) -> String {
    label_with(Command::new("git"), path)
}

fn label_with(mut git: Command, path: &str) -> String {
    // `git -C ""` would resolve against our own working directory.
    if path.is_empty() {
        return String::new();
    }

    let output = git
        .args(["-C", path, "rev-parse", "--show-toplevel"])
        .stderr(Stdio::null())
        .output();

    match output {
        Ok(output) if output.status.success() => {
            let toplevel = String::from_utf8_lossy(&output.stdout);
            label_from_toplevel(&toplevel).unwrap_or_else(|| path.to_string())
        }
        Ok(_) => path.to_string(),
        Err(err) => {
            log::debug!("git unavailable for {path}: {err}");
            path.to_string()
        }
    }
}

fn label_from_toplevel(toplevel: &str) -> Option<String> {
    let toplevel = toplevel.trim_end_matches(['\n', '\r']);
    if toplevel.is_empty() {
        return None;
    }

    Path::new(toplevel)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
