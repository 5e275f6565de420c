use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

mod display;
mod fzf;
mod git;
mod models;
mod sessions;
mod tmux;

use display::Palette;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Row picked in the finder; prints that session's panes instead of
    /// opening the finder
    preview_line: Option<String>,

    /// Print plain text without ANSI colors
    #[arg(long = "no-color")]
    no_color: bool,

    /// Dry run - print the tmux command instead of switching sessions
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Output goes to fzf or its preview pane, never straight to a terminal.
    colored::control::set_override(!cli.no_color);
    let palette = Palette::new(!cli.no_color);

    match &cli.preview_line {
        Some(line) => print_preview(line, &palette),
        None => pick_and_switch(&cli, &palette),
    }
}

fn print_preview(line: &str, palette: &Palette) -> Result<()> {
    let session_id = display::parse_session_id(line)?;
    let session = sessions::find_session(session_id)?;
    println!("{}", display::render_preview(&session, palette));
    Ok(())
}

fn pick_and_switch(cli: &Cli, palette: &Palette) -> Result<()> {
    let rows: Vec<_> = sessions::collect_sessions()?
        .iter()
        .map(sessions::summarize)
        .collect();
    let input = display::render_rows(&rows, palette);

    let program = std::env::current_exe().context("Failed to locate own executable")?;
    let extra_args: &[&str] = if cli.no_color { &["--no-color"] } else { &[] };
    let preview = fzf::preview_command(&program.to_string_lossy(), extra_args);

    let Some(line) = fzf::select(&input, &preview)? else {
        return Ok(());
    };
    let session_id = display::parse_session_id(&line)?;

    if cli.dry_run {
        println!(
            "Would run: tmux switch-client -t {}",
            tmux::switch_target(session_id)
        );
        return Ok(());
    }

    tmux::switch_to_session(session_id)
}
