//! Line-driven front end.
//!
//! Every input line is one of:
//! - `:go` submit the current search term (also retries after a failure)
//! - `:rm N` dismiss the N-th visible story (1-based)
//! - `:q` quit
//! - an empty line, which just redraws
//! - anything else, which becomes the new search term

use std::io::{self, BufRead, Write};
use std::time::Duration;

use stories_core::StoriesViewModel;

use crate::StoriesApp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Edit(String),
    Commit,
    Remove(usize),
    Redraw,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    match line.trim() {
        "" => Command::Redraw,
        ":q" => Command::Quit,
        ":go" => Command::Commit,
        other => match other.strip_prefix(":rm ").map(str::trim) {
            Some(index) => match index.parse::<usize>() {
                Ok(n) if n > 0 => Command::Remove(n),
                _ => Command::Redraw,
            },
            None => Command::Edit(line.to_string()),
        },
    }
}

/// Runs until `:q` or end of input. `wait` bounds how long each command may
/// block waiting for a search to finish.
pub fn run(
    app: &mut StoriesApp,
    input: impl BufRead,
    mut output: impl Write,
    wait: Duration,
) -> io::Result<()> {
    app.settle(wait);
    app.pump();
    render(&app.view(), &mut output)?;

    for line in input.lines() {
        match parse_command(&line?) {
            Command::Quit => break,
            Command::Edit(text) => app.on_search_change(text),
            Command::Commit => app.on_commit_search(),
            Command::Remove(n) => {
                if let Some(story) = app.view().visible.get(n - 1) {
                    app.on_remove(story);
                }
            }
            Command::Redraw => {}
        }
        app.settle(wait);
        app.pump();
        render(&app.view(), &mut output)?;
    }
    output.flush()
}

pub fn render(view: &StoriesViewModel, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "My Hacker Stories")?;
    writeln!(out, "Search: {}", view.search_term)?;
    writeln!(out, "---")?;
    if view.is_error {
        writeln!(out, "Something went wrong ...")?;
    }
    if view.is_loading {
        writeln!(out, "Loading ...")?;
        return Ok(());
    }
    for (index, story) in view.visible.iter().enumerate() {
        writeln!(
            out,
            "{}. {} <{}> {}, {} comments, {} points",
            index + 1,
            story.title,
            story.url,
            story.author,
            story.comment_count,
            story.points
        )?;
    }
    writeln!(out, "({} of {} shown)", view.visible.len(), view.total_count)
}
