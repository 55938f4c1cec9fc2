use crate::models::{Speaker, Turn};
use crate::panel::CommandOutcome;
use colored::*;
use regex::Regex;
use std::sync::LazyLock;

static BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid line break pattern"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

/// Render assistant markup as plain terminal text: `<br>` becomes a newline,
/// other tags are dropped and the common entities decoded.
pub fn strip_markup(text: &str) -> String {
    let text = BREAK_RE.replace_all(text, "\n");
    let text = TAG_RE.replace_all(&text, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

/// Display a turn, one line block per segment
pub fn display_turn(turn: &Turn) {
    let time = turn.received_at.format("%H:%M").to_string();
    let label = match turn.speaker {
        Speaker::User => "You".cyan().bold(),
        Speaker::Assistant => "Assistant".green().bold(),
    };

    for (index, segment) in turn.segments.iter().enumerate() {
        let text = match turn.speaker {
            Speaker::User => segment.clone(),
            Speaker::Assistant => strip_markup(segment),
        };
        if index == 0 {
            println!("{} {} {}", format!("[{}]", time).dimmed(), label, text.trim_end());
        } else {
            println!("        {}", text.trim_end());
        }
    }
}

pub fn display_command_outcome(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Current(status) => {
            println!("{}", format!("state: {}", status).yellow());
        }
        CommandOutcome::Changed(status) => {
            println!("{}", format!("new state: {}", status).yellow());
        }
        CommandOutcome::Unchanged { current, requested } => {
            println!(
                "{}",
                format!("state not changed: {} (unknown state '{}')", current, requested).yellow()
            );
        }
        CommandOutcome::Ignored => {
            println!("{}", "usage: vss [=<state>]".dimmed());
        }
    }
}

pub fn display_login_prompt(id_name: &str) {
    let id_name = if id_name.is_empty() {
        String::new()
    } else {
        format!("{} ", id_name)
    };
    println!(
        "{}",
        format!("Please login with your {}ID (press Enter to continue)", id_name)
            .magenta()
            .bold()
    );
}

pub fn display_open_tab(url: &str, opened: bool) {
    if opened {
        println!("{}", format!("Opened {}", url).cyan());
    } else {
        println!("{} {}", "Open in your browser:".cyan(), url.underline());
    }
}

/// Client diagnostics, shown in verbose mode only
pub fn display_diagnostic(message: &str) {
    eprintln!("{}", format!("[chat] {}", message).dimmed());
}

pub fn display_error(error: &dyn std::fmt::Display) {
    eprintln!("{} {}", "Error:".red(), error);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_keeps_breaks() {
        let text = "Set <b>WORKSPACE_ID</b>. <br>See <a href=\"x\">here</a> &amp; more";
        assert_eq!(strip_markup(text), "Set WORKSPACE_ID. \nSee here & more");
    }
}
