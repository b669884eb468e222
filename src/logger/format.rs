//! Log formatting and output with ANSI colors and text wrapping
//!
//! Log lines go to stderr so that command output on stdout stays machine
//! readable.

use super::config::get_logger_config;
use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 8;
const BRACKET_SPACE_WIDTH: usize = 3;
const TOTAL_PREFIX_WIDTH: usize = TAG_WIDTH + LEVEL_WIDTH + BRACKET_SPACE_WIDTH * 2;

/// Maximum line length before wrapping
const MAX_LINE_LENGTH: usize = 145;

pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let plain = get_logger_config().plain;
    let time = Local::now().format("%H:%M:%S").to_string();

    let base_line = if plain {
        format!(
            "{} [{:<tw$}] [{:<lw$}] ",
            time,
            tag.to_plain_string(),
            level.as_str(),
            tw = TAG_WIDTH,
            lw = LEVEL_WIDTH
        )
    } else {
        format!(
            "{} [{}] [{}] ",
            time.dimmed(),
            format_tag(&tag),
            format_level(level)
        )
    };

    let prefix_len = time.len() + 1 + TOTAL_PREFIX_WIDTH;
    let available_space = if MAX_LINE_LENGTH > prefix_len {
        MAX_LINE_LENGTH - prefix_len
    } else {
        50
    };

    let chunks = wrap_text(message, available_space);
    print_stderr_safe(&format!("{}{}", base_line, chunks[0]));

    let continuation_prefix = " ".repeat(prefix_len);
    for chunk in &chunks[1..] {
        print_stderr_safe(&format!("{}{}", continuation_prefix, chunk));
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Cache => label.bright_cyan().bold(),
        LogTag::Provider => label.bright_magenta().bold(),
        LogTag::Scoring => label.bright_green().bold(),
        LogTag::Config => label.bright_blue().bold(),
        LogTag::Webserver => label.green().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.yellow().bold(),
        LogLevel::Info => label.white().bold(),
        LogLevel::Debug | LogLevel::Verbose => label.dimmed(),
    }
}

/// Write to stderr, giving up quietly once the reader has gone away
fn print_stderr_safe(message: &str) {
    let mut handle = stderr().lock();
    if let Err(e) = writeln!(handle, "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
    }
    let _ = handle.flush();
}

/// Wrap text at word boundaries, respecting existing newlines
///
/// Words longer than `max_width` are hard-split on char boundaries.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut result = Vec::new();

    for line in text.split('\n') {
        if line.chars().count() <= max_width {
            result.push(line.to_string());
            continue;
        }

        let mut current_line = String::new();
        for word in line.split_whitespace() {
            let word_len = word.chars().count();
            let current_len = current_line.chars().count();

            if word_len > max_width {
                if !current_line.is_empty() {
                    result.push(std::mem::take(&mut current_line));
                }
                let chars: Vec<char> = word.chars().collect();
                for chunk in chars.chunks(max_width) {
                    result.push(chunk.iter().collect());
                }
            } else if current_line.is_empty() {
                current_line = word.to_string();
            } else if current_len + word_len + 1 <= max_width {
                current_line.push(' ');
                current_line.push_str(word);
            } else {
                result.push(std::mem::replace(&mut current_line, word.to_string()));
            }
        }

        if !current_line.is_empty() {
            result.push(current_line);
        }
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
