//! Terminal output formatting.

use colored::Colorize;
use projboard_core::view::persons_label;
use projboard_core::{Project, ProjectStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Print one table per status, in board order.
pub fn print_board(projects: &[Project]) {
    for status in ProjectStatus::ALL {
        let heading = status.heading();
        let heading = match status {
            ProjectStatus::Active => heading.yellow().bold(),
            ProjectStatus::Finished => heading.green().bold(),
        };
        println!("{}", heading);
        print_projects_table(projects.iter().filter(|p| p.status == status));
        println!();
    }
    println!("{} project(s) total", projects.len());
}

/// Print projects as a table.
fn print_projects_table<'a>(projects: impl Iterator<Item = &'a Project>) {
    let mut projects = projects.peekable();
    if projects.peek().is_none() {
        println!("  {}", "No projects.".dimmed());
        return;
    }

    println!("  {:<10} {:<30} {:<10} {}", "ID", "Title", "People", "Description");
    println!("  {}", "─".repeat(72));

    for project in projects {
        println!(
            "  {:<10} {} {:<10} {}",
            short_id(project.id.as_str()).dimmed(),
            pad_right(&truncate_visual(&project.title, 30), 30),
            persons_label(project.people),
            truncate_visual(&project.description, 40)
        );
    }
}

/// First eight characters of an id.
pub fn short_id(id: &str) -> &str {
    id.char_indices().nth(8).map_or(id, |(i, _)| &id[..i])
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("a longer title", 8), "a long..");
        assert_eq!(truncate_visual("日本語のタイトル", 8), "日本語..");
    }

    #[test]
    fn test_pad_right_uses_visual_width() {
        assert_eq!(pad_right("日本", 6), "日本  ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }
}
