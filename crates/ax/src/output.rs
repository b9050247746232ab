//! Terminal output utilities

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Clear the screen and print the CLI banner
pub fn banner() {
    let _ = Term::stdout().clear_screen();
    println!(
        "{}",
        style(format!("AX CLI v{}", env!("CARGO_PKG_VERSION")))
            .blue()
            .bold()
    );
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print a boxed message with a title centered in the top border
pub fn boxed(title: &str, message: &str) {
    println!("\n{}\n", render_box(title, message));
}

fn render_box(title: &str, message: &str) -> String {
    let inner = message.chars().count().max(title.chars().count()) + 8;

    let title_gap = inner - title.chars().count();
    let (title_left, title_right) = (title_gap / 2, title_gap - title_gap / 2);

    let message_gap = inner - message.chars().count();
    let (msg_left, msg_right) = (message_gap / 2, message_gap - message_gap / 2);

    let blank = format!("│{}│", " ".repeat(inner));

    format!(
        "┌{}{}{}┐\n{blank}\n│{}{}{}│\n{blank}\n└{}┘",
        "─".repeat(title_left),
        style(title).blue().bold(),
        "─".repeat(title_right),
        " ".repeat(msg_left),
        message,
        " ".repeat(msg_right),
        "─".repeat(inner),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_box_shape() {
        let rendered = render_box("AX CLI", "Thanks For Using!");
        let plain = console::strip_ansi_codes(&rendered).to_string();
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with('┌') && lines[0].ends_with('┐'));
        assert!(lines[0].contains("AX CLI"));
        assert!(lines[2].contains("Thanks For Using!"));
        assert!(lines[4].starts_with('└') && lines[4].ends_with('┘'));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }
}
