use colored::*;
use console::Term;
use std::fmt::Display;

/// Terminal output helpers. A namespace of static printers, never instantiated.
/// Brand colors: teal (38, 166, 154) for info, amber (230, 145, 56) for the brand.
pub struct Logger;

impl Logger {
    /// Prints the JournalKeeper banner, centered on the terminal.
    pub fn banner() {
        let term = Term::stdout();
        let width = term.size().1 as usize;

        let banner = r#"
   _                              _ _  __
  (_)___  __ _____ ___  ___ _ __ | | |/ /___ ___ _ __  ___ _ _
  | / _ \/ // / '_/ _ \/ _` | '_ \| | ' </ -_) -_) '_ \/ -_) '_|
 _/ \___/\_,_/_| /_//_/\__,_|_| |_|_|_|\_\___\___| .__/\___|_|
|__/                                             |_|
"#;

        for line in banner.lines() {
            if line.trim().is_empty() {
                continue;
            }
            println!(
                "{:^width$}",
                line.truecolor(230, 145, 56).bold().to_string(),
                width = width
            );
        }
        println!();
    }

    pub fn info<T: Display>(msg: T) {
        println!("{} {}", "•".truecolor(38, 166, 154).bold(), msg);
    }

    pub fn success<T: Display>(msg: T) {
        println!("{} {}", "✔".green().bold(), msg);
    }

    pub fn error<T: Display>(msg: T) {
        println!("{} {}", "✖".red().bold(), msg);
    }

    pub fn warn<T: Display>(msg: T) {
        println!("{} {}", "⚠".yellow().bold(), msg);
    }

    /// One alert from the store. Alerts carry no severity, so they share a style.
    pub fn alert<T: Display>(msg: T) {
        println!(
            "{} {}",
            "!".truecolor(230, 145, 56).bold(),
            msg.to_string().bold()
        );
    }

    /// Section header, underlined, preceded by a blank line.
    pub fn header<T: Display>(msg: T) {
        println!(
            "\n{}",
            msg.to_string().truecolor(230, 145, 56).bold().underline()
        );
    }

    /// Inline highlight for usernames, ids and the like.
    pub fn highlight<T: Display>(msg: T) -> String {
        msg.to_string().truecolor(38, 166, 154).bold().to_string()
    }

    pub fn dim<T: Display>(msg: T) -> String {
        msg.to_string().dimmed().to_string()
    }
}
