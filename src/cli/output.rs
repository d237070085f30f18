//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar counting simulated games
pub fn create_simulation_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
        .map(|style| style.progress_chars("=>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Format a ratio as a percentage with one decimal
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}
