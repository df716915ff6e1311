//! Display functions for command results

use super::formatters::{bonus_label, half_points_label, score_bar};
use crate::commands::SimulationResult;
use crate::core::Outcome;
use crate::game::{SessionSummary, format_points};
use colored::Colorize;

/// Print one line per finished session
pub fn print_session_summary(index: usize, summary: &SessionSummary) {
    let outcome = match summary.outcome {
        Outcome::Win => "WIN ".green().bold(),
        Outcome::Loss => "LOSS".red().bold(),
    };
    println!(
        "  Game {}: {} [{}] {} / {} (bonus {})",
        index.to_string().bright_black(),
        outcome,
        score_bar(summary.score, summary.possible, 20).cyan(),
        format_points(summary.score).bright_yellow().bold(),
        format_points(summary.possible),
        bonus_label(summary.bonus)
    );
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcomes:".bright_cyan().bold());
    println!("   Sessions played:  {}", result.sessions);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Bonus played:     {}", result.bonus_played);
    println!(
        "   Bonus cleared:    {}",
        format!("{}", result.bonus_cleared).green()
    );

    println!("\n🎯 {}", "Scores:".bright_cyan().bold());
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!(
        "   Best / worst:     {} / {}",
        format_points(result.max_score).green(),
        format_points(result.min_score).yellow()
    );
    println!(
        "   Average ratio:    {:.1}% of possible points",
        result.average_ratio * 100.0
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&half_points, &count) in &result.score_distribution {
        let pct = (count as f64 / result.sessions as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!(
            "   {:>4}: {bar} {count:4} ({pct:5.1}%)",
            half_points_label(half_points)
        );
    }
}
