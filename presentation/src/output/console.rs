//! Console output formatting for the estimation table

use colored::Colorize;
use poker_domain::{Divergence, ResultEntry, RoundPhase, STANDARD_DECK, SessionState};

/// Formats session events and results for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the header shown when voting opens on an item
    pub fn format_round_header(feature: &str, phase: RoundPhase) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            format!("── {} ──", feature).yellow().bold()
        ));

        if phase.is_second() {
            output.push_str(&format!(
                "{}\n",
                "Confirming round: votes will be averaged".cyan()
            ));
        }

        output.push_str(&Self::format_card_hint());
        output
    }

    /// Format the card hint line shown under the round header
    pub fn format_card_hint() -> String {
        let cards = STANDARD_DECK
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}\n", "Cards:".dimmed(), format!("{}, break", cards).dimmed())
    }

    /// Format the announcement of a divergent round
    pub fn format_divergence(divergence: &Divergence, seconds: u64) -> String {
        format!(
            "\n{} {} at {}, {} at {}\n{}\n",
            "Votes diverge:".yellow().bold(),
            divergence.min_player,
            divergence.min_vote,
            divergence.max_player,
            divergence.max_vote,
            format!("Discussion open for {}s", seconds).cyan()
        )
    }

    /// Format a single settled backlog item
    pub fn format_result(entry: &ResultEntry) -> String {
        if entry.is_break() {
            format!(
                "{} {} {}",
                "≈".yellow(),
                entry.task,
                "(paused here)".yellow()
            )
        } else {
            format!(
                "{} {} estimated at {}",
                "v".green(),
                entry.task,
                entry.note.to_string().green().bold()
            )
        }
    }

    /// Format the end-of-session results table
    pub fn format_results_table(results: &[ResultEntry]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n{}\n",
            "Estimation results".cyan().bold(),
            "-".repeat(40)
        ));

        for entry in results {
            let note = if entry.is_break() {
                "break".yellow().to_string()
            } else {
                entry.note.to_string().green().to_string()
            };
            output.push_str(&format!("  {:<32} {}\n", entry.task, note));
        }

        output
    }

    /// Format the current session standing (for /status)
    pub fn format_status(state: &SessionState) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", "Session status".cyan().bold()));
        output.push_str(&format!(
            "  State:   {}\n",
            state.status().display_name()
        ));
        output.push_str(&format!("  Policy:  {}\n", state.policy().description()));

        output.push_str(&format!(
            "  Item:    {}/{}",
            state.item_index() + 1,
            state.backlog().len()
        ));
        if let Some(item) = state.current_item() {
            output.push_str(&format!(" ({})", item.feature));
        }
        output.push('\n');

        output.push_str("  Table:\n");
        for player in state.roster().players() {
            match state.ballot().vote_of(player) {
                Some(vote) => {
                    output.push_str(&format!("    {} played {}\n", player, vote));
                }
                None => {
                    output.push_str(&format!("    {} {}\n", player, "has not voted".dimmed()));
                }
            }
        }

        if !state.results().is_empty() {
            output.push_str(&format!("  Settled: {} item(s)\n", state.results().len()));
        }

        output
    }
}
