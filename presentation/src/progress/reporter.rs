//! Session narration for the terminal

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use poker_application::SessionObserver;
use poker_domain::{Divergence, Player, ResultEntry, RoundPhase, Vote};
use std::sync::Mutex;

/// Narrates the session with a live countdown bar during discussions
pub struct ProgressReporter {
    countdown: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            countdown: Mutex::new(None),
        }
    }

    fn countdown_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for ProgressReporter {
    fn on_round_start(&self, feature: &str, phase: RoundPhase) {
        print!("{}", ConsoleFormatter::format_round_header(feature, phase));
    }

    fn on_vote_recorded(&self, player: &Player, vote: &Vote) {
        println!("  {} {} played {}", "v".green(), player, vote);
    }

    fn on_discussion_start(&self, divergence: &Divergence, seconds: u64) {
        print!("{}", ConsoleFormatter::format_divergence(divergence, seconds));

        let pb = ProgressBar::new(seconds);
        pb.set_style(Self::countdown_style());
        pb.set_prefix("Discussion");
        pb.set_message(format!("{}s left", seconds));

        *self.countdown.lock().unwrap() = Some(pb);
    }

    fn on_discussion_tick(&self, seconds_remaining: u64) {
        if let Some(pb) = self.countdown.lock().unwrap().as_ref() {
            if let Some(total) = pb.length() {
                pb.set_position(total.saturating_sub(seconds_remaining));
            }
            pb.set_message(format!("{}s left", seconds_remaining));
        }
    }

    fn on_discussion_end(&self) {
        if let Some(pb) = self.countdown.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "time is up!".green()));
        }
    }

    fn on_item_resolved(&self, entry: &ResultEntry) {
        println!("{}", ConsoleFormatter::format_result(entry));
    }

    fn on_pause_declined(&self) {
        println!(
            "{}",
            "Break declined. Revise cards with /revise, then /next.".cyan()
        );
    }

    fn on_paused(&self) {
        println!(
            "\n{}",
            "Session paused. Pick it up later with --resume.".yellow().bold()
        );
    }

    fn on_session_end(&self, results: &[ResultEntry]) {
        print!("{}", ConsoleFormatter::format_results_table(results));
    }
}

/// Simple text-based narration (no countdown bar)
pub struct SimpleProgress;

impl SessionObserver for SimpleProgress {
    fn on_round_start(&self, feature: &str, phase: RoundPhase) {
        print!("{}", ConsoleFormatter::format_round_header(feature, phase));
    }

    fn on_vote_recorded(&self, player: &Player, vote: &Vote) {
        println!("  {} {} played {}", "v".green(), player, vote);
    }

    fn on_discussion_start(&self, divergence: &Divergence, seconds: u64) {
        print!("{}", ConsoleFormatter::format_divergence(divergence, seconds));
    }

    fn on_discussion_end(&self) {
        println!("{}", "Discussion over, cards up!".green());
    }

    fn on_item_resolved(&self, entry: &ResultEntry) {
        println!("{}", ConsoleFormatter::format_result(entry));
    }

    fn on_pause_declined(&self) {
        println!(
            "{}",
            "Break declined. Revise cards with /revise, then /next.".cyan()
        );
    }

    fn on_paused(&self) {
        println!(
            "\n{}",
            "Session paused. Pick it up later with --resume.".yellow().bold()
        );
    }

    fn on_session_end(&self, results: &[ResultEntry]) {
        print!("{}", ConsoleFormatter::format_results_table(results));
    }
}
