//! REPL (Read-Eval-Print Loop) driving the estimation table

use crate::output::console::ConsoleFormatter;
use poker_application::{BacklogSource, SessionEngine, SessionEvent};
use poker_domain::{Player, SessionStatus, Vote};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;
use std::sync::Arc;

/// Interactive estimation table.
///
/// Reads cards and slash commands from the prompt and feeds them to the
/// session engine. The prompt names the player whose turn it is.
pub struct TableRepl {
    engine: SessionEngine,
    backlog_source: Option<Arc<dyn BacklogSource>>,
    history_file: Option<PathBuf>,
}

impl TableRepl {
    /// Create a new TableRepl.
    ///
    /// The backlog source is used by `/new` to reload the backlog file;
    /// without one (a resumed session started without `--backlog`), `/new`
    /// restarts on the backlog already in memory.
    pub fn new(engine: SessionEngine, backlog_source: Option<Arc<dyn BacklogSource>>) -> Self {
        Self {
            engine,
            backlog_source,
            history_file: None,
        }
    }

    /// Set the readline history file
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive table
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = self
            .history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("planning-poker").join("history.txt")));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        if let Err(e) = self.engine.start() {
            eprintln!("Error: {}", e);
            return Ok(());
        }

        loop {
            let status = self.engine.status();
            if status.is_ended() || status == SessionStatus::Paused {
                break;
            }

            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    // Play the card
                    self.play_card(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// The prompt names the player on turn
    fn prompt(&self) -> String {
        match self.engine.state().current_player() {
            Some(player) if self.engine.status().is_awaiting_vote() => {
                format!("{}> ", player.name())
            }
            _ => "table> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         Planning Poker - Estimation         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Players: {}",
            self.engine
                .state()
                .roster()
                .players()
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!("Policy:  {}", self.engine.state().policy().description());
        println!();
        println!("Type a card value to play it, or \"break\" to ask for a pause.");
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /status   - Show where the session stands");
        println!("  /quit     - Exit without saving");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /status          - Show where the session stands");
        println!("  /next            - Re-check the table after revisions");
        println!("  /revise <player> <card> - Change a recorded vote");
        println!("  /new             - Start over with a reloaded backlog");
        println!("  /quit, /exit, /q - Exit without saving");
        println!();
        println!("Anything else is read as a card: a number, or \"break\".");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let head = parts.next().unwrap_or("");

        match head {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_help();
                false
            }
            "/status" => {
                print!("{}", ConsoleFormatter::format_status(self.engine.state()));
                false
            }
            "/next" => {
                if let Err(e) = self.engine.handle(SessionEvent::Advance).await {
                    eprintln!("Error: {}", e);
                } else {
                    self.pump_discussion().await;
                }
                false
            }
            "/revise" => {
                match (parts.next(), parts.next()) {
                    (Some(name), Some(card)) => self.revise(name, card).await,
                    _ => println!("Usage: /revise <player> <card>"),
                }
                false
            }
            "/new" => {
                self.new_session().await;
                false
            }
            _ => {
                println!("Unknown command: {}", head);
                println!("Type /help for available commands");
                false
            }
        }
    }

    /// Parse and submit a card for the player on turn
    async fn play_card(&mut self, line: &str) {
        let vote: Vote = match line.parse() {
            Ok(vote) => vote,
            Err(e) => {
                eprintln!("Error: {}", e);
                println!("Type /help for the card format");
                return;
            }
        };

        if let Err(e) = self.engine.handle(SessionEvent::Vote(vote)).await {
            eprintln!("Error: {}", e);
            return;
        }

        self.pump_discussion().await;
    }

    /// If the last event opened a discussion, block on its countdown
    async fn pump_discussion(&mut self) {
        if self.engine.discussion_active() {
            if let Err(e) = self.engine.run_discussion().await {
                eprintln!("Error: {}", e);
            }
        }
    }

    async fn revise(&mut self, name: &str, card: &str) {
        let Some(player) = Player::try_new(name) else {
            println!("Usage: /revise <player> <card>");
            return;
        };

        let vote: Vote = match card.parse() {
            Ok(vote) => vote,
            Err(e) => {
                eprintln!("Error: {}", e);
                return;
            }
        };

        match self.engine.handle(SessionEvent::Revise { player, vote }).await {
            Ok(()) => println!("Revised. /next re-checks the table."),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Restart the session, reloading the backlog file when one was given
    async fn new_session(&mut self) {
        let backlog = match &self.backlog_source {
            Some(source) => match source.load().await {
                Ok(backlog) => backlog,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return;
                }
            },
            None => {
                println!("No backlog file on this run; reusing the loaded items.");
                self.engine.state().backlog().clone()
            }
        };

        let roster = self.engine.state().roster().clone();
        let policy = self.engine.state().policy();

        if let Err(e) = self
            .engine
            .handle(SessionEvent::NewSession {
                roster,
                backlog,
                policy,
            })
            .await
        {
            eprintln!("Error: {}", e);
        }
    }
}
