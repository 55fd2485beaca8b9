//! Console presentation for the interactive draw: framed banners, plain
//! tables, word-by-word pacing and enter-to-continue pauses, plus the
//! stdin-backed swap confirmation.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use raffle_engine::{DecisionOracle, DrawObserver, Prize, WinnerLedger};

/// Renders the draw on stdout. With `interactive` off (and a zero pace) the
/// output degrades to plain lines, which keeps scripted runs readable.
pub struct ConsolePresenter {
    pace: Duration,
    interactive: bool,
}

impl ConsolePresenter {
    pub fn new(pace_ms: u64, interactive: bool) -> Self {
        Self {
            pace: Duration::from_millis(pace_ms),
            interactive,
        }
    }

    pub fn banner(&self, title: &str) {
        let line = "-".repeat(title.len() + 4);
        println!("+{}+", line);
        println!("|  {}  |", title);
        println!("+{}+", line);
    }

    /// Print text one word at a time, drumroll style.
    pub fn announce_paced(&self, text: &str) {
        if self.pace.is_zero() {
            println!("{}", text);
            return;
        }
        for word in text.split(' ') {
            print!("{} ", word);
            let _ = io::stdout().flush();
            thread::sleep(self.pace);
        }
        println!();
    }

    pub fn wait_for_enter(&self, prompt: &str) {
        if !self.interactive {
            return;
        }
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        let _ = io::stdin().lock().read_line(&mut line);
    }

    pub fn print_prizes(&self, prizes: &[Prize]) {
        println!("  {:<24} {:>5}", "item", "qty");
        for prize in prizes {
            println!("  {:<24} {:>5}", prize.name, prize.remaining);
        }
    }

    pub fn print_winners(&self, ledger: &WinnerLedger) {
        if ledger.is_empty() {
            println!("  No winner data yet");
            return;
        }
        println!("  {:<16} {:<16} {:<24}", "name", "lastname", "item");
        for assignment in ledger.entries() {
            println!(
                "  {:<16} {:<16} {:<24}",
                assignment.participant.given, assignment.participant.family, assignment.prize
            );
        }
    }

    fn clear(&self) {
        if self.interactive {
            print!("\x1b[2J\x1b[H");
            let _ = io::stdout().flush();
        }
    }
}

impl DrawObserver for ConsolePresenter {
    fn render(&mut self, prizes: &[Prize], ledger: &WinnerLedger) {
        self.clear();
        self.banner("ONGOING RAFFLE");
        self.print_prizes(prizes);
        println!();
        self.print_winners(ledger);
        println!();
    }

    fn announce(&mut self, message: &str) {
        self.announce_paced(message);
        self.wait_for_enter("Press enter to continue...");
    }
}

/// Stdin-backed yes/no confirmation for swap offers.
pub struct ConsoleOracle;

impl DecisionOracle for ConsoleOracle {
    fn confirm(&mut self, prompt: &str) -> bool {
        loop {
            print!("{} [y/n]: ", prompt);
            let _ = io::stdout().flush();

            let mut line = String::new();
            match io::stdin().lock().read_line(&mut line) {
                // Treat a closed stdin as a decline rather than asking forever.
                Ok(0) | Err(_) => return false,
                Ok(_) => {}
            }
            match line.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer y or n."),
            }
        }
    }
}
