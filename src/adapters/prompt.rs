use crate::config::PriceDropMode;
use crate::domain::ports::PricePrompt;
use std::io::{self, BufRead, Write};

/// Asks on stdout and reads one line from stdin. Read failures count as "no".
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl PricePrompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> String {
        print!("{} ", question);
        if let Err(e) = io::stdout().flush() {
            tracing::debug!("failed to flush stdout: {}", e);
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => answer,
            Err(e) => {
                tracing::warn!("failed to read answer: {}", e);
                String::new()
            }
        }
    }
}

/// Answers price-drop questions according to a configured [`PriceDropMode`],
/// delegating to an inner prompt in `Prompt` mode.
pub struct PriceDropPolicy<P: PricePrompt> {
    mode: PriceDropMode,
    inner: P,
}

impl PriceDropPolicy<StdinPrompt> {
    pub fn interactive(mode: PriceDropMode) -> Self {
        Self::new(mode, StdinPrompt)
    }
}

impl<P: PricePrompt> PriceDropPolicy<P> {
    pub fn new(mode: PriceDropMode, inner: P) -> Self {
        Self { mode, inner }
    }

    pub fn mode(&self) -> PriceDropMode {
        self.mode
    }
}

impl<P: PricePrompt> PricePrompt for PriceDropPolicy<P> {
    fn ask(&mut self, question: &str) -> String {
        match self.mode {
            PriceDropMode::Prompt => self.inner.ask(question),
            PriceDropMode::Accept => {
                tracing::debug!("auto-accepting: {}", question);
                "y".to_string()
            }
            PriceDropMode::Decline => {
                tracing::debug!("auto-declining: {}", question);
                "n".to_string()
            }
        }
    }
}
