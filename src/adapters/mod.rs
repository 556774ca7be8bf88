// Adapters layer: concrete implementations of the domain ports (terminal prompt, notice sinks).

pub mod notifier;
pub mod prompt;

pub use notifier::{ConsoleNotifier, TracingNotifier};
pub use prompt::{PriceDropPolicy, StdinPrompt};
