use crate::domain::ports::Notifier;

/// Routes notices to the log at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::warn!(target: "small_catalog::notice", "{}", message);
    }
}

/// Prints notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }
}
