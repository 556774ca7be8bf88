use crate::domain::model::Product;

/// Answers the yes/no question asked before a price decrease is applied.
///
/// The domain accepts the decrease only when the trimmed answer is exactly `"y"`.
pub trait PricePrompt {
    fn ask(&mut self, question: &str) -> String;
}

impl<F> PricePrompt for F
where
    F: FnMut(&str) -> String,
{
    fn ask(&mut self, question: &str) -> String {
        self(question)
    }
}

/// Sink for user-visible notices (rejected price, declined change).
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Anything that holds catalog products: a category or an order.
pub trait ItemContainer {
    fn items(&self) -> Vec<&Product>;
}
