/// Logging port used by every use case.
///
/// Adapters decide where the lines go; the domain only emits plain messages.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
