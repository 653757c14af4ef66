//! Status reporting trait

/// Trait for the status/reporting channel
///
/// The controller emits one status line per tick. `alert` is an
/// attention-getting signal (buzzer, BEL, LED) independent of the text
/// channel; when a tick emits both, the alert comes first.
pub trait StatusReport {
    /// Write one status line
    fn write_line(&mut self, line: &str);

    /// Emit an attention signal
    fn alert(&mut self);
}
