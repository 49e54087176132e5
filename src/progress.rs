// src/progress.rs
/// Lightweight progress reporting used by the collection pipeline.
/// Frontends implement this to surface status to users.
pub trait Progress: Send {
    /// Called at the start with the target item count.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one item is ready (count so far).
    fn item_done(&mut self, _done: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
