//! Shared boolean loading signal
//!
//! One writer, one (or more) readers, all confined to the UI thread. The
//! screen that owns the cycle holds the [`LoadingSignal`] writer; the overlay
//! host holds a [`SignalReader`] and never mutates the value. `Rc<Cell<bool>>`
//! states the single-threaded invariant in the type: the signal cannot leave
//! the iced main thread.

use std::cell::Cell;
use std::rc::Rc;

/// Writable handle to the loading flag
#[derive(Debug, Clone)]
pub struct LoadingSignal {
    value: Rc<Cell<bool>>,
}

/// Read-only view of a [`LoadingSignal`]
#[derive(Debug, Clone)]
pub struct SignalReader {
    value: Rc<Cell<bool>>,
}

impl LoadingSignal {
    /// Create a new signal, initially inactive
    pub fn new() -> Self {
        Self {
            value: Rc::new(Cell::new(false)),
        }
    }

    /// Create a read-only view sharing this signal's storage
    pub fn reader(&self) -> SignalReader {
        SignalReader {
            value: Rc::clone(&self.value),
        }
    }

    /// Set the flag. Re-asserting the current value changes nothing observable.
    pub fn set(&self, active: bool) {
        if self.value.get() != active {
            log::debug!("loading signal -> {}", active);
        }
        self.value.set(active);
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.value.get()
    }
}

impl Default for LoadingSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalReader {
    /// Current value
    pub fn get(&self) -> bool {
        self.value.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_tracks_writer() {
        let signal = LoadingSignal::new();
        let reader = signal.reader();
        assert!(!reader.get());

        signal.set(true);
        assert!(reader.get());

        signal.set(false);
        assert!(!reader.get());
    }

    #[test]
    fn test_reassert_is_idempotent() {
        let signal = LoadingSignal::new();
        let reader = signal.reader();

        signal.set(true);
        signal.set(true);
        assert!(reader.get());
    }
}
