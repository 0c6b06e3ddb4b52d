// tests/support/mocks/util.rs
use chrono::{DateTime, Duration, Utc};
use memo_core::application::ports::{
    time::Clock,
    util::{TransliterationError, Transliterator},
};
use std::sync::atomic::{AtomicI64, Ordering};

/// Starts at [`fixed_now`](super::time::fixed_now) and moves one second
/// forward on every read, so later writes always carry later timestamps.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        super::time::fixed_now() + Duration::seconds(tick)
    }
}

/// Transliterator that always fails, to drive the placeholder path.
#[derive(Clone, Default)]
pub struct FailingTransliterator;

impl Transliterator for FailingTransliterator {
    fn romanize(&self, input: &str) -> Result<String, TransliterationError> {
        Err(TransliterationError::Failed(format!("cannot romanize {input:?}")))
    }
}
