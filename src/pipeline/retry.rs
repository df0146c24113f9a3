use std::collections::HashMap;
use std::sync::Mutex;

/// Per-URL count of challenge pages seen since the last good response
///
/// The crawl engine may deliver responses from several workers, so the
/// counters sit behind a mutex.
#[derive(Debug)]
pub struct RefetchBudget {
    max_attempts: u32,
    attempts: Mutex<HashMap<String, u32>>,
}

/// Result of charging one challenge page to a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// Another refetch is allowed; carries the challenge count so far
    Retry(u32),
    /// The ceiling was passed; the counter has been reset
    Exhausted(u32),
}

impl RefetchBudget {
    /// Creates a budget allowing `max_attempts` refetches per URL
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            attempts: Mutex::new(HashMap::new()),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Records a challenge page for `url`
    pub fn charge(&self, url: &str) -> Charge {
        let mut attempts = self.lock();
        let count = attempts.entry(url.to_string()).or_insert(0);
        *count += 1;
        let seen = *count;

        if seen > self.max_attempts {
            attempts.remove(url);
            Charge::Exhausted(seen)
        } else {
            Charge::Retry(seen)
        }
    }

    /// Forgets `url` after a genuine response
    pub fn clear(&self, url: &str) {
        self.lock().remove(url);
    }

    /// Challenge pages currently charged to `url`
    pub fn attempts(&self, url: &str) -> u32 {
        self.lock().get(url).copied().unwrap_or(0)
    }

    /// Number of URLs with an open refetch
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, u32>> {
        // A poisoned map only holds counters, which are still usable
        self.attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
