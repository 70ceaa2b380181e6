use std::time::Duration;

use tokio::time::sleep;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Stand-in for a model call. Waits, then decorates the text the same way
/// every time.
#[derive(Debug, Clone)]
pub struct Improver {
    delay: Duration,
}

impl Default for Improver {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Improver {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn improve(&self, text: &str) -> String {
        sleep(self.delay).await;
        decorate(text)
    }
}

pub fn decorate(text: &str) -> String {
    format!(
        "[Improved by AI] {}\n\n✨ Suggestion: Consider adding more context \
         about the desired tone and output format to get better results.",
        text
    )
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn improve_waits_for_the_delay() {
        let improver = Improver::default();
        let started = Instant::now();

        let improved = improver.improve("Write a haiku").await;

        assert!(started.elapsed() >= DEFAULT_DELAY);
        assert!(improved.starts_with("[Improved by AI] Write a haiku\n\n"));
    }

    #[test]
    fn decorate_is_deterministic() {
        assert_eq!(decorate("x"), decorate("x"));
        assert!(decorate("x").contains("✨ Suggestion:"));
    }
}
