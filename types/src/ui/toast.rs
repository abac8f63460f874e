use std::time::Duration;

use super::animation::EffectTimer;

/// Short-lived notice shown over the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    timer: EffectTimer,
}

impl Toast {
    pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(2);

    #[must_use]
    pub fn new(message: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            timer: EffectTimer::new(lifetime),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.timer.is_finished()
    }
}
