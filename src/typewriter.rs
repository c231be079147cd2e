//! Character-by-character text reveal.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterState {
    /// Waiting for the initial delay to elapse.
    Idle,
    Typing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub delay: Duration,
    pub speed: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    len: usize,
    revealed: usize,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            len,
            revealed: 0,
            state: TypewriterState::Idle,
        }
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == TypewriterState::Complete
    }

    /// Number of characters currently shown.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fired once the initial delay has passed.
    pub fn begin(&mut self) {
        if self.state != TypewriterState::Idle {
            return;
        }
        self.state = if self.len == 0 {
            TypewriterState::Complete
        } else {
            TypewriterState::Typing
        };
    }

    /// Reveals one more character. No-op unless typing.
    pub fn tick(&mut self) {
        if self.state != TypewriterState::Typing {
            return;
        }
        self.revealed += 1;
        if self.revealed >= self.len {
            self.revealed = self.len;
            self.state = TypewriterState::Complete;
        }
    }

    pub fn visible_text(&self) -> &str {
        match self.text.char_indices().nth(self.revealed) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Replays the reveal from mount for `elapsed` time.
    pub fn at_elapsed(text: impl Into<String>, timing: TypewriterTiming, elapsed: Duration) -> Self {
        let mut tw = Self::new(text);
        if elapsed < timing.delay {
            return tw;
        }
        tw.begin();
        let typing_for = elapsed - timing.delay;
        let ticks = if timing.speed.is_zero() {
            tw.len as u128
        } else {
            typing_for.as_nanos() / timing.speed.as_nanos()
        };
        for _ in 0..ticks.min(tw.len as u128) {
            tw.tick();
        }
        tw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: TypewriterTiming = TypewriterTiming {
        delay: Duration::from_millis(800),
        speed: Duration::from_millis(35),
    };

    #[test]
    fn test_state_transitions() {
        let mut tw = Typewriter::new("abc");
        assert_eq!(tw.state(), TypewriterState::Idle);
        tw.tick();
        assert_eq!(tw.revealed(), 0, "ticks before the delay do nothing");

        tw.begin();
        assert_eq!(tw.state(), TypewriterState::Typing);
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible_text(), "ab");
        assert_eq!(tw.state(), TypewriterState::Typing);
        tw.tick();
        assert_eq!(tw.state(), TypewriterState::Complete);
        assert_eq!(tw.visible_text(), "abc");

        tw.tick();
        tw.begin();
        assert_eq!(tw.state(), TypewriterState::Complete);
        assert_eq!(tw.revealed(), 3);
    }

    #[test]
    fn test_progress_monotonic_and_bounded() {
        let text = "I craft expressive interfaces.";
        let mut last = 0;
        for ms in (0..3000).step_by(7) {
            let tw = Typewriter::at_elapsed(text, TIMING, Duration::from_millis(ms));
            assert!(tw.revealed() >= last);
            assert!(tw.revealed() <= tw.len());
            last = tw.revealed();
        }
        assert_eq!(last, text.chars().count());
    }

    #[test]
    fn test_states_over_time() {
        let text = "hello";
        let at = |ms| Typewriter::at_elapsed(text, TIMING, Duration::from_millis(ms));
        assert_eq!(at(799).state(), TypewriterState::Idle);
        assert_eq!(at(800).state(), TypewriterState::Typing);
        assert_eq!(at(800).revealed(), 0);
        assert_eq!(at(835).visible_text(), "h");
        assert_eq!(at(800 + 35 * 5).state(), TypewriterState::Complete);
        assert_eq!(at(60_000).visible_text(), "hello");
    }

    #[test]
    fn test_sub_millisecond_speed() {
        let fast = TypewriterTiming {
            delay: Duration::ZERO,
            speed: Duration::from_micros(500),
        };
        let tw = Typewriter::at_elapsed("abc", fast, Duration::from_micros(1_000));
        assert_eq!(tw.visible_text(), "ab");
        let tw = Typewriter::at_elapsed("abc", fast, Duration::from_millis(10));
        assert!(tw.is_complete());
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo — ✓");
        tw.begin();
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible_text(), "hé");
        while !tw.is_complete() {
            tw.tick();
        }
        assert_eq!(tw.visible_text(), "héllo — ✓");
    }

    #[test]
    fn test_empty_text_completes_on_begin() {
        let mut tw = Typewriter::new("");
        assert!(tw.is_empty());
        tw.begin();
        assert!(tw.is_complete());
        assert_eq!(tw.visible_text(), "");
    }
}
