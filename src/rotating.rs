use std::time::Duration;

/// Cycles through a fixed list of phrases, one step per timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatingText<'a> {
    phrases: &'a [&'a str],
    index: usize,
}

impl<'a> RotatingText<'a> {
    /// # Panics
    ///
    /// Panics if `phrases` is empty.
    pub fn new(phrases: &'a [&'a str]) -> Self {
        assert!(!phrases.is_empty(), "rotating text needs at least one phrase");
        Self { phrases, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'a str {
        self.phrases[self.index]
    }

    pub fn advance(&mut self) -> &'a str {
        self.index = (self.index + 1) % self.phrases.len();
        self.current()
    }

    /// Index shown after `elapsed` time when advancing every `interval`.
    pub fn index_after(&self, elapsed: Duration, interval: Duration) -> usize {
        if interval.is_zero() {
            return self.index;
        }
        let ticks = elapsed.as_nanos() / interval.as_nanos();
        ((self.index as u128 + ticks) % self.phrases.len() as u128) as usize
    }

    pub fn phrase_after(&self, elapsed: Duration, interval: Duration) -> &'a str {
        self.phrases[self.index_after(elapsed, interval)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLES: &[&str] = &["React Specialist", "Creative Coder", "UI Engineer"];

    #[test]
    fn test_visits_in_order_and_wraps() {
        let mut r = RotatingText::new(TITLES);
        assert_eq!(r.current(), "React Specialist");
        assert_eq!(r.advance(), "Creative Coder");
        assert_eq!(r.advance(), "UI Engineer");
        assert_eq!(r.advance(), "React Specialist");
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn test_index_stays_in_range() {
        for n in 1..6 {
            let phrases = vec!["x"; n];
            let mut r = RotatingText::new(&phrases);
            for step in 1..=3 * n {
                r.advance();
                assert!(r.index() < n);
                assert_eq!(r.index(), step % n);
            }
        }
    }

    #[test]
    fn test_phrase_after_elapsed() {
        let r = RotatingText::new(TITLES);
        let interval = Duration::from_millis(1800);
        assert_eq!(r.phrase_after(Duration::from_millis(3600), interval), "UI Engineer");
        assert_eq!(r.phrase_after(Duration::from_millis(1799), interval), "React Specialist");
        assert_eq!(r.phrase_after(Duration::from_millis(5400), interval), "React Specialist");
    }

    #[test]
    fn test_sub_millisecond_interval() {
        let r = RotatingText::new(TITLES);
        assert_eq!(r.index_after(Duration::from_millis(10), Duration::from_micros(500)), 20 % 3);
        assert_eq!(r.index_after(Duration::from_millis(10), Duration::ZERO), 0);
    }

    #[test]
    fn test_single_phrase() {
        let mut r = RotatingText::new(&["only"]);
        assert_eq!(r.advance(), "only");
        assert_eq!(r.index(), 0);
    }

    #[test]
    #[should_panic]
    fn test_empty_phrases_panics() {
        let _ = RotatingText::new(&[]);
    }
}
