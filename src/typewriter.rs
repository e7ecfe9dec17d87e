use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(130);
pub const DELETE_DELAY: Duration = Duration::from_millis(40);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);

/// Cycles through phrases one character at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
        }
    }

    fn phrase(&self) -> &'static str {
        self.phrases.get(self.index).copied().unwrap_or_default()
    }

    /// The currently visible prefix of the active phrase.
    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// Advances one frame and returns how long to wait before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return TYPE_DELAY;
        }
        let total = self.phrase().chars().count();
        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            if self.shown == 0 {
                self.deleting = false;
                self.index = (self.index + 1) % self.phrases.len();
                return TYPE_DELAY;
            }
            DELETE_DELAY
        } else {
            self.shown = (self.shown + 1).min(total);
            if self.shown == total {
                self.deleting = true;
                return HOLD_DELAY;
            }
            TYPE_DELAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROLES: &[&str] = &["Hi", "Yo"];

    #[test]
    fn test_types_holds_and_deletes() {
        let mut tw = Typewriter::new(ROLES);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), HOLD_DELAY);
        assert_eq!(tw.text(), "Hi");
        assert_eq!(tw.tick(), DELETE_DELAY);
        assert_eq!(tw.text(), "H");
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "Y");
    }

    #[test]
    fn test_wraps_to_first_phrase() {
        let mut tw = Typewriter::new(ROLES);
        // two phrases of two chars: type 2, delete 2, each
        for _ in 0..8 {
            tw.tick();
        }
        assert_eq!(tw, Typewriter::new(ROLES));
    }

    #[test]
    fn test_multibyte_prefix() {
        static WIDE: &[&str] = &["héllo"];
        let mut tw = Typewriter::new(WIDE);
        tw.tick();
        tw.tick();
        assert_eq!(tw.text(), "hé");
    }

    #[test]
    fn test_no_phrases() {
        let mut tw = Typewriter::new(&[]);
        assert_eq!(tw.tick(), TYPE_DELAY);
        assert_eq!(tw.text(), "");
    }
}
