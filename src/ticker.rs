/// Rotating tagline cursor.
///
/// Cycles through `count + 1` states: one per message plus a trailing blank
/// slot where nothing is shown. A fresh ticker starts blank so the first
/// message appears after one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    index: usize,
    count: usize,
}

impl Ticker {
    pub fn new(count: usize) -> Self {
        Self {
            index: count,
            count,
        }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn is_blank(self) -> bool {
        self.index == self.count
    }

    pub fn advanced(self) -> Self {
        Self {
            index: (self.index + 1) % (self.count + 1),
            ..self
        }
    }

    pub fn current<'a>(self, messages: &[&'a str]) -> Option<&'a str> {
        if self.is_blank() {
            return None;
        }

        messages.get(self.index).copied()
    }
}
