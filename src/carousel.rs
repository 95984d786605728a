use serde::Serialize;

use crate::content::Project;

/// Which way the next card slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Horizontal offset the incoming card starts from.
    pub fn enter_offset(self) -> &'static str {
        match self {
            Self::Forward => "100%",
            Self::Backward => "-100%",
        }
    }

    /// Horizontal offset the outgoing card leaves towards.
    pub fn exit_offset(self) -> &'static str {
        match self {
            Self::Forward => "-100%",
            Self::Backward => "100%",
        }
    }
}

/// Cyclic cursor over the featured projects.
///
/// `active_index` always stays in `0..count`; every move wraps instead of
/// failing. The direction only feeds the card transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    active_index: usize,
    direction: Direction,
    count: usize,
}

impl Carousel {
    /// Returns `None` for an empty list, which has no valid index.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self {
            active_index: 0,
            direction: Direction::Forward,
            count,
        })
    }

    pub fn active_index(self) -> usize {
        self.active_index
    }

    pub fn direction(self) -> Direction {
        self.direction
    }

    pub fn next(self) -> Self {
        Self {
            active_index: (self.active_index + 1) % self.count,
            direction: Direction::Forward,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        Self {
            active_index: (self.active_index + self.count - 1) % self.count,
            direction: Direction::Backward,
            ..self
        }
    }

    pub fn jump_to(self, index: usize) -> Self {
        let index = index % self.count;
        let direction = if index > self.active_index {
            Direction::Forward
        } else {
            Direction::Backward
        };

        Self {
            active_index: index,
            direction,
            ..self
        }
    }

    pub fn active(self, projects: &[Project]) -> Option<&Project> {
        projects.get(self.active_index)
    }
}

/// Cards on screen: the active one plus, while it slides out, the card it
/// replaced. The first card is shown at rest until the carousel first moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    carousel: Carousel,
    exiting: Option<usize>,
    initial: bool,
}

impl Stage {
    pub fn new(carousel: Carousel) -> Self {
        Self {
            carousel,
            exiting: None,
            initial: true,
        }
    }

    pub fn carousel(self) -> Carousel {
        self.carousel
    }

    /// Index of the card animating out, if any.
    pub fn exiting(self) -> Option<usize> {
        self.exiting
    }

    pub fn is_initial(self) -> bool {
        self.initial
    }

    pub fn moved(self, next: Carousel) -> Self {
        // Same card: only the direction may change, nothing remounts.
        if next.active_index == self.carousel.active_index {
            return Self {
                carousel: next,
                ..self
            };
        }

        Self {
            carousel: next,
            exiting: Some(self.carousel.active_index),
            initial: false,
        }
    }

    pub fn exit_finished(self) -> Self {
        Self {
            exiting: None,
            ..self
        }
    }
}
