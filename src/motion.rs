//! Timer-driven state for the decorative widgets. The views own the timers;
//! these types only decide what to show on each tick.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Types a phrase, holds it, deletes it, then moves on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    index: usize,
    shown: usize,
    deleting: bool,
    delay: Duration,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            index: 0,
            shown: 0,
            deleting: false,
            delay: TYPE_DELAY,
        }
    }

    fn phrase_len(&self) -> usize {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().count())
            .unwrap_or(0)
    }

    /// Advances one step and returns the delay before the next one.
    pub fn tick(&mut self) -> Duration {
        if self.phrases.is_empty() {
            return self.delay;
        }
        let len = self.phrase_len();
        self.delay = if !self.deleting {
            if self.shown < len {
                self.shown += 1;
            }
            if self.shown == len {
                self.deleting = true;
                HOLD_DELAY
            } else {
                TYPE_DELAY
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            DELETE_DELAY
        } else {
            self.deleting = false;
            self.index = (self.index + 1) % self.phrases.len();
            TYPE_DELAY
        };
        self.delay
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p.chars().take(self.shown).collect())
            .unwrap_or_default()
    }
}

pub const COUNT_STEPS: u32 = 60;
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);

/// Counts from zero up to a target in fixed steps. Intermediate values are
/// floored, the last one is exact.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: f64,
    current: f64,
    shown: f64,
    ticks: u32,
}

impl CountUp {
    pub fn new(target: f64) -> Self {
        Self {
            target,
            current: 0.0,
            shown: 0.0,
            ticks: 0,
        }
    }

    pub fn interval() -> Duration {
        COUNT_DURATION / COUNT_STEPS
    }

    pub fn tick(&mut self) -> f64 {
        if self.is_done() {
            return self.shown;
        }
        self.ticks += 1;
        self.current += self.target / f64::from(COUNT_STEPS);
        self.shown = if self.current >= self.target || self.ticks >= COUNT_STEPS {
            self.target
        } else {
            self.current.floor()
        };
        self.shown
    }

    pub fn is_done(&self) -> bool {
        self.ticks > 0 && self.shown == self.target
    }

    pub fn display(&self, suffix: &str) -> String {
        format!("{}{}", self.shown, suffix)
    }
}

/// Index into a fixed-size ring of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}
