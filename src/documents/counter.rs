// SPDX-License-Identifier: MPL-2.0
//! Character counter for document text fields.

use crate::config::{CounterConfig, DEFAULT_COUNTER_TARGET};

/// How the current count relates to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CounterLevel {
    /// Below 70 % of the target.
    Short,
    /// 70 % up to 90 % of the target.
    Near,
    /// 90 % to 110 % of the target.
    OnTarget,
    /// Above 110 % of the target.
    Over,
    /// Above the hard maximum.
    Exceeded,
}

impl CounterLevel {
    /// Returns whether the count needs the user's attention.
    #[must_use]
    pub fn is_warning(self) -> bool {
        matches!(self, CounterLevel::Near | CounterLevel::Over)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCounter {
    target: usize,
    max: Option<usize>,
    show_percentage: bool,
    show_progress: bool,
    count: usize,
}

impl CharacterCounter {
    /// A zero target falls back to the default; a zero maximum means none.
    #[must_use]
    pub fn new(config: &CounterConfig) -> Self {
        Self {
            target: normalize_target(config.target),
            max: config.max.filter(|&max| max > 0),
            show_percentage: config.show_percentage,
            show_progress: config.show_progress,
            count: 0,
        }
    }

    /// Recounts from `text`.
    pub fn update(&mut self, text: &str) {
        self.count = text.chars().count();
    }

    pub fn set_target(&mut self, target: usize) {
        self.target = normalize_target(target);
    }

    pub fn set_max(&mut self, max: Option<usize>) {
        self.max = max.filter(|&max| max > 0);
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn target(&self) -> usize {
        self.target
    }

    #[must_use]
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    #[must_use]
    pub fn shows_progress(&self) -> bool {
        self.show_progress
    }

    /// Progress toward the target, capped at 100.
    #[must_use]
    pub fn percentage(&self) -> f64 {
        (self.count as f64 / self.target as f64 * 100.0).min(100.0)
    }

    #[must_use]
    pub fn level(&self) -> CounterLevel {
        if self.max.is_some_and(|max| self.count > max) {
            return CounterLevel::Exceeded;
        }

        let count = self.count as f64;
        let target = self.target as f64;
        if count >= target * 0.9 && count <= target * 1.1 {
            CounterLevel::OnTarget
        } else if count >= target * 0.7 && count < target * 0.9 {
            CounterLevel::Near
        } else if count > target * 1.1 {
            CounterLevel::Over
        } else {
            CounterLevel::Short
        }
    }

    /// e.g. `"380 chars (95%)"` or `"900 chars (100%) / over the 800 char limit"`.
    #[must_use]
    pub fn display_text(&self) -> String {
        let mut text = format!("{} chars", self.count);
        if self.show_percentage {
            text.push_str(&format!(" ({}%)", self.percentage().round()));
        }
        if let Some(max) = self.max.filter(|&max| self.count > max) {
            text.push_str(&format!(" / over the {max} char limit"));
        }
        text
    }

    #[must_use]
    pub fn target_label(&self) -> String {
        format!("Target: {} chars", self.target)
    }
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self::new(&CounterConfig::default())
    }
}

fn normalize_target(target: usize) -> usize {
    if target == 0 {
        DEFAULT_COUNTER_TARGET
    } else {
        target
    }
}
