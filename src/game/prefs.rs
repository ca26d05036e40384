use std::time::Duration;

use static_assertions::const_assert;

use crate::basic::Boundary;
use crate::error::{Error, ErrorType, Result};
use crate::food::Nutrition;
use crate::snake_control;

/// The snake needs room for its head, its tail and one free cell
pub const MIN_FIELD_SIZE: isize = 3;
const_assert!(MIN_FIELD_SIZE > 2);

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Cells per side of the square board
    pub field_size: isize,
    pub tick_interval: Duration,
    pub boundary: Boundary,
    /// How much food is on the board at once
    pub food_count: usize,
    pub food_value: Nutrition,
    pub start_len: usize,
    pub controller: snake_control::Template,
    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            field_size: 16,
            tick_interval: Duration::from_millis(350),
            boundary: Boundary::Wrap,
            food_count: 1,
            food_value: 1,
            start_len: 2,
            controller: snake_control::Template::Taps,
            seed: None,
        }
    }
}

impl Prefs {
    pub fn validate(&self) -> Result {
        if self.field_size < MIN_FIELD_SIZE {
            return Err(Error::from(ErrorType::FieldTooSmall { size: self.field_size }));
        }
        if self.tick_interval.is_zero() {
            return Err(Error::from(ErrorType::InvalidPrefs("`tick_interval` must not be zero")));
        }
        if self.start_len == 0 || self.start_len as isize >= self.field_size {
            return Err(Error::from(ErrorType::InvalidPrefs(
                "`start_len` must be at least 1 and shorter than a row",
            )));
        }
        Ok(())
    }
}
