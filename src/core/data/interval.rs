use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IntervalError {
    NonFinite { start: f64, end: f64 },
    OutsideUnit { start: f64, end: f64 },
    Empty { start: f64, end: f64 },
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { start, end } => {
                write!(f, "interval bounds must be finite: [{}, {}]", start, end)
            }
            Self::OutsideUnit { start, end } => {
                write!(f, "interval [{}, {}] lies outside [0, 1]", start, end)
            }
            Self::Empty { start, end } => {
                write!(f, "interval start must be below end: [{}, {}]", start, end)
            }
        }
    }
}

impl Error for IntervalError {}

/// A surviving line segment `[start, end]` inside the unit interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    start: f64,
    end: f64,
}

impl Interval {
    pub const UNIT: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> Result<Self, IntervalError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(IntervalError::NonFinite { start, end });
        }

        if start < 0.0 || end > 1.0 {
            return Err(IntervalError::OutsideUnit { start, end });
        }

        if start >= end {
            return Err(IntervalError::Empty { start, end });
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Splits into the left and right thirds, dropping the middle third.
    #[must_use]
    pub fn split_thirds(&self) -> (Self, Self) {
        let third = self.length() / 3.0;

        let left = Self {
            start: self.start,
            end: self.start + third,
        };
        let right = Self {
            start: self.start + 2.0 * third,
            end: self.end,
        };

        (left, right)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::UNIT
    }
}
