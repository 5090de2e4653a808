//! Inclusive HSV color bands
//!
//! A `ColorBand` defines which pixels count as "label colored". Bounds are
//! validated when the band is built, so detection code can assume every
//! channel is within its range.

use crate::errors::{IndexError, IndexResult};
use super::hsv::{Hsv, MAX_HUE, MAX_SATURATION, MAX_VALUE};

/// Inclusive range over the three HSV channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    /// Lower bound (inclusive)
    pub lower: Hsv,
    /// Upper bound (inclusive)
    pub upper: Hsv,
}

impl ColorBand {
    /// Create a band from raw integer triples
    ///
    /// # Arguments
    /// * `lower` - Lower bound as `[h, s, v]`
    /// * `upper` - Upper bound as `[h, s, v]`
    ///
    /// # Returns
    /// The validated band, or a `ValidationError` naming the bad bound
    pub fn new(lower: &[i64], upper: &[i64]) -> IndexResult<Self> {
        let lower = Self::validate_triple("lower_band", lower)?;
        let upper = Self::validate_triple("upper_band", upper)?;
        Ok(ColorBand { lower, upper })
    }

    /// The default blue label band, (90, 50, 50) to (130, 255, 255)
    ///
    /// Built fresh on every call.
    pub fn default_blue() -> Self {
        ColorBand {
            lower: Hsv::new(90, 50, 50),
            upper: Hsv::new(130, 255, 255),
        }
    }

    /// Default lower bound as a raw triple
    pub fn default_lower() -> Vec<i64> {
        Self::default_blue().lower.to_triple()
    }

    /// Default upper bound as a raw triple
    pub fn default_upper() -> Vec<i64> {
        Self::default_blue().upper.to_triple()
    }

    /// Parse a comma-separated triple such as `"90,50,50"`
    ///
    /// # Arguments
    /// * `argument` - Name of the argument being parsed, used in errors
    /// * `value` - The text to parse
    pub fn parse_triple(argument: &str, value: &str) -> IndexResult<Vec<i64>> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(IndexError::validation(
                argument,
                format!("expected 3 comma-separated integers, got '{}'", value),
            ));
        }

        parts
            .iter()
            .map(|part| {
                part.parse::<i64>().map_err(|_| {
                    IndexError::validation(argument, format!("'{}' is not an integer", part))
                })
            })
            .collect()
    }

    /// Check whether a color falls inside the band
    pub fn contains(&self, color: &Hsv) -> bool {
        (self.lower.h..=self.upper.h).contains(&color.h)
            && (self.lower.s..=self.upper.s).contains(&color.s)
            && (self.lower.v..=self.upper.v).contains(&color.v)
    }

    fn validate_triple(argument: &str, values: &[i64]) -> IndexResult<Hsv> {
        if values.len() != 3 {
            return Err(IndexError::validation(
                argument,
                format!("expected 3 components, got {}", values.len()),
            ));
        }

        let limits = [
            ("hue", MAX_HUE),
            ("saturation", MAX_SATURATION),
            ("value", MAX_VALUE),
        ];

        let mut channels = [0u8; 3];
        for (i, (&value, (channel, max))) in values.iter().zip(limits).enumerate() {
            if value < 0 || value > max as i64 {
                return Err(IndexError::validation(
                    argument,
                    format!("{} component {} is outside [0, {}]", channel, value, max),
                ));
            }
            channels[i] = value as u8;
        }

        Ok(Hsv::new(channels[0], channels[1], channels[2]))
    }
}

impl Default for ColorBand {
    fn default() -> Self {
        Self::default_blue()
    }
}
