use crate::{Error, Result};
use derivative::Derivative;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Parameters of the mock segmentation recipes.
///
/// The defaults reproduce the demo's fixed behaviour: Canny thresholds
/// 50/150, a 5x5 dilation for salient objects, a 3x3 erosion for
/// camouflaged objects and a pure red highlight.
#[derive(Debug, Clone, PartialEq, Derivative, Setters, Serialize, Deserialize)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[serde(default)]
#[non_exhaustive]
pub struct SegmentConfig {
    #[derivative(Default(value = "50.0"))]
    pub(crate) canny_low: f32,

    #[derivative(Default(value = "150.0"))]
    pub(crate) canny_high: f32,

    /// Side length of the square dilation element, must be odd
    #[derivative(Default(value = "5"))]
    pub(crate) dilate_kernel: u8,

    /// Side length of the square erosion element, must be odd
    #[derivative(Default(value = "3"))]
    pub(crate) erode_kernel: u8,

    #[derivative(Default(value = "[255, 0, 0]"))]
    pub(crate) highlight: [u8; 3],
}

impl SegmentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight(&self) -> [u8; 3] {
        self.highlight
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.canny_low >= 0.0 && self.canny_high >= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "canny thresholds must be non-negative, got {}/{}",
                self.canny_low, self.canny_high
            )));
        }

        if self.canny_low > self.canny_high {
            return Err(Error::InvalidParameter(format!(
                "canny low threshold {} is above high threshold {}",
                self.canny_low, self.canny_high
            )));
        }

        for (name, size) in [
            ("dilate_kernel", self.dilate_kernel),
            ("erode_kernel", self.erode_kernel),
        ] {
            if size == 0 || size % 2 == 0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be a positive odd size, got {size}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SegmentConfig::new();
        assert_eq!(config.canny_low, 50.0);
        assert_eq!(config.canny_high, 150.0);
        assert_eq!(config.dilate_kernel, 5);
        assert_eq!(config.erode_kernel, 3);
        assert_eq!(config.highlight(), [255, 0, 0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_setters() {
        let config = SegmentConfig::new()
            .with_canny_low(10.0)
            .with_canny_high(20.0)
            .with_dilate_kernel(1)
            .with_highlight([0, 255, 0]);

        assert_eq!(config.canny_low, 10.0);
        assert_eq!(config.canny_high, 20.0);
        assert_eq!(config.dilate_kernel, 1);
        assert_eq!(config.highlight(), [0, 255, 0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            SegmentConfig::new().with_canny_low(200.0),
            SegmentConfig::new().with_canny_low(-1.0),
            SegmentConfig::new().with_canny_high(f32::NAN),
            SegmentConfig::new().with_dilate_kernel(0),
            SegmentConfig::new().with_dilate_kernel(4),
            SegmentConfig::new().with_erode_kernel(2),
        ];

        for config in bad {
            assert!(
                matches!(config.validate(), Err(Error::InvalidParameter(_))),
                "{config:?} should be rejected"
            );
        }
    }
}
