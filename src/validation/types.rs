//! Structured rule outcomes
//!
//! Every rule reports acceptance as a value; nothing here is an error.

use serde::Serialize;

/// Plain accept/reject outcome with a user-facing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationReport {
    pub fn accepted(message: impl Into<String>) -> Self {
        ValidationReport {
            is_valid: true,
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        ValidationReport {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Soil-coverage outcome. When the candidate spills over the property
/// boundary, `clip_result` carries the intersection the caller must
/// store instead of the original geometry.
#[derive(Debug, Clone)]
pub struct SoilCoverageReport<G> {
    pub is_valid: bool,
    pub message: String,
    pub clip_result: Option<G>,
}

/// Complete-coverage outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    pub is_valid: bool,
    pub coverage_percentage: f64,
    pub message: String,
}

impl CoverageReport {
    pub fn incomplete(message: impl Into<String>) -> Self {
        CoverageReport {
            is_valid: false,
            coverage_percentage: 0.0,
            message: message.into(),
        }
    }
}

/// Anthropized-area result: the part of the property covered by no
/// declared layer.
#[derive(Debug, Clone)]
pub struct AnthropizedArea<G> {
    pub area_ha: f64,
    pub geometry: Option<G>,
}

impl<G> AnthropizedArea<G> {
    pub fn zero() -> Self {
        AnthropizedArea {
            area_ha: 0.0,
            geometry: None,
        }
    }
}

/// Display classification of a coverage percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    Exception,
    Warning,
    Success,
}

impl CoverageStatus {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 95.0 {
            CoverageStatus::Exception
        } else if percentage < 100.0 {
            CoverageStatus::Warning
        } else {
            CoverageStatus::Success
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_status_bands() {
        assert_eq!(CoverageStatus::from_percentage(0.0), CoverageStatus::Exception);
        assert_eq!(CoverageStatus::from_percentage(94.9), CoverageStatus::Exception);
        assert_eq!(CoverageStatus::from_percentage(95.0), CoverageStatus::Warning);
        assert_eq!(CoverageStatus::from_percentage(99.9), CoverageStatus::Warning);
        assert_eq!(CoverageStatus::from_percentage(100.0), CoverageStatus::Success);
    }
}
