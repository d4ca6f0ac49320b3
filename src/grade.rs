#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::Serialize;

use crate::constants::{
    DEAN_LIST_THRESHOLD, EXAM_WEIGHT, FINAL_WEIGHT, MIDTERM_WEIGHT, PASSING_GRADE, PRELIM_WEIGHT,
};

/// A prelim grade that cannot be computed on. Both causes surface to the
/// student as the same validation message; logs keep the distinction.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidGrade {
    /// The submitted value could not be read as a finite number.
    #[error("`{0}` is not a number.")]
    NotANumber(String),
    /// The submitted value is a number, but not a grade on the 0-100 scale.
    #[error("{0} is outside the 0 to 100 grading scale.")]
    OutOfRange(f64),
}

/// A required exam grade, or `NotApplicable` when no single requirement
/// exists (already passing, or the target is out of reach).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Requirement {
    /// The grade needed on the exam, rounded to two decimal places.
    Needed(f64),
    /// No requirement applies; rendered as `N/A`.
    NotApplicable,
}

impl Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Requirement::Needed(grade) => write!(f, "{grade:.2}"),
            Requirement::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Whether passing the course is still within reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PassOutlook {
    /// The remaining exams can still carry the student over the passing
    /// threshold.
    ChanceToPass,
    /// The required exam grades exceed the maximum possible grade.
    ExceedsMaximum,
}

impl Display for PassOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassOutlook::ChanceToPass => write!(f, "You have a chance to pass!"),
            PassOutlook::ExceedsMaximum => {
                write!(f, "It is difficult to pass. Required grades exceed maximum limit.")
            }
        }
    }
}

/// Standing relative to the Dean's Lister threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum DeanOutlook {
    /// The prelim contribution alone already clears the threshold.
    AlreadyQualified,
    /// The threshold is reachable; carries the required values for the
    /// remaining exams.
    Achievable {
        /// Required midterm value, rounded to two decimal places.
        midterm:     f64,
        /// Required final exam value, rounded to two decimal places.
        final_grade: f64,
    },
    /// The required contributions exceed the maximum possible grade.
    NotPossible,
}

impl Display for DeanOutlook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeanOutlook::AlreadyQualified => {
                write!(f, "Already qualified for Dean's Lister with current Prelim grade.")
            }
            DeanOutlook::Achievable {
                midterm,
                final_grade,
            } => {
                write!(f, "Required: {midterm:.2} (Midterm) and {final_grade:.2} (Final).")
            }
            DeanOutlook::NotPossible => {
                write!(f, "Not possible to achieve Dean's Lister with current Prelim grade.")
            }
        }
    }
}

/// The computed plan for one validated prelim grade. Ephemeral; built fresh
/// for every request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradePlan {
    /// The validated prelim grade the plan was computed from.
    pub prelim_grade:        f64,
    /// The prelim grade's weighted share of the course grade.
    pub prelim_contribution: f64,
    /// Midterm grade needed to reach the passing threshold.
    pub midterm_required:    Requirement,
    /// Final exam grade needed to reach the passing threshold.
    pub final_required:      Requirement,
    /// Whether passing is still within reach.
    pub pass_outlook:        PassOutlook,
    /// Standing relative to the Dean's Lister threshold.
    pub dean_outlook:        DeanOutlook,
}

/// Parses and range-checks a raw form value before it reaches [`compute`].
pub fn parse_grade(raw: &str) -> Result<f64, InvalidGrade> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InvalidGrade::NotANumber(trimmed.to_string()))?;

    // "NaN" and "inf" parse successfully; neither is a grade.
    if !value.is_finite() {
        return Err(InvalidGrade::NotANumber(trimmed.to_string()));
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(InvalidGrade::OutOfRange(value));
    }

    Ok(value)
}

/// Computes the grades still needed to pass and to make the Dean's List.
///
/// Fails only when `prelim_grade` is not a finite number in `[0, 100]`; a
/// validated input always produces a plan.
pub fn compute(prelim_grade: f64) -> Result<GradePlan, InvalidGrade> {
    if !prelim_grade.is_finite() {
        return Err(InvalidGrade::NotANumber(prelim_grade.to_string()));
    }
    if !(0.0..=100.0).contains(&prelim_grade) {
        return Err(InvalidGrade::OutOfRange(prelim_grade));
    }

    let prelim_contribution = prelim_grade * PRELIM_WEIGHT;

    let required_total = PASSING_GRADE - prelim_contribution;
    let (midterm_required, final_required, pass_outlook) = if required_total <= 0.0 {
        // The prelim contributes at most 20 of the 75 needed, so valid
        // inputs never land here. When nothing more is required, no single
        // exam requirement applies and the outlook stays hopeful.
        (
            Requirement::NotApplicable,
            Requirement::NotApplicable,
            PassOutlook::ChanceToPass,
        )
    } else {
        let combined = required_total / EXAM_WEIGHT;
        let midterm = round2(combined * MIDTERM_WEIGHT);
        let final_grade = round2(combined * FINAL_WEIGHT);

        if midterm > 100.0 || final_grade > 100.0 {
            (
                Requirement::NotApplicable,
                Requirement::NotApplicable,
                PassOutlook::ExceedsMaximum,
            )
        } else {
            (
                Requirement::Needed(midterm),
                Requirement::Needed(final_grade),
                PassOutlook::ChanceToPass,
            )
        }
    };

    let required_for_dean = DEAN_LIST_THRESHOLD - prelim_contribution;
    let dean_outlook = if required_for_dean <= 0.0 {
        DeanOutlook::AlreadyQualified
    } else {
        let midterm = round2(required_for_dean * MIDTERM_WEIGHT / EXAM_WEIGHT);
        let final_grade = round2(required_for_dean * FINAL_WEIGHT / EXAM_WEIGHT);

        if midterm > 100.0 || final_grade > 100.0 {
            DeanOutlook::NotPossible
        } else {
            DeanOutlook::Achievable {
                midterm,
                final_grade,
            }
        }
    };

    Ok(GradePlan {
        prelim_grade,
        prelim_contribution,
        midterm_required,
        final_required,
        pass_outlook,
        dean_outlook,
    })
}

/// Rounds to two decimal places, half away from zero; 28.125 reports as
/// 28.13.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
