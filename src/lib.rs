//! # gradeplan
//!
//! A small web tool that tells a student what midterm and final exam grades
//! they still need in order to pass their course, or to qualify for the
//! Dean's List.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// For runtime server settings sourced from the environment
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// For all things related to computing required grades
pub mod grade;
/// For rendering the HTML page shown to the student
pub mod page;
/// For the HTTP surface: routes, handlers, and the serve loop
pub mod web;

pub use grade::{
    DeanOutlook, GradePlan, InvalidGrade, PassOutlook, Requirement, compute, parse_grade,
};
