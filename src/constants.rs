#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Weight of the prelim exam in the final course grade.
pub const PRELIM_WEIGHT: f64 = 0.20;

/// Weight of the midterm exam in the final course grade.
pub const MIDTERM_WEIGHT: f64 = 0.30;

/// Weight of the final exam in the final course grade.
pub const FINAL_WEIGHT: f64 = 0.50;

/// Combined weight of the two remaining exams. Any required remaining
/// contribution is split over this divisor so the midterm and final keep
/// their 0.30 : 0.50 ratio.
pub const EXAM_WEIGHT: f64 = MIDTERM_WEIGHT + FINAL_WEIGHT;

/// Course grade needed to pass.
pub const PASSING_GRADE: f64 = 75.0;

/// Course grade needed to qualify for the Dean's List.
pub const DEAN_LIST_THRESHOLD: f64 = 90.0;

/// HTML page template served for every request
/// * `{{panel}}`: replaced with the results panel, the error panel, or
///   nothing for the bare form
pub const PAGE_TEMPLATE: &str = include_str!("templates/index.html");
