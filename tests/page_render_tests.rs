use gradeplan::{
    grade::compute,
    page::{PageView, render},
    web::INVALID_INPUT_MESSAGE,
};

#[test]
fn plan_panel_shows_every_result_field() {
    let plan = compute(100.0).expect("100 is a valid grade");
    let html = render(&PageView::Plan(&plan));

    assert!(html.contains("Prelim Grade: 100</p>"));
    assert!(html.contains("Required Midterm Grade: 20.63</p>"));
    assert!(html.contains("Required Final Grade: 34.38</p>"));
    assert!(html.contains("You have a chance to pass!"));
    assert!(html.contains("Dean's Lister Status: Required: 26.25 (Midterm) and 43.75 (Final).</p>"));
}

#[test]
fn zero_grade_panel_matches_the_worked_example() {
    let plan = compute(0.0).expect("0 is a valid grade");
    let html = render(&PageView::Plan(&plan));

    assert!(html.contains("Prelim Grade: 0</p>"));
    assert!(html.contains("Required Midterm Grade: 28.13</p>"));
    assert!(html.contains("Required Final Grade: 46.88</p>"));
    assert!(html.contains("Dean's Lister Status: Required: 33.75 (Midterm) and 56.25 (Final).</p>"));
}

#[test]
fn error_panel_carries_the_validation_message() {
    let html = render(&PageView::Error(INVALID_INPUT_MESSAGE));

    assert!(html.contains(r#"<div class="error">"#));
    assert!(html.contains(INVALID_INPUT_MESSAGE));
    assert!(!html.contains("Results:"));
}

#[test]
fn form_still_posts_back_to_the_same_page() {
    let html = render(&PageView::Form);

    assert!(html.contains(r#"<form method="POST" action="/">"#));
    assert!(html.contains(r#"min="0" max="100" step="0.01""#));
}
