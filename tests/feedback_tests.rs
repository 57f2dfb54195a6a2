use palavra::{Correction, Feedback, Scoring};

fn feedbacks(guess: &str, secret: &str, scoring: Scoring) -> Vec<Feedback> {
    Correction::calculate(guess, secret, scoring).feedbacks().to_vec()
}

#[test]
fn test_all_correct() {
    let correction = Correction::calculate("mango", "mango", Scoring::Naive);
    assert!(correction.is_win());
    assert_eq!(correction.len(), 5);
}

#[test]
fn test_all_absent() {
    assert_eq!(
        feedbacks("quick", "dream", Scoring::Naive),
        vec![Feedback::Absent; 5]
    );
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        feedbacks("magic", "mango", Scoring::Naive),
        vec![
            Feedback::Correct,
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_naive_marks_every_repeated_letter() {
    // "creep" has two e's but only one p; both p's of "puppy" count as present.
    assert_eq!(
        feedbacks("puppy", "creep", Scoring::Naive),
        vec![
            Feedback::Present,
            Feedback::Absent,
            Feedback::Present,
            Feedback::Present,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_duplicate_aware_limits_repeated_letters() {
    assert_eq!(
        feedbacks("puppy", "creep", Scoring::DuplicateAware),
        vec![
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_duplicate_guess_limited_target() {
    assert_eq!(
        feedbacks("geese", "creep", Scoring::DuplicateAware),
        vec![
            Feedback::Absent,
            Feedback::Present,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
    assert_eq!(
        feedbacks("geese", "creep", Scoring::Naive),
        vec![
            Feedback::Absent,
            Feedback::Present,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Present,
        ]
    );
}

#[test]
fn test_scoring_agrees_without_repeats() {
    for (guess, secret) in [("crane", "charm"), ("magic", "mango"), ("tango", "mango")] {
        assert_eq!(
            Correction::calculate(guess, secret, Scoring::Naive),
            Correction::calculate(guess, secret, Scoring::DuplicateAware),
            "{} against {}",
            guess,
            secret
        );
    }
}

#[test]
fn test_non_ascii_letters_compare_per_char() {
    assert_eq!(
        feedbacks("ñandu", "andun", Scoring::Naive),
        vec![
            Feedback::Absent,
            Feedback::Present,
            Feedback::Present,
            Feedback::Present,
            Feedback::Present,
        ]
    );
}

#[test]
fn test_default_scoring_is_naive() {
    assert_eq!(Scoring::default(), Scoring::Naive);
}

#[test]
fn test_empty_correction_is_not_a_win() {
    assert!(!Correction::new(Vec::new()).is_win());
}

#[test]
fn test_emoji_display() {
    let correction = Correction::new(vec![
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(correction.to_emoji_string(), "🟩🟨🟥🟥🟩");
    assert_eq!(correction.to_string(), "🟩🟨🟥🟥🟩");
}
