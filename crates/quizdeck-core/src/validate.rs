//! Shape validation and input sanitization.
//!
//! Persisted blobs come back from the backend as untrusted JSON: written by
//! an older build, hand-edited, or truncated mid-write. These predicates
//! decide whether a decoded value matches each record shape before it is
//! allowed near the typed model. Validation is all-or-nothing per record:
//! one malformed element invalidates the whole thing; nothing is repaired.
//!
//! Known leniencies, kept on purpose: `correctAnswer` is not range-checked
//! against `options`, `options` has no minimum length, and `isLearnMode` on
//! an attempt is never type-checked even when present (while `isCustom` on a
//! quiz is). Tests pin these down so a future tightening shows up as a diff.

use serde_json::Value;

fn is_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(_)))
}

// JSON numbers cannot be NaN, so "numeric and not NaN" is just "numeric".
fn is_number(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Number(_)))
}

fn is_bool(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

fn is_string_array(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Array(items)) if items.iter().all(Value::is_string))
}

fn is_array_of(value: Option<&Value>, check: fn(&Value) -> bool) -> bool {
    matches!(value, Some(Value::Array(items)) if items.iter().all(|item| check(item)))
}

/// True if `value` has the shape of a [`crate::model::Question`].
pub fn validate_question(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    is_number(obj.get("id"))
        && is_string(obj.get("question"))
        && is_string_array(obj.get("options"))
        && is_number(obj.get("correctAnswer"))
        && is_string(obj.get("explanation"))
}

/// True if `value` has the shape of a [`crate::model::Quiz`].
///
/// `isCustom` may be absent; when present it must be a boolean.
pub fn validate_quiz(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    is_string(obj.get("id"))
        && is_string(obj.get("title"))
        && is_string(obj.get("description"))
        && is_array_of(obj.get("questions"), validate_question)
        && obj.get("isCustom").is_none_or(Value::is_boolean)
}

/// True if `value` has the shape of a [`crate::model::UserProfile`].
pub fn validate_user_profile(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    is_string(obj.get("username")) && is_string(obj.get("createdAt"))
}

/// True if `value` has the shape of a [`crate::model::UserAnswer`].
pub fn validate_user_answer(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    is_number(obj.get("questionId"))
        && is_number(obj.get("selectedAnswer"))
        && is_bool(obj.get("isCorrect"))
}

/// True if `value` has the shape of a [`crate::model::QuizAttempt`].
///
/// `isLearnMode` is not checked at all, even when present with a wrong type.
pub fn validate_quiz_attempt(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    is_string(obj.get("id"))
        && is_string(obj.get("quizId"))
        && is_string(obj.get("quizTitle"))
        && is_array_of(obj.get("answers"), validate_user_answer)
        && is_number(obj.get("score"))
        && is_number(obj.get("totalQuestions"))
        && is_number(obj.get("percentage"))
        && is_string(obj.get("completedAt"))
}

/// True if `value` has the shape of a [`crate::model::UserProgress`].
///
/// `profile` must be present and be either `null` (no profile yet) or a
/// valid profile; `attempts` must be an array of valid attempts.
pub fn validate_user_progress(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let profile_ok = match obj.get("profile") {
        Some(Value::Null) => true,
        Some(profile) => validate_user_profile(profile),
        None => false,
    };
    profile_ok && is_array_of(obj.get("attempts"), validate_quiz_attempt)
}

/// True if `value` is an array where every element is a valid quiz.
pub fn validate_quiz_list(value: &Value) -> bool {
    matches!(value, Value::Array(items) if items.iter().all(validate_quiz))
}

/// Character limits applied when authoring content.
pub mod limits {
    pub const USERNAME: usize = 50;
    pub const QUIZ_TITLE: usize = 100;
    pub const QUIZ_DESCRIPTION: usize = 500;
    pub const QUESTION_TEXT: usize = 1000;
    pub const OPTION_TEXT: usize = 500;
    pub const EXPLANATION_TEXT: usize = 2000;
}

/// Trim surrounding whitespace, then truncate to `max_chars` characters.
///
/// Never rejects — over-long input is cut, not errored.
pub fn sanitize_text(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question() -> Value {
        json!({
            "id": 1,
            "question": "What is two plus two?",
            "options": ["three", "four"],
            "correctAnswer": 1,
            "explanation": "Basic arithmetic."
        })
    }

    fn quiz() -> Value {
        json!({
            "id": "math-basics",
            "title": "Math Basics",
            "description": "Arithmetic warm-up",
            "questions": [question()]
        })
    }

    fn attempt() -> Value {
        json!({
            "id": "a1",
            "quizId": "math-basics",
            "quizTitle": "Math Basics",
            "answers": [{"questionId": 1, "selectedAnswer": 1, "isCorrect": true}],
            "score": 1,
            "totalQuestions": 1,
            "percentage": 100,
            "completedAt": "2024-01-02T00:00:00Z"
        })
    }

    fn progress() -> Value {
        json!({
            "profile": {"username": "Ada", "createdAt": "2024-01-01T00:00:00Z"},
            "attempts": [attempt()]
        })
    }

    #[test]
    fn accepts_valid_records() {
        assert!(validate_question(&question()));
        assert!(validate_quiz(&quiz()));
        assert!(validate_quiz_attempt(&attempt()));
        assert!(validate_user_progress(&progress()));
        assert!(validate_quiz_list(&json!([quiz()])));
    }

    #[test]
    fn rejects_question_missing_any_required_field() {
        for field in ["id", "question", "options", "correctAnswer", "explanation"] {
            let mut value = question();
            value.as_object_mut().unwrap().remove(field);
            assert!(!validate_question(&value), "accepted without {field}");
        }
    }

    #[test]
    fn rejects_question_with_mistyped_fields() {
        let mut value = question();
        value["id"] = json!("1");
        assert!(!validate_question(&value));

        let mut value = question();
        value["options"] = json!(["ok", 7]);
        assert!(!validate_question(&value));

        let mut value = question();
        value["correctAnswer"] = json!(true);
        assert!(!validate_question(&value));
    }

    #[test]
    fn question_out_of_range_correct_answer_is_accepted() {
        // Range-checking correctAnswer against options is deliberately out
        // of scope for the shape check.
        let mut value = question();
        value["correctAnswer"] = json!(99);
        assert!(validate_question(&value));
        let mut value = question();
        value["options"] = json!(["only one"]);
        assert!(validate_question(&value));
    }

    #[test]
    fn non_integer_numerics_pass_the_shape_check() {
        let mut value = question();
        value["correctAnswer"] = json!(1.5);
        assert!(validate_question(&value));
    }

    #[test]
    fn one_bad_question_invalidates_the_quiz() {
        let mut value = quiz();
        value["questions"]
            .as_array_mut()
            .unwrap()
            .push(json!({"id": 2}));
        assert!(!validate_quiz(&value));
    }

    #[test]
    fn quiz_is_custom_must_be_boolean_when_present() {
        let mut value = quiz();
        value["isCustom"] = json!(true);
        assert!(validate_quiz(&value));
        value["isCustom"] = json!("yes");
        assert!(!validate_quiz(&value));
    }

    #[test]
    fn attempt_is_learn_mode_is_never_type_checked() {
        // Asymmetric with isCustom above; kept that way on purpose.
        let mut value = attempt();
        value["isLearnMode"] = json!("yes");
        assert!(validate_quiz_attempt(&value));
    }

    #[test]
    fn rejects_attempt_missing_any_required_field() {
        for field in [
            "id",
            "quizId",
            "quizTitle",
            "answers",
            "score",
            "totalQuestions",
            "percentage",
            "completedAt",
        ] {
            let mut value = attempt();
            value.as_object_mut().unwrap().remove(field);
            assert!(!validate_quiz_attempt(&value), "accepted without {field}");
        }
    }

    #[test]
    fn rejects_attempt_with_malformed_answer_element() {
        let mut value = attempt();
        value["answers"].as_array_mut().unwrap().push(json!(5));
        assert!(!validate_quiz_attempt(&value));
    }

    #[test]
    fn progress_profile_may_be_null_but_not_absent() {
        let value = json!({"profile": null, "attempts": []});
        assert!(validate_user_progress(&value));

        let value = json!({"attempts": []});
        assert!(!validate_user_progress(&value));
    }

    #[test]
    fn rejects_progress_with_mistyped_members() {
        assert!(!validate_user_progress(&json!({"profile": 5, "attempts": []})));
        assert!(!validate_user_progress(
            &json!({"profile": null, "attempts": "x"})
        ));
        assert!(!validate_user_progress(
            &json!({"profile": null, "attempts": [{"id": "a1"}]})
        ));
    }

    #[test]
    fn one_bad_attempt_invalidates_the_whole_progress_record() {
        let mut value = progress();
        value["attempts"].as_array_mut().unwrap().push(json!({}));
        assert!(!validate_user_progress(&value));
    }

    #[test]
    fn rejects_non_object_values() {
        for value in [json!(null), json!(3), json!("x"), json!([])] {
            assert!(!validate_question(&value));
            assert!(!validate_quiz(&value));
            assert!(!validate_user_profile(&value));
            assert!(!validate_quiz_attempt(&value));
            assert!(!validate_user_progress(&value));
        }
        assert!(!validate_quiz_list(&json!({})));
    }

    #[test]
    fn sanitize_trims_then_truncates() {
        assert_eq!(sanitize_text("  hello world  ", 5), "hello");
        assert_eq!(sanitize_text("ok", 10), "ok");
        assert_eq!(sanitize_text("   ", 10), "");
    }

    #[test]
    fn sanitize_counts_characters_not_bytes() {
        assert_eq!(sanitize_text("héllö wörld", 5), "héllö");
    }
}
