//! Walk through the whole stack against a file-backed store:
//! create a profile, play a built-in quiz, and print the resulting
//! statistics and leaderboard.
//!
//! Run with: `cargo run --example quickstart`

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use quizdeck_core::model::UserProfile;
use quizdeck_core::session::{QuizSession, SessionOptions};
use quizdeck_core::{catalog, leaderboard, statistics};
use quizdeck_store::{FileBackend, QuizStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let backend = FileBackend::open("quizdeck-data.json")?;
    let mut store = QuizStore::new(backend);

    if store.profile().is_none() {
        store.set_profile(UserProfile {
            username: "demo".into(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        });
    }
    let profile = store.profile().expect("profile was just created");

    // Play one catalog quiz, always picking the first option.
    let quiz = catalog::builtin_quizzes().remove(0);
    let mut session = QuizSession::new(
        &quiz,
        SessionOptions {
            shuffle: true,
            learn_mode: false,
        },
    );
    while let Some(question) = session.current() {
        println!("Q{}: {}", session.position() + 1, question.question);
        let correct = session.submit(0).expect("option 0 always exists");
        let verdict = if correct { "correct" } else { "wrong" };
        println!("  answered option 0: {verdict}");
    }
    let attempt = session.finish();
    println!(
        "\nFinished '{}' with {}/{} ({}%)",
        attempt.quiz_title, attempt.score, attempt.total_questions, attempt.percentage
    );
    store.add_attempt(attempt);

    let attempts = store.attempts();
    let quizzes = catalog::builtin_quizzes();
    let summary = statistics::summarize(&attempts, &quizzes);
    println!(
        "History: {} attempts, average {}%, {} quizzes mastered",
        summary.total_attempts, summary.average_percentage, summary.quizzes_mastered
    );

    let standing = leaderboard::PlayerStanding::from_history(&profile, &attempts, &quizzes);
    let board = leaderboard::rank(leaderboard::seed_entries(), Some(&standing));
    println!("\nLeaderboard:");
    for (index, entry) in board.iter().enumerate() {
        let marker = if entry.is_current_user { " (you)" } else { "" };
        println!(
            "  #{:<2} {:<14} avg {:>3}%  mastered {}  attempts {}{marker}",
            index + 1,
            entry.username,
            entry.average_score,
            entry.quizzes_mastered,
            entry.total_attempts
        );
    }

    Ok(())
}
