//! The built-in quiz catalog.
//!
//! Static content, never persisted, never user-editable. Custom quizzes live
//! in the store; lookup across both is the caller's job.

use crate::model::{Question, Quiz, QuizSummary};

/// All built-in quizzes, in presentation order.
pub fn builtin_quizzes() -> Vec<Quiz> {
    vec![agent_fundamentals(), prompt_engineering(), model_selection()]
}

/// Find a built-in quiz by id.
pub fn find_builtin(id: &str) -> Option<Quiz> {
    builtin_quizzes().into_iter().find(|quiz| quiz.id == id)
}

/// Listing summaries for every built-in quiz.
pub fn builtin_summaries() -> Vec<QuizSummary> {
    builtin_quizzes().iter().map(Quiz::summary).collect()
}

fn question(
    id: i64,
    text: &str,
    options: [&str; 4],
    correct_answer: usize,
    explanation: &str,
) -> Question {
    Question {
        id,
        question: text.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer,
        explanation: explanation.to_string(),
    }
}

fn agent_fundamentals() -> Quiz {
    Quiz {
        id: "agent-fundamentals".into(),
        title: "Agent Fundamentals".into(),
        description: "Test your knowledge of AI agent design and implementation".into(),
        questions: vec![
            question(
                1,
                "What is the primary purpose of an AI agent?",
                [
                    "To replace human workers",
                    "To autonomously perform tasks and make decisions",
                    "To store large amounts of data",
                    "To create visual interfaces",
                ],
                1,
                "AI agents are designed to autonomously perform tasks and make decisions \
                 based on their environment and goals.",
            ),
            question(
                2,
                "Which component is essential for an AI agent to learn from experience?",
                [
                    "A graphical user interface",
                    "A feedback mechanism",
                    "A database connection",
                    "A payment processor",
                ],
                1,
                "A feedback mechanism allows agents to learn from their actions and improve \
                 over time.",
            ),
            question(
                3,
                "What is 'context window' in relation to AI models?",
                [
                    "The browser window where AI runs",
                    "The maximum amount of text a model can process at once",
                    "The time period for model training",
                    "The user interface for model configuration",
                ],
                1,
                "The context window defines how much information an AI model can consider \
                 in a single interaction.",
            ),
            question(
                4,
                "Which strategy helps manage limited context windows?",
                [
                    "Adding more servers",
                    "Using larger fonts",
                    "Summarization and chunking",
                    "Increasing screen resolution",
                ],
                2,
                "Summarization and chunking help fit relevant information within context \
                 limits.",
            ),
            question(
                5,
                "What is 'prompt engineering'?",
                [
                    "Building physical AI hardware",
                    "Designing effective instructions for AI models",
                    "Creating user interfaces",
                    "Managing cloud infrastructure",
                ],
                1,
                "Prompt engineering is the practice of designing and optimizing inputs to \
                 get desired outputs from AI models.",
            ),
        ],
        is_custom: None,
    }
}

fn prompt_engineering() -> Quiz {
    Quiz {
        id: "prompt-engineering".into(),
        title: "Prompt Engineering".into(),
        description: "Master the art of crafting effective AI prompts".into(),
        questions: vec![
            question(
                1,
                "What is the main goal of prompt engineering?",
                [
                    "To make prompts as long as possible",
                    "To get consistent and accurate outputs from AI models",
                    "To confuse the AI model",
                    "To reduce AI processing time",
                ],
                1,
                "Prompt engineering aims to craft inputs that produce consistent, accurate, \
                 and useful outputs from AI models.",
            ),
            question(
                2,
                "Which technique involves showing the AI examples of desired outputs?",
                [
                    "Zero-shot prompting",
                    "Few-shot prompting",
                    "Chain-of-thought prompting",
                    "Negative prompting",
                ],
                1,
                "Few-shot prompting provides examples of input-output pairs to guide the AI \
                 model.",
            ),
            question(
                3,
                "What is 'chain-of-thought' prompting?",
                [
                    "Linking multiple AI models together",
                    "Asking the AI to explain its reasoning step by step",
                    "Creating a sequence of unrelated prompts",
                    "Using blockchain for AI",
                ],
                1,
                "Chain-of-thought prompting encourages the model to break down complex \
                 problems into steps.",
            ),
            question(
                4,
                "Why is specificity important in prompts?",
                [
                    "It makes prompts longer",
                    "It reduces ambiguity and improves output quality",
                    "It increases processing costs",
                    "It confuses the AI",
                ],
                1,
                "Specific prompts reduce ambiguity, helping the AI understand exactly what \
                 output is expected.",
            ),
            question(
                5,
                "What is a system prompt?",
                [
                    "An error message from the AI",
                    "Instructions that set the AI behavior and context",
                    "The first user message",
                    "A debugging tool",
                ],
                1,
                "System prompts establish the AI role, tone, and constraints before user \
                 interaction begins.",
            ),
        ],
        is_custom: None,
    }
}

fn model_selection() -> Quiz {
    Quiz {
        id: "model-selection".into(),
        title: "Model Selection".into(),
        description: "Learn how to choose the right AI model for your task".into(),
        questions: vec![
            question(
                1,
                "What should you consider first when selecting an AI model?",
                [
                    "The model with the highest price",
                    "The specific task requirements and constraints",
                    "The most popular model",
                    "The newest model available",
                ],
                1,
                "Model selection should start with understanding your task requirements, \
                 constraints, and goals.",
            ),
            question(
                2,
                "What is the trade-off between model size and inference speed?",
                [
                    "Larger models are always faster",
                    "Larger models are typically slower but more capable",
                    "Model size does not affect speed",
                    "Smaller models are always less accurate",
                ],
                1,
                "Larger models generally offer better capabilities but require more compute \
                 and time for inference.",
            ),
            question(
                3,
                "When might you choose a smaller, specialized model over a large general model?",
                [
                    "Never, larger is always better",
                    "When you need faster responses and lower costs for specific tasks",
                    "Only for testing purposes",
                    "When accuracy does not matter",
                ],
                1,
                "Specialized smaller models can be more efficient and cost-effective for \
                 specific use cases.",
            ),
            question(
                4,
                "What is fine-tuning in the context of AI models?",
                [
                    "Adjusting the volume of AI responses",
                    "Training a pre-trained model on domain-specific data",
                    "Making the model interface prettier",
                    "Reducing the model size",
                ],
                1,
                "Fine-tuning adapts a pre-trained model to perform better on specific tasks \
                 or domains.",
            ),
            question(
                5,
                "What factor is most important for real-time applications?",
                [
                    "Model accuracy only",
                    "Latency and response time",
                    "Training data size",
                    "Model release date",
                ],
                1,
                "Real-time applications prioritize low latency to provide responsive user \
                 experiences.",
            ),
        ],
        is_custom: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    #[test]
    fn catalog_has_three_quizzes_of_five_questions() {
        let quizzes = builtin_quizzes();
        assert_eq!(quizzes.len(), 3);
        for quiz in &quizzes {
            assert_eq!(quiz.questions.len(), 5, "{}", quiz.id);
            assert_eq!(quiz.is_custom, None);
        }
    }

    #[test]
    fn catalog_ids_are_unique_and_findable() {
        let quizzes = builtin_quizzes();
        for quiz in &quizzes {
            assert_eq!(find_builtin(&quiz.id).as_ref(), Some(quiz));
        }
        assert_eq!(find_builtin("nope"), None);
    }

    #[test]
    fn every_catalog_quiz_passes_shape_validation() {
        for quiz in builtin_quizzes() {
            let value = serde_json::to_value(&quiz).unwrap();
            assert!(validate::validate_quiz(&value), "{}", quiz.id);
        }
    }

    #[test]
    fn every_correct_answer_is_in_range() {
        for quiz in builtin_quizzes() {
            for question in &quiz.questions {
                assert!(
                    question.correct_answer < question.options.len(),
                    "{} question {}",
                    quiz.id,
                    question.id
                );
            }
        }
    }

    #[test]
    fn summaries_mirror_the_catalog() {
        let summaries = builtin_summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].question_count, 5);
    }
}
