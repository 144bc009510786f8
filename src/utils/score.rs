// src/utils/score.rs

use crate::models::{question::Question, quiz_result::QuestionOutcome};

/// Percentage of answers matching the key, truncated toward zero.
///
/// Labels are compared exactly (case-sensitive). A missing answer is wrong
/// regardless of the key. An empty key scores 0.
pub fn score(answers: &[Option<String>], answer_key: &[&str]) -> u8 {
    if answer_key.is_empty() {
        return 0;
    }

    let correct = answer_key
        .iter()
        .enumerate()
        .filter(|(i, key)| {
            answers
                .get(*i)
                .and_then(|a| a.as_deref())
                .is_some_and(|a| a == **key)
        })
        .count();

    (correct * 100 / answer_key.len()) as u8
}

/// Pairs every question with the submitted guess for the result page.
pub fn outcomes(questions: &[Question], answers: &[Option<String>]) -> Vec<QuestionOutcome> {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let guess = answers.get(i).cloned().flatten();
            let is_correct = guess.as_deref() == Some(q.answer);
            QuestionOutcome {
                prompt: q.prompt,
                answer: q.answer,
                guess,
                is_correct,
            }
        })
        .collect()
}
