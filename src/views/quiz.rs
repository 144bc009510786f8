// src/views/quiz.rs

use maud::{Markup, html};

use super::page;
use crate::models::{question::Question, quiz_result::QuestionOutcome};

/// The quiz form. Radio groups are named `q0..q{N-1}` with option labels as values.
pub fn form(questions: &[Question]) -> Markup {
    page(
        "Quiz",
        html! {
            form method="post" action="/quiz" {
                p {
                    label for="username" { "Your name: " }
                    input type="text" id="username" name="username" maxlength="50" required;
                }
                @for (i, q) in questions.iter().enumerate() {
                    fieldset {
                        legend { (i + 1) ". " (q.prompt) }
                        @for option in q.options {
                            @let (letter, _) = Question::split_option(option);
                            label {
                                input type="radio" name=(format!("q{}", i)) value=(letter);
                                " " (option)
                            }
                            br;
                        }
                    }
                }
                button type="submit" { "Submit" }
            }
        },
    )
}

/// Scored summary of a submission.
pub fn result(username: &str, outcomes: &[QuestionOutcome], score: u8) -> Markup {
    page(
        "Your result",
        html! {
            p { "Well done, " strong { (username) } "! You scored " strong.score { (score) "%" } "." }
            table {
                thead {
                    tr {
                        th { "Question" }
                        th { "Correct answer" }
                        th { "Your answer" }
                    }
                }
                tbody {
                    @for o in outcomes {
                        tr class=(if o.is_correct { "correct" } else { "wrong" }) {
                            td { (o.prompt) }
                            td { (o.answer) }
                            td {
                                @match &o.guess {
                                    Some(guess) => { (guess) }
                                    None => { em { "No answer" } }
                                }
                            }
                        }
                    }
                }
            }
            p { a href="/history" { "See the leaderboard" } }
        },
    )
}
