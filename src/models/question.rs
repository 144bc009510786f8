// src/models/question.rs

/// A single multiple-choice question.
///
/// Options carry their label as a prefix (e.g. "A. Tamale"); `answer` is the
/// bare label of the correct option.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    /// The text of the question.
    pub prompt: &'static str,

    /// Labeled options, in display order.
    pub options: &'static [&'static str],

    /// Label of the correct option (e.g. "D").
    pub answer: &'static str,
}

impl Question {
    /// Splits an option such as "A. Tamale" into ("A", "Tamale").
    /// Options without a label prefix are returned whole as both parts.
    pub fn split_option(option: &str) -> (&str, &str) {
        match option.split_once(". ") {
            Some((label, text)) => (label, text),
            None => (option, option),
        }
    }
}

/// The fixed, ordered set of questions served by the quiz.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    pub const fn new(questions: &'static [Question]) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Correct labels, one per question, in question order.
    pub fn answer_key(&self) -> Vec<&'static str> {
        self.questions.iter().map(|q| q.answer).collect()
    }
}

/// Questions served on `/quiz`.
pub static QUESTION_BANK: QuestionBank = QuestionBank::new(&[
    Question {
        prompt: "What is the capital town of Ghana?",
        options: &["A. Tamale", "B. Sunyani", "C. Cape Coast", "D. Accra"],
        answer: "D",
    },
    Question {
        prompt: "Who was the first president of Ghana?",
        options: &["A. Atta Mills", "B. Rawlings", "C. Kwame Nkrumah", "D. Kufuor"],
        answer: "C",
    },
    Question {
        prompt: "Who was the vice president for Professor Atta Mills?",
        options: &["A. Aliu Mahama", "B. John Mahama", "C. Bawumia", "D. Akufo-Addo"],
        answer: "B",
    },
    Question {
        prompt: "Who is the minority leader of NDC in the 8th parliament?",
        options: &[
            "A. Alban Bagbin",
            "B. Haruna Idrisu",
            "C. Ato Forson",
            "D. Afenyo Markin",
        ],
        answer: "C",
    },
    Question {
        prompt: "Who is the current finance minister?",
        options: &[
            "A. Ken Ofori Atta",
            "B. Ato Forson",
            "C. Haruna Idrisu",
            "D. Abu Jinapor",
        ],
        answer: "B",
    },
]);
