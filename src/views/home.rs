// src/views/home.rs

use maud::{Markup, html};

use super::page;

pub fn home() -> Markup {
    page(
        "Welcome",
        html! {
            p { "Test your knowledge of Ghana with five quick questions." }
            p {
                a href="/quiz" { "Start the quiz" }
                " or see who is on top of the "
                a href="/history" { "leaderboard" }
                "."
            }
        },
    )
}
