// src/views/leaderboard.rs

use maud::{Markup, html};

use super::page;
use crate::models::quiz_result::QuizResult;

pub fn leaderboard(results: &[QuizResult]) -> Markup {
    page(
        "Leaderboard",
        html! {
            @if results.is_empty() {
                p { "No results yet. " a href="/quiz" { "Be the first!" } }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Rank" }
                            th { "Name" }
                            th { "Score" }
                            th { "Date" }
                        }
                    }
                    tbody {
                        @for (rank, r) in results.iter().enumerate() {
                            tr {
                                td { (rank + 1) }
                                td.name { (r.name) }
                                td { (r.score) "%" }
                                td { (r.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()) }
                            }
                        }
                    }
                }
            }
        },
    )
}
