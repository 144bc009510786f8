// src/views/mod.rs

//! HTML pages. Every value interpolated with `(..)` is escaped by maud.

pub mod home;
pub mod leaderboard;
pub mod quiz;

use maud::{DOCTYPE, Markup, html};

/// Site name shown in the page header and tab title.
pub const SITE_TITLE: &str = "Ghana Quiz";

/// Wraps page content in the shared document shell.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_TITLE) }
            }
            body {
                header {
                    nav {
                        a href="/" { "Home" }
                        " | "
                        a href="/quiz" { "Take the quiz" }
                        " | "
                        a href="/history" { "Leaderboard" }
                    }
                }
                main {
                    h1 { (title) }
                    (content)
                }
            }
        }
    }
}
