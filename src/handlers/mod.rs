// src/handlers/mod.rs

pub mod history;
pub mod home;
pub mod quiz;
