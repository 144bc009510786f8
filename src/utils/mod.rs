// src/utils/mod.rs

pub mod name;
pub mod score;
