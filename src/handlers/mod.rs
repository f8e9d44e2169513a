// src/handlers/mod.rs

pub mod course;
pub mod leaderboard;
pub mod note;
pub mod placement;
pub mod profile;
