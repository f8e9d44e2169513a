// src/models/mod.rs

pub mod course;
pub mod leaderboard;
pub mod mock_test;
pub mod note;
pub mod placement;
pub mod profile;
