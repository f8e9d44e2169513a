// src/engine/mod.rs

//! Pure scoring logic. Nothing in here touches storage or the network;
//! handlers fetch rows and pass them in.

pub mod history;
pub mod placement;
pub mod ranking;

pub use placement::predict;
pub use ranking::compute_leaderboard;
