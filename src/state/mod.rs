/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures decoded from the API (data.rs)
/// - The displayed character list (roster.rs)

pub mod data;
pub mod roster;
