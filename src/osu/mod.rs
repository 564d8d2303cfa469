/// Difficulty calculation for osu!standard.
pub mod difficulty;
