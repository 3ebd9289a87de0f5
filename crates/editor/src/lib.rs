// Library crate: the authoritative scene state for the editor session.
// Rendering, picking, and widget code live in the consuming view crates.

pub mod command;
pub mod harness;
pub mod state;
