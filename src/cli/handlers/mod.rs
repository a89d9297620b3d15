// src/cli/handlers/mod.rs

// One module per menu action that this binary implements itself.

pub mod external;
pub mod info;
pub mod scheduler;
pub mod settings;
