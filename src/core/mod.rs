// src/core/mod.rs

pub mod config_resolver;
pub mod env_source;
pub mod feature_flags;
pub mod menu;
pub mod menu_catalog;
pub mod menu_render;
