//! Shared constants for the LÖVE web export pipeline
pub mod converter;
pub mod layout;
pub mod placeholder;
