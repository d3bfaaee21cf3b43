//! Zorn painter CLI library.
//!
//! This crate provides the command implementations behind the `zorn`
//! binary: input loading plus the render, frame, intents, analyze and
//! validate commands.

pub mod commands;
pub mod input;
