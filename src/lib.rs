//! modl - Model Context Protocol core
//!
//! This crate provides a structured context for driving a language model
//! (instruction, goal, profile, documents, tools, history, memory) and an
//! interpreter that runs the tool directives embedded in model responses.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
