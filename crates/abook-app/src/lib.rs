//! Command line front end for the address-book vCard engine.

pub mod cli;
pub mod commands;
pub mod error;
