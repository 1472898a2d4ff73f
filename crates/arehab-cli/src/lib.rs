//! arehab-cli
//!
//! Command-line front end: loads a clinical record, runs the evaluator and
//! writes the printable documents or e-mails them. Also owns the on-disk
//! config and the optional username/password gate.

pub mod access;
pub mod commands;
pub mod config;
pub mod mail;
