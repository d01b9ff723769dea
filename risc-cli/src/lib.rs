//! RISC command-line harness.
//!
//! Everything outside the VM proper: reading files, seeding the stack with
//! command-line parameters, tracing, and reporting errors.

pub mod commands;
pub mod params;
