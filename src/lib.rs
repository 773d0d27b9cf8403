//! Flood station library - testable modules for the monitoring firmware.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code:
//! peripheral bring-up and the sampling/display/alert tasks.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]

// Configuration
pub mod config;

// Sampling and classification
pub mod reading;
pub mod risk;
pub mod units;

// Alert cadence and output shaping
pub mod blink;
pub mod buzzer;
pub mod icon;

// Display frame composition
pub mod frame;

// Producer/consumer plumbing
pub mod queues;
