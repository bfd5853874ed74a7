//! Helpers for asserting on what a [`Sink`](crate::sink::Sink) writes.

mod capture;
pub use capture::*;
