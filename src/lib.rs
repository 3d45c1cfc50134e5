//! # envprobe
//!
//! Environment fingerprinting probes. Each probe inspects one piece of live
//! OS or CPU state and answers with a tri-state [`probe::Verdict`].

pub mod probe;

pub use probe::{DetectionDetails, Fingerprinter, ProbeConfig, ProbeError, Verdict};
