//! Mask processing engine.
//!
//! The engine pairs the positions of a mask with the characters of a value in
//! one directional scan. It is split into small stateless helpers and one
//! state machine:
//!
//! ```text
//! mask + value ──┐
//!                │  PatternAnalyzer::optional_budget   (analyzer.rs)
//!                └──────────────┬──────────────
//!                               │
//!                               v
//!                   MaskProcessor::process (processor.rs)
//!                     per mask position:
//!                       - escaped?          ─ literal
//!                       - escape marker?    ─ skip
//!                       - literal?          ─ place if a token lies ahead
//!                       - token?            ─ fill / default / halt
//!                     placement via place() (placement.rs)
//!                               │
//!                               v
//!                     MaskResult { result, valid }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `analyzer.rs`: read-only queries over a mask and a catalog (escape
//!   parity, lookahead for tokens, the optional-digit budget).
//! - `placement.rs`: directional append/prepend and positional insertion.
//! - `processor.rs`: the scan itself.
//! - `trace.rs`: opt-in per-step record of a scan, used by verbose output.
//!
//! ## Debugging
//!
//! The processor emits `tracing` events under the `strmask` target: one
//! `trace` event per mask position and a `debug` event when a scan halts.

#[path = "engine/analyzer.rs"]
mod analyzer;
#[path = "engine/placement.rs"]
mod placement;
#[path = "engine/processor.rs"]
mod processor;
#[path = "engine/trace.rs"]
mod trace;


pub use analyzer::PatternAnalyzer;
pub use placement::{insert_at, place};
pub use processor::MaskProcessor;
pub use trace::{HaltReason, ScanStep, ScanTrace, StepKind};
