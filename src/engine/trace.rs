//! Scan trace.
//!
//! A trace records what the processor did at each mask position it visited.
//! It is opt-in: [`MaskProcessor::process`](super::MaskProcessor::process)
//! records nothing, [`MaskProcessor::process_traced`](super::MaskProcessor::process_traced)
//! records every step.
//!
//! Positions are mask indices in `char`s, in visiting order (descending for
//! reverse scans).

use std::fmt;

/// Why a scan stopped before the end of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HaltReason {
    /// A literal (or escaped character) with no fillable token beyond it.
    DanglingLiteral,
    /// A required token could be neither filled nor defaulted. The result is
    /// invalid.
    RequiredUnmet,
    /// An optional token found no matching input or no budget left. Later
    /// required tokens are not evaluated and validity is untouched.
    OptionalUnmet,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HaltReason::DanglingLiteral => "dangling literal",
            HaltReason::RequiredUnmet => "required token unmet",
            HaltReason::OptionalUnmet => "optional token unmet",
        })
    }
}

/// What happened at one mask position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Escaped character copied through.
    Escaped,
    /// Escape marker consumed.
    EscapeMarker,
    /// Literal copied through.
    Literal,
    /// Token filled from the value.
    Filled { input: char, output: char, optional: bool },
    /// Required token filled with its default.
    Defaulted { output: char },
    /// Scan stopped here; nothing at or after this position was placed.
    Halted(HaltReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanStep {
    pub position: usize,
    pub mask_char: char,
    pub kind: StepKind,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanTrace {
    /// Optional-digit budget at the start of the scan.
    pub budget: usize,
    /// Budget left when the scan ended.
    pub budget_left: usize,
    /// Value characters consumed by fills.
    pub consumed: usize,
    /// Steps in visiting order.
    pub steps: Vec<ScanStep>,
    /// Set when the scan ended early.
    pub halt: Option<HaltReason>,
    /// Set when an empty value was rejected without scanning.
    pub empty_value: bool,
}

impl ScanTrace {
    pub(crate) fn record(&mut self, position: usize, mask_char: char, kind: StepKind) {
        if let StepKind::Halted(reason) = kind {
            self.halt = Some(reason);
        }
        self.steps.push(ScanStep { position, mask_char, kind });
    }

    /// Number of positions that placed a character.
    pub fn placed(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| {
                matches!(s.kind, StepKind::Escaped | StepKind::Literal | StepKind::Filled { .. } | StepKind::Defaulted { .. })
            })
            .count()
    }
}
