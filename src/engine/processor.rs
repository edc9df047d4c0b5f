//! The mask scan.
//!
//! A scan walks the mask from one end to the other, keeping a cursor into the
//! value that moves in the same direction. At each mask position it takes one
//! of the transitions below; a halt ends the scan and nothing at or after the
//! halting position is placed.
//!
//! ```text
//! escaped char   ── token ahead? ── yes ─▶ place verbatim
//!                                  └ no ──▶ halt (dangling literal)
//! escape marker  ─────────────────────────▶ consume, place nothing
//! literal        ── token ahead? ── yes ─▶ place verbatim
//!                                  └ no ──▶ halt (dangling literal)
//! required token ── value char matches ──▶ place, advance value
//!                ── default allowed ─────▶ place default
//!                └─ otherwise ───────────▶ valid = false, halt
//! optional token ── matches, budget > 0 ─▶ place, advance value, budget -= 1
//!                └─ otherwise ───────────▶ halt (valid untouched)
//! ```
//!
//! The optional budget is the count of value digits beyond the mask's
//! required digits (see [`PatternAnalyzer::optional_budget`]). It never goes
//! negative; once it is spent no optional or recursive token is filled.
//!
//! An unmet optional token ends the scan even when required tokens follow it.
//! Those are never evaluated, so they cannot invalidate the result.
//!
//! Input left over when the mask ends is ignored.

use super::analyzer::PatternAnalyzer;
use super::placement::place;
use super::trace::{HaltReason, ScanTrace, StepKind};
use crate::{Direction, MaskResult, Symbol, Token, TokenCatalog, Transform};

/// Mutable state of one scan.
struct Scan {
    value_pos: isize,
    budget: usize,
    consumed: usize,
    result: String,
    valid: bool,
}

impl Scan {
    /// Place `c` and return the character that actually landed.
    fn put(&mut self, c: char, direction: Direction, transform: Option<Transform>) -> char {
        let landed = transform.map_or(c, |t| t(c));
        place(&mut self.result, landed, direction, None);
        landed
    }

    fn take(&mut self, direction: Direction) {
        self.value_pos += direction.step();
        self.consumed += 1;
    }
}

/// Applies one mask, in one direction, to any number of values.
///
/// The processor holds the mask and borrows the catalog; every call to
/// [`process`](Self::process) runs an independent scan with its own state.
///
/// ```
/// use strmask::{DEFAULT_CATALOG, Direction, MaskProcessor};
///
/// let processor = MaskProcessor::new("000.000,00", Direction::Reverse, true, &DEFAULT_CATALOG);
/// let out = processor.process("123456");
///
/// assert_eq!(out.result, "001.234,56");
/// assert!(out.valid);
/// ```
#[derive(Debug, Clone)]
pub struct MaskProcessor<'a> {
    mask: Vec<char>,
    direction: Direction,
    use_defaults: bool,
    analyzer: PatternAnalyzer<'a>,
}

impl<'a> MaskProcessor<'a> {
    pub fn new(mask: &str, direction: Direction, use_defaults: bool, catalog: &'a TokenCatalog) -> Self {
        MaskProcessor { mask: mask.chars().collect(), direction, use_defaults, analyzer: PatternAnalyzer::new(catalog) }
    }

    pub fn mask(&self) -> &[char] {
        &self.mask
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn use_defaults(&self) -> bool {
        self.use_defaults
    }

    /// Format and validate `value`.
    pub fn process(&self, value: &str) -> MaskResult {
        self.run(value, None)
    }

    /// Like [`process`](Self::process), also returning a step-by-step trace.
    pub fn process_traced(&self, value: &str) -> (MaskResult, ScanTrace) {
        let mut trace = ScanTrace::default();
        let result = self.run(value, Some(&mut trace));
        (result, trace)
    }

    fn run(&self, value: &str, mut trace: Option<&mut ScanTrace>) -> MaskResult {
        let chars: Vec<char> = value.chars().collect();

        if chars.is_empty() && self.analyzer.has_required_tokens(&self.mask) {
            tracing::debug!(mask_len = self.mask.len(), "empty value against required tokens");
            if let Some(trace) = trace.as_deref_mut() {
                trace.empty_value = true;
            }
            return MaskResult { result: String::new(), valid: false };
        }

        let budget = self.analyzer.optional_budget(&self.mask, value);
        let mut scan = Scan {
            value_pos: self.direction.start(chars.len()),
            budget,
            consumed: 0,
            result: String::with_capacity(self.mask.len()),
            valid: true,
        };

        tracing::trace!(direction = ?self.direction, use_defaults = self.use_defaults, budget, "scan start");

        let mut pos = self.direction.start(self.mask.len());
        while let Some(index) = usize::try_from(pos).ok().filter(|&i| i < self.mask.len()) {
            let kind = self.step(&mut scan, &chars, index);
            let mask_char = self.mask[index];

            tracing::trace!(position = index, mask_char = %mask_char, step = ?kind, "mask step");
            if let Some(trace) = trace.as_deref_mut() {
                trace.record(index, mask_char, kind);
            }

            if let StepKind::Halted(reason) = kind {
                tracing::debug!(position = index, %reason, valid = scan.valid, "scan halted");
                break;
            }
            pos += self.direction.step();
        }

        if let Some(trace) = trace {
            trace.budget = budget;
            trace.budget_left = scan.budget;
            trace.consumed = scan.consumed;
        }

        MaskResult { result: scan.result, valid: scan.valid }
    }

    /// Take the transition for the mask character at `index`.
    fn step(&self, scan: &mut Scan, value: &[char], index: usize) -> StepKind {
        let c = self.mask[index];
        let ahead = index as isize + self.direction.step();

        if self.analyzer.is_escaped(&self.mask, index) {
            return self.literal(scan, c, ahead, StepKind::Escaped);
        }

        match self.analyzer.catalog().classify(c) {
            Symbol::Escape => StepKind::EscapeMarker,
            Symbol::Literal(c) => self.literal(scan, c, ahead, StepKind::Literal),
            Symbol::Fill(token) => self.fill(scan, token, value),
        }
    }

    fn literal(&self, scan: &mut Scan, c: char, ahead: isize, placed: StepKind) -> StepKind {
        if !self.analyzer.has_more_tokens(&self.mask, ahead, self.direction) {
            return StepKind::Halted(HaltReason::DanglingLiteral);
        }
        scan.put(c, self.direction, None);
        placed
    }

    fn fill(&self, scan: &mut Scan, token: &Token, value: &[char]) -> StepKind {
        let candidate =
            usize::try_from(scan.value_pos).ok().and_then(|i| value.get(i)).copied().filter(|&c| token.matches(c));

        if token.is_optional() {
            return match candidate {
                Some(input) if scan.budget > 0 => {
                    scan.budget -= 1;
                    let output = scan.put(input, self.direction, token.transform());
                    scan.take(self.direction);
                    StepKind::Filled { input, output, optional: true }
                }
                _ => StepKind::Halted(HaltReason::OptionalUnmet),
            };
        }

        if let Some(input) = candidate {
            let output = scan.put(input, self.direction, token.transform());
            scan.take(self.direction);
            return StepKind::Filled { input, output, optional: false };
        }

        match token.default_value().filter(|_| self.use_defaults) {
            Some(default) => StepKind::Defaulted { output: scan.put(default, self.direction, token.transform()) },
            None => {
                scan.valid = false;
                StepKind::Halted(HaltReason::RequiredUnmet)
            }
        }
    }
}
