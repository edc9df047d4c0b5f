use strmask::{MaskReport, ScanStep, StepKind};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_report(report: &MaskReport, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &report.details;
    let trace = &details.trace;

    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  Masking: \"{}\" with \"{}\"", report.value, report.mask), ansi::CYAN))
    );
    println!(
        "  {} {:?}  {} {}  {} {} → {}",
        palette.dim("direction:"),
        details.direction,
        palette.dim("│ defaults:"),
        if details.use_defaults { "on" } else { "off" },
        palette.dim("│ budget:"),
        palette.paint(trace.budget.to_string(), ansi::YELLOW),
        palette.paint(trace.budget_left.to_string(), ansi::YELLOW),
    );

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    if trace.empty_value {
        println!("{}", palette.dim("  Empty value rejected before scanning"));
    } else if trace.steps.is_empty() {
        println!("{}", palette.dim("  Empty mask"));
    }
    for step in &trace.steps {
        println!("  {}", fmt_step(step, &palette));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    let verdict = if report.outcome.valid {
        palette.paint("✓ valid", ansi::GREEN)
    } else {
        palette.paint("✗ invalid", ansi::RED)
    };
    println!(
        "  {} {} {}",
        palette.bold(palette.paint(format!("\"{}\"", report.outcome.result), ansi::GREEN)),
        palette.dim("│"),
        verdict
    );
    println!(
        "  {} {}  {} {}/{}",
        palette.dim("placed:"),
        palette.paint(trace.placed().to_string(), ansi::BLUE),
        palette.dim("│ consumed:"),
        palette.paint(trace.consumed.to_string(), ansi::BLUE),
        report.value.chars().count(),
    );
    if let Some(reason) = trace.halt {
        println!("  {} {}", palette.dim("halted:"), palette.paint(reason.to_string(), ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.elapsed), ansi::GREEN));
    println!();
}

fn fmt_step(step: &ScanStep, palette: &ansi::Palette) -> String {
    let what = match step.kind {
        StepKind::Escaped => palette.dim("escaped, copied"),
        StepKind::EscapeMarker => palette.dim("escape marker"),
        StepKind::Literal => palette.dim("literal, copied"),
        StepKind::Filled { input, output, optional } => {
            let label = if optional { "optional" } else { "filled" };
            if input == output {
                palette.paint(format!("{label} '{input}'"), ansi::GREEN)
            } else {
                palette.paint(format!("{label} '{input}' → '{output}'"), ansi::GREEN)
            }
        }
        StepKind::Defaulted { output } => palette.paint(format!("default '{output}'"), ansi::YELLOW),
        StepKind::Halted(reason) => palette.paint(format!("halt: {reason}"), ansi::RED),
    };

    format!(
        "{} {} {}",
        palette.paint(format!("[{:>2}]", step.position), ansi::GRAY),
        palette.paint(format!("'{}'", step.mask_char), ansi::BLUE),
        what
    )
}
