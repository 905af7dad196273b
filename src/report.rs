use numcore::{CoreError, ReductionMetrics, TokenResult, WordMatch};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
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

/// Per-token outcome as the CLI sees it.
pub enum Row {
    Reduced { result: TokenResult, metrics: Option<ReductionMetrics> },
    Rejected { token: String, error: CoreError },
}

pub fn print_tokens(rows: &[Row], color: bool) {
    let palette = ansi::Palette::new(color);
    let banner = numcore::banner(rows.iter().filter_map(|row| match row {
        Row::Reduced { result, .. } => Some(result),
        Row::Rejected { .. } => None,
    }));

    println!("{}\n", palette.bold(palette.paint(format!("=== {banner} ==="), ansi::BRIGHT_RED)));

    for row in rows {
        match row {
            Row::Reduced { result, metrics } => {
                print_result(result, &palette);
                if let Some(metrics) = metrics {
                    print_metrics(metrics, &palette);
                }
            }
            Row::Rejected { token, error } => {
                println!("{} {}", palette.dim("Input:"), palette.paint(token, ansi::CYAN));
                println!("  {} {}\n", palette.dim("Result:"), palette.paint(error.to_string(), ansi::YELLOW));
            }
        }
    }

    println!("{}", palette.bold(palette.paint(format!("=== {banner} ==="), ansi::BRIGHT_RED)));
}

fn print_result(result: &TokenResult, palette: &ansi::Palette) {
    println!("{} {}", palette.dim("Input:"), palette.paint(&result.token, ansi::CYAN));
    let Some(reduction) = &result.reduction else {
        println!("  {} {}\n", palette.dim("Result:"), palette.paint("No core found", ansi::YELLOW));
        return;
    };

    let letter = result.letter().map(String::from).unwrap_or_else(|| "?".to_string());
    println!("  {} {}", palette.dim("Core:"), palette.bold(palette.paint(reduction.core.to_string(), ansi::GREEN)));
    println!("  {} {}", palette.dim("Letter:"), palette.paint(letter, ansi::BLUE));
    println!("  {} {}\n", palette.dim("Trace:"), reduction.trace);
}

fn print_metrics(metrics: &ReductionMetrics, palette: &ansi::Palette) {
    for (idx, stage) in metrics.stages.iter().enumerate() {
        let selected = match stage.selected {
            Some(core) => palette.paint(format!("✓ {core}"), ansi::GREEN),
            None => palette.dim("✗ none"),
        };
        println!(
            "    {} {} {} {}  {} {}",
            palette.paint(format!("Stage {}:", idx + 1), ansi::BLUE),
            palette.paint(&stage.input, ansi::YELLOW),
            palette.dim("│"),
            selected,
            palette.dim(format!("seqs {} · orderings {} · candidates {}", stage.sequences, stage.orderings, stage.candidates)),
            palette.dim(format!("{:?}", stage.duration)),
        );
    }
    println!("    {} {}\n", palette.dim("Total:"), palette.paint(format!("{:?}", metrics.total), ansi::GREEN));
}

pub fn print_matches(target: u64, searched: usize, matches: &[WordMatch], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("Searching for words with core = {target}"), ansi::CYAN)));
    println!("{}", palette.dim(format!("  {searched} candidate words")));

    if matches.is_empty() {
        println!("\n{}", palette.paint(format!("No words found with core = {target}"), ansi::YELLOW));
        return;
    }

    println!("\n{}", palette.paint(format!("━━━ Words with numeric core {target} ━━━"), ansi::GRAY));
    for m in matches {
        println!("  {}  {}  {}", palette.bold(palette.paint(&m.word, ansi::GREEN)), palette.dim("→"), m.trace);
    }
    println!("{}", palette.paint("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━", ansi::GRAY));
    println!("Total matches: {}", palette.paint(matches.len().to_string(), ansi::BLUE));
}
