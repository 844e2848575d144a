//! slhtune CLI - SPHINCS+/SLH-DSA parameter search tool.

use anyhow::{bail, Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use serde::Serialize;
use slhtune::estimator::Estimator;
use slhtune::search::{run, Restrictions, SearchConfig, SearchReport, Selection};
use slhtune::types::cost::{hash_size_bytes, nist_category, public_key_bytes};
use slhtune::types::default_overuse_target;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SPHINCS+/SLH-DSA parameter search tool
#[derive(Parser)]
#[command(name = "slhtune")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for parameter sets and print the selection table
    Search(SearchArgs),

    /// Estimate the security of one parameter set
    Estimate(EstimateArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Security level in bits (128 = NIST level 1, 192 = level 3, 256 = level 5)
    #[arg(short, long)]
    security: u32,

    /// log2 of the number of signatures that must keep the security level
    #[arg(short = 'n', long)]
    signatures: u32,

    /// Maximum number of hashes per signing operation
    #[arg(long)]
    sign_budget: u64,

    /// Security level used to score overuse [default: security - 32]
    #[arg(long)]
    overuse_target: Option<u32>,

    /// Stop listing parameter sets once they tolerate 2^N signatures at the overuse target
    #[arg(long, value_name = "N")]
    max_overuse: Option<u32>,

    /// Prefix each row ID with this label
    #[arg(long)]
    label: Option<String>,

    /// Only consider hypertrees with this many layers
    #[arg(short, long)]
    depth: Option<u32>,

    /// Only consider this Merkle subtree height
    #[arg(long)]
    merkle_height: Option<u32>,

    /// Only consider this FORS tree height
    #[arg(long)]
    fors_height: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "latex")]
    format: ReportFormat,

    /// Write each selection's security curve to `<label>-<ID>.csv`
    #[arg(long, requires = "label")]
    curves: bool,

    /// Directory for curve files
    #[arg(long, default_value = ".")]
    curve_dir: PathBuf,

    /// Output file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SearchArgs {
    fn to_config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.security, self.signatures, self.sign_budget)
            .with_restrictions(Restrictions {
                subtree_count: self.depth,
                merkle_height: self.merkle_height,
                fors_height: self.fors_height,
            });
        if let Some(bits) = self.overuse_target {
            config = config.with_overuse_target(bits);
        }
        if let Some(exponent) = self.max_overuse {
            config = config.with_overuse_ceiling(exponent);
        }
        if let Some(label) = &self.label {
            config = config.with_label(label.clone());
        }
        config
    }
}

#[derive(Args)]
struct EstimateArgs {
    /// Security level in bits to test against
    #[arg(short, long, default_value = "128")]
    security: u32,

    /// log2 of the number of signatures (may be fractional)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    signatures: f64,

    /// Total hypertree height h
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1024))]
    hypertree_height: u32,

    /// FORS tree height a
    #[arg(short = 'a', long, value_parser = clap::value_parser!(u32).range(1..=64))]
    fors_height: u32,

    /// Number k of FORS trees
    #[arg(short = 'k', long, value_parser = clap::value_parser!(u32).range(1..=1024))]
    fors_count: u32,

    /// Security level used to score overuse [default: security - 32]
    #[arg(long)]
    overuse_target: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// LaTeX longtable, ready to paste into a document
    Latex,
    /// Markdown table
    Markdown,
    /// JSON with the configuration and one object per row
    Json,
}

// ============================================================================
// Report Rows
// ============================================================================

/// One table row, with every derived column computed once.
#[derive(Debug, Serialize)]
struct Row {
    id: String,
    hash_bytes: u32,
    hypertree_height: u32,
    subtree_count: u32,
    merkle_height: u32,
    fors_height: u32,
    fors_count: u32,
    winternitz_w: u32,
    log_w: u32,
    message_digest_bytes: u32,
    category: i64,
    public_key_bytes: u32,
    signature_bytes: u64,
    size_percent: u64,
    sign_hashes: u64,
    verify_hashes: u64,
    overuse: String,
    overuse_hundredths: u32,
    safety: u64,
}

fn row_id(label: Option<&str>, index: usize) -> String {
    match label {
        Some(label) => format!("{}-{}", label, index + 1),
        None => (index + 1).to_string(),
    }
}

fn build_row(report: &SearchReport, index: usize, selection: &Selection, smallest: u64) -> Row {
    let config = &report.config;
    let c = &selection.candidate;
    Row {
        id: row_id(config.label.as_deref(), index),
        hash_bytes: hash_size_bytes(config.security_level_bits),
        hypertree_height: c.hypertree_height(),
        subtree_count: c.subtree_count(),
        merkle_height: c.merkle_height(),
        fors_height: c.fors_height(),
        fors_count: c.fors_count(),
        winternitz_w: c.winternitz_w(),
        log_w: c.log_w(),
        message_digest_bytes: c.message_digest_bytes(),
        category: nist_category(config.security_level_bits),
        public_key_bytes: public_key_bytes(config.security_level_bits),
        signature_bytes: c.signature_size_bytes(),
        size_percent: 100 * c.signature_size_bytes() / smallest.max(1),
        sign_hashes: c.sign_time_hashes(),
        verify_hashes: c.verify_time_hashes(),
        overuse: selection.overuse.to_string(),
        overuse_hundredths: selection.overuse.hundredths(),
        safety: selection.overuse.safety_factor(config.log_signatures),
    }
}

fn build_rows(report: &SearchReport) -> Vec<Row> {
    let smallest = report.smallest_signature().unwrap_or(1);
    report
        .selections
        .iter()
        .enumerate()
        .map(|(i, s)| build_row(report, i, s, smallest))
        .collect()
}

/// Insert thousands separators: `commify(65536)` is `"65,536"`.
fn commify(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ============================================================================
// Report Formats
// ============================================================================

fn format_report(report: &SearchReport, format: ReportFormat) -> Result<String> {
    let rows = build_rows(report);
    match format {
        ReportFormat::Latex => Ok(format_latex(report, &rows)),
        ReportFormat::Markdown => Ok(format_markdown(report, &rows)),
        ReportFormat::Json => format_json(report, rows),
    }
}

fn format_latex(report: &SearchReport, rows: &[Row]) -> String {
    let config = &report.config;
    let mut output = String::new();

    output.push_str("\\begin{longtable}{c|c|c|c|c|c|c|c|c|c|c|c|c|c|c|c|c}\n");
    output.push_str(
        "      &     &     &     &      &     &     &        &     & sec  &  pk   &  sig  & \\% & sign & verify & sigs at & overuse \\\\\n",
    );
    let _ = writeln!(
        output,
        "   ID & $n$ & $h$ & $d$ & $h'$ & $a$ & $k$ & $lg_w$ & $m$ & cat. & bytes & bytes & size & time & time   & level {} & safety \\\\",
        config.overuse_target_bits
    );
    output.push_str("  \\hline \\endhead\n");

    for r in rows {
        let _ = writeln!(
            output,
            "  {:>4} & {:2} & {:3} & {:2} & {:2} & {:2} & {:2} &   {}  & {:2} &    {}     &     {}   & {:8}  & {}\\% & {:9} & {:11} & {} & {} \\\\",
            r.id,
            r.hash_bytes,
            r.hypertree_height,
            r.subtree_count,
            r.merkle_height,
            r.fors_height,
            r.fors_count,
            r.log_w,
            r.message_digest_bytes,
            r.category,
            r.public_key_bytes,
            r.signature_bytes,
            r.size_percent,
            r.sign_hashes,
            r.verify_hashes,
            r.overuse,
            r.safety,
        );
    }

    let _ = writeln!(
        output,
        "\\caption{{Selection set ({}, {}, $2^{{{}}}$, {})}}",
        config.security_level_bits,
        config.overuse_target_bits,
        config.log_signatures,
        commify(config.sign_budget)
    );
    if let Some(label) = &config.label {
        let _ = writeln!(output, "\\label{{table:{}}}", label);
    }
    output.push_str("\\end{longtable}\n");
    output
}

fn format_markdown(report: &SearchReport, rows: &[Row]) -> String {
    let config = &report.config;
    let mut output = String::new();

    let _ = writeln!(
        output,
        "# Selection set ({}-bit, 2^{} signatures, sign budget {})\n",
        config.security_level_bits,
        config.log_signatures,
        commify(config.sign_budget)
    );
    let _ = writeln!(
        output,
        "| ID | n | h | d | h' | a | k | lg w | m | cat. | pk bytes | sig bytes | % size | sign time | verify time | sigs at level {} | overuse safety |",
        config.overuse_target_bits
    );
    output.push_str(
        "|----|--:|--:|--:|---:|--:|--:|-----:|--:|-----:|---------:|----------:|-------:|----------:|------------:|-------:|-------:|\n",
    );

    for r in rows {
        let _ = writeln!(
            output,
            "| {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {}% | {} | {} | {} | {} |",
            r.id,
            r.hash_bytes,
            r.hypertree_height,
            r.subtree_count,
            r.merkle_height,
            r.fors_height,
            r.fors_count,
            r.log_w,
            r.message_digest_bytes,
            r.category,
            r.public_key_bytes,
            commify(r.signature_bytes),
            r.size_percent,
            commify(r.sign_hashes),
            commify(r.verify_hashes),
            r.overuse,
            r.safety,
        );
    }

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    config: &'a SearchConfig,
    rows: Vec<Row>,
}

fn format_json(report: &SearchReport, rows: Vec<Row>) -> Result<String> {
    let json = JsonReport {
        config: &report.config,
        rows,
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}

// ============================================================================
// Security Curves
// ============================================================================

fn format_curve(report: &SearchReport, selection: &Selection) -> String {
    let mut output = String::new();
    for point in report.curve(selection) {
        let _ = writeln!(output, "{:.6}, {:.6}", point.exponent, point.bits);
    }
    output
}

/// Write `<label>-<ID>.csv` per selection into `dir`.
fn write_curves(report: &SearchReport, dir: &Path) -> Result<Vec<PathBuf>> {
    let Some(label) = report.config.label.as_deref() else {
        bail!("Curve files need a label to name them");
    };

    let mut written = Vec::with_capacity(report.selections.len());
    for (i, selection) in report.selections.iter().enumerate() {
        let path = dir.join(format!("{}.csv", row_id(Some(label), i)));
        fs::write(&path, format_curve(report, selection))
            .with_context(|| format!("Failed to write curve file: {}", path.display()))?;
        debug!(path = %path.display(), "wrote security curve");
        written.push(path);
    }
    Ok(written)
}

// ============================================================================
// Commands
// ============================================================================

fn cmd_search(args: &SearchArgs) -> Result<()> {
    let config = args.to_config();
    let report = run(&config).context("Search failed")?;
    info!(selected = report.selections.len(), "search finished");

    let output = format_report(&report, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &output)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => print!("{}", output),
    }

    if args.curves {
        fs::create_dir_all(&args.curve_dir).with_context(|| {
            format!("Failed to create curve directory: {}", args.curve_dir.display())
        })?;
        let written = write_curves(&report, &args.curve_dir)?;
        info!(files = written.len(), "security curves written");
    }

    Ok(())
}

fn cmd_estimate(args: &EstimateArgs) -> Result<()> {
    if !args.signatures.is_finite() {
        bail!("Number of signatures must be a finite log2 value");
    }
    let overuse_target = args
        .overuse_target
        .unwrap_or_else(|| default_overuse_target(args.security));

    let est = Estimator::default();
    let (h, a, k) = (args.hypertree_height, args.fors_height, args.fors_count);
    let bits = est.security_bits(args.signatures, h, a, k);
    let meets = est.meets_level(args.signatures, h, a, k, f64::from(args.security));
    let overuse = est.max_signatures_at_level(f64::from(overuse_target), h, a, k);

    println!("Parameter set: h = {}, a = {}, k = {}", h, a, k);
    println!(
        "Security at 2^{:.2} signatures: {:.2} bits",
        args.signatures, bits
    );
    println!(
        "Meets {}-bit level: {}",
        args.security,
        if meets { "yes" } else { "no" }
    );
    println!(
        "Signatures at level {}: 2^{}.{:02}",
        overuse_target,
        overuse / 100,
        overuse % 100
    );
    Ok(())
}

/// Generate shell completions
fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "slhtune", &mut io::stdout());
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Search(args) => cmd_search(&args),
        Commands::Estimate(args) => cmd_estimate(&args),
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
    }
}
