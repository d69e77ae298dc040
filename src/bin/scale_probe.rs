use std::env;
use std::time::Instant;

use divchain::problems::divisible::is_divisible_chain;
use divchain::{build_largest_divisible_subset, format_sequence};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    #[cfg(feature = "tracing")]
    init_tracing();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("divchain Scaling Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the largest-divisible-subset builder on growing inputs and checks:");
    eprintln!(
        "  • Correctness: chain property always; maximality by exhaustive search up to size {}",
        options.verify_limit
    );
    eprintln!("  • Performance: wall-clock time and RSS delta per input size");
    eprintln!();
    eprintln!("  status: 'passed' = matches exhaustive search, 'not_checked' = too large to search");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    let total = SCENARIOS.len();
    for (idx, scenario) in SCENARIOS.iter().enumerate() {
        eprintln!("[{}/{}] {}: {}", idx + 1, total, scenario.name, scenario.about);
        measurements.extend(run_scenario(scenario, &options, &mut sys));
        eprintln!();
    }

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

#[cfg(feature = "tracing")]
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second subscriber (e.g. under a test harness) is not an error here.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 16usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_verify_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_verify_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest input checked by exhaustive search, at most {MAX_VERIFY} (default: 16)
  -h, --help                    Print this help message

Examples:
  cargo run --bin scale_probe
  cargo run --bin scale_probe -- --format table --verify-limit 12
"
        );
    }
}

/// Exhaustive search visits 2^n subsets.
const MAX_VERIFY: usize = 22;

fn parse_verify_limit(value: &str) -> Result<usize, String> {
    let limit = value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())?;
    if limit > MAX_VERIFY {
        return Err(format!("verify limit must be at most {MAX_VERIFY}"));
    }
    Ok(limit)
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Scenario {
    name: &'static str,
    about: &'static str,
    generate: fn(usize) -> Vec<i64>,
}

const SIZES: &[usize] = &[8, 12, 16, 128, 512, 1024, 2048, 4096, 8192];

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "descending_range",
        about: "n, n-1, ..., 1; the best chain is the powers of two",
        generate: descending_range,
    },
    Scenario {
        name: "scrambled",
        about: "deterministic pseudo-random values in 1..=1000",
        generate: scrambled,
    },
    Scenario {
        name: "smooth_numbers",
        about: "products of 2, 3 and 5 in input order by a stride",
        generate: smooth_numbers,
    },
    Scenario {
        name: "all_equal",
        about: "every element identical; the whole input is the chain",
        generate: all_equal,
    },
];

#[derive(Clone)]
struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_scenario(scenario: &Scenario, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let total = SIZES.len();
    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing size {}... ", idx + 1, total, len);
            let mut subset_len = 0usize;
            let m = measure(scenario.name, format!("len={len}"), sys, || {
                let input = (scenario.generate)(len);
                let subset = build_largest_divisible_subset(&input);
                subset_len = subset.len();
                verify(&input, &subset, options.verify_limit)
            });
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "{} subset_len={}, time={:.3}s, status={}",
                status_icon,
                subset_len,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

/// Structural checks always run; maximality only up to `verify_limit`.
fn verify(
    input: &[i64],
    subset: &[i64],
    verify_limit: usize,
) -> (VerificationStatus, Option<String>) {
    if !is_divisible_chain(subset) {
        return (
            VerificationStatus::Failed,
            Some(format!("not a chain: {}", format_sequence(subset))),
        );
    }
    if !is_sub_multiset(subset, input) {
        return (
            VerificationStatus::Failed,
            Some("subset uses values not present in the input".to_string()),
        );
    }
    if input.len() > verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let best = exhaustive_best_len(input);
    if best == subset.len() {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected length {best}, got {}", subset.len())),
        )
    }
}

fn is_sub_multiset(subset: &[i64], input: &[i64]) -> bool {
    let mut pool = input.to_vec();
    pool.sort_unstable();
    let mut wanted = subset.to_vec();
    wanted.sort_unstable();
    let mut it = pool.iter();
    wanted.iter().all(|w| it.any(|p| p == w))
}

fn exhaustive_best_len(input: &[i64]) -> usize {
    let n = input.len();
    let mut best = 0;
    let mut picked = Vec::with_capacity(n);
    for mask in 0u32..(1u32 << n) {
        let size = mask.count_ones() as usize;
        if size <= best {
            continue;
        }
        picked.clear();
        picked.extend((0..n).filter(|i| mask & (1 << i) != 0).map(|i| input[i]));
        if is_divisible_chain(&picked) {
            best = size;
        }
    }
    best
}

fn descending_range(len: usize) -> Vec<i64> {
    (1..=len as i64).rev().collect()
}

fn scrambled(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| (i * 7919 + 13) % 1000 + 1).collect()
}

fn smooth_numbers(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| {
            let a = (i * 5) % 11;
            let b = (i * 3) % 7;
            let c = (i * 2) % 5;
            2i64.pow(a as u32) * 3i64.pow(b as u32) * 5i64.pow(c as u32)
        })
        .collect()
}

fn all_equal(len: usize) -> Vec<i64> {
    vec![6; len]
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {detail}");
                }
            }
        }
        eprintln!();
    }

    eprintln!("Performance by Scenario:");
    eprintln!();
    for scenario in SCENARIOS {
        let ms: Vec<&Measurement> = measurements
            .iter()
            .filter(|m| m.scenario == scenario.name)
            .collect();
        let (Some(first), Some(last)) = (ms.first(), ms.last()) else {
            continue;
        };
        let max_time = ms.iter().map(|m| m.wall_s).fold(0.0, f64::max);
        let max_mem = ms.iter().map(|m| m.rss_delta_kib).max().unwrap_or(0);

        eprintln!("  {}:", scenario.name);
        eprintln!("    Runs: {}", ms.len());
        eprintln!("    Time: max={max_time:.3}s");
        eprintln!("    Memory: max_delta={max_mem} KiB");
        if first.wall_s > 0.0 {
            eprintln!(
                "    Scaling: {:.1}x from {} to {}",
                last.wall_s / first.wall_s,
                first.size_desc,
                last.size_desc
            );
        }
        eprintln!();
    }

    eprintln!("{}", "=".repeat(80));
    if failed == 0 {
        eprintln!("✓ All checked runs passed.");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("  Time should grow roughly quadratically with input size.");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
