use anyhow::{Context, Result};
use clap::Parser;
use lcg_validator_core::{
    run_validation, GeneratorReport, LcgGenerator, ReferenceGenerator, ValidationConfig,
    ValidationReport,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate an LCG against a reference uniform generator", long_about = None)]
struct Args {
    /// Fixed LCG seed (default: wall-clock seconds)
    #[arg(short, long)]
    seed: Option<i64>,

    /// Fixed reference generator seed (default: OS entropy)
    #[arg(short, long)]
    reference_seed: Option<u64>,

    /// Sample count for each statistical test
    #[arg(short = 'n', long, default_value_t = ValidationConfig::default().sample_count)]
    samples: usize,

    /// Number of values printed from each generator
    #[arg(short, long, default_value_t = ValidationConfig::default().preview_count)]
    preview: usize,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ValidationConfig {
        preview_count: args.preview,
        sample_count: args.samples,
    };

    let mut lcg = match args.seed {
        Some(seed) => LcgGenerator::new(seed),
        None => LcgGenerator::from_time(),
    };
    let mut reference = match args.reference_seed {
        Some(seed) => ReferenceGenerator::new(seed),
        None => ReferenceGenerator::from_entropy(),
    };
    log::info!("LCG initial state: {}", lcg.state());

    let report = run_validation(&config, &mut lcg, &mut reference)
        .context("Validation run failed")?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &ValidationReport) {
    print_preview(&report.candidate);
    println!();
    print_preview(&report.reference);

    println!("\nKolmogorov-Smirnov test (n = {}):", report.config.sample_count);
    print_uniformity(&report.candidate);
    print_uniformity(&report.reference);

    println!("\nIndependence (lag-1 autocorrelation) test:");
    print_independence(&report.candidate);
    print_independence(&report.reference);
}

fn print_preview(report: &GeneratorReport) {
    println!("Values from {}:", report.name);
    for value in &report.preview {
        println!("{}", value);
    }
}

fn print_uniformity(report: &GeneratorReport) {
    let v = &report.uniformity;
    println!("\n  {}:", report.name);
    println!("  Statistic D: {}", v.statistic);
    println!("  Critical value (0.05): {}", v.critical_value);
    if v.is_uniform {
        println!("  Distribution is uniform");
    } else {
        println!("  Distribution is not uniform");
    }
}

fn print_independence(report: &GeneratorReport) {
    let v = &report.independence;
    println!("\n  {}:", report.name);
    println!("  Autocorrelation coefficient: {}", v.coefficient);
    if v.is_independent {
        println!("  No significant autocorrelation");
    } else {
        println!("  Autocorrelation present");
    }
}
