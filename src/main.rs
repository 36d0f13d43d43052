use clap::Parser;

use plucky::{doctor, output, status};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "plucky")]
#[command(version = VERSION)]
#[command(about = "Run the plucky example self-checks")]
struct Cli {
    /// Only run examples whose name contains PATTERN
    #[arg(long, value_name = "PATTERN")]
    filter: Option<String>,

    /// Emit the full report as a JSON envelope
    #[arg(long)]
    json: bool,

    /// List example names without running them
    #[arg(long)]
    list: bool,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    if cli.list {
        for example in doctor::examples() {
            println!("{}", example.name);
        }
        return std::process::ExitCode::SUCCESS;
    }

    status!("selfcheck", "running example checks...");

    let report = doctor::run(cli.filter.as_deref());

    if cli.json {
        if let Err(err) = output::print_success(&report) {
            output::print_result::<()>(Err(err)).ok();
            return std::process::ExitCode::from(exit_code_to_u8(1));
        }
    } else {
        print_text_report(&report);
    }

    let exit_code = doctor::exit_code_from_report(&report);
    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn print_text_report(report: &doctor::CheckReport) {
    for outcome in report.outcomes.iter().filter(|outcome| !outcome.passed) {
        println!("FAIL {}", outcome.name);
        println!("  expression: {}", outcome.expression);
        println!("  expected:   {}", outcome.expected);
        println!("  actual:     {}", outcome.actual);
    }
    println!(
        "{} examples, {} passed, {} failed",
        report.summary.examples_run, report.summary.passed, report.summary.failed
    );
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
