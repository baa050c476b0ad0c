use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use endpoint_patch::defaults;
use endpoint_patch::patch::{self, FileOutcome};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "endpoint-patch")]
#[command(version = VERSION)]
#[command(about = "Retarget hardcoded SPARQL endpoint URLs in a deployed webapp tree")]
struct Cli {
    /// Replacement endpoint substituted for every recognized legacy URL
    new_endpoint: Option<String>,

    /// Root directory to sweep (defaults to the deployed webapp tree)
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Missing argument is a benign no-op invocation, not a usage error
    let Some(new_endpoint) = cli.new_endpoint else {
        println!("Usage: endpoint-patch <new_endpoint> [root]");
        return ExitCode::SUCCESS;
    };

    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_ROOT));

    println!("Patching SPARQL endpoint to: {}", new_endpoint);

    for report in patch::patch_tree(&root, &new_endpoint) {
        if let FileOutcome::Patched { .. } = report.outcome {
            println!("Patched: {}", report.path.display());
        }
    }

    println!("Patch complete.");
    ExitCode::SUCCESS
}
