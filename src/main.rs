use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};
use treeplot::PlotError;

/// Plot a bracketed tree description, e.g. `( 0 ( 1 ) ( 2 ) )`, as SVG.
///
/// The drawing is written next to the input, with `.svg` appended to its name.
#[derive(Parser, Debug)]
#[command(name = "treeplot")]
struct Cli {
    /// File containing the tree description
    input: Option<PathBuf>,
}

fn main() -> ExitCode {
    install_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Missing input is informational only
        Err(PlotError::Usage) => {
            println!("{}", PlotError::Usage);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("treeplot: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PlotError> {
    let input = cli.input.ok_or(PlotError::Usage)?;
    let output = treeplot::plot_file(&input)?;
    tracing::debug!(input = %input.display(), output = %output.display(), "done");
    Ok(())
}

fn install_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_positional_input() {
        let cli = Cli::try_parse_from(["treeplot", "tree.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("tree.txt")));
    }

    #[test]
    fn test_missing_input_is_usage() {
        let cli = Cli::try_parse_from(["treeplot"]).unwrap();
        assert!(matches!(run(cli), Err(PlotError::Usage)));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        Cli::try_parse_from(["treeplot", "a", "b"]).unwrap_err();
        Cli::try_parse_from(["treeplot", "--nope"]).unwrap_err();
        Cli::try_parse_from(["treeplot", "--version"]).unwrap_err();
    }
}
