//! `citygml2stl` — converts CityGML files into ASCII STL meshes.
//!
//! Usage:
//! ```text
//! citygml2stl city.gml                 # writes city.stl
//! citygml2stl datasets/district        # reads datasets/district/district.xml
//! RUST_LOG=citygml2stl=debug citygml2stl city.gml
//! ```

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use citygml2stl::convert::{convert_all, ConvertOptions};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Convert CityGML city models into printable STL meshes
#[derive(Parser, Debug)]
#[command(name = "citygml2stl")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CityGML files or dataset directories to convert
    files: Vec<PathBuf>,
}

/// Parses the command line into the list of inputs.
///
/// `Err` carries the exit status when there is nothing to convert: 0 after
/// printing help or the version, 1 for a usage error.
fn parse_args<I, T>(argv: I) -> Result<Vec<PathBuf>, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            let printed = e.print();
            let informational =
                matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            return Err(u8::from(!(informational && printed.is_ok())));
        }
    };

    if args.files.is_empty() || args.files.iter().any(|f| f.as_os_str() == "help") {
        return match Args::command().print_help() {
            Ok(()) => Err(0),
            Err(e) => {
                eprintln!("Error: {e}");
                Err(1)
            }
        };
    }

    Ok(args.files)
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for citygml2stl.
    // Override with RUST_LOG env var (e.g. RUST_LOG=citygml2stl=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("citygml2stl=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let files = match parse_args(std::env::args_os()) {
        Ok(files) => files,
        Err(status) => return ExitCode::from(status),
    };

    if convert_all(&files, &ConvertOptions::default()) > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_inputs() {
        let files = parse_args(["citygml2stl", "a.gml", "dir/b"]);
        assert_eq!(files, Ok(vec![PathBuf::from("a.gml"), PathBuf::from("dir/b")]));
    }

    #[test]
    fn no_inputs_prints_help() {
        assert_eq!(parse_args(["citygml2stl"]), Err(0));
        assert_eq!(parse_args(["citygml2stl", "a.gml", "help"]), Err(0));
        assert_eq!(parse_args(["citygml2stl", "--help"]), Err(0));
    }

    #[test]
    fn unknown_flag_exits_with_failure() {
        assert_eq!(parse_args(["citygml2stl", "--frobnicate", "a.gml"]), Err(1));
    }
}
