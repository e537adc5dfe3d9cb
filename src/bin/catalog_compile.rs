//! Compiles a message catalog into per-component descriptor JSON.
//!
//! Reads the catalog from a properties file, a JSON file, or stdin, runs the
//! compiler, and prints the descriptor model as JSON for the downstream
//! source emitter. Nothing reaches stdout unless the whole catalog
//! validates; failures are listed on stderr and the process exits non-zero.

use anyhow::Result;
use logmsgc::cli_support::{CatalogFormat, CatalogInput, InputArgs, next_value};
use logmsgc::compile;
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::parse()?;
    let catalog = args.input.load()?;
    let compilation = compile(&catalog)?;

    if !args.quiet {
        for key in &compilation.unmatched {
            eprintln!("warning: key {key} matches no declared component prefix");
        }
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&compilation)?
    } else {
        serde_json::to_string(&compilation)?
    };
    println!("{rendered}");
    Ok(())
}

struct CliArgs {
    input: CatalogInput,
    pretty: bool,
    quiet: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args_os().skip(1);
        let mut input = InputArgs::default();
        let mut pretty = false;
        let mut quiet = false;

        while let Some(arg_os) = args.next() {
            let arg = arg_os
                .into_string()
                .map_err(|_| anyhow::anyhow!("argument is not valid UTF-8"))?;
            match arg.as_str() {
                "--properties" => {
                    let path = next_value(&mut args, "--properties")?;
                    input.set_properties(PathBuf::from(path))?;
                }
                "--json" => {
                    let path = next_value(&mut args, "--json")?;
                    input.set_json(PathBuf::from(path))?;
                }
                "--stdin" => input.set_stdin()?,
                "--format" => {
                    let raw = next_value(&mut args, "--format")?;
                    input.set_format(CatalogFormat::from_flag(&raw)?)?;
                }
                "--pretty" => pretty = true,
                "--quiet" => quiet = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => anyhow::bail!("unknown flag: {other}"),
            }
        }

        Ok(CliArgs {
            input: input.build()?,
            pretty,
            quiet,
        })
    }
}

fn usage() -> &'static str {
    "Usage: catalog-compile [--properties PATH|--json PATH|--stdin --format properties|json] [--pretty] [--quiet]\n\
Compiles a log-message catalog into per-component descriptor JSON on stdout.\n\
Unmatched-key warnings go to stderr (--quiet suppresses them); validation\n\
failures are listed on stderr and nothing is emitted.\n"
}

fn print_usage() {
    print!("{}", usage());
}
