//! Reports catalog health without emitting descriptors.
//!
//! Prints per-component message counts and unmatched keys for a quick view
//! of bundle coverage; exits non-zero with the full failure list when the
//! catalog would not compile.

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
    let input = parse_args()?;
    let catalog = input.load()?;
    let compilation = compile(&catalog)?;

    for component in &compilation.components {
        println!(
            "{:<20} {:>4} message(s)",
            component.name,
            component.messages.len()
        );
    }
    if !compilation.unmatched.is_empty() {
        println!();
        for key in &compilation.unmatched {
            println!("unmatched: {key}");
        }
    }
    Ok(())
}

fn parse_args() -> Result<CatalogInput> {
    let mut args = env::args_os().skip(1);
    let mut input = InputArgs::default();

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
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => anyhow::bail!("unknown flag: {other}"),
        }
    }

    input.build()
}

fn usage() -> &'static str {
    "Usage: catalog-lint [--properties PATH|--json PATH|--stdin --format properties|json]\n\
Prints per-component message counts and unmatched keys; exits non-zero when\n\
the catalog would fail compilation.\n"
}

fn print_usage() {
    print!("{}", usage());
}
