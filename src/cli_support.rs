//! Shared argument plumbing for the catalog binaries.
//!
//! Both tools read the same catalog sources; the builder here enforces
//! "exactly one input" so conflicting flags fail loudly instead of silently
//! preferring one.

use crate::catalog::{
    MessageCatalog, load_json_catalog, load_properties_catalog, parse_json_catalog,
    parse_properties_catalog,
};
use anyhow::{Context, Result, bail};
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug)]
pub enum CatalogFormat {
    Properties,
    Json,
}

impl CatalogFormat {
    pub fn from_flag(raw: &str) -> Result<Self> {
        match raw {
            "properties" => Ok(CatalogFormat::Properties),
            "json" => Ok(CatalogFormat::Json),
            other => bail!("unknown catalog format '{other}' (expected properties|json)"),
        }
    }
}

/// Resolved catalog source for one tool invocation.
#[derive(Debug)]
pub enum CatalogInput {
    PropertiesFile(PathBuf),
    JsonFile(PathBuf),
    Stdin(CatalogFormat),
}

impl CatalogInput {
    pub fn load(&self) -> Result<MessageCatalog> {
        match self {
            CatalogInput::PropertiesFile(path) => load_properties_catalog(path),
            CatalogInput::JsonFile(path) => load_json_catalog(path),
            CatalogInput::Stdin(format) => {
                let mut data = String::new();
                io::stdin()
                    .read_to_string(&mut data)
                    .context("reading stdin")?;
                match format {
                    CatalogFormat::Properties => parse_properties_catalog(&data),
                    CatalogFormat::Json => parse_json_catalog(&data),
                }
                .context("loading catalog from stdin")
            }
        }
    }
}

/// Builder collecting the input flags; exactly one source must be given.
#[derive(Debug, Default)]
pub struct InputArgs {
    properties: Option<PathBuf>,
    json: Option<PathBuf>,
    stdin: bool,
    format: Option<CatalogFormat>,
}

impl InputArgs {
    pub fn set_properties(&mut self, path: PathBuf) -> Result<()> {
        if self.properties.is_some() {
            bail!("--properties provided multiple times");
        }
        self.properties = Some(path);
        Ok(())
    }

    pub fn set_json(&mut self, path: PathBuf) -> Result<()> {
        if self.json.is_some() {
            bail!("--json provided multiple times");
        }
        self.json = Some(path);
        Ok(())
    }

    pub fn set_stdin(&mut self) -> Result<()> {
        if self.stdin {
            bail!("--stdin provided multiple times");
        }
        self.stdin = true;
        Ok(())
    }

    pub fn set_format(&mut self, format: CatalogFormat) -> Result<()> {
        if self.format.is_some() {
            bail!("--format provided multiple times");
        }
        self.format = Some(format);
        Ok(())
    }

    pub fn build(self) -> Result<CatalogInput> {
        let sources =
            usize::from(self.properties.is_some()) + usize::from(self.json.is_some())
                + usize::from(self.stdin);
        if sources == 0 {
            bail!("no catalog input; pass --properties PATH, --json PATH, or --stdin");
        }
        if sources > 1 {
            bail!("--properties, --json, and --stdin are mutually exclusive");
        }
        if self.stdin {
            let Some(format) = self.format else {
                bail!("--stdin requires --format properties|json");
            };
            return Ok(CatalogInput::Stdin(format));
        }
        if self.format.is_some() {
            bail!("--format only applies to --stdin; file inputs imply their format");
        }
        if let Some(path) = self.properties {
            return Ok(CatalogInput::PropertiesFile(path));
        }
        // build() is only reachable with one source set; json is what's left.
        match self.json {
            Some(path) => Ok(CatalogInput::JsonFile(path)),
            None => bail!("no catalog input resolved"),
        }
    }
}

/// Pull the value for a flag off the argument iterator.
pub fn next_value(args: &mut impl Iterator<Item = OsString>, flag: &str) -> Result<String> {
    args.next()
        .map(|os| {
            os.into_string()
                .map_err(|_| anyhow::anyhow!("value for {flag} is not valid UTF-8"))
        })
        .transpose()?
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))
}
