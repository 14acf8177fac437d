use crate::error::{QaError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Flag names and defaults
// ---------------------------------------------------------------------------

pub const FLAG_PREFIX: &str = "--";

/// Presence-only flag; never consumes a value.
pub const FORCE_FLAG: &str = "force";
pub const OUT_OPTION: &str = "out";
pub const TEMPLATES_OPTION: &str = "templates";

/// Substitution values every invocation starts from.
pub const DEFAULT_VALUES: &[(&str, &str)] = &[
    ("project", "Project"),
    ("release", "Release"),
    ("feature", "Feature"),
    ("title", "Bug title"),
    ("owner", ""),
    ("approvers", ""),
    ("reported_by", ""),
    ("env", ""),
];

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Resolved configuration for one invocation.
///
/// `out` and `templates` are routing options and never reach the
/// substitution map; every other `--key value` pair does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, String>,
    force: bool,
    out: Option<PathBuf>,
    templates: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            force: false,
            out: None,
            templates: None,
        }
    }
}

impl Config {
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_out(mut self, out: impl Into<PathBuf>) -> Self {
        self.out = Some(out.into());
        self
    }

    pub fn with_templates(mut self, templates: impl Into<PathBuf>) -> Self {
        self.templates = Some(templates.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Value for `key`, or the empty string when unset.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn force(&self) -> bool {
        self.force
    }

    pub fn out_dir(&self) -> Option<&Path> {
        self.out.as_deref()
    }

    pub fn templates_dir(&self) -> Option<&Path> {
        self.templates.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub config: Config,
    pub positionals: Vec<String>,
}

fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_PREFIX)
}

/// Resolve a flat argument list into a [`Config`] plus positional arguments.
///
/// Tokens are scanned left to right. `--force` is a bare flag; any other
/// `--name` consumes the following token as its value. Repeated options
/// overwrite earlier ones. Positionals keep their original order.
pub fn resolve<I, S>(args: I) -> Result<Resolved>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = Config::default();
    let mut positionals = Vec::new();
    let mut tokens = args.into_iter().map(Into::into).peekable();

    while let Some(token) = tokens.next() {
        let Some(name) = token.strip_prefix(FLAG_PREFIX) else {
            positionals.push(token);
            continue;
        };
        if name.is_empty() {
            return Err(QaError::Usage("empty option name '--'".to_string()));
        }
        if name == FORCE_FLAG {
            config.force = true;
            continue;
        }

        let value = match tokens.next_if(|next| !is_flag(next)) {
            Some(value) => value,
            None => return Err(QaError::Usage(format!("missing value for --{name}"))),
        };
        match name {
            OUT_OPTION => config.out = Some(PathBuf::from(value)),
            TEMPLATES_OPTION => config.templates = Some(PathBuf::from(value)),
            _ => {
                config.values.insert(name.to_string(), value);
            }
        }
    }

    Ok(Resolved {
        config,
        positionals,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
