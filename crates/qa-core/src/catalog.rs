use crate::error::QaError;
use crate::options::Config;
use crate::paths::slugify;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Substitution key carrying today's date, unless the caller supplies one.
pub const DATE_KEY: &str = "date";

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    TestPlan,
    TestSummary,
    TestCases,
    TestConditions,
    Traceability,
    BugReport,
    BugLog,
    RegressionSuite,
    PlaywrightSpec,
    ExploratoryCharter,
    EnvironmentChecklist,
    RiskAssessment,
}

impl ArtifactKind {
    pub fn all() -> &'static [ArtifactKind] {
        &[
            ArtifactKind::TestPlan,
            ArtifactKind::TestSummary,
            ArtifactKind::TestCases,
            ArtifactKind::TestConditions,
            ArtifactKind::Traceability,
            ArtifactKind::BugReport,
            ArtifactKind::BugLog,
            ArtifactKind::RegressionSuite,
            ArtifactKind::PlaywrightSpec,
            ArtifactKind::ExploratoryCharter,
            ArtifactKind::EnvironmentChecklist,
            ArtifactKind::RiskAssessment,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "test-plan",
            ArtifactKind::TestSummary => "test-summary",
            ArtifactKind::TestCases => "test-cases",
            ArtifactKind::TestConditions => "test-conditions",
            ArtifactKind::Traceability => "traceability",
            ArtifactKind::BugReport => "bug-report",
            ArtifactKind::BugLog => "bug-log",
            ArtifactKind::RegressionSuite => "regression-suite",
            ArtifactKind::PlaywrightSpec => "playwright-spec",
            ArtifactKind::ExploratoryCharter => "exploratory-charter",
            ArtifactKind::EnvironmentChecklist => "environment-checklist",
            ArtifactKind::RiskAssessment => "risk-assessment",
        }
    }

    pub fn template_file(self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "test-plan.md",
            ArtifactKind::TestSummary => "test-summary-report.md",
            ArtifactKind::TestCases => "test-cases.csv",
            ArtifactKind::TestConditions => "test-conditions.md",
            ArtifactKind::Traceability => "traceability-matrix.csv",
            ArtifactKind::BugReport => "bug-report.md",
            ArtifactKind::BugLog => "bug-log.csv",
            ArtifactKind::RegressionSuite => "regression-suite.md",
            ArtifactKind::PlaywrightSpec => "playwright.spec.ts",
            ArtifactKind::ExploratoryCharter => "exploratory-charter.md",
            ArtifactKind::EnvironmentChecklist => "environment-checklist.md",
            ArtifactKind::RiskAssessment => "risk-assessment.md",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ArtifactKind::TestPlan => "Release test plan: scope, approach, entry/exit criteria",
            ArtifactKind::TestSummary => "Test summary report for a completed release cycle",
            ArtifactKind::TestCases => "Test case table (CSV) for a feature",
            ArtifactKind::TestConditions => "Test conditions derived from a feature's requirements",
            ArtifactKind::Traceability => "Requirement-to-test traceability matrix (CSV)",
            ArtifactKind::BugReport => "Single bug report with repro steps and evidence",
            ArtifactKind::BugLog => "Running bug log (CSV)",
            ArtifactKind::RegressionSuite => "Regression suite definition for a release",
            ArtifactKind::PlaywrightSpec => "Playwright test scaffold for a feature",
            ArtifactKind::ExploratoryCharter => "Time-boxed exploratory testing charter",
            ArtifactKind::EnvironmentChecklist => "Test environment readiness checklist",
            ArtifactKind::RiskAssessment => "Quality risk assessment for a release",
        }
    }

    /// Configuration keys the template consumes.
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            ArtifactKind::TestPlan => &["project", "release", "owner", "approvers", "date"],
            ArtifactKind::TestSummary => &["project", "release", "owner", "approvers", "env", "date"],
            ArtifactKind::TestCases => &["project", "feature", "owner"],
            ArtifactKind::TestConditions => &["project", "feature", "owner", "date"],
            ArtifactKind::Traceability => &["project", "release"],
            ArtifactKind::BugReport => &["project", "release", "title", "reported_by", "env", "date"],
            ArtifactKind::BugLog => &["project", "release", "date"],
            ArtifactKind::RegressionSuite => &["project", "release", "owner", "env", "date"],
            ArtifactKind::PlaywrightSpec => &["project", "feature"],
            ArtifactKind::ExploratoryCharter => &["project", "feature", "owner", "env", "date"],
            ArtifactKind::EnvironmentChecklist => &["project", "release", "env", "owner", "date"],
            ArtifactKind::RiskAssessment => &["project", "release", "owner", "approvers", "date"],
        }
    }

    pub fn output_name(self) -> OutputName {
        match self {
            ArtifactKind::TestPlan => OutputName::slugged("test-plan-", "release", ".md"),
            ArtifactKind::TestSummary => OutputName::slugged("test-summary-", "release", ".md"),
            ArtifactKind::TestCases => OutputName::slugged("test-cases-", "feature", ".csv"),
            ArtifactKind::TestConditions => {
                OutputName::slugged("test-conditions-", "feature", ".md")
            }
            ArtifactKind::Traceability => OutputName::Fixed("traceability-matrix.csv"),
            ArtifactKind::BugReport => OutputName::dated("bug-", "title", ".md"),
            ArtifactKind::BugLog => OutputName::Fixed("bug-log.csv"),
            ArtifactKind::RegressionSuite => {
                OutputName::slugged("regression-suite-", "release", ".md")
            }
            ArtifactKind::PlaywrightSpec => OutputName::slugged("", "feature", ".spec.ts"),
            ArtifactKind::ExploratoryCharter => OutputName::dated("charter-", "feature", ".md"),
            ArtifactKind::EnvironmentChecklist => OutputName::Fixed("environment-checklist.md"),
            ArtifactKind::RiskAssessment => {
                OutputName::slugged("risk-assessment-", "release", ".md")
            }
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArtifactKind {
    type Err = QaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QaError::UnknownArtifact(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// OutputName
// ---------------------------------------------------------------------------

/// Rule for deriving an artifact's default output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputName {
    Fixed(&'static str),
    /// `<prefix><slug(field)><ext>`
    Slug {
        prefix: &'static str,
        field: &'static str,
        ext: &'static str,
    },
    /// `<prefix><YYYY-MM-DD>-<slug(field)><ext>`
    DatedSlug {
        prefix: &'static str,
        field: &'static str,
        ext: &'static str,
    },
}

impl OutputName {
    const fn slugged(prefix: &'static str, field: &'static str, ext: &'static str) -> Self {
        OutputName::Slug { prefix, field, ext }
    }

    const fn dated(prefix: &'static str, field: &'static str, ext: &'static str) -> Self {
        OutputName::DatedSlug { prefix, field, ext }
    }

    pub fn file_name(&self, config: &Config, today: NaiveDate) -> String {
        match *self {
            OutputName::Fixed(name) => name.to_string(),
            OutputName::Slug { prefix, field, ext } => {
                format!("{prefix}{}{ext}", slugify(config.value(field)))
            }
            OutputName::DatedSlug { prefix, field, ext } => format!(
                "{prefix}{}-{}{ext}",
                format_date(today),
                slugify(config.value(field))
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor
// ---------------------------------------------------------------------------

/// A catalog entry resolved against one invocation's configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub kind: ArtifactKind,
    pub template_file: &'static str,
    pub output_file_name: String,
    pub substitutions: BTreeMap<String, String>,
}

impl Descriptor {
    /// Look up `kind` in the catalog and bind it to `config`.
    pub fn lookup(kind: &str, config: &Config, today: NaiveDate) -> crate::Result<Self> {
        let kind: ArtifactKind = kind.parse()?;
        Ok(Self::for_kind(kind, config, today))
    }

    pub fn for_kind(kind: ArtifactKind, config: &Config, today: NaiveDate) -> Self {
        let mut substitutions = config.values().clone();
        substitutions
            .entry(DATE_KEY.to_string())
            .or_insert_with(|| format_date(today));
        Self {
            kind,
            template_file: kind.template_file(),
            output_file_name: kind.output_name().file_name(config, today),
            substitutions,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
