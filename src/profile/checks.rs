//! Structural well-formedness checks over a loaded descriptor.
//!
//! Loading already guarantees every key is present and typed (dates are
//! ISO-8601 by construction). These checks cover what the type system
//! cannot: empty strings, score ranges and non-negative money.

use serde::{Deserialize, Serialize};

use crate::config::CheckSettings;

use super::model::{Apparatus, EventScore, ProfileDescriptor};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    EmptyText,
    ScoreOutOfRange,
    NegativeAmount,
    RaisedExceedsGoal,
    UnorderedEvents,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIssue {
    /// JSON-style location, e.g. `photos[1].alt`.
    pub location: String,
    pub severity: IssueSeverity,
    pub kind: IssueKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckReport {
    pub issues: Vec<CheckIssue>,
}

impl CheckReport {
    /// True when nothing of `Error` severity was found.
    pub fn is_clean(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CheckIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CheckIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
    }

    pub fn at(&self, location: &str) -> Option<&CheckIssue> {
        self.issues.iter().find(|issue| issue.location == location)
    }

    fn push(
        &mut self,
        location: impl Into<String>,
        severity: IssueSeverity,
        kind: IssueKind,
        message: impl Into<String>,
    ) {
        self.issues.push(CheckIssue {
            location: location.into(),
            severity,
            kind,
            message: message.into(),
        });
    }

    fn require_text(&mut self, location: String, value: &str, severity: IssueSeverity) {
        if value.trim().is_empty() {
            let message = format!("{location} is empty");
            self.push(location, severity, IssueKind::EmptyText, message);
        }
    }
}

/// Runs every structural check and collects the findings.
pub fn check_descriptor(descriptor: &ProfileDescriptor, settings: &CheckSettings) -> CheckReport {
    let mut report = CheckReport::default();
    check_identity(descriptor, &mut report);
    check_fundraising(descriptor, &mut report);
    check_photos(descriptor, &mut report);
    for (apparatus, entries) in &descriptor.events {
        check_events(*apparatus, entries, settings, &mut report);
    }
    check_sponsors(descriptor, &mut report);
    check_bio(descriptor, &mut report);
    tracing::debug!(
        errors = report.errors().count(),
        warnings = report.warnings().count(),
        "checked profile descriptor"
    );
    report
}

fn check_identity(descriptor: &ProfileDescriptor, report: &mut CheckReport) {
    for (key, value) in [
        ("firstName", &descriptor.first_name),
        ("lastName", &descriptor.last_name),
        ("team", &descriptor.team),
        ("discipline", &descriptor.discipline),
        ("level", &descriptor.level),
    ] {
        report.require_text(key.into(), value, IssueSeverity::Warning);
    }
}

fn check_fundraising(descriptor: &ProfileDescriptor, report: &mut CheckReport) {
    let fundraising = &descriptor.fundraising;
    for (key, amount) in [("raised", fundraising.raised), ("goal", fundraising.goal)] {
        if !amount.is_finite() || amount < 0.0 {
            report.push(
                format!("fundraising.{key}"),
                IssueSeverity::Error,
                IssueKind::NegativeAmount,
                format!("fundraising.{key} must be a non-negative number, found {amount}"),
            );
        }
    }
    if fundraising.raised > fundraising.goal {
        report.push(
            "fundraising.raised",
            IssueSeverity::Warning,
            IssueKind::RaisedExceedsGoal,
            format!(
                "raised {} exceeds goal {}",
                fundraising.raised, fundraising.goal
            ),
        );
    }
}

fn check_photos(descriptor: &ProfileDescriptor, report: &mut CheckReport) {
    for (idx, photo) in descriptor.photos.iter().enumerate() {
        for (key, value) in [
            ("src", &photo.src),
            ("alt", &photo.alt),
            ("caption", &photo.caption),
        ] {
            report.require_text(format!("photos[{idx}].{key}"), value, IssueSeverity::Error);
        }
    }
}

fn check_events(
    apparatus: Apparatus,
    entries: &[EventScore],
    settings: &CheckSettings,
    report: &mut CheckReport,
) {
    for (idx, entry) in entries.iter().enumerate() {
        let location = format!("events.{apparatus}[{idx}]");
        report.require_text(format!("{location}.meet"), &entry.meet, IssueSeverity::Error);
        let in_range = entry.score.is_finite()
            && entry.score >= settings.score_min
            && entry.score <= settings.score_max;
        if !in_range {
            report.push(
                format!("{location}.score"),
                IssueSeverity::Error,
                IssueKind::ScoreOutOfRange,
                format!(
                    "{} score {} at {} is outside [{}, {}]",
                    apparatus.label(),
                    entry.score,
                    entry.meet,
                    settings.score_min,
                    settings.score_max
                ),
            );
        }
    }
    if settings.warn_unordered_events {
        for (idx, pair) in entries.windows(2).enumerate() {
            if pair[1].date < pair[0].date {
                report.push(
                    format!("events.{apparatus}[{}].date", idx + 1),
                    IssueSeverity::Warning,
                    IssueKind::UnorderedEvents,
                    format!(
                        "{} dated {} is listed after {}",
                        pair[1].meet, pair[1].date, pair[0].date
                    ),
                );
            }
        }
    }
}

fn check_sponsors(descriptor: &ProfileDescriptor, report: &mut CheckReport) {
    for (idx, sponsor) in descriptor.sponsors.iter().enumerate() {
        report.require_text(
            format!("sponsors[{idx}].name"),
            &sponsor.name,
            IssueSeverity::Warning,
        );
        report.require_text(
            format!("sponsors[{idx}].url"),
            &sponsor.url,
            IssueSeverity::Warning,
        );
    }
}

fn check_bio(descriptor: &ProfileDescriptor, report: &mut CheckReport) {
    for (idx, fact) in descriptor.bio.quick_facts.iter().enumerate() {
        report.require_text(
            format!("bio.quickFacts[{idx}].label"),
            &fact.label,
            IssueSeverity::Warning,
        );
    }
}
