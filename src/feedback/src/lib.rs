//! Severity model
//!
//! Every check in the engine reports through these containers. A container's severity
//! is the maximum severity of what it holds and is kept current on every `add`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};


/// Three-level ordered severity, `Ok < Warning < Error`
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    Default,
    EnumIter,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Severity {
    #[default]
    #[strum(serialize = "ok")]
    Ok = 1,
    #[strum(serialize = "warning")]
    Warning = 2,
    #[strum(serialize = "error")]
    Error = 3,
}

impl Severity {
    /// Short marker used by text renderers
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Ok => "[ok]",
            Severity::Warning => "[warn]",
            Severity::Error => "[error]",
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Ok)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }
}

/// Findings of one category, e.g. "Armor"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackGroup {
    label: String,
    severity: Severity,
    feedback: Vec<Feedback>,
}

impl FeedbackGroup {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            severity: Severity::Ok,
            feedback: Vec::new(),
        }
    }

    /// Append a finding and raise the aggregate if needed
    pub fn add(&mut self, feedback: Feedback) {
        self.severity = self.severity.max(feedback.severity);
        self.feedback.push(feedback);
    }

    pub fn ok(&mut self, message: impl Into<String>) {
        self.add(Feedback::ok(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.add(Feedback::warning(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.add(Feedback::error(message));
    }

    /// Move every finding of `other` into this group, keeping their order
    pub fn absorb(&mut self, other: FeedbackGroup) {
        for feedback in other.feedback {
            self.add(feedback);
        }
    }

    pub fn aggregate(&self) -> Severity {
        self.severity
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    pub fn len(&self) -> usize {
        self.feedback.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feedback> {
        self.feedback.iter()
    }

    /// True if any finding has exactly this severity
    pub fn contains(&self, severity: Severity) -> bool {
        self.feedback.iter().any(|f| f.severity == severity)
    }

    /// Ranking key used when choosing between alternative evaluations:
    /// lower severity first, then fewer findings.
    pub fn rank(&self) -> (Severity, usize) {
        (self.severity, self.feedback.len())
    }
}

/// One full evaluation, made of ordered groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackCollection {
    severity: Severity,
    groups: Vec<FeedbackGroup>,
}

impl FeedbackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, group: FeedbackGroup) {
        self.severity = self.severity.max(group.aggregate());
        self.groups.push(group);
    }

    pub fn aggregate(&self) -> Severity {
        self.severity
    }

    pub fn groups(&self) -> &[FeedbackGroup] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&FeedbackGroup> {
        self.groups.iter().find(|g| g.label() == label)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedbackGroup> {
        self.groups.iter()
    }
}

impl Extend<FeedbackGroup> for FeedbackCollection {
    fn extend<T: IntoIterator<Item = FeedbackGroup>>(&mut self, iter: T) {
        for group in iter {
            self.add(group);
        }
    }
}
