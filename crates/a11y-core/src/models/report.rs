use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Impact;

/// Finished accessibility report for one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Id of the owning job.
    pub id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub issues_by_impact: IssueBuckets,
    pub recommendations: Vec<String>,
}

impl Report {
    /// Every issue across all buckets, in bucket order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.issues_by_impact.iter().flat_map(|(_, issues)| issues.iter())
    }
}

/// Issue counts.
///
/// `total_issues` counts every issue. The four named counters only count the
/// known severities, so an unknown severity shows up in `total_issues` and
/// `impact_scores` but in none of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_issues: usize,
    pub critical: usize,
    pub serious: usize,
    pub moderate: usize,
    pub minor: usize,
    /// Count per raw severity value, including unknown ones.
    pub impact_scores: BTreeMap<String, usize>,
}

impl ReportSummary {
    /// Count one issue of the given severity.
    pub fn record(&mut self, impact: &Impact) {
        self.total_issues += 1;
        *self
            .impact_scores
            .entry(impact.as_str().to_string())
            .or_insert(0) += 1;
        match impact {
            Impact::Critical => self.critical += 1,
            Impact::Serious => self.serious += 1,
            Impact::Moderate => self.moderate += 1,
            Impact::Minor => self.minor += 1,
            Impact::Other(_) => {}
        }
    }
}

/// One finding after localisation, enrichment and formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule id of the source finding.
    pub id: String,
    pub impact: Impact,
    pub title: String,
    pub description: String,
    pub how_to_fix: String,
    pub affected_elements: usize,
    pub tags: Vec<String>,
    pub help_url: String,
    pub examples: Vec<String>,
}

/// Issues grouped by severity, in a fixed order.
///
/// The four known severities always come first (most severe first, possibly
/// empty), followed by unknown severities in the order they were first seen.
/// Serialized as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct IssueBuckets {
    buckets: Vec<(Impact, Vec<Issue>)>,
}

impl IssueBuckets {
    /// Buckets for the four known severities, all empty.
    pub fn new() -> Self {
        Self {
            buckets: Impact::KNOWN
                .iter()
                .map(|impact| (impact.clone(), Vec::new()))
                .collect(),
        }
    }

    /// Append `issue` to the bucket for `issue.impact`, creating it if needed.
    pub fn push(&mut self, issue: Issue) {
        match self.buckets.iter_mut().find(|(impact, _)| *impact == issue.impact) {
            Some((_, issues)) => issues.push(issue),
            None => self.buckets.push((issue.impact.clone(), vec![issue])),
        }
    }

    /// Issues for `impact`; empty if the bucket does not exist.
    pub fn get(&self, impact: &Impact) -> &[Issue] {
        self.buckets
            .iter()
            .find(|(candidate, _)| candidate == impact)
            .map(|(_, issues)| issues.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Impact, &[Issue])> {
        self.buckets
            .iter()
            .map(|(impact, issues)| (impact, issues.as_slice()))
    }

    /// Severities in bucket order.
    pub fn impacts(&self) -> impl Iterator<Item = &Impact> {
        self.buckets.iter().map(|(impact, _)| impact)
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Sum of all bucket sizes.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|(_, issues)| issues.len()).sum()
    }
}

impl Default for IssueBuckets {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for IssueBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (impact, issues) in &self.buckets {
            map.serialize_entry(impact.as_str(), issues)?;
        }
        map.end()
    }
}

struct IssueBucketsVisitor;

impl<'de> Visitor<'de> for IssueBucketsVisitor {
    type Value = IssueBuckets;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of severity to issue list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut buckets = IssueBuckets::new();
        while let Some((key, issues)) = access.next_entry::<String, Vec<Issue>>()? {
            let impact = Impact::from(key);
            match buckets.buckets.iter_mut().find(|(known, _)| *known == impact) {
                Some((_, existing)) => existing.extend(issues),
                None => buckets.buckets.push((impact, issues)),
            }
        }
        Ok(buckets)
    }
}

impl<'de> Deserialize<'de> for IssueBuckets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(IssueBucketsVisitor)
    }
}
