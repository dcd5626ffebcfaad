//! Reporting of an assembled [`ChainResult`].
//!
//! The exact output shape is not part of the core contract; this module
//! offers a human-readable text report and a JSON rendering.

use std::fmt;

use crate::chain::ChainResult;
use crate::classify::ArtifactDescriptor;

fn write_slot(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    slot: Option<&ArtifactDescriptor>,
) -> fmt::Result {
    match slot {
        Some(descriptor) => {
            write!(f, "{:<16}{}", label, descriptor.name)?;
            if let Some(subject) = descriptor.subjects.first() {
                write!(f, " (subject \"{}\")", subject)?;
            }
            writeln!(f)
        }
        None => writeln!(f, "{:<16}(none)", label),
    }
}

impl fmt::Display for ChainResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_slot(f, "root CA:", self.root_ca.as_ref())?;
        if self.intermediates.is_empty() {
            writeln!(f, "{:<16}(none)", "intermediates:")?;
        } else {
            for intermediate in &self.intermediates {
                write_slot(f, "intermediate:", Some(intermediate))?;
            }
        }
        write_slot(f, "end entity:", self.end_entity.as_ref())?;
        write_slot(f, "end entity key:", self.end_entity_key.as_ref())
    }
}

/// Serializes the result for machine consumers.
pub fn to_json(result: &ChainResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_reports_every_slot_as_absent() {
        let text = ChainResult::default().to_string();
        assert_eq!(text.matches("(none)").count(), 4);
    }

    #[test]
    fn empty_result_serializes_with_null_slots() {
        let json = to_json(&ChainResult::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["root_ca"].is_null());
        assert!(value["intermediates"].as_array().unwrap().is_empty());
    }
}
