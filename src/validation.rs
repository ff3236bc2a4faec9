//! Trace validation utilities.
//!
//! This module checks that recorded trace lines match what the simulations
//! are expected to emit. The driver uses it for its `--check` flag and the
//! tests use it to state ordering properties once.

use crate::camera::Step;
use crate::traits::{FactoryError, Result};
use crate::transport::TransportKind;

/// Suffix of the line a camera emits before its first step.
const PICTURE_START: &str = " is taking a picture";
/// Suffix of the line a camera emits after its last step.
const PICTURE_FINISH: &str = " has taken a picture";

/// Validates the trace of a single `travel()` call.
///
/// # Arguments
///
/// * `lines` - The recorded trace lines
/// * `kind` - The kind of vehicle that traveled
///
/// # Returns
///
/// * `Ok(())` if the trace is the travel text of `kind`
/// * `Err(FactoryError::Validation)` otherwise
///
/// # Errors
///
/// Returns `Validation` if the trace is not exactly one line equal to the
/// travel text of `kind`.
pub fn validate_transport_trace(lines: &[String], kind: TransportKind) -> Result<()> {
    match lines {
        [line] if line == kind.travel_text() => Ok(()),
        [line] => Err(FactoryError::Validation(format!(
            "expected {:?}, got {line:?}",
            kind.travel_text()
        ))),
        _ => Err(FactoryError::Validation(format!(
            "expected exactly one travel line, got {}",
            lines.len()
        ))),
    }
}

/// Validates the trace of a single `take_picture()` call.
///
/// The trace must open with the start marker, close with the finish marker
/// for the same camera, and every line in between must report the steps of
/// [`Step::SEQUENCE`] in order.
///
/// # Arguments
///
/// * `lines` - The recorded trace lines, markers included
///
/// # Returns
///
/// * `Ok(())` if the steps ran in the fixed order
/// * `Err(FactoryError::Validation)` otherwise
///
/// # Errors
///
/// Returns `Validation` if:
/// - The start or finish marker is missing or names different cameras
/// - A line in between does not report a known step
/// - The steps are out of order, missing, or repeated
pub fn validate_picture_trace(lines: &[String]) -> Result<()> {
    let (first, rest) = lines
        .split_first()
        .ok_or_else(|| FactoryError::Validation("empty picture trace".to_owned()))?;
    let (last, body) = rest
        .split_last()
        .ok_or_else(|| FactoryError::Validation("picture trace has no finish line".to_owned()))?;

    let start_name = first.strip_suffix(PICTURE_START).ok_or_else(|| {
        FactoryError::Validation(format!("missing start marker, got {first:?}"))
    })?;
    let finish_name = last.strip_suffix(PICTURE_FINISH).ok_or_else(|| {
        FactoryError::Validation(format!("missing finish marker, got {last:?}"))
    })?;
    if start_name != finish_name {
        return Err(FactoryError::Validation(format!(
            "start names {start_name:?} but finish names {finish_name:?}"
        )));
    }

    if body.len() != Step::SEQUENCE.len() {
        return Err(FactoryError::Validation(format!(
            "expected {} steps, got {}",
            Step::SEQUENCE.len(),
            body.len()
        )));
    }

    for (index, (line, expected)) in body.iter().zip(Step::SEQUENCE).enumerate() {
        let actual = Step::classify(line).ok_or_else(|| {
            FactoryError::Validation(format!("line {index} reports no known step: {line:?}"))
        })?;
        if actual != expected {
            return Err(FactoryError::Validation(format!(
                "step {index} out of order: expected {expected}, got {actual}"
            )));
        }
    }

    Ok(())
}

/// Validates that two traces of the same operations differ only in label.
///
/// Every line of `a` with its first occurrence of `label_a` replaced by
/// `label_b` must equal the matching line of `b`.
///
/// # Arguments
///
/// * `a` - Trace of the first variant
/// * `b` - Trace of the second variant, same operations in the same order
/// * `label_a` - Label of the first variant
/// * `label_b` - Label of the second variant
///
/// # Returns
///
/// * `Ok(())` if the traces match once relabeled
/// * `Err(FactoryError::Validation)` otherwise
///
/// # Errors
///
/// Returns `Validation` if the traces have different lengths, a line of
/// `a` lacks `label_a`, or any relabeled line differs from `b`.
pub fn validate_label_only_difference(
    a: &[String],
    b: &[String],
    label_a: &str,
    label_b: &str,
) -> Result<()> {
    if a.len() != b.len() {
        return Err(FactoryError::Validation(format!(
            "trace lengths differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    for (index, (line_a, line_b)) in a.iter().zip(b).enumerate() {
        if !line_a.contains(label_a) {
            return Err(FactoryError::Validation(format!(
                "line {index} does not mention {label_a:?}: {line_a:?}"
            )));
        }
        let relabeled = line_a.replacen(label_a, label_b, 1);
        if &relabeled != line_b {
            return Err(FactoryError::Validation(format!(
                "line {index} differs beyond the label: {line_a:?} vs {line_b:?}"
            )));
        }
    }

    Ok(())
}
