/// Configuration compaction
///
/// This module collapses the configurations a failure was seen on against the
/// universe of configurations that were exercised, one axis at a time:
/// - every universe value failing reads "All N <axis>"
/// - a whole device class failing reads "All N FTL Devices" / "All N Virtual
///   Devices", with stragglers listed alongside
/// - a strict subset reads "k/N <axis>: v1,v2"
use crate::matrix::{self, Axis, DeviceType};
use crate::types::{ConfigVector, LogKind};
use std::collections::BTreeSet;

/// Compact failing configuration vectors against the universe of exercised
/// vectors of the same kind. Returns one group of entries per axis, in axis
/// order.
pub fn compact_configs(
    kind: LogKind,
    failing: &[ConfigVector],
    universe: &[ConfigVector],
) -> Vec<Vec<String>> {
    matrix::axes(kind)
        .iter()
        .enumerate()
        .map(|(i, axis)| compact_axis(axis, &axis_values(failing, i), &axis_values(universe, i)))
        .collect()
}

/// Render per-axis groups as a flat label, each group bracketed:
/// `[iOS] [All 2 os] [simulator_min, simulator_target]`.
pub fn flat_label(groups: &[Vec<String>]) -> String {
    groups
        .iter()
        .map(|group| format!("[{}]", group.join(", ")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn axis_values(configs: &[ConfigVector], index: usize) -> BTreeSet<String> {
    configs.iter().map(|config| config.value(index).to_string()).collect()
}

fn compact_axis(
    axis: &Axis,
    failing: &BTreeSet<String>,
    universe: &BTreeSet<String>,
) -> Vec<String> {
    if universe.len() > 1 && failing.len() == universe.len() {
        return vec![format!("All {} {}", universe.len(), axis.name)];
    }

    if axis.devices {
        if let Some(groups) = compact_device_classes(failing, universe) {
            return groups;
        }
    }

    if universe.len() > 1 {
        let values: Vec<&str> = failing.iter().map(String::as_str).collect();
        return vec![format!(
            "{}/{} {}: {}",
            failing.len(),
            universe.len(),
            axis.name,
            values.join(",")
        )];
    }

    failing.iter().cloned().collect()
}

/// Collapse whole device classes on the device axis. Returns `None` when no
/// class collapsed, so the caller falls through to the k/N form.
fn compact_device_classes(
    failing: &BTreeSet<String>,
    universe: &BTreeSet<String>,
) -> Option<Vec<String>> {
    let real = class_members(universe, DeviceType::Real);
    let virt = class_members(universe, DeviceType::Virtual);

    let mut groups = Vec::new();
    let mut leftover = failing.clone();
    if real.len() > 1 && real.is_subset(&leftover) {
        groups.push(format!("All {} FTL Devices", real.len()));
        leftover.retain(|device| !real.contains(device));
    }
    if virt.len() > 1 && virt.is_subset(&leftover) {
        groups.push(format!("All {} Virtual Devices", virt.len()));
        leftover.retain(|device| !virt.contains(device));
    }

    if groups.is_empty() {
        return None;
    }
    groups.extend(leftover);
    Some(groups)
}

fn class_members(universe: &BTreeSet<String>, class: DeviceType) -> BTreeSet<String> {
    universe
        .iter()
        .filter(|device| matrix::device_type(device) == Some(class))
        .cloned()
        .collect()
}
