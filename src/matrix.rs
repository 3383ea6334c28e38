/// CI matrix schema
///
/// This module is the crate-local definition of the externally maintained
/// matrix layout: which configuration axes each result-log kind encodes in
/// its filename, and which test devices are real lab hardware versus
/// emulators/simulators. The summarizer itself never hardcodes axis
/// positions; everything goes through this schema.
use crate::types::LogKind;
use lazy_static::lazy_static;
use std::collections::HashMap;

/// One configuration axis of the CI matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    /// Name as rendered in compacted labels ("All 3 os").
    pub name: &'static str,
    /// True for the axis holding test-device identifiers; device-class
    /// grouping (FTL vs. virtual) only applies there.
    pub devices: bool,
}

/// Axes encoded by `build-results-*` filenames, in filename order.
pub const BUILD_AXES: [Axis; 2] = [
    Axis { name: "os", devices: false },
    Axis { name: "ssl", devices: false },
];

/// Axes encoded by `test-results-*` filenames, in filename order.
pub const TEST_AXES: [Axis; 3] = [
    Axis { name: "platform", devices: false },
    Axis { name: "os", devices: false },
    Axis { name: "Test Device(s)", devices: true },
];

/// The axis schema for one log kind.
pub fn axes(kind: LogKind) -> &'static [Axis] {
    match kind {
        LogKind::Build => &BUILD_AXES,
        LogKind::Test => &TEST_AXES,
    }
}

/// Device classes in the test matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// Physical hardware in Firebase Test Lab.
    Real,
    /// Emulator or simulator running on the CI host.
    Virtual,
}

lazy_static! {
    /// Known test devices and their class. Devices missing from this table
    /// never participate in device-class grouping.
    static ref TEST_DEVICES: HashMap<&'static str, DeviceType> = {
        let mut devices = HashMap::new();
        devices.insert("android_min", DeviceType::Real);
        devices.insert("android_target", DeviceType::Real);
        devices.insert("android_latest", DeviceType::Real);
        devices.insert("ios_min", DeviceType::Real);
        devices.insert("ios_target", DeviceType::Real);
        devices.insert("ios_latest", DeviceType::Real);
        devices.insert("emulator_min", DeviceType::Virtual);
        devices.insert("emulator_target", DeviceType::Virtual);
        devices.insert("emulator_latest", DeviceType::Virtual);
        devices.insert("simulator_min", DeviceType::Virtual);
        devices.insert("simulator_target", DeviceType::Virtual);
        devices.insert("simulator_latest", DeviceType::Virtual);
        devices.insert("tvos_simulator", DeviceType::Virtual);
        devices
    };
}

/// Look up the class of a test device, or None for unknown values.
pub fn device_type(device: &str) -> Option<DeviceType> {
    TEST_DEVICES.get(device).copied()
}
