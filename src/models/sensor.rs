//! Sensor reading rows in the NASA C-MAPSS layout.

use serde::{Deserialize, Serialize};

/// Number of sensor channels per reading.
pub const SENSOR_CHANNELS: usize = 21;

/// Number of operational settings per reading.
pub const OPERATIONAL_SETTINGS: usize = 3;

/// One cycle-indexed sensor reading for a degrading engine unit.
///
/// Rows are ordered by `(unit_id, cycle)`; within a unit, `rul` decreases
/// strictly from `lifespan - 1` down to `0` at the terminal cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub unit_id: u32,
    /// 1-based cycle index within the unit's life.
    pub cycle: u32,
    /// Normalized progress through the unit's lifespan, `cycle / lifespan`.
    pub degradation_factor: f64,
    /// Operational settings (altitude/Mach/throttle resolver analogues).
    pub settings: [f64; OPERATIONAL_SETTINGS],
    /// Raw sensor channels, indexed 0..21 for sensors 1..=21.
    pub sensors: [f64; SENSOR_CHANNELS],
    /// Remaining Useful Life in cycles; 0 at the terminal cycle.
    pub rul: u32,
}

impl SensorReading {
    /// Total temperature channel (sensor 3).
    pub fn temperature(&self) -> f64 {
        self.sensors[2]
    }

    /// Pressure channel (sensor 5).
    pub fn pressure(&self) -> f64 {
        self.sensors[4]
    }

    /// Physical fan speed channel (sensor 7).
    pub fn fan_speed(&self) -> f64 {
        self.sensors[6]
    }

    /// Vibration proxy channel (sensor 11).
    pub fn vibration(&self) -> f64 {
        self.sensors[10]
    }
}
