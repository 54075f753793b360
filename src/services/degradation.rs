//! Synthetic sensor-degradation series generation with RUL labels.
//!
//! Produces per-unit, cycle-indexed readings in the NASA C-MAPSS layout. Each
//! unit draws its lifespan and operational settings from a dedicated random
//! sub-stream derived from the base seed and the unit id, so output is
//! byte-identical across runs for the same parameters and independent of the
//! order in which units are generated.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use super::GenerationError;
use crate::config::GeneratorSettings;
use crate::models::{SensorReading, SENSOR_CHANNELS};

/// Affine degradation profile per sensor channel: `base + slope * factor`.
///
/// Channels with zero slope read constant over the unit's life.
const SENSOR_PROFILES: [(f64, f64); SENSOR_CHANNELS] = [
    (518.67, 15.0),   // sensor 1  - total temperature
    (641.82, 20.0),   // sensor 2  - total temperature
    (1589.7, 100.0),  // sensor 3  - total temperature
    (1400.6, 50.0),   // sensor 4  - total temperature
    (14.62, -2.0),    // sensor 5  - pressure
    (21.61, 0.0),     // sensor 6  - pressure
    (554.36, 25.0),   // sensor 7  - physical fan speed
    (2388.0, 80.0),   // sensor 8  - physical core speed
    (9046.2, -100.0), // sensor 9  - static pressure
    (1.30, 0.0),      // sensor 10 - ratio
    (47.47, 8.0),     // sensor 11 - bypass ratio
    (521.66, 15.0),   // sensor 12 - temperature
    (2388.0, 80.0),   // sensor 13 - physical fan speed
    (8138.6, -90.0),  // sensor 14 - corrected fan speed
    (8.4195, -0.5),   // sensor 15 - pressure
    (0.03, 0.01),     // sensor 16 - corrected core speed
    (392.0, 30.0),    // sensor 17 - bypass ratio
    (2388.0, 80.0),   // sensor 18 - core speed
    (100.0, 0.0),     // sensor 19 - static pressure
    (38.86, 5.0),     // sensor 20 - HPC outlet temperature
    (23.419, -1.0),   // sensor 21 - LPT outlet temperature
];

/// Generate the full labeled reading table for `params.unit_count` units.
///
/// Rows come out ordered by `(unit_id, cycle)`. RUL labels are attached by
/// [`label_rul`] as a grouped post-pass over the flat sequence.
///
/// # Errors
/// `InvalidParameter` when `unit_count` or `min_cycles` is zero, or
/// `max_cycles < min_cycles`. Rejection happens before any generation.
pub fn generate_readings(params: &GeneratorSettings) -> Result<Vec<SensorReading>, GenerationError> {
    validate(params)?;

    let mut readings = Vec::new();
    for unit_id in 1..=params.unit_count {
        generate_unit(params, unit_id, &mut readings);
    }

    label_rul(&mut readings);
    Ok(readings)
}

fn validate(params: &GeneratorSettings) -> Result<(), GenerationError> {
    if params.unit_count == 0 {
        return Err(GenerationError::InvalidParameter(
            "unit_count must be at least 1".to_string(),
        ));
    }
    if params.min_cycles == 0 {
        return Err(GenerationError::InvalidParameter(
            "min_cycles must be at least 1".to_string(),
        ));
    }
    if params.max_cycles < params.min_cycles {
        return Err(GenerationError::InvalidParameter(format!(
            "max_cycles ({}) must be >= min_cycles ({})",
            params.max_cycles, params.min_cycles
        )));
    }
    Ok(())
}

/// Generate one unit's series from its derived sub-stream.
fn generate_unit(params: &GeneratorSettings, unit_id: u32, out: &mut Vec<SensorReading>) {
    // Order-independent sub-stream: the same unit produces the same series
    // regardless of which units are generated around it.
    let mut rng = StdRng::seed_from_u64(params.seed ^ u64::from(unit_id));

    let lifespan = rng.gen_range(params.min_cycles..=params.max_cycles);

    for cycle in 1..=lifespan {
        let degradation_factor = f64::from(cycle) / f64::from(lifespan);

        let settings = [
            rng.gen_range(-0.0007..0.0020),
            rng.gen_range(0.0..0.0005),
            100.0,
        ];

        let mut sensors = [0.0; SENSOR_CHANNELS];
        for (value, (base, slope)) in sensors.iter_mut().zip(SENSOR_PROFILES) {
            *value = base + slope * degradation_factor;
        }

        out.push(SensorReading {
            unit_id,
            cycle,
            degradation_factor,
            settings,
            sensors,
            // Filled in by label_rul once the unit's max cycle is known.
            rul: 0,
        });
    }
}

/// Attach RUL labels to a flat reading sequence.
///
/// Two-pass grouped reduction keyed by `unit_id`: the first pass finds each
/// unit's maximum cycle, the second maps `rul = max_cycle - cycle` over every
/// row. Linear in the input size.
pub fn label_rul(readings: &mut [SensorReading]) {
    let mut max_cycle: HashMap<u32, u32> = HashMap::new();
    for reading in readings.iter() {
        let entry = max_cycle.entry(reading.unit_id).or_insert(0);
        if reading.cycle > *entry {
            *entry = reading.cycle;
        }
    }

    for reading in readings.iter_mut() {
        let last = max_cycle
            .get(&reading.unit_id)
            .copied()
            .unwrap_or(reading.cycle);
        reading.rul = last - reading.cycle;
    }
}
