// dso6022-rs/dso6022/src/control/voltage.rs

//! Voltage scaling of the analog front end.
//!
//! Everything is scaled on the full screen height (8 divisions):
//!
//! ```text
//! volts/div             20m   50m  100m  200m  500m    1V    2V    5V
//! input for full screen 0.16V 0.4V 0.8V  1.6V    4V    8V   16V   40V
//! amplifier gain        x10   x10   x10   x5    x2    x1    x1    x1
//! mV per ADC code         4     4     4     8    20    40    40    40
//! ```
//!
//! The input divider (100/1009) reads 1% low and the x5/x10 amplifier
//! stages are really x5.1/x10.1, so the overall gain is x1 and x2 1% low,
//! x5 1% high, x10 exact. The tables below carry the resulting ADC code
//! counts instead of recomputing the error at runtime.

use crate::constants::RANGE_COUNT;
use crate::types::GainStep;

use super::ControlSpecification;

/// ADC codes spanning full screen height with the theoretical gain setting
pub const THEORETICAL_SCALE: [f64; RANGE_COUNT] =
    [40.0, 100.0, 200.0, 202.0, 198.0, 198.0, 396.0, 990.0];

/// Hardware gain and V/screen height per range
pub const GAIN_STEPS: [GainStep; RANGE_COUNT] = [
    GainStep::new(10, 0.16),
    GainStep::new(10, 0.40),
    GainStep::new(10, 0.80),
    GainStep::new(5, 1.60),
    GainStep::new(2, 4.00),
    GainStep::new(1, 8.00),
    GainStep::new(1, 16.00),
    GainStep::new(1, 40.00),
];

/// Populate theoretical scale, zero offsets and the gain table.
pub fn init(spec: &mut ControlSpecification) {
    spec.set_theoretical_scale(THEORETICAL_SCALE);
    for offsets in spec.voltage_offset.iter_mut() {
        *offsets = [0; RANGE_COUNT];
    }
    spec.gain = GAIN_STEPS;
}
