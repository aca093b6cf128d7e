// dso6022-rs/dso6022/src/device/setup.rs

//! Device setup: turn user-level settings into the model's command
//! sequence and send it over a transport.

use crate::constants::CHANNEL_COUNT;
use crate::device::models::DeviceModel;
use crate::protocol::{Command, CommandKind, calfreq_code};
use crate::transport::Transport;
use crate::types::{Coupling, FixedSampleRate, VoltageRange};
use crate::{Error, Result};

/// Acquisition settings requested by the user
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeSettings {
    /// Voltage range per channel
    pub ranges: [VoltageRange; CHANNEL_COUNT],
    /// Input coupling per channel
    pub couplings: [Coupling; CHANNEL_COUNT],
    /// Effective sample rate; resolved with exact-or-next-higher
    pub sample_rate_hz: f64,
    /// 1 or 2
    pub active_channels: u8,
    /// Calibration output frequency
    pub calibration_frequency_hz: f64,
}

impl Default for ScopeSettings {
    fn default() -> Self {
        Self {
            ranges: [VoltageRange::V1; CHANNEL_COUNT],
            couplings: [Coupling::DC; CHANNEL_COUNT],
            sample_rate_hz: 1e6,
            active_channels: 2,
            calibration_frequency_hz: 1e3,
        }
    }
}

/// Validate `settings` against the model's specification and return the
/// commands to send, in the model's registration order.
pub fn plan(model: &DeviceModel, settings: &ScopeSettings) -> Result<Vec<Command>> {
    let spec = &model.specification;

    if settings.active_channels == 0 || settings.active_channels as usize > spec.channels {
        return Err(Error::InvalidChannelCount(settings.active_channels));
    }
    if let Some(c) = settings
        .couplings
        .iter()
        .find(|c| !spec.supports_coupling(**c))
    {
        return Err(Error::UnsupportedCoupling(*c));
    }
    let calfreq = settings.calibration_frequency_hz;
    let calfreq = match calfreq_code(calfreq) {
        Some(code) if spec.supports_calibration_frequency(calfreq) => code,
        _ => return Err(Error::UnsupportedCalibrationFrequency(calfreq)),
    };
    let rate: FixedSampleRate =
        spec.select_sample_rate(settings.sample_rate_hz, settings.active_channels)?;

    let commands = model
        .commands
        .iter()
        .map(|desc| match desc.kind {
            CommandKind::SetVoltDivCh1 => Command::SetVoltDiv {
                channel: 0,
                step: spec.gain_step(settings.ranges[0]),
            },
            CommandKind::SetVoltDivCh2 => Command::SetVoltDiv {
                channel: 1,
                step: spec.gain_step(settings.ranges[1]),
            },
            CommandKind::SetTimeDiv => Command::SetTimeDiv { rate },
            CommandKind::AcquireHardData => Command::AcquireHardData,
            CommandKind::SetNumChannels => Command::SetNumChannels {
                count: settings.active_channels,
            },
            CommandKind::SetCoupling => Command::SetCoupling {
                ch1: settings.couplings[0],
                ch2: settings.couplings[1],
            },
            CommandKind::SetCalFreq => Command::SetCalFreq { code: calfreq },
        })
        .collect();
    Ok(commands)
}

/// Program the device: one vendor control write per bound command.
/// Stops at the first transport error.
pub fn program(
    transport: &mut dyn Transport,
    model: &DeviceModel,
    settings: &ScopeSettings,
) -> Result<Vec<Command>> {
    let commands = plan(model, settings)?;
    for cmd in &commands {
        let payload = cmd.encode();
        log::debug!(
            "{}: request {:#04x} payload {:02x?}",
            model.name(),
            cmd.request(),
            payload
        );
        transport.vendor_control_write(cmd.request(), 0, 0, &payload)?;
    }
    Ok(commands)
}
