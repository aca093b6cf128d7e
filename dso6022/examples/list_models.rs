//! Print every registered model with its identities and tables.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p dso6022 --example list_models --features test-boards

use dso6022::device::RegistryBuilder;
use dso6022::Result;

fn main() -> Result<()> {
    env_logger::init();

    let registry = RegistryBuilder::new().default_calibration().build();
    registry.validate()?;

    for model in &registry {
        let id = &model.identity;
        println!(
            "{:<14} active {} loader {} firmware {} ({})",
            model.name(),
            id.active,
            id.loader,
            id.firmware_version,
            id.config_name
        );
    }

    let Some(model) = registry.iter().next() else {
        return Ok(());
    };
    let spec = &model.specification;

    println!("\nvoltage ranges ({}):", model.name());
    for range in dso6022::VoltageRange::ALL {
        let step = spec.gain_step(range);
        println!(
            "  {:>7}  gain {:>2}  {:>5} V/screen  ch0 {:>7.2} / {:>4}  ch1 {:>7.2} / {:>4}",
            range.name(),
            step.hardware_gain,
            step.volts_per_screen,
            spec.voltage_scale(0, range)?,
            spec.voltage_offset(0, range)?,
            spec.voltage_scale(1, range)?,
            spec.voltage_offset(1, range)?,
        );
    }

    println!("\nsample rates:");
    for rate in &spec.fixed_sample_rates {
        println!(
            "  {:>10} S/s  id {:>3}  /{:<3} from {} S/s",
            rate.rate_hz,
            rate.sample_id,
            rate.downsampling,
            rate.raw_rate_hz()
        );
    }

    println!("\ncommands: {:02x?}", model.commands.opcodes());
    Ok(())
}
