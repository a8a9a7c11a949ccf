use anyhow::Result;
use shared::config::{ClientConfig, ConfigFormat};

/// Prints a default configuration file in the requested format.
///
/// # Errors
/// Returns an error if the format is unsupported or serialization fails.
pub fn generate_config(format: &str) -> Result<()> {
    let format: ConfigFormat = format.parse()?;
    let serialized = ClientConfig::with_defaults().serialize_as(format)?;
    print!("{serialized}");
    if !serialized.ends_with('\n') {
        println!();
    }
    Ok(())
}
