use std::path::Path;

use upsize_core::{EscalateConfig, Platform};
use upsize_engine::Escalator;

pub fn run(
    platform: &str,
    identifier: &str,
    format: &str,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let platform: Platform = platform.parse()?;
    let config = EscalateConfig::load(config_path.map(Path::new))?;

    let next = Escalator::new(config).escalate(platform, identifier)?;

    tracing::info!(
        platform = %platform,
        current = identifier,
        next = %next,
        "escalated instance size"
    );

    match format {
        "json" => {
            let output = serde_json::json!({
                "platform": platform,
                "current": identifier,
                "next": next,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("{next}");
        }
    }

    Ok(())
}
