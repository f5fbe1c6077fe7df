use upsize_core::Platform;
use upsize_engine::Escalator;

pub fn run(platform: &str, identifier: &str, format: &str) -> anyhow::Result<()> {
    let platform: Platform = platform.parse()?;

    Escalator::default().check(platform, identifier)?;

    match format {
        "json" => {
            let output = serde_json::json!({
                "platform": platform,
                "identifier": identifier,
                "valid": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        _ => {
            println!("✓ {identifier}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid_identifier() {
        assert!(run("gcp", "n2-standard-4", "text").is_ok());
        assert!(run("azure", "Standard_D64s_v3", "json").is_ok());
    }

    #[test]
    fn test_check_malformed_identifier() {
        assert!(run("aws", "m6ilarge", "text").is_err());
    }

    #[test]
    fn test_check_unknown_platform() {
        assert!(run("ibmcloud", "whatever", "text").is_err());
    }
}
