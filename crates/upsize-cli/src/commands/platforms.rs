use upsize_core::Platform;

pub fn run(format: &str) -> anyhow::Result<()> {
    match format {
        "json" => {
            let rows: Vec<_> = Platform::SUPPORTED
                .iter()
                .map(|p| {
                    serde_json::json!({
                        "platform": p,
                        "support": p.support_level(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            for platform in Platform::SUPPORTED {
                println!("{:<10} {:?}", platform.as_str(), platform.support_level());
            }
        }
    }

    Ok(())
}
