use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "upsize",
    about = "upsize — compute the next larger cloud instance size",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the next larger size for an instance identifier.
    ///
    /// The identifier is the provider's own string form (`m6i.large`,
    /// `Standard_D4s_v3`, `n2-custom-4-12288`); for nutanix it is the
    /// decimal vCPU socket count. OpenStack needs an alternate flavor,
    /// from OPENSTACK_CONTROLPLANE_FLAVOR_ALTERNATE or --config.
    Next {
        /// Platform discriminator (aws, azure, gcp, nutanix, openstack)
        #[arg(short, long)]
        platform: String,
        /// Current instance identifier
        identifier: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Path to an upsize.toml config file
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Validate that an identifier matches its platform's grammar.
    ///
    /// Succeeds for any well-formed identifier, even one already at its
    /// size ceiling; use `next` to find out whether a successor exists.
    Check {
        /// Platform discriminator (aws, azure, gcp, nutanix, openstack)
        #[arg(short, long)]
        platform: String,
        /// Instance identifier to validate
        identifier: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List platforms and how fully their sizing rules are modelled
    Platforms {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("upsize=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Next {
            platform,
            identifier,
            format,
            config,
        } => commands::next::run(&platform, &identifier, &format, config.as_deref()),
        Commands::Check {
            platform,
            identifier,
            format,
        } => commands::check::run(&platform, &identifier, &format),
        Commands::Platforms { format } => commands::platforms::run(&format),
    }
}
