//! Argument surface of the `railrisk` binary.
//!
//! Positional values are kept as text and parsed by the command handlers so
//! that a malformed number becomes a fallback payload instead of a usage
//! error.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Risk scoring and lifetime estimation for railway track components.
#[derive(Debug, Parser)]
#[command(name = "railrisk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reference data CSV (overrides RAILRISK_DATA_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Classifier artifact (overrides RAILRISK_CLASSIFIER_MODEL)
    #[arg(long, global = true, value_name = "PATH")]
    pub classifier_model: Option<PathBuf>,

    /// Lifetime regressor artifact (overrides RAILRISK_LIFETIME_MODEL)
    #[arg(long, global = true, value_name = "PATH")]
    pub lifetime_model: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Data-driven risk assessment against the reference data
    Assess(AssessArgs),
    /// Data-driven lifetime estimate
    Lifetime(LifetimeArgs),
    /// Classifier verdict reviewed against historical data
    Classify(ComponentArgs),
    /// Lifetime estimate from the regressor artifact
    LifetimeModel(LifetimeArgs),
    /// Bare classifier verdict
    Predict(ComponentArgs),
    /// Describe a model artifact and run a sample input through it
    InspectModel(InspectArgs),
}

impl Command {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Assess(_) => "assess",
            Self::Lifetime(_) => "lifetime",
            Self::Classify(_) => "classify",
            Self::LifetimeModel(_) => "lifetime-model",
            Self::Predict(_) => "predict",
            Self::InspectModel(_) => "inspect-model",
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct ComponentArgs {
    /// Vendor id [default: 100]
    pub vendor_id: Option<String>,
    /// Part type label or code [default: Rail Clips]
    pub part_type: Option<String>,
    /// Material code [default: 1]
    pub material: Option<String>,
    /// Expected lifetime in days [default: 1000]
    pub lifetime: Option<String>,
    /// Region label or code [default: North]
    pub region: Option<String>,
    /// Route type label or code [default: Passenger]
    pub route_type: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct AssessArgs {
    #[command(flatten)]
    pub component: ComponentArgs,
    /// Days between manufacture and installation [default: 30]
    pub days_manuf_to_install: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct LifetimeArgs {
    /// Vendor id [default: 100]
    pub vendor_id: Option<String>,
    /// Part type label or code [default: Rail Clips]
    pub part_type: Option<String>,
    /// Lot number [default: 1001]
    pub lot_number: Option<String>,
    /// Material code [default: 1]
    pub material: Option<String>,
    /// Warranty in years [default: 2]
    pub warranty_years: Option<String>,
    /// Region label or code [default: North]
    pub region: Option<String>,
    /// Route type label or code [default: Passenger]
    pub route_type: Option<String>,
    /// Days between manufacture and installation [default: 30]
    pub days_manuf_to_install: Option<String>,
    /// Days between installation and inspection [default: 90]
    pub days_install_to_inspect: Option<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct InspectArgs {
    /// Artifact to inspect [default: the configured classifier model]
    pub path: Option<PathBuf>,
}
