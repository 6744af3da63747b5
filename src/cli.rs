use crate::tracker_api::AssetStatus;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "asset-audit")]
#[command(about = "Reconciles asset-tracker and MDM device inventories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch tracker assets into a snapshot
    FetchAssets {
        #[arg(long, value_enum, default_value_t = AssetStatus::CheckedOut)]
        status: AssetStatus,
    },

    /// Fetch tracker members into a snapshot
    FetchMembers,

    /// Fetch MDM computers, users and mobile devices into snapshots
    FetchMdm,

    /// Join the snapshots by serial number and classify assignments
    Reconcile,

    /// Checkin and re-checkout every wrong-user asset toward its MDM user
    FixAssignments,

    /// Checkout available assets to the member matching their candidate email
    AutoCheckout,

    /// Checkin and retire hardware missing from the MDM
    Retire,

    /// Checkin the serial numbers listed in a CSV file
    QuickCheckin {
        /// CSV file with serial numbers in the first column
        #[arg(long, default_value = "to_checkin.csv")]
        file: String,
    },

    /// Render the classification as a timestamped CSV report
    Report,
}
