mod actions;
mod cli;
mod config;
pub mod mdm_api;
mod reconcile;
mod records;
mod report;
mod snapshots;
pub mod tracker_api;

use tracing::{info, warn};
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::mdm_api::mdm_client::MdmClient;
use crate::records::{
    AssetRecord, AssignmentBuckets, JoinedInventory, MdmDeviceRecord, MdmUserRecord, MemberRecord,
};
use crate::reconcile::classify::classify_assignments;
use crate::reconcile::join::join_by_serial;
use crate::tracker_api::AssetStatus;
use crate::tracker_api::tracker_client::TrackerClient;
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::time::Duration;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_file(&cli.config).or_else(|e| {
        println!("Config file not found. Creating example {}...", cli.config);
        Config::save_example(&cli.config)?;
        println!("Please edit {} with your settings and rerun.", cli.config);
        Err(e)
    })?;

    // Directory for logs
    let log_dir = &config.logging.directory;

    // One file per level
    let debug_file = rolling::daily(log_dir, &config.logging.debug_file);
    let info_file = rolling::daily(log_dir, &config.logging.info_file);
    let warn_file = rolling::daily(log_dir, &config.logging.warn_file);
    let error_file = rolling::daily(log_dir, &config.logging.error_file);

    // Build layers, filtering each level
    let debug_layer = fmt::layer()
        .with_writer(debug_file)
        .with_ansi(false)
        .with_filter(EnvFilter::new("debug"));

    let info_layer = fmt::layer()
        .with_writer(info_file)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::INFO);

    let warn_layer = fmt::layer()
        .with_writer(warn_file)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::WARN);

    let error_layer = fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(tracing_subscriber::filter::LevelFilter::ERROR);

    // Console pretty logger
    let console_layer = fmt::layer()
        .pretty()
        .with_filter(EnvFilter::new(&config.logging.console_level));

    // Compose subscriber
    tracing_subscriber::registry()
        .with(console_layer)
        .with(debug_layer)
        .with(info_layer)
        .with(warn_layer)
        .with(error_layer)
        .init();

    let timeout = Duration::from_secs(config.limits.request_timeout_seconds);

    match cli.command {
        Commands::FetchAssets { status } => {
            let client = TrackerClient::new(&config.tracker, timeout);
            let assets = tracker_api::fetch_assets(&client, status).await?;
            if assets.is_empty() {
                warn!("No assets retrieved for status {}", status.as_query());
            } else {
                let path = snapshots::data_path(&config.files, status.snapshot_name());
                snapshots::save(&path, &assets)?;
                info!("Saved {} assets to {}", assets.len(), path.display());
            }
        }

        Commands::FetchMembers => {
            let client = TrackerClient::new(&config.tracker, timeout);
            let members = tracker_api::fetch_members(&client).await?;
            if members.is_empty() {
                warn!("No members retrieved");
            } else {
                let path = snapshots::data_path(&config.files, snapshots::TRACKER_MEMBERS);
                snapshots::save(&path, &members)?;
                info!("Saved {} members to {}", members.len(), path.display());
            }
        }

        Commands::FetchMdm => {
            let client = MdmClient::new(&config.mdm, timeout);

            let computers = mdm_api::fetch_computers(&client).await?;
            let path = snapshots::data_path(&config.files, snapshots::MDM_COMPUTERS);
            snapshots::save(&path, &computers)?;
            info!("Saved {} computers to {}", computers.len(), path.display());

            let users = mdm_api::fetch_computer_users(&client).await?;
            let path = snapshots::data_path(&config.files, snapshots::MDM_USERS);
            snapshots::save(&path, &users)?;
            info!("Saved {} user records to {}", users.len(), path.display());

            let mobile_devices = mdm_api::fetch_mobile_devices(&client).await?;
            let path = snapshots::data_path(&config.files, snapshots::MDM_MOBILE_DEVICES);
            snapshots::save(&path, &mobile_devices)?;
            info!(
                "Saved {} mobile devices to {}",
                mobile_devices.len(),
                path.display()
            );
        }

        Commands::Reconcile => {
            let assets: Vec<AssetRecord> = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::TRACKER_ASSETS_CHECKED_OUT,
            ))?;
            let computers: Vec<MdmDeviceRecord> =
                snapshots::load(&snapshots::data_path(&config.files, snapshots::MDM_COMPUTERS))?;
            let mobile_devices: Vec<MdmDeviceRecord> = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::MDM_MOBILE_DEVICES,
            ))?;
            let users: Vec<MdmUserRecord> =
                snapshots::load(&snapshots::data_path(&config.files, snapshots::MDM_USERS))?;

            let joined = join_by_serial(assets, &computers, &mobile_devices, &users);
            snapshots::save(
                &snapshots::data_path(&config.files, snapshots::JOINED_ASSETS),
                &joined,
            )?;
            info!(
                "{} assets in MDM, {} not in MDM",
                joined.total_in_mdm, joined.total_not_in_mdm
            );

            let buckets = classify_assignments(joined.assets_in_mdm);
            snapshots::save(
                &snapshots::data_path(&config.files, snapshots::ASSIGNED_ASSETS),
                &buckets,
            )?;
            info!(
                "{} correct, {} wrong, {} unassigned",
                buckets.total_correct, buckets.total_wrong, buckets.total_unassigned
            );
        }

        Commands::FixAssignments => {
            let client = TrackerClient::new(&config.tracker, timeout);

            let members = tracker_api::fetch_members(&client).await?;
            if members.is_empty() {
                warn!("No members retrieved");
            } else {
                let path = snapshots::data_path(&config.files, snapshots::TRACKER_MEMBERS);
                snapshots::save(&path, &members)?;
                info!("Saved {} members to {}", members.len(), path.display());
            }

            let buckets: AssignmentBuckets = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::ASSIGNED_ASSETS,
            ))?;
            let fixed = actions::fix_assignments(&client, &buckets.wrong_user, &members).await;
            let path = snapshots::data_path(&config.files, snapshots::FIXED_ASSETS);
            snapshots::save(&path, &fixed)?;
            info!("Corrected {} assignments, saved to {}", fixed.len(), path.display());
        }

        Commands::AutoCheckout => {
            let client = TrackerClient::new(&config.tracker, timeout);

            let available = tracker_api::fetch_assets(&client, AssetStatus::Available).await?;
            if available.is_empty() {
                warn!("No available assets retrieved");
            } else {
                let path = snapshots::data_path(
                    &config.files,
                    AssetStatus::Available.snapshot_name(),
                );
                snapshots::save(&path, &available)?;
                info!("Saved {} assets to {}", available.len(), path.display());
            }

            let members: Vec<MemberRecord> =
                snapshots::load(&snapshots::data_path(&config.files, snapshots::TRACKER_MEMBERS))?;
            let records = actions::auto_checkout(&client, &available, &members).await;
            let path = snapshots::data_path(&config.files, snapshots::AUTOCHECKOUT_ASSETS);
            snapshots::save(&path, &records)?;
            info!("Checkout responses saved to {} - total: {}", path.display(), records.len());
        }

        Commands::Retire => {
            let client = TrackerClient::new(&config.tracker, timeout);
            let joined: JoinedInventory = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::JOINED_ASSETS,
            ))?;

            let retired = actions::retire_orphans(
                &client,
                &joined.not_in_mdm,
                &config.tracker.retire_manufacturer,
            )
            .await;
            let path = snapshots::data_path(&config.files, snapshots::RETIRED_ASSETS);
            snapshots::save(&path, &retired)?;
            info!("Retired {} assets, saved to {}", retired.len(), path.display());
        }

        Commands::QuickCheckin { file } => {
            let client = TrackerClient::new(&config.tracker, timeout);
            let serials = actions::read_serials(
                fs::File::open(&file).with_context(|| format!("Unable to open {}", file))?,
            )?;
            let joined: JoinedInventory = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::JOINED_ASSETS,
            ))?;

            let checked_in = actions::quick_checkin(&client, &serials, &joined.assets_in_mdm).await;
            let path = snapshots::data_path(&config.files, snapshots::QUICK_CHECKIN_ASSETS);
            snapshots::save(&path, &checked_in)?;
            info!("Checked in {} assets, saved to {}", checked_in.all.len(), path.display());
        }

        Commands::Report => {
            let buckets: AssignmentBuckets = snapshots::load(&snapshots::data_path(
                &config.files,
                snapshots::ASSIGNED_ASSETS,
            ))?;

            fs::create_dir_all(&config.files.report_dir).with_context(|| {
                format!("Unable to create report directory {}", config.files.report_dir)
            })?;
            let path = report::report_path(&config.files.report_dir);
            let file = fs::File::create(&path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            report::write_report(&buckets, file)?;
            info!("Created audit report {}", path.display());
        }
    }

    Ok(())
}
