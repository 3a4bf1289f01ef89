//! actionsheet
//!
//! Composes a browser menu from a JSON request snapshot and prints the
//! presenter input as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use actionsheet_composer::provider::{StaticPageStatus, parse_request, prepare_request};
use actionsheet_composer::{Config, MenuComposer, PresentationStyle, SheetPresentation};
use actionsheet_sdk::prelude::*;
use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Which menu to compose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MenuKind {
    Page,
    Tracking,
    Domains,
    Sync,
    LocationBar,
    Refresh,
    Library,
    Panel,
}

#[derive(Debug, Parser)]
#[command(name = "actionsheet", version, about = "Compose browser menus from state snapshots")]
struct Args {
    /// Path to a JSON request snapshot, or "-" for stdin.
    request: PathBuf,

    #[arg(long, value_enum, default_value_t = MenuKind::Page)]
    menu: MenuKind,

    /// The clipboard holds text (location bar menu).
    #[arg(long)]
    clipboard: bool,

    /// Tracker group to drill into (domains menu).
    #[arg(long)]
    group: Option<TrackerGroup>,

    /// Override ACTIONSHEET_IDIOM.
    #[arg(long)]
    idiom: Option<DeviceIdiom>,

    /// Bookmarked URL; when any --bookmark or --pin is given, bookmark and
    /// pin status are looked up instead of read from the snapshot.
    #[arg(long = "bookmark")]
    bookmarks: Vec<String>,

    /// Pinned top-site URL.
    #[arg(long = "pin")]
    pins: Vec<String>,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let args = Args::parse();
    let mut config = Config::from_env().context("failed to load configuration")?;
    if let Some(idiom) = args.idiom {
        config.idiom = idiom;
    }

    let composer = MenuComposer::from_config(&config).context("failed to build menu composer")?;

    let json = read_request(&args.request)?;
    let mut request = parse_request(&json).context("invalid request snapshot")?;

    if !args.bookmarks.is_empty() || !args.pins.is_empty() {
        let source = StaticPageStatus::new(args.bookmarks.clone(), args.pins.clone());
        request = prepare_request(&source, request)
            .await
            .context("failed to look up page status")?;
    }

    let style = PresentationStyle::for_idiom(config.idiom, config.suppress_popover);
    let presentation = compose(&composer, &args, &request, config.idiom, style)?;

    info!(
        menu = ?args.menu,
        groups = presentation.groups.len(),
        entries = presentation.entry_count(),
        "Menu composed"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&presentation)
    } else {
        serde_json::to_string(&presentation)
    }
    .context("failed to serialize menu")?;
    println!("{output}");

    Ok(())
}

fn compose(
    composer: &MenuComposer,
    args: &Args,
    request: &MenuRequest,
    idiom: DeviceIdiom,
    style: PresentationStyle,
) -> Result<SheetPresentation> {
    let account = request.account_state;
    let groups = match args.menu {
        MenuKind::Page => composer.compose_page_actions(request),
        MenuKind::Tracking => composer.compose_tracking_sub_menu(request),
        MenuKind::Domains => {
            let Some(group) = args.group else {
                bail!("--group is required for the domains menu");
            };
            let sheet = composer.compose_blocked_domains_sheet(request, group, idiom);
            return Ok(composer.present_domain_list(sheet, style, account));
        }
        MenuKind::Sync => composer
            .compose_sync_menu_entry(account, request.account_profile.as_ref())
            .map(|entry| vec![vec![entry]])
            .unwrap_or_default(),
        MenuKind::LocationBar => {
            single_group(composer.compose_long_press_location_bar_actions(args.clipboard))
        }
        MenuKind::Refresh => single_group(composer.compose_refresh_long_press_menu(request)),
        MenuKind::Library => single_group(composer.compose_library_actions()),
        MenuKind::Panel => single_group(composer.compose_other_panel_actions(request)),
    };
    Ok(composer.present(groups, style, account))
}

fn single_group(entries: Vec<MenuEntry>) -> Vec<MenuGroup> {
    if entries.is_empty() {
        Vec::new()
    } else {
        vec![entries]
    }
}

fn read_request(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut json = String::new();
        std::io::stdin()
            .read_to_string(&mut json)
            .context("failed to read request from stdin")?;
        return Ok(json);
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request from {}", path.display()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
