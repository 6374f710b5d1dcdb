//! Handles settings for the application.
//!
//! Sources, later ones winning: the optional `settings.toml` (or the file
//! given with `--config` / `COFRE_SETTINGS`), `COFRE_*` environment variables
//! with `__` between nested keys (e.g. `COFRE_FORMAT__LOCALE=en-US`), then
//! command-line overrides.
//!
//! The optional `[plan]` table is a partial plan: only the groups and fields
//! it names replace the defaults. Money values are in cents there, while
//! `--emergency-contribution` takes a typed amount such as `2000,50`.
use clap::Parser;
use config::{Config, Environment, File};
use engine::{
    Currency, Locale, MoneyCents, PlanConfigPatch, TransactionFilter, plan::EmergencyFundPatch,
};
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_SETTINGS_PATH: &str = "settings";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    /// Log level for the `cofre` and `engine` targets.
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Format {
    pub locale: Locale,
    pub currency: Currency,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Report {
    pub format: ReportFormat,
    /// Months shown in the emergency-fund schedule.
    pub months: u32,
    /// Narrows the activity section.
    pub filter: TransactionFilter,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            format: ReportFormat::Text,
            months: 12,
            filter: TransactionFilter::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub format: Format,
    pub report: Report,
    pub plan: Option<PlanConfigPatch>,
}

#[derive(Debug, Parser)]
#[command(name = "cofre", about = "Personal-finance plan dashboard")]
struct Args {
    /// Settings file path (TOML), without or with extension.
    #[arg(long, env = "COFRE_SETTINGS")]
    config: Option<String>,
    /// Override locale (pt-BR, en-US, it-IT).
    #[arg(long)]
    locale: Option<String>,
    /// Override currency code (BRL, EUR, USD).
    #[arg(long)]
    currency: Option<String>,
    /// Print the dashboard as JSON.
    #[arg(long)]
    json: bool,
    /// Only list activity whose description or category contains this text.
    #[arg(long)]
    search: Option<String>,
    /// Try another monthly emergency-fund contribution (e.g. 2000,50).
    #[arg(long, value_name = "AMOUNT")]
    emergency_contribution: Option<MoneyCents>,
}

pub fn load() -> Result<Settings> {
    let args = Args::parse();

    let path = args.config.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH);
    let mut settings: Settings = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(Environment::with_prefix("COFRE").separator("__"))
        .build()?
        .try_deserialize()?;

    apply_args(&mut settings, args)?;
    Ok(settings)
}

fn apply_args(settings: &mut Settings, args: Args) -> Result<()> {
    if let Some(locale) = args.locale {
        settings.format.locale = Locale::try_from(locale.as_str())?;
    }
    if let Some(currency) = args.currency {
        settings.format.currency = Currency::try_from(currency.as_str())?;
    }
    if args.json {
        settings.report.format = ReportFormat::Json;
    }
    if let Some(text) = args.search {
        settings.report.filter.text = Some(text);
    }
    if let Some(amount) = args.emergency_contribution {
        settings
            .plan
            .get_or_insert_with(PlanConfigPatch::default)
            .emergency_fund
            .get_or_insert_with(EmergencyFundPatch::default)
            .monthly_contribution = Some(amount);
    }
    Ok(())
}
