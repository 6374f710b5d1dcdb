use chrono::Utc;
use engine::{Engine, Formatter};
use report::Dashboard;
use settings::ReportFormat;

mod error;
mod report;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "cofre={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let formatter = Formatter::new(settings.format.locale, settings.format.currency);
    let mut engine = Engine::builder()
        .formatter(formatter)
        .seed_demo(Utc::now())
        .build()
        .map_err(error::AppError::from)?;

    if let Some(patch) = settings.plan {
        tracing::info!("Applying plan overrides from settings...");
        engine.update_plan(patch);
    }

    let dashboard = Dashboard::new(&engine, settings.report.months, &settings.report.filter);
    match settings.report.format {
        ReportFormat::Text => print!("{dashboard}"),
        ReportFormat::Json => {
            let json = dashboard.to_json().map_err(error::AppError::from)?;
            println!("{json}");
        }
    }

    Ok(())
}
