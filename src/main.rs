mod birthday;
mod error;
mod input;
mod logger;
mod person;
mod plural;
mod report;
mod zodiac;

use anyhow::Context;
use chrono::Local;
use input::Prompter;
use std::io;

fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let profile = prompter
        .collect()
        .context("Failed to read profile from the console")?;

    tracing::info!(
        name = profile.human().name(),
        occupation = profile.occupation(),
        skills = profile.skills().len(),
        active = profile.is_active(),
        "profile collected"
    );
    tracing::debug!(profile = %serde_json::to_string(&profile)?, "profile details");

    let today = Local::now().date_naive();
    let report = report::render(&profile, today).context("Failed to build the report")?;
    print!("{report}");

    tracing::info!("report printed");

    Ok(())
}
