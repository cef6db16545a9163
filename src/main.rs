//! Persona Console command line
//!
//! ```text
//! persona-console [navigation]                  print the personalized sidebar
//! persona-console module <module-id>            print a module's landing content
//! persona-console onboard <role> <jobs> <tasks> complete onboarding (comma-separated lists)
//! ```

use std::error::Error;
use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use persona_console::adapters::FsProfileStore;
use persona_console::application::{
    BuildNavigationHandler, CompleteOnboardingHandler, LoadProfileHandler,
    ModuleExperienceHandler,
};
use persona_console::config::{AppConfig, LoggingConfig};
use persona_console::domain::onboarding::OnboardingWizard;
use persona_console::domain::profile::{JobArea, Role, StoredProfile, Task};
use persona_console::ports::ProfileStore;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[tokio::main]
async fn main() -> CliResult<()> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let store: Arc<dyn ProfileStore> = Arc::new(FsProfileStore::new(
        &config.storage.base_dir,
        config.storage.profile_key.clone(),
    ));
    info!(path = %config.storage.profile_path().display(), "Using profile store");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["navigation"] => {
            let profile = LoadProfileHandler::new(store, config.features.personalization_enabled)
                .handle()
                .await;
            print_json(&BuildNavigationHandler::new().handle(profile.as_ref()))
        }
        ["module", module] => {
            let profile = LoadProfileHandler::new(store, config.features.personalization_enabled)
                .handle()
                .await;
            print_json(&ModuleExperienceHandler::new().handle(module, profile.as_ref()))
        }
        ["onboard", role, jobs, tasks] => onboard(store, role, jobs, tasks).await,
        _ => Err(format!("unrecognized arguments: {}", args.join(" ")).into()),
    }
}

async fn onboard(
    store: Arc<dyn ProfileStore>,
    role: &str,
    jobs: &str,
    tasks: &str,
) -> CliResult<()> {
    let mut wizard = OnboardingWizard::new();

    wizard.select_role(role.parse::<Role>()?)?;
    wizard.advance()?;
    for job in split_list(jobs) {
        wizard.toggle_job(job.parse::<JobArea>()?)?;
    }
    wizard.advance()?;
    for task in split_list(tasks) {
        wizard.toggle_task(task.parse::<Task>()?)?;
    }

    let outcome = CompleteOnboardingHandler::new(store).handle(&mut wizard).await?;
    if let Some(warning) = &outcome.persistence_warning {
        eprintln!("profile applied for this run only: {warning}");
    }
    print_json(&StoredProfile::from(&outcome.profile))
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging.env_filter();
    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
