mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{CalendarCommand, Cli, Commands, ProfileCommand};
use cropwise::config::Config;
use cropwise::db::Database;
use cropwise::logic::{
    export_snapshot, AdviceHistory, AdviceResolver, CalendarEngine, KnowledgeBase,
    ProfileRegistry, TipRotator,
};
use cropwise::models::{
    AdvicePlan, FarmProfile, Language, ProfileDraft, ProfileUpdate, SoilType, WeatherType,
};
use cropwise::storage::{Clock, KeyValueStore, SystemClock};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Stores shared by every command, built once around a single backend.
struct Services {
    backend: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    profiles: ProfileRegistry,
    calendar: CalendarEngine,
    history: AdviceHistory,
}

impl Services {
    fn open(db: Database) -> Self {
        let backend: Arc<dyn KeyValueStore> = Arc::new(db);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        Self {
            profiles: ProfileRegistry::new(backend.clone(), clock.clone()),
            calendar: CalendarEngine::new(backend.clone(), clock.clone()),
            history: AdviceHistory::new(backend.clone(), clock.clone()),
            backend,
            clock,
        }
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.command {
        Commands::Init => {
            let (config, _) = Config::setup_interactive().context("interactive setup failed")?;
            config
        }
        _ => Config::load(cli.config.clone()).context("failed to load configuration")?,
    };

    let db_path = config
        .db_path(cli.data_dir.as_ref())
        .context("failed to resolve data directory")?;
    let db = Database::open(&db_path)
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    let services = Services::open(db);

    match cli.command {
        Commands::Init => Ok(()),
        Commands::Profile(cmd) => run_profile(&services, cmd),
        Commands::Advise {
            soil,
            weather,
            problem,
            save,
        } => run_advise(&services, &config, soil, weather, &problem, save),
        Commands::History { clear } => run_history(&services, clear),
        Commands::Calendar(cmd) => run_calendar(&services, cmd),
        Commands::Tip { language } => run_tip(&services, &config, language),
        Commands::Knowledge { term } => {
            run_knowledge(term.as_deref().unwrap_or_default());
            Ok(())
        }
        Commands::Export { output } => {
            let bundle = export_snapshot(
                &services.profiles,
                &services.calendar,
                &services.history,
                services.clock.as_ref(),
            );
            let json = bundle.to_pretty_json()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", json),
            }
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise warn, raised by each `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_profile(services: &Services, cmd: ProfileCommand) -> Result<()> {
    let profiles = &services.profiles;
    match cmd {
        ProfileCommand::Create {
            name,
            soil,
            weather,
            location,
            notes,
        } => {
            let draft = ProfileDraft::new(&name, &soil, &weather)
                .with_location(&location)
                .with_notes(&notes);
            let profile = profiles.create_profile(draft)?;
            println!("Created and activated profile {}", profile.id);
            print_profile(&profile, true);
        }
        ProfileCommand::List => {
            let active = profiles.active_profile_id();
            let all = profiles.list_profiles();
            if all.is_empty() {
                println!("No profiles yet. Create one with `cropwise profile create`.");
            }
            for profile in &all {
                print_profile(profile, active.as_deref() == Some(profile.id.as_str()));
            }
        }
        ProfileCommand::Current => match profiles.current_profile() {
            Some(profile) => print_profile(&profile, true),
            None => println!("No current profile"),
        },
        ProfileCommand::Switch { id } => {
            profiles.switch_profile(&id)?;
            match profiles.current_profile() {
                Some(profile) if profile.id == id => println!("Switched to {}", profile.name),
                _ => println!("No profile with id {}", id),
            }
        }
        ProfileCommand::Update {
            id,
            name,
            soil,
            weather,
            location,
            notes,
        } => {
            let changes = ProfileUpdate {
                name,
                soil_type: soil,
                weather_type: weather,
                location,
                notes,
            };
            if changes.is_empty() {
                bail!("nothing to update");
            }
            match profiles.update_profile(&id, changes)? {
                Some(profile) => print_profile(&profile, false),
                None => println!("No profile with id {}", id),
            }
        }
        ProfileCommand::Delete { id } => {
            profiles.delete_profile(&id)?;
            println!("Deleted {}", id);
        }
    }
    Ok(())
}

fn print_profile(profile: &FarmProfile, active: bool) {
    let marker = if active { "*" } else { " " };
    println!(
        "{} {:<14} {:<20} {:<7} {:<9} {}",
        marker,
        profile.id,
        profile.name,
        profile.soil_type.as_str(),
        profile.weather_type.as_str(),
        profile.location
    );
}

fn run_advise(
    services: &Services,
    config: &Config,
    soil: Option<String>,
    weather: Option<String>,
    problem: &str,
    save: bool,
) -> Result<()> {
    let current = services.profiles.current_profile();
    let soil_type = match soil {
        Some(s) => SoilType::parse(&s)?,
        None => current
            .as_ref()
            .map(|p| p.soil_type)
            .unwrap_or(config.defaults.soil_type),
    };
    let weather_type = match weather {
        Some(w) => WeatherType::parse(&w)?,
        None => current
            .as_ref()
            .map(|p| p.weather_type)
            .unwrap_or(config.defaults.weather_type),
    };

    let resolution = AdviceResolver::new().resolve_with_rule(soil_type, weather_type)?;
    println!("Advice for {} soil, {} weather", soil_type, weather_type);
    if resolution.matched_weather != weather_type {
        println!(
            "(no exact match, showing {} weather advice)",
            resolution.matched_weather
        );
    }
    print_plan(&resolution.plan);

    if save {
        let record = services
            .history
            .record(soil_type, weather_type, problem, resolution.plan)?;
        println!();
        println!("Saved as {}", record.id);
    }
    Ok(())
}

fn print_plan(plan: &AdvicePlan) {
    println!();
    println!("Fertilizers");
    for dose in &plan.fertilizers {
        println!("  {} ({})", dose.fertilizer_type, dose.npk_ratio);
        println!("    Amount:      {}", dose.amount);
        println!("    Application: {}", dose.application);
        println!("    Timing:      {}", dose.timing);
    }
    let irrigation = &plan.irrigation;
    println!();
    println!("Irrigation");
    println!("  Frequency: {}", irrigation.frequency);
    println!("  Amount:    {}", irrigation.amount);
    println!("  Method:    {}", irrigation.method);
    for slot in &irrigation.schedule {
        println!("  - {}", slot);
    }
}

fn run_history(services: &Services, clear: bool) -> Result<()> {
    if clear {
        services.history.clear()?;
        println!("Advice history cleared");
        return Ok(());
    }
    let records = services.history.list();
    if records.is_empty() {
        println!("No saved advice");
    }
    for record in records {
        println!(
            "{}  {} / {}  {}",
            record.created_at.format("%Y-%m-%d %H:%M"),
            record.soil_type,
            record.weather_type,
            record.problem
        );
    }
    Ok(())
}

fn run_calendar(services: &Services, cmd: CalendarCommand) -> Result<()> {
    let calendar = &services.calendar;
    let current = services.profiles.current_profile();
    match cmd {
        CalendarCommand::Crops { all } => {
            let profile = if all { None } else { current.as_ref() };
            for crop in calendar.recommended_crops(profile) {
                let status = calendar.season_status(crop);
                let flag = match (status.planting, status.harvest) {
                    (true, true) => "plant/harvest now",
                    (true, false) => "plant now",
                    (false, true) => "harvest now",
                    (false, false) => "",
                };
                println!(
                    "{:<12} plant {:<8} harvest {:<8} {:<14} {}",
                    crop.crop_name,
                    crop.planting_range.to_string(),
                    crop.harvest_range.to_string(),
                    crop.duration,
                    flag
                );
            }
        }
        CalendarCommand::Schedule { crop, date } => {
            let Some(entry) = calendar.find_crop(&crop) else {
                bail!("unknown crop '{}'", crop);
            };
            let planting_date = date.unwrap_or_else(|| services.clock.today());
            let planting = calendar.schedule_crop(
                entry,
                planting_date,
                current.as_ref().map(|p| p.id.as_str()),
            )?;
            println!(
                "Scheduled {} ({}): plant {}, harvest around {}",
                planting.crop_name,
                planting.id,
                planting.planting_date,
                planting.projected_harvest_date
            );
        }
        CalendarCommand::List { all } => {
            let profile = if all { None } else { current.as_ref() };
            for planting in calendar.list_scheduled(profile) {
                println!(
                    "{:<14} {:<12} {} -> {}",
                    planting.id,
                    planting.crop_name,
                    planting.planting_date,
                    planting.projected_harvest_date
                );
            }
            if !all && profile.is_some() {
                let unscoped = calendar.unscoped_plantings().len();
                if unscoped > 0 {
                    println!("({} planting(s) without a profile, see --all)", unscoped);
                }
            }
        }
        CalendarCommand::Remove { id } => {
            if calendar.remove_scheduled(&id)? {
                println!("Removed {}", id);
            } else {
                println!("No planting with id {}", id);
            }
        }
    }
    Ok(())
}

fn run_tip(services: &Services, config: &Config, language: Option<String>) -> Result<()> {
    let language = match language {
        Some(l) => Language::from_str(&l).with_context(|| format!("unknown language '{}'", l))?,
        None => config.language,
    };
    let mut tips = TipRotator::with_entropy(services.backend.clone(), language);
    let tip = tips.next()?;
    println!("Did you know? [{}]", tip.category);
    println!("{}", tip.title);
    println!("{}", tip.content);
    println!();
    println!("{}", tip_progress(tips.viewed_count(), tips.pool_size()));
    Ok(())
}

fn tip_progress(viewed: usize, total: usize) -> String {
    format!("{} of {} tips explored", viewed, total)
}

fn run_knowledge(term: &str) {
    let kb = KnowledgeBase::new();
    let groups = kb.grouped(term);
    if groups.is_empty() {
        println!("No articles match '{}'", term);
    }
    for (category, items) in groups {
        println!("{}", category);
        for item in items {
            println!("  {}", item.title);
            println!("    {}", item.content);
        }
    }
}
