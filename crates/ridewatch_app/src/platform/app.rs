use std::collections::VecDeque;

use ridewatch_core::{update, AppState, Effect, Msg};
use ridewatch_engine::{Notifier, SmtpNotifier};
use ridewatch_logging::{ride_info, ride_warn, LogOptions};

use super::cli::Cli;
use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::render::render;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    ridewatch_logging::initialize(&LogOptions {
        verbose: cli.verbose,
        file: cli.log_file.clone(),
    });

    let config = load_config(&cli.config).with_password_from(|key| std::env::var(key).ok());
    let watch = watch_name(&cli, &config);
    let notifier = build_notifier(&config);
    let runner = EffectRunner::new(&config, notifier)?;

    let mut inbox = vec![
        Msg::AlertsMuted(!config.notifier.enabled),
        Msg::DateSelected(cli.search_date()),
        Msg::WatchChanged(watch),
        Msg::SearchClicked,
    ];
    if let Some(path) = cli.csv.clone() {
        inbox.push(Msg::ExportRequested(path));
    }

    let state = drive(AppState::new(), inbox, |effect| runner.execute(effect));
    let rendered = render(&state.view(), cli.format);
    print!("{}", rendered.stdout);
    for note in rendered.notes {
        eprintln!("{note}");
    }
    Ok(())
}

/// Apply messages in order. Each effect runs immediately and its result is
/// handled before the next queued message, so an export requested after a
/// search sees that search's rides.
pub(crate) fn drive(
    mut state: AppState,
    inbox: Vec<Msg>,
    mut execute: impl FnMut(Effect) -> Msg,
) -> AppState {
    let mut queue: VecDeque<Msg> = inbox.into();
    while let Some(msg) = queue.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        let results: Vec<Msg> = effects.into_iter().map(&mut execute).collect();
        for result in results.into_iter().rev() {
            queue.push_front(result);
        }
    }
    state
}

/// `--watch` overrides the configured name. With alerts disabled the watch
/// still flags matches; only the email is skipped.
fn watch_name(cli: &Cli, config: &AppConfig) -> Option<String> {
    let watch = cli.watch.clone().or_else(|| config.watch_name.clone());
    if watch.is_some() && !config.notifier.enabled {
        ride_info!("Alerts are disabled in config; matches will only be flagged");
    }
    watch
}

fn build_notifier(config: &AppConfig) -> Result<Box<dyn Notifier>, String> {
    match SmtpNotifier::new(&config.notifier) {
        Ok(notifier) => Ok(Box::new(notifier)),
        Err(err) => {
            if config.notifier.enabled {
                ride_warn!("Notifier unavailable: {}", err);
            }
            Err(err.to_string())
        }
    }
}
