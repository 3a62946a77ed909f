use ridewatch_core::{render_table, AppViewModel, SearchStatus};
use ridewatch_engine::rides_to_csv;
use ridewatch_logging::ride_error;

use super::cli::OutputFormat;

/// Text for stdout plus status notes. Notes go to stderr for the machine
/// readable formats so piped output stays clean.
pub struct Rendered {
    pub stdout: String,
    pub notes: Vec<String>,
}

pub fn render(view: &AppViewModel, format: OutputFormat) -> Rendered {
    let mut notes = vec![view.status_line()];
    notes.extend(view.notification_line());
    notes.extend(view.export_line());

    match format {
        OutputFormat::Table => {
            let mut stdout = String::new();
            for note in &notes {
                stdout.push_str(note);
                stdout.push('\n');
            }
            if matches!(view.search, SearchStatus::Found { .. }) {
                stdout.push('\n');
                stdout.push_str(&render_table(&view.rides));
            }
            Rendered {
                stdout,
                notes: Vec::new(),
            }
        }
        OutputFormat::Csv => {
            let stdout = rides_to_csv(&view.rides).unwrap_or_else(|err| {
                ride_error!("Failed to render CSV: {}", err);
                String::new()
            });
            Rendered { stdout, notes }
        }
        OutputFormat::Json => {
            let stdout = match serde_json::to_string_pretty(&view.rides) {
                Ok(json) => json + "\n",
                Err(err) => {
                    ride_error!("Failed to render JSON: {}", err);
                    String::new()
                }
            };
            Rendered { stdout, notes }
        }
    }
}
