use anyhow::Result;
use inquire::{InquireError, Select, Text};
use skycheck_core::{Session, Unit, View, WeatherService};

use crate::output;

const NEW_SEARCH: &str = "New search";
const QUIT: &str = "Quit";

/// Search, show, repeat until the user quits.
pub async fn run(service: WeatherService, unit: Unit) -> Result<()> {
    let mut session = Session::new(service, unit);

    loop {
        if let Some(error) = session.view().error() {
            eprintln!("{error}");
        }

        match session.view().clone() {
            View::Search(form) => {
                let Some((location, unit)) = prompt_search(&form.location, form.unit)? else {
                    return Ok(());
                };

                session.submit(location, unit);
                wait(&mut session).await;
            }
            View::Results(results) => {
                println!();
                print!("{}", output::render_report(&results.report));

                match prompt(Select::new("Next:", vec![NEW_SEARCH, QUIT]).prompt())? {
                    Some(NEW_SEARCH) => session.new_search(),
                    _ => return Ok(()),
                }
            }
        }
    }
}

async fn wait(session: &mut Session) {
    eprintln!("Fetching weather... (Ctrl-C to cancel)");

    let cancelled = tokio::select! {
        _ = session.complete() => false,
        _ = tokio::signal::ctrl_c() => true,
    };

    if cancelled {
        session.cancel();
    }
}

fn prompt_search(location: &str, unit: Unit) -> Result<Option<(String, Unit)>> {
    let Some(location) = prompt(Text::new("Location:").with_initial_value(location).prompt())?
    else {
        return Ok(None);
    };

    let units = Unit::all().to_vec();
    let cursor = units.iter().position(|u| *u == unit).unwrap_or(0);
    let Some(unit) = prompt(Select::new("Unit:", units).with_starting_cursor(cursor).prompt())?
    else {
        return Ok(None);
    };

    Ok(Some((location, unit)))
}

/// Esc and Ctrl-C at a prompt end the session instead of failing.
fn prompt<T>(answer: Result<T, InquireError>) -> Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
