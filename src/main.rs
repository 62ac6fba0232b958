use std::io;
use std::process::ExitCode;

use fuzzifier::logging::init_tracing;
use fuzzifier::settings::Settings;
use fuzzifier::{Fuzzifier, FuzzifyError, ModalityConfig, Table};

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let settings = Settings::from_env().with_args(std::env::args().skip(1));
    let _log_guard = init_tracing(&settings.log_level, settings.log_dir.as_deref());

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fuzzify failed");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> Result<(), FuzzifyError> {
    let input = settings.input.as_ref().ok_or(FuzzifyError::MissingInput)?;

    let data = Table::from_csv_path(input)?;
    let modalities = match &settings.modalities {
        Some(path) => ModalityConfig::from_path(path)?,
        None => ModalityConfig::new(),
    };
    tracing::info!(
        input = %input.display(),
        rows = data.n_rows(),
        features = data.n_cols(),
        configured = modalities.len(),
        "loaded crisp data"
    );

    let mut fuzzifier = Fuzzifier::with_options(&data, modalities, settings.fuzzifier_options());
    fuzzifier.fuzzify()?;

    let table = fuzzifier.membership_table()?;
    match &settings.output {
        Some(path) => table.to_csv_path(path)?,
        None => table.to_csv_writer(io::stdout().lock())?,
    }

    if let Some(path) = &settings.new_entries {
        let new_rows = Table::from_csv_path(path)?;
        let interpolated = fuzzifier.interpolate(&new_rows)?;
        match &settings.interpolated_output {
            Some(out) => interpolated.to_csv_path(out)?,
            None => interpolated.to_csv_writer(io::stdout().lock())?,
        }
    }

    if let Some(dir) = &settings.plot_dir {
        fuzzifier.view(dir)?;
    }

    Ok(())
}
