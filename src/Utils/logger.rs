use crate::numerical::NR_2D::errors::NewtonRaphsonError;
use crate::numerical::NR_2D::linalg_2D::Vector2D;
use chrono::Local;
use csv::Writer;
use log::info;
use simplelog::*;
use std::fs::File;
use std::io;

/// map "debug"/"info"/"warn"/"error"/"off"/"none" onto a simplelog filter
pub fn level_filter(loglevel: &str) -> Result<LevelFilter, NewtonRaphsonError> {
    match loglevel.to_lowercase().as_str() {
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" | "none" => Ok(LevelFilter::Off),
        _ => Err(NewtonRaphsonError::InvalidLogLevel {
            got: loglevel.to_string(),
        }),
    }
}

/// Install a terminal logger (and optionally a `log_<date>_<time>.txt` file logger).
/// A global logger that is already installed is kept, that is not an error:
/// repeated `solve()` calls with a loglevel all end up here.
pub fn init_logger(loglevel: &str, log_to_file: bool) -> Result<(), NewtonRaphsonError> {
    let filter = level_filter(loglevel)?;
    if filter == LevelFilter::Off {
        return Ok(());
    }
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        filter,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name).map_err(|e| NewtonRaphsonError::Logger(e.to_string()))?;
        loggers.push(WriteLogger::new(filter, Config::default(), file));
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => {
            info!("logger started with level {}", filter);
            Ok(())
        }
        Err(_) => Ok(()),
    }
}

/// save solutions as csv with header `x,y`
pub fn save_points_to_csv(points: &[Vector2D], filename: &str) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);
    writer.write_record(["x", "y"])?;
    for point in points {
        writer.write_record(&[point.x.to_string(), point.y.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
