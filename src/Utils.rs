//! different utility modules used throughout the project
/// logger setup and saving of solutions into csv
pub mod logger;
