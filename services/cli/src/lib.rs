mod cli;
mod commands;
mod infra;
mod interactive;
mod render;

use sleep_assessment::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
