pub mod catalog;
pub mod constants;
pub mod container;
pub mod dispenser;
pub mod errors;
pub mod heater;
pub mod order;
pub mod orders_queue;
pub mod orders_reader;
pub mod statistics;
pub mod tea_maker;
pub mod tea_robot;

use std::{env, io, process};

use catalog::Catalog;
use constants::{DEFAULT_CATALOG_FILE, EXIT_COMMAND};
use errors::TeaRobotError;
use log::{error, info, LevelFilter};
use orders_reader::read_and_process_orders;
use simple_logger::SimpleLogger;
use statistics::StatisticsPrinter;
use tea_robot::TeaRobot;

fn load_catalog() -> Result<Catalog, TeaRobotError> {
    match env::args().nth(1) {
        Some(path) => Catalog::from_file(path),
        None => {
            info!(
                "[ROBOT] No catalog file given (e.g. {}), using the default menu",
                DEFAULT_CATALOG_FILE
            );
            Ok(Catalog::default_menu())
        }
    }
}

fn run() -> Result<(), TeaRobotError> {
    let mut robot = TeaRobot::new(load_catalog()?);

    println!("Welcome to the Tea Making Robot!");
    println!("We have: {}", robot.catalog().variants().join(", "));
    println!("Type in your tea order (e.g. 'Green', 'Black').");
    println!("Type '{}' to stop ordering.", EXIT_COMMAND);

    let stdin = io::stdin();
    read_and_process_orders(stdin.lock(), &mut robot)?;
    info!("{}", StatisticsPrinter::new(&robot).statistics());
    Ok(())
}

fn main() {
    if SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
        .is_err()
    {
        eprintln!("Could not initialize logger");
    }

    if let Err(err) = run() {
        error!("[ROBOT] {}", err);
        process::exit(1);
    }
}
