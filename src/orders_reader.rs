//! Lectura de pedidos linea por linea. Cada pedido se procesa apenas se lee.
use log::{debug, info};
use std::io::BufRead;

use crate::{constants::EXIT_COMMAND, errors::TeaRobotError, tea_robot::TeaRobot};

/// Resumen de una sesion de lectura
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReaderSummary {
    pub accepted: u64,
    pub rejected: u64,
}

fn is_exit_command(line: &str) -> bool {
    line.eq_ignore_ascii_case(EXIT_COMMAND)
}

/// Lee pedidos hasta encontrar `exit` o el fin de la entrada.
/// Despues de cada pedido aceptado se vacia la cola.
pub fn read_and_process_orders<R: BufRead>(
    reader: R,
    robot: &mut TeaRobot,
) -> Result<ReaderSummary, TeaRobotError> {
    let mut summary = ReaderSummary::default();
    for line in reader.lines() {
        let line = line.map_err(|_| TeaRobotError::InputError)?;
        let tea = line.trim();
        if tea.is_empty() {
            continue;
        }
        if is_exit_command(tea) {
            info!("[READER] Exiting the Tea Making robot.");
            return Ok(summary);
        }

        match robot.submit(tea) {
            Ok(()) => summary.accepted += 1,
            Err(err) => {
                debug!("[READER] {}", err);
                summary.rejected += 1;
            }
        }
        for outcome in robot.drain_all() {
            debug!("[READER] {:?}: {}", outcome.status, outcome.message);
        }
    }
    info!("[READER] No more orders left");
    Ok(summary)
}
