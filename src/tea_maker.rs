//! Preparacion de una taza: combina el calentador y el dispenser
use log::{error, info, warn};

use crate::{catalog::Catalog, dispenser::Dispenser, errors::TeaRobotError, heater::Heater};

pub struct TeaMaker {
    heater: Heater,
    dispenser: Dispenser,
}

impl TeaMaker {
    pub fn new(heater: Heater, dispenser: Dispenser) -> TeaMaker {
        TeaMaker { heater, dispenser }
    }

    /// Prepara una taza de la variedad pedida y devuelve la temperatura usada.
    /// Si falla el dispenser despues de calentar, el agua queda caliente.
    pub fn prepare(&mut self, catalog: &Catalog, tea: &str) -> Result<i32, TeaRobotError> {
        info!("[TEA MAKER] Preparing {} tea...", tea);
        if !self.dispenser.is_available(tea) {
            warn!("[TEA MAKER] Error: {} tea not available!", tea);
            return Err(TeaRobotError::OutOfStock(tea.to_string()));
        }

        let temperature = catalog.ideal_temperature(tea).ok_or_else(|| {
            error!("[TEA MAKER] {} tea was queued without an ideal temperature", tea);
            TeaRobotError::TemperatureNotInCatalog(tea.to_string())
        })?;

        info!("[TEA MAKER] Heating water to the right temperature for {}...", tea);
        self.heater.set_temperature(temperature);

        if !self.dispenser.dispense(tea) {
            return Err(TeaRobotError::OutOfStock(tea.to_string()));
        }
        info!("[TEA MAKER] Tea prepared successfully at {}°C!", temperature);
        Ok(temperature)
    }

    pub fn temperature(&self) -> i32 {
        self.heater.temperature()
    }

    pub fn dispenser(&self) -> &Dispenser {
        &self.dispenser
    }
}
