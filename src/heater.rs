//! Calentador de agua del robot
use log::info;

use crate::constants::STARTING_TEMPERATURE;

/// Guarda la temperatura actual del agua. No lleva historial.
pub struct Heater {
    temperature: i32,
}

impl Heater {
    pub fn new() -> Heater {
        Heater {
            temperature: STARTING_TEMPERATURE,
        }
    }

    /// Pisa la temperatura actual. No se valida el rango.
    pub fn set_temperature(&mut self, target: i32) {
        self.temperature = target;
        info!("[HEATER] Heating water to {}°...", self.temperature);
    }

    pub fn temperature(&self) -> i32 {
        self.temperature
    }
}

impl Default for Heater {
    fn default() -> Self {
        Heater::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_at_room_temperature() {
        let heater = Heater::new();
        assert_eq!(STARTING_TEMPERATURE, heater.temperature());
    }

    #[test]
    fn should_overwrite_the_temperature() {
        let mut heater = Heater::new();
        heater.set_temperature(80);
        heater.set_temperature(95);
        assert_eq!(95, heater.temperature());
    }

    #[test]
    fn should_accept_temperatures_out_of_range() {
        let mut heater = Heater::new();
        heater.set_temperature(-10);
        assert_eq!(-10, heater.temperature());
        heater.set_temperature(250);
        assert_eq!(250, heater.temperature());
    }
}
