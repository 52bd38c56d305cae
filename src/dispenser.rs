//! Dispenser del robot. Lleva el stock de cada variedad de te.
use std::collections::HashMap;

use log::{debug, info, warn};

use crate::{catalog::Catalog, container::Container};

/// Representa al dispenser de hebras de te.
/// Tiene un contenedor por variedad del catalogo, cargado con el stock inicial.
pub struct Dispenser {
    resources: HashMap<String, Container>,
}

impl Dispenser {
    pub fn new(catalog: &Catalog) -> Dispenser {
        let resources = catalog
            .variants()
            .into_iter()
            .map(|tea| (tea.to_string(), Container::new(catalog.stock_of(tea))))
            .collect();
        Dispenser { resources }
    }

    /// Hay stock si queda al menos una porcion. Una variedad desconocida nunca esta disponible.
    pub fn is_available(&self, tea: &str) -> bool {
        self.stock_of(tea) > 0
    }

    /// Sirve una porcion de la variedad. Si no hay stock no modifica nada y devuelve `false`.
    pub fn dispense(&mut self, tea: &str) -> bool {
        if !self.is_available(tea) {
            warn!("[DISPENSER] {} tea is not available!", tea);
            return false;
        }
        match self.resources.get_mut(tea) {
            Some(container) => {
                info!("[DISPENSER] Dispensing {} tea...", tea);
                consume_portion(container);
                info!("[DISPENSER] Stock left: {}", container.remaining);
                true
            }
            None => false,
        }
    }

    pub fn stock_of(&self, tea: &str) -> u64 {
        self.resources
            .get(tea)
            .map(|container| container.remaining)
            .unwrap_or(0)
    }

    pub fn container(&self, tea: &str) -> Option<&Container> {
        self.resources.get(tea)
    }
}

fn consume_portion(container: &mut Container) {
    debug!("[DISPENSER] Uses 1 portion, there is {}", container.remaining);
    container.remaining -= 1;
    container.consumed += 1;
}
