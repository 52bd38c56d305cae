//! Catalogo de tes: temperatura ideal y stock inicial de cada variedad
use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{constants::DEFAULT_MENU, errors::TeaRobotError};

#[derive(Deserialize, Debug)]
struct JsonTea {
    name: String,
    temperature: i32,
    #[serde(default)]
    stock: u64,
}

#[derive(Deserialize)]
struct CatalogConfiguration {
    teas: Vec<JsonTea>,
}

/// Configuracion fija del robot. Una variedad se puede pedir solo si tiene temperatura ideal.
/// Si no tiene stock registrado se considera que el stock es 0.
#[derive(Debug, Clone)]
pub struct Catalog {
    temperatures: HashMap<String, i32>,
    stock: HashMap<String, u64>,
}

impl Catalog {
    pub fn new(temperatures: HashMap<String, i32>, stock: HashMap<String, u64>) -> Catalog {
        Catalog {
            temperatures,
            stock,
        }
    }

    /// Menu con el que arranca el robot si no se indica un archivo
    pub fn default_menu() -> Catalog {
        let mut temperatures = HashMap::new();
        let mut stock = HashMap::new();
        for (tea, temperature, initial_stock) in DEFAULT_MENU {
            temperatures.insert(tea.to_string(), temperature);
            stock.insert(tea.to_string(), initial_stock);
        }
        Catalog::new(temperatures, stock)
    }

    /// Lee el catalogo de un archivo JSON con el formato
    /// `{"teas": [{"name": "Mint", "temperature": 90, "stock": 5}]}`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, TeaRobotError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let configuration: CatalogConfiguration = serde_json::from_reader(reader)?;

        let mut temperatures = HashMap::new();
        let mut stock = HashMap::new();
        for tea in configuration.teas {
            debug!(
                "[CATALOG] Loaded {} tea at {}° with stock {}",
                tea.name, tea.temperature, tea.stock
            );
            temperatures.insert(tea.name.clone(), tea.temperature);
            stock.insert(tea.name, tea.stock);
        }
        info!("[CATALOG] {} teas loaded", temperatures.len());
        Ok(Catalog::new(temperatures, stock))
    }

    pub fn ideal_temperature(&self, tea: &str) -> Option<i32> {
        self.temperatures.get(tea).copied()
    }

    pub fn stock_of(&self, tea: &str) -> u64 {
        self.stock.get(tea).copied().unwrap_or(0)
    }

    pub fn contains(&self, tea: &str) -> bool {
        self.temperatures.contains_key(tea)
    }

    /// Variedades que se pueden pedir, ordenadas por nombre
    pub fn variants(&self) -> Vec<&str> {
        let mut variants: Vec<&str> = self.temperatures.keys().map(String::as_str).collect();
        variants.sort_unstable();
        variants
    }
}
