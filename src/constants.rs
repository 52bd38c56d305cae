//! Parametros de configuracion del robot de te

/// Temperatura del agua al encender el robot
pub const STARTING_TEMPERATURE: i32 = 25;

/// Palabra que finaliza la carga de pedidos (no distingue mayusculas)
pub const EXIT_COMMAND: &str = "exit";

/// Archivo de catalogo sugerido cuando se ejecuta desde la raiz del proyecto
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";

/// Menu inicial: (variedad, temperatura ideal, stock inicial)
pub const DEFAULT_MENU: [(&str, i32, u64); 4] = [
    ("Mint", 90, 5),
    ("Green", 80, 2),
    ("Black", 95, 8),
    ("Chamomile", 93, 0),
];
