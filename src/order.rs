//! Pedidos del robot y su resultado
use std::fmt;

/// Un pedido es solo la variedad de te pedida
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub tea: String,
}

impl Order {
    pub fn new(tea: &str) -> Order {
        Order { tea: tea.to_string() }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tea)
    }
}

/// Estados por los que pasa un pedido. `Completed` y `Failed` son finales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Submitted,
    Queued,
    Brewing,
    Completed,
    Failed,
}

/// Resultado de procesar un pedido. No se persiste, solo se informa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderOutcome {
    pub order: Order,
    pub status: OrderStatus,
    /// Temperatura a la que se calento el agua, si se llego a calentar
    pub temperature: Option<i32>,
    pub message: String,
}

impl OrderOutcome {
    pub fn completed(order: Order, temperature: i32) -> OrderOutcome {
        let message = format!("{} tea prepared successfully at {}°C", order.tea, temperature);
        OrderOutcome {
            order,
            status: OrderStatus::Completed,
            temperature: Some(temperature),
            message,
        }
    }

    pub fn failed(order: Order, reason: String) -> OrderOutcome {
        OrderOutcome {
            order,
            status: OrderStatus::Failed,
            temperature: None,
            message: reason,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}
