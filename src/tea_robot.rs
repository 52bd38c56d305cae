//! Controlador del robot. Recibe los pedidos, los encola y los procesa en orden de llegada.
use log::{debug, error, info};

use crate::{
    catalog::Catalog,
    container::Container,
    dispenser::Dispenser,
    errors::TeaRobotError,
    heater::Heater,
    order::{Order, OrderOutcome, OrderStatus},
    orders_queue::OrdersQueue,
    tea_maker::TeaMaker,
};

/// Robot de te. Es duenio del catalogo, de la cola de pedidos y de la maquina de te,
/// por lo que cada instancia arranca con su propio stock.
pub struct TeaRobot {
    catalog: Catalog,
    orders_queue: OrdersQueue,
    tea_maker: TeaMaker,
    completed_orders: u64,
    failed_orders: u64,
}

impl TeaRobot {
    pub fn new(catalog: Catalog) -> TeaRobot {
        let dispenser = Dispenser::new(&catalog);
        TeaRobot {
            catalog,
            orders_queue: OrdersQueue::new(),
            tea_maker: TeaMaker::new(Heater::new(), dispenser),
            completed_orders: 0,
            failed_orders: 0,
        }
    }

    /// Encola el pedido si la variedad esta en el catalogo. Si no, lo rechaza sin modificar nada.
    pub fn submit(&mut self, tea: &str) -> Result<(), TeaRobotError> {
        debug!("[ROBOT] Order {} {:?}", tea, OrderStatus::Submitted);
        if !self.catalog.contains(tea) {
            info!("[ROBOT] Sorry, we don't have {} tea.", tea);
            return Err(TeaRobotError::UnsupportedVariant(tea.to_string()));
        }
        info!("[ROBOT] New order received: {}", tea);
        self.orders_queue.push(Order::new(tea));
        debug!(
            "[ROBOT] Order {} {:?}, {} pending",
            tea,
            OrderStatus::Queued,
            self.orders_queue.len()
        );
        Ok(())
    }

    /// Procesa todos los pedidos pendientes, en el orden en que llegaron.
    /// Los pedidos fallidos se descartan, no se vuelven a encolar.
    pub fn drain_all(&mut self) -> Vec<OrderOutcome> {
        let mut outcomes = Vec::new();
        while let Some(order) = self.orders_queue.pop() {
            outcomes.push(self.process_order(order));
            info!("[ROBOT] Ready for the next order!");
        }
        outcomes
    }

    fn process_order(&mut self, order: Order) -> OrderOutcome {
        info!("[ROBOT] Processing order: {}", order);
        debug!("[ROBOT] Order {} {:?}", order, OrderStatus::Brewing);
        match self.tea_maker.prepare(&self.catalog, &order.tea) {
            Ok(temperature) => {
                info!("[ROBOT] Order complete.");
                self.completed_orders += 1;
                OrderOutcome::completed(order, temperature)
            }
            Err(err) => {
                if let TeaRobotError::TemperatureNotInCatalog(_) = err {
                    error!("[ROBOT] Order {} aborted: {}", order, err);
                }
                info!("[ROBOT] Order failed.");
                self.failed_orders += 1;
                OrderOutcome::failed(order, err.to_string())
            }
        }
    }

    pub fn pending_orders(&self) -> usize {
        self.orders_queue.len()
    }

    pub fn heater_temperature(&self) -> i32 {
        self.tea_maker.temperature()
    }

    pub fn stock_of(&self, tea: &str) -> u64 {
        self.tea_maker.dispenser().stock_of(tea)
    }

    pub fn container(&self, tea: &str) -> Option<&Container> {
        self.tea_maker.dispenser().container(tea)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn completed_orders(&self) -> u64 {
        self.completed_orders
    }

    pub fn failed_orders(&self) -> u64 {
        self.failed_orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STARTING_TEMPERATURE;
    use std::collections::HashMap;

    fn single_tea_robot(tea: &str, temperature: i32, stock: u64) -> TeaRobot {
        let temperatures = HashMap::from([(tea.to_string(), temperature)]);
        let stock = HashMap::from([(tea.to_string(), stock)]);
        TeaRobot::new(Catalog::new(temperatures, stock))
    }

    fn teas(outcomes: &[OrderOutcome]) -> Vec<&str> {
        outcomes.iter().map(|outcome| outcome.order.tea.as_str()).collect()
    }

    #[test]
    fn should_prepare_green_tea_in_stock() {
        let mut robot = single_tea_robot("Green", 80, 2);

        assert_eq!(Ok(()), robot.submit("Green"));
        assert_eq!(1, robot.pending_orders());

        let outcomes = robot.drain_all();
        assert_eq!(1, outcomes.len());
        assert_eq!(true, outcomes[0].is_success());
        assert_eq!(Some(80), outcomes[0].temperature);
        assert_eq!(80, robot.heater_temperature());
        assert_eq!(1, robot.stock_of("Green"));
        assert_eq!(0, robot.pending_orders());
    }

    #[test]
    fn should_fail_chamomile_without_stock() {
        let mut robot = single_tea_robot("Chamomile", 93, 0);

        assert_eq!(Ok(()), robot.submit("Chamomile"));
        let outcomes = robot.drain_all();
        assert_eq!(1, outcomes.len());
        assert_eq!(OrderStatus::Failed, outcomes[0].status);
        assert_eq!(None, outcomes[0].temperature);
        assert_eq!(0, robot.stock_of("Chamomile"));
        assert_eq!(1, robot.failed_orders());
        assert_eq!(0, robot.pending_orders());
    }

    #[test]
    fn should_reject_an_unsupported_tea() {
        let mut robot = TeaRobot::new(Catalog::default_menu());

        assert_eq!(
            Err(TeaRobotError::UnsupportedVariant("Oolong".to_string())),
            robot.submit("Oolong")
        );
        assert_eq!(0, robot.pending_orders());
        assert_eq!(STARTING_TEMPERATURE, robot.heater_temperature());
        assert_eq!(true, robot.drain_all().is_empty());
    }

    #[test]
    fn should_never_change_state_when_rejecting_repeatedly() {
        let mut robot = TeaRobot::new(Catalog::default_menu());
        robot.submit("Mint").unwrap();

        for tea in ["Oolong", "Oolong", "mint", "", "Earl Grey"] {
            assert_eq!(true, robot.submit(tea).is_err());
            assert_eq!(1, robot.pending_orders());
        }
        for tea in robot.catalog().variants() {
            assert_eq!(robot.catalog().stock_of(tea), robot.stock_of(tea));
        }
        assert_eq!(STARTING_TEMPERATURE, robot.heater_temperature());
    }

    #[test]
    fn should_process_mint_before_black() {
        let mut robot = TeaRobot::new(Catalog::default_menu());
        robot.submit("Mint").unwrap();
        robot.submit("Black").unwrap();

        let outcomes = robot.drain_all();
        assert_eq!(vec!["Mint", "Black"], teas(&outcomes));
        assert_eq!(Some(90), outcomes[0].temperature);
        assert_eq!(Some(95), outcomes[1].temperature);
        assert_eq!(95, robot.heater_temperature());
        assert_eq!(4, robot.stock_of("Mint"));
        assert_eq!(7, robot.stock_of("Black"));
    }

    #[test]
    fn should_process_in_arrival_order_regardless_of_failures() {
        let mut robot = TeaRobot::new(Catalog::default_menu());
        for tea in ["Green", "Chamomile", "Black", "Green", "Green"] {
            robot.submit(tea).unwrap();
        }

        let outcomes = robot.drain_all();
        assert_eq!(vec!["Green", "Chamomile", "Black", "Green", "Green"], teas(&outcomes));
        let successes: Vec<bool> = outcomes.iter().map(OrderOutcome::is_success).collect();
        assert_eq!(vec![true, false, true, true, false], successes);
        assert_eq!(3, robot.completed_orders());
        assert_eq!(2, robot.failed_orders());
        assert_eq!(Some(&Container { remaining: 0, consumed: 2 }), robot.container("Green"));
    }

    #[test]
    fn should_keep_heater_temperature_after_a_failed_order() {
        let mut robot = TeaRobot::new(Catalog::default_menu());
        robot.submit("Green").unwrap();
        robot.submit("Chamomile").unwrap();

        robot.drain_all();
        assert_eq!(80, robot.heater_temperature());
    }
}
