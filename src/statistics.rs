use crate::tea_robot::TeaRobot;

/// Arma el resumen de pedidos procesados y del stock de cada variedad
pub struct StatisticsPrinter<'a> {
    robot: &'a TeaRobot,
}

impl<'a> StatisticsPrinter<'a> {
    pub fn new(robot: &'a TeaRobot) -> StatisticsPrinter<'a> {
        StatisticsPrinter { robot }
    }

    pub fn statistics(&self) -> String {
        let mut statistics = format!(
            "[STATISTICS] Orders completed={} | failed={} | Tea=(remaining, consumed) |",
            self.robot.completed_orders(),
            self.robot.failed_orders()
        );
        self.add_stock_to_statistics_string(&mut statistics);
        statistics
    }

    fn add_stock_to_statistics_string(&self, statistics: &mut String) {
        for tea in self.robot.catalog().variants() {
            if let Some(container) = self.robot.container(tea) {
                statistics.push_str(&format!(
                    " {}=({},{}) ",
                    tea, container.remaining, container.consumed
                ));
            }
        }
    }
}
