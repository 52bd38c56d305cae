//! Representacion de la cola de pedidos
use std::collections::VecDeque;

use crate::order::Order;

/// Cola de pedidos a realizar. Se atienden en el orden en que llegaron.
pub struct OrdersQueue {
    orders: VecDeque<Order>,
}

impl OrdersQueue {
    pub fn new() -> OrdersQueue {
        OrdersQueue {
            orders: VecDeque::new(),
        }
    }

    pub fn push(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    pub fn pop(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

impl Default for OrdersQueue {
    fn default() -> Self {
        OrdersQueue::new()
    }
}
