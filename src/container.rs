/// Stock de una variedad de te. `consumed` cuenta las porciones ya servidas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub remaining: u64,
    pub consumed: u64,
}

impl Container {
    pub fn new(initial_stock: u64) -> Container {
        Container { remaining: initial_stock, consumed: 0 }
    }
}
