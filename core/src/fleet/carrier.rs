/// Load-carrying capability. Not a vehicle on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadCarrier {
    /// tons
    load_capacity: i64,
}

impl LoadCarrier {
    pub fn new(load_capacity: i64) -> Self {
        Self { load_capacity }
    }

    pub fn load_capacity(&self) -> i64 {
        self.load_capacity
    }

    pub fn show_load_capacity(&self) -> String {
        format!("Load Capacity: {} tons", self.load_capacity)
    }
}
