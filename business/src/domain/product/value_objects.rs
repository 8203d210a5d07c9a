use serde::{Deserialize, Serialize};

/// One of the two stocking locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warehouse {
    A,
    B,
}

impl Warehouse {
    pub fn label(&self) -> &'static str {
        match self {
            Warehouse::A => "Warehouse 1",
            Warehouse::B => "Warehouse 2",
        }
    }
}

impl std::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warehouse::A => write!(f, "warehouse_a"),
            Warehouse::B => write!(f, "warehouse_b"),
        }
    }
}

impl std::str::FromStr for Warehouse {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warehouse_a" => Ok(Warehouse::A),
            "warehouse_b" => Ok(Warehouse::B),
            _ => Err(format!("Invalid warehouse: {}", s)),
        }
    }
}
