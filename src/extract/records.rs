//! Typed output records
//!
//! Each record is written as one line of newline-delimited JSON. Field order
//! matters for byte-stable output, so it follows declaration order.

use serde::{Deserialize, Serialize};

/// A node in the universe graph: one row of `mapSolarSystems`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemRecord {
    /// Source-assigned solar system identifier
    pub id: i64,
    /// Display name of the solar system
    pub data: String,
}

impl SystemRecord {
    pub fn new(id: i64, data: impl Into<String>) -> Self {
        Self {
            id,
            data: data.into(),
        }
    }
}

/// A directed edge in the universe graph: one row of `mapSolarSystemJumps`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRecord {
    pub from: i64,
    pub to: i64,
    /// Always [`GateRecord::WEIGHT`]; jumps carry no distance or cost
    pub weight: u32,
}

impl GateRecord {
    pub const WEIGHT: u32 = 1;

    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from,
            to,
            weight: Self::WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_record_keys() {
        let value = serde_json::to_value(SystemRecord::new(30000142, "Jita")).unwrap();
        let object = value.as_object().unwrap();
        let keys: Vec<&str> = object.keys().map(String::as_str).collect();
        assert_eq!(object.len(), 2);
        assert!(keys.contains(&"id"));
        assert!(keys.contains(&"data"));
        assert_eq!(value["id"], 30000142);
        assert_eq!(value["data"], "Jita");
    }

    #[test]
    fn test_gate_record_weight_is_constant() {
        let gate = GateRecord::new(30000142, 30000144);
        assert_eq!(gate.weight, 1);
        assert_eq!(gate.from, 30000142);
        assert_eq!(gate.to, 30000144);
    }

    #[test]
    fn test_gate_record_field_order() {
        let json = serde_json::to_string(&GateRecord::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"from":1,"to":2,"weight":1}"#);
    }
}
