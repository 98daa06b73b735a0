use serde::{Deserialize, Serialize};

/// Строка остатков по локации (GET /api/inventory/:id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub measurement: String,
    pub quantity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_row() {
        let json = r#"{"product_id":9,"product_name":"Доска","measurement":"шт","quantity":42}"#;
        let row: InventoryRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.product_name, "Доска");
        assert_eq!(row.quantity, 42.0);
    }
}
