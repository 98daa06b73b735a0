use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Тип документа. Значения совпадают с `doc_type` на сервере.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Income,
    Sale,
    WriteOff,
    Transfer,
    CustomerReturn,
    SupplierReturn,
    AdjustmentIn,
    AdjustmentOut,
}

impl DocType {
    /// Все типы в порядке выпадающего списка.
    pub const ALL: [DocType; 8] = [
        DocType::Income,
        DocType::Sale,
        DocType::WriteOff,
        DocType::Transfer,
        DocType::CustomerReturn,
        DocType::SupplierReturn,
        DocType::AdjustmentIn,
        DocType::AdjustmentOut,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocType::Income => "income",
            DocType::Sale => "sale",
            DocType::WriteOff => "write_off",
            DocType::Transfer => "transfer",
            DocType::CustomerReturn => "customer_return",
            DocType::SupplierReturn => "supplier_return",
            DocType::AdjustmentIn => "adjustment_in",
            DocType::AdjustmentOut => "adjustment_out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocType::Income => "Поставка",
            DocType::Sale => "Продажа",
            DocType::WriteOff => "Списание",
            DocType::Transfer => "Перемещение",
            DocType::CustomerReturn => "Возврат от клиента",
            DocType::SupplierReturn => "Возврат поставщику",
            DocType::AdjustmentIn => "Корректировка прихода",
            DocType::AdjustmentOut => "Корректировка расхода",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        DocType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Документ (GET /api/documents?type=...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    pub doc_type: DocType,
    pub doc_date: DateTime<Utc>,
    #[serde(default)]
    pub doc_number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub counterparty_id: Option<i64>,
    #[serde(default)]
    pub from_location_id: Option<i64>,
    #[serde(default)]
    pub to_location_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_type_round_trips_snake_case() {
        for t in DocType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(DocType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(DocType::from_str("unknown"), None);
    }

    #[test]
    fn labels_match_document_kinds() {
        assert_eq!(DocType::Income.label(), "Поставка");
        assert_eq!(DocType::SupplierReturn.label(), "Возврат поставщику");
        assert_eq!(DocType::AdjustmentOut.label(), "Корректировка расхода");
    }

    #[test]
    fn decodes_server_row() {
        let json = r#"{
            "id": 12,
            "doc_type": "income",
            "doc_date": "2025-02-01T10:30:00Z",
            "doc_number": "0007",
            "status": "draft",
            "comment": null,
            "counterparty_id": 3,
            "from_location_id": null,
            "to_location_id": 1
        }"#;
        let d: Document = serde_json::from_str(json).unwrap();
        assert_eq!(d.doc_type, DocType::Income);
        assert_eq!(d.doc_number, "0007");
        assert_eq!(d.name, "");
        assert_eq!(d.counterparty_id, Some(3));
    }
}
