use serde::{Deserialize, Serialize};

/// Роль контрагента: клиент или поставщик.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyRole {
    Customer,
    Supplier,
}

impl CounterpartyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterpartyRole::Customer => "customer",
            CounterpartyRole::Supplier => "supplier",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CounterpartyRole::Customer => "Клиент",
            CounterpartyRole::Supplier => "Поставщик",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "customer" => Some(CounterpartyRole::Customer),
            "supplier" => Some(CounterpartyRole::Supplier),
            _ => None,
        }
    }
}

/// Контрагент (GET /api/counterparties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Counterparty {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub role: Option<CounterpartyRole>,
}

impl Counterparty {
    /// Подпись роли для таблицы; отсутствие роли показывается явно.
    pub fn role_label(&self) -> &'static str {
        self.role.map(|r| r.label()).unwrap_or("нет данных")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_row() {
        let json = r#"{"id":1,"name":"Acme","phone":"123","address":"X","role":"customer"}"#;
        let c: Counterparty = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 1);
        assert_eq!(c.name, "Acme");
        assert_eq!(c.phone.as_deref(), Some("123"));
        assert_eq!(c.address.as_deref(), Some("X"));
        assert_eq!(c.role, Some(CounterpartyRole::Customer));
        assert_eq!(c.role_label(), "Клиент");
    }

    #[test]
    fn tolerates_missing_optionals() {
        let c: Counterparty = serde_json::from_str(r#"{"id":7,"name":"ООО Ромашка"}"#).unwrap();
        assert_eq!(c.phone, None);
        assert_eq!(c.role, None);
        assert_eq!(c.role_label(), "нет данных");
    }
}
