use crate::shared::list_controller::{ListRecord, ListTexts};
use crate::shared::list_utils::cmp_ci;
use contracts::domain::counterparty::Counterparty;
use std::cmp::Ordering;

pub const TEXTS: ListTexts = ListTexts {
    empty_name: "Имя контрагента не может быть пустым",
    duplicate: "Такой контрагент уже существует.",
    created: "Контрагент успешно добавлен.",
    updated: "Контрагент успешно обновлен.",
    deleted: "Контрагент успешно удалён.",
};

fn opt(s: &Option<String>) -> &str {
    s.as_deref().unwrap_or("")
}

/// Пустые строки в необязательных полях превращаются в NULL на сервере.
fn trimmed_opt(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ListRecord for Counterparty {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => cmp_ci(&self.name, &other.name),
            "phone" => cmp_ci(opt(&self.phone), opt(&other.phone)),
            "address" => cmp_ci(opt(&self.address), opt(&other.address)),
            "role" => cmp_ci(self.role_label(), other.role_label()),
            _ => self.id.cmp(&other.id),
        }
    }

    fn update_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "phone": self.phone,
            "address": self.address,
            "role": self.role.map(|r| r.as_str()),
        })
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.phone = trimmed_opt(self.phone.take());
        self.address = trimmed_opt(self.address.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::counterparty::CounterpartyRole;

    fn row(id: i64, name: &str, role: Option<CounterpartyRole>) -> Counterparty {
        Counterparty {
            id,
            name: name.into(),
            phone: None,
            address: None,
            role,
        }
    }

    #[test]
    fn sorts_by_role_label() {
        let customer = row(1, "А", Some(CounterpartyRole::Customer));
        let supplier = row(2, "Б", Some(CounterpartyRole::Supplier));
        let unknown = row(3, "В", None);
        // "Клиент" < "Поставщик", отсутствие роли ("нет данных") последним.
        assert_eq!(customer.compare_by(&supplier, "role"), Ordering::Less);
        assert_eq!(supplier.compare_by(&unknown, "role"), Ordering::Less);
    }

    #[test]
    fn update_body_serializes_role_as_code() {
        let c = Counterparty {
            id: 1,
            name: "Acme".into(),
            phone: Some("123".into()),
            address: None,
            role: Some(CounterpartyRole::Supplier),
        };
        let body = c.update_body();
        assert_eq!(body["role"], "supplier");
        assert_eq!(body["phone"], "123");
        assert!(body["address"].is_null());
    }

    #[test]
    fn normalize_trims_and_drops_empty_optionals() {
        let mut c = Counterparty {
            id: 1,
            name: "  Acme  ".into(),
            phone: Some("   ".into()),
            address: Some(" ул. Ленина ".into()),
            role: None,
        };
        c.normalize();
        assert_eq!(c.name, "Acme");
        assert_eq!(c.phone, None);
        assert_eq!(c.address.as_deref(), Some("ул. Ленина"));
    }
}
