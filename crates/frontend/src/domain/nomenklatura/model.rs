use crate::shared::list_controller::{ListRecord, ListTexts};
use crate::shared::list_utils::cmp_ci;
use contracts::domain::nomenklatura::{Nomenklatura, NomenklaturaGroup};
use std::cmp::Ordering;

pub const GROUP_TEXTS: ListTexts = ListTexts {
    empty_name: "Название группы не может быть пустым",
    duplicate: "Такая группа уже существует.",
    created: "Группа успешно добавлена.",
    updated: "Группа успешно обновлена.",
    deleted: "Группа успешно удалена.",
};

pub const PRODUCT_TEXTS: ListTexts = ListTexts {
    empty_name: "Название номенклатуры не может быть пустым",
    duplicate: "Такая номенклатура уже существует.",
    created: "Номенклатура успешно добавлена.",
    updated: "Номенклатура успешно обновлена.",
    deleted: "Номенклатура успешно удалена.",
};

impl ListRecord for NomenklaturaGroup {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => cmp_ci(&self.name, &other.name),
            _ => self.id.cmp(&other.id),
        }
    }

    fn update_body(&self) -> serde_json::Value {
        serde_json::json!({ "name": self.name })
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}

impl ListRecord for Nomenklatura {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => cmp_ci(&self.name, &other.name),
            "measurement" => cmp_ci(&self.measurement, &other.measurement),
            "group" => cmp_ci(
                self.group_name.as_deref().unwrap_or(""),
                other.group_name.as_deref().unwrap_or(""),
            ),
            _ => self.id.cmp(&other.id),
        }
    }

    fn update_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "measurement": self.measurement,
            "group_id": self.group_id,
        })
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.measurement = self.measurement.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_without_group_sorts_first() {
        let a = Nomenklatura {
            id: 1,
            name: "Гвозди".into(),
            measurement: "кг".into(),
            group_id: None,
            group_name: None,
        };
        let b = Nomenklatura {
            id: 2,
            name: "Доска".into(),
            measurement: "шт".into(),
            group_id: Some(1),
            group_name: Some("Пиломатериалы".into()),
        };
        assert_eq!(a.compare_by(&b, "group"), Ordering::Less);
    }

    #[test]
    fn product_update_body_carries_group_id() {
        let p = Nomenklatura {
            id: 3,
            name: "Саморез".into(),
            measurement: "шт".into(),
            group_id: Some(7),
            group_name: Some("Метизы".into()),
        };
        let body = p.update_body();
        assert_eq!(body["group_id"], 7);
        assert!(body.get("group_name").is_none());
    }

    #[test]
    fn group_normalize_trims_name() {
        let mut g = NomenklaturaGroup {
            id: 1,
            name: " Метизы ".into(),
        };
        g.normalize();
        assert_eq!(g.name, "Метизы");
    }
}
