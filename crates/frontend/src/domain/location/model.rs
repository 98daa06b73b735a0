use crate::shared::list_controller::{ListRecord, ListTexts};
use crate::shared::list_utils::cmp_ci;
use contracts::domain::location::{Location, LocationType};
use std::cmp::Ordering;

/// Локации делят один контроллер-шаблон, но тексты уведомлений свои
/// для складов и точек продаж.
pub fn texts(t: LocationType) -> ListTexts {
    match t {
        LocationType::Storage => ListTexts {
            empty_name: "Имя и адрес не могут быть пустыми",
            duplicate: "Такой склад уже существует.",
            created: "Запись успешно добавлена",
            updated: "Склад успешно обновлен.",
            deleted: "Запись успешно удалена",
        },
        LocationType::Salespoint => ListTexts {
            empty_name: "Имя и адрес не могут быть пустыми",
            duplicate: "Такая точка продаж уже существует.",
            created: "Запись успешно добавлена",
            updated: "Точка продаж успешно обновлена.",
            deleted: "Запись успешно удалена",
        },
    }
}

impl ListRecord for Location {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => cmp_ci(&self.name, &other.name),
            "address" => cmp_ci(&self.address, &other.address),
            _ => self.id.cmp(&other.id),
        }
    }

    fn update_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "address": self.address,
            "type": self.location_type.as_str(),
        })
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.address = self.address.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_keeps_type_code() {
        let l = Location {
            id: 4,
            name: "Центральный".into(),
            address: "ул. Мира, 10".into(),
            location_type: LocationType::Salespoint,
        };
        assert_eq!(l.update_body()["type"], "salespoint");
    }

    #[test]
    fn texts_differ_by_type() {
        assert_ne!(
            texts(LocationType::Storage).updated,
            texts(LocationType::Salespoint).updated
        );
    }
}
