use crate::shared::list_controller::{ListRecord, ListTexts};
use crate::shared::list_utils::cmp_ci;
use contracts::domain::document::Document;
use std::cmp::Ordering;

pub const TEXTS: ListTexts = ListTexts {
    empty_name: "Название документа не может быть пустым",
    duplicate: "Документ с таким именем уже существует.",
    created: "Документ успешно добавлен.",
    updated: "Документ успешно обновлён.",
    deleted: "Документ успешно удалён.",
};

impl ListRecord for Document {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, key: &str) -> Ordering {
        match key {
            "name" => cmp_ci(&self.name, &other.name),
            "doc_number" => cmp_ci(&self.doc_number, &other.doc_number),
            "status" => cmp_ci(&self.status, &other.status),
            "doc_date" => self.doc_date.cmp(&other.doc_date),
            "doc_type" => cmp_ci(self.doc_type.label(), other.doc_type.label()),
            _ => self.id.cmp(&other.id),
        }
    }

    fn update_body(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "doc_type": self.doc_type.as_str(),
        })
    }

    fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use contracts::domain::document::DocType;

    fn doc(id: i64, name: &str, day: u32) -> Document {
        Document {
            id,
            doc_type: DocType::Income,
            doc_date: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
            doc_number: format!("{id:04}"),
            name: name.into(),
            status: "draft".into(),
            comment: None,
            counterparty_id: None,
            from_location_id: None,
            to_location_id: None,
        }
    }

    #[test]
    fn sorts_chronologically_by_date() {
        let early = doc(2, "Б", 1);
        let late = doc(1, "А", 20);
        assert_eq!(early.compare_by(&late, "doc_date"), Ordering::Less);
        // по id порядок обратный дате
        assert_eq!(early.compare_by(&late, "id"), Ordering::Greater);
    }

    #[test]
    fn update_body_has_only_editable_fields() {
        let d = doc(5, "Поставка март", 3);
        let body = d.update_body();
        assert_eq!(body["name"], "Поставка март");
        assert_eq!(body["doc_type"], "income");
        assert!(body.get("doc_date").is_none());
        assert!(body.get("status").is_none());
    }
}
