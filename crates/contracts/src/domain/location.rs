use serde::{Deserialize, Serialize};

/// Подтип локации: склад или точка продаж.
/// В JSON поле называется `type` со значениями `storage`/`salespoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Storage,
    Salespoint,
}

impl LocationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationType::Storage => "storage",
            LocationType::Salespoint => "salespoint",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Storage => "Склад",
            LocationType::Salespoint => "Точка продаж",
        }
    }

    /// База маршрута детальной страницы (`/storages/:id`, `/salespoints/:id`).
    pub fn details_route(&self) -> &'static str {
        match self {
            LocationType::Storage => "/storages",
            LocationType::Salespoint => "/salespoints",
        }
    }
}

/// Локация (GET /api/locations?type=storage|salespoint).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(rename = "type")]
    pub location_type: LocationType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_is_renamed() {
        let json = r#"{"id":5,"name":"Основной склад","address":"ул. Ленина, 1","type":"storage"}"#;
        let l: Location = serde_json::from_str(json).unwrap();
        assert_eq!(l.location_type, LocationType::Storage);
        assert_eq!(
            serde_json::to_value(&l).unwrap()["type"],
            serde_json::json!("storage")
        );
    }

    #[test]
    fn details_routes() {
        assert_eq!(LocationType::Storage.details_route(), "/storages");
        assert_eq!(LocationType::Salespoint.details_route(), "/salespoints");
    }
}
