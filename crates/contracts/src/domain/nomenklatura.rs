use serde::{Deserialize, Serialize};

/// Группа номенклатуры (GET /api/nomenklatura_groups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NomenklaturaGroup {
    pub id: i64,
    pub name: String,
}

/// Номенклатура — товар каталога (GET /api/nomenklatura).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Nomenklatura {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub measurement: String,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub group_name: Option<String>,
}

/// Карточка товара (GET /api/nomenklatura/details/:id).
/// Сервер отдаёт пустые строки вместо NULL для image_url/description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct NomenklaturaDetails {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_with_group() {
        let json = r#"{"id":3,"name":"Гвозди","measurement":"кг","group_id":2,"group_name":"Метизы"}"#;
        let n: Nomenklatura = serde_json::from_str(json).unwrap();
        assert_eq!(n.group_id, Some(2));
        assert_eq!(n.group_name.as_deref(), Some("Метизы"));
    }

    #[test]
    fn details_without_image() {
        let d: NomenklaturaDetails =
            serde_json::from_str(r#"{"id":3,"name":"Гвозди"}"#).unwrap();
        assert_eq!(d.image_url, "");
        assert_eq!(d.description, "");
    }
}
