//! Контроллер CRUD-списка. Один и тот же жизненный цикл — загрузка,
//! поиск, сортировка, строчное редактирование, удаление через
//! подтверждение — повторяется на каждой странице справочника;
//! здесь он собран в одну переиспользуемую абстракцию.

use crate::shared::api;
use crate::shared::list_utils::SortConfig;
use crate::shared::notifications::Notifications;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cmp::Ordering;

pub const DB_UNAVAILABLE: &str = "База данных недоступна";
pub const NO_CHANGES: &str = "Изменений не найдено.";
pub const CREATE_FAILED: &str = "Не удалось добавить запись. Попробуйте ещё раз.";
pub const UPDATE_FAILED: &str = "Не удалось обновить запись.";
pub const DELETE_FAILED: &str = "Не удалось удалить запись.";

/// Запись, которой умеет управлять контроллер списка.
pub trait ListRecord:
    Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    fn id(&self) -> i64;

    /// Имя записи: по нему работает поиск и текст подтверждения удаления.
    fn name(&self) -> &str;

    /// Сравнение по колонке: числовые ключи — арифметически,
    /// даты — хронологически, остальные — строково без учёта регистра.
    fn compare_by(&self, other: &Self, key: &str) -> Ordering;

    /// Тело PUT-запроса для отредактированной записи.
    fn update_body(&self) -> serde_json::Value;

    /// Приводит черновик к виду для сравнения и отправки
    /// (обрезка пробелов в редактируемых полях).
    fn normalize(&mut self) {}
}

/// Фильтр по подстроке имени (без учёта регистра), затем сортировка.
/// Пустой поиск возвращает полный список.
pub fn visible_records<T: ListRecord>(
    mut items: Vec<T>,
    search: &str,
    sort: &SortConfig,
) -> Vec<T> {
    let needle = search.to_lowercase();
    if !needle.is_empty() {
        items.retain(|r| r.name().to_lowercase().contains(&needle));
    }
    items.sort_by(|a, b| sort.apply(a.compare_by(b, sort.key)));
    items
}

/// Имя новой записи после обрезки пробелов. Пустой или пробельный
/// ввод отклоняется, запрос на сервер не уходит.
pub fn accepted_name(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Сессия строчного редактирования: одна строка за раз.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession<T> {
    pub row_id: i64,
    pub draft: T,
}

/// Тексты уведомлений, различающиеся между сущностями.
#[derive(Clone, Copy)]
pub struct ListTexts {
    pub empty_name: &'static str,
    pub duplicate: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

#[derive(Clone)]
struct Endpoint {
    create_path: String,
    item_base: String,
}

pub struct ListController<T: ListRecord> {
    /// Последний успешно загруженный список: кэш серверного состояния.
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    /// Последняя загрузка вернула хотя бы одну запись.
    pub has_rows: RwSignal<bool>,
    pub search: RwSignal<String>,
    pub sort: RwSignal<SortConfig>,
    pub new_name: RwSignal<String>,
    pub edit: RwSignal<Option<EditSession<T>>>,
    /// Id редактируемой строки. Memo не уведомляет при правках черновика,
    /// поэтому таблица не перерисовывается на каждый ввод символа.
    pub edit_id: Memo<Option<i64>>,
    pub pending_delete: RwSignal<Option<T>>,
    list_path: Signal<String>,
    endpoint: StoredValue<Endpoint>,
    texts: StoredValue<ListTexts>,
    notify: Notifications,
}

impl<T: ListRecord> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: ListRecord> Copy for ListController<T> {}

impl<T: ListRecord> ListController<T> {
    /// `list_path` реактивен: страница документов меняет его при смене
    /// типа, страница локаций — при смене вкладки.
    pub fn new(
        list_path: Signal<String>,
        create_path: impl Into<String>,
        item_base: impl Into<String>,
        texts: ListTexts,
    ) -> Self {
        let edit: RwSignal<Option<EditSession<T>>> = RwSignal::new(None);
        ListController {
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            has_rows: RwSignal::new(false),
            search: RwSignal::new(String::new()),
            sort: RwSignal::new(SortConfig::default()),
            new_name: RwSignal::new(String::new()),
            edit,
            edit_id: Memo::new(move |_| edit.with(|e| e.as_ref().map(|s| s.row_id))),
            pending_delete: RwSignal::new(None),
            list_path,
            endpoint: StoredValue::new(Endpoint {
                create_path: create_path.into(),
                item_base: item_base.into(),
            }),
            texts: StoredValue::new(texts),
            notify: Notifications::use_context(),
        }
    }

    /// Загружает список при монтировании и при каждой смене `list_path`.
    pub fn mount(self) {
        Effect::new(move |_| {
            let path = self.list_path.get();
            self.load_path(path);
        });
    }

    /// Полная перезагрузка текущего списка (после каждой мутации).
    pub fn reload(self) {
        self.load_path(self.list_path.get_untracked());
    }

    fn load_path(self, path: String) {
        self.loading.set(true);
        self.error.set(None);
        spawn_local(async move {
            match api::get_json::<Vec<T>>(&path).await {
                Ok(data) => {
                    self.has_rows.set(!data.is_empty());
                    self.items.set(data);
                }
                Err(e) => {
                    log::error!("Ошибка загрузки {path}: {e}");
                    self.error.set(Some(e.to_string()));
                    self.has_rows.set(false);
                    self.notify.error(DB_UNAVAILABLE);
                }
            }
            self.loading.set(false);
        });
    }

    /// Отфильтрованный и отсортированный список для таблицы.
    pub fn visible(&self) -> Vec<T> {
        self.items.with(|items| {
            visible_records(items.clone(), &self.search.get(), &self.sort.get())
        })
    }

    pub fn toggle_sort(&self, key: &'static str) {
        self.sort.update(|s| *s = s.toggled(key));
    }

    /// Создание записи из поля ввода. Пустое имя — только уведомление,
    /// запрос не уходит; 409 — предупреждение о дубликате.
    pub fn create(self, make_body: impl FnOnce(&str) -> serde_json::Value) {
        let texts = self.texts.get_value();
        let Some(name) = accepted_name(&self.new_name.get_untracked()) else {
            self.notify.error(texts.empty_name);
            return;
        };
        let body = make_body(&name);
        let path = self.endpoint.with_value(|e| e.create_path.clone());
        spawn_local(async move {
            match api::post_json(&path, &body).await {
                Ok(_) => {
                    self.notify.success(texts.created);
                    self.new_name.set(String::new());
                    self.reload();
                }
                Err(e) if e.is_conflict() => {
                    self.notify.warning(texts.duplicate);
                }
                Err(e) => {
                    log::error!("Ошибка при добавлении: {e}");
                    self.notify.error(CREATE_FAILED);
                }
            }
        });
    }

    /// Вход в режим редактирования строки. Предыдущая сессия,
    /// если была, молча заменяется.
    pub fn start_edit(&self, record: &T) {
        self.edit.set(Some(EditSession {
            row_id: record.id(),
            draft: record.clone(),
        }));
    }

    pub fn cancel_edit(&self) {
        self.edit.set(None);
    }

    pub fn is_editing(&self, id: i64) -> bool {
        self.edit_id.get() == Some(id)
    }

    pub fn update_draft(&self, f: impl FnOnce(&mut T)) {
        self.edit.update(|e| {
            if let Some(session) = e {
                f(&mut session.draft);
            }
        });
    }

    /// Снимок черновика без подписки: строка редактирования берёт из него
    /// начальные значения полей, дальше ввод течёт только в сигнал.
    pub fn draft_snapshot(&self) -> Option<T> {
        self.edit.with_untracked(|e| e.as_ref().map(|s| s.draft.clone()))
    }

    /// Сохранение черновика. Без изменений — info-уведомление и никакого
    /// запроса; иначе PUT и полная перезагрузка.
    pub fn save_edit(self) {
        let Some(session) = self.edit.get_untracked() else {
            return;
        };
        let original = self
            .items
            .with_untracked(|items| items.iter().find(|r| r.id() == session.row_id).cloned());
        let Some(original) = original else {
            return;
        };

        let mut draft = session.draft;
        draft.normalize();
        if draft == original {
            self.notify.info(NO_CHANGES);
            self.cancel_edit();
            return;
        }

        let texts = self.texts.get_value();
        let path = self
            .endpoint
            .with_value(|e| format!("{}/{}", e.item_base, session.row_id));
        let body = draft.update_body();
        spawn_local(async move {
            match api::put_json(&path, &body).await {
                Ok(()) => {
                    self.notify.success(texts.updated);
                    self.reload();
                    self.cancel_edit();
                }
                Err(e) => {
                    log::error!("Ошибка при обновлении: {e}");
                    self.notify.error(UPDATE_FAILED);
                }
            }
        });
    }

    /// Открывает модальное окно подтверждения для записи.
    pub fn request_delete(&self, record: &T) {
        self.pending_delete.set(Some(record.clone()));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn delete_message(&self) -> String {
        self.pending_delete
            .with(|d| {
                d.as_ref()
                    .map(|r| format!("Вы уверены, что хотите удалить \"{}\"?", r.name()))
            })
            .unwrap_or_default()
    }

    /// Подтверждённое удаление. Список перезагружается в любом случае,
    /// чтобы таблица сошлась с сервером.
    pub fn confirm_delete(self) {
        let Some(victim) = self.pending_delete.get_untracked() else {
            return;
        };
        self.pending_delete.set(None);
        let texts = self.texts.get_value();
        let path = self
            .endpoint
            .with_value(|e| format!("{}/{}", e.item_base, victim.id()));
        spawn_local(async move {
            match api::delete(&path).await {
                Ok(()) => self.notify.success(texts.deleted),
                Err(e) => {
                    log::error!("Ошибка удаления: {e}");
                    self.notify.error(DELETE_FAILED);
                }
            }
            self.reload();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{cmp_ci, SortDirection};
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: i64,
        name: String,
    }

    impl ListRecord for Row {
        fn id(&self) -> i64 {
            self.id
        }
        fn name(&self) -> &str {
            &self.name
        }
        fn compare_by(&self, other: &Self, key: &str) -> Ordering {
            match key {
                "id" => self.id.cmp(&other.id),
                _ => cmp_ci(&self.name, &other.name),
            }
        }
        fn update_body(&self) -> serde_json::Value {
            serde_json::json!({ "name": self.name })
        }
        fn normalize(&mut self) {
            self.name = self.name.trim().to_string();
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 2, name: "Болт".into() },
            Row { id: 1, name: "гайка".into() },
            Row { id: 3, name: "Шайба".into() },
        ]
    }

    #[test]
    fn empty_search_keeps_everything() {
        let out = visible_records(rows(), "", &SortConfig::default());
        assert_eq!(out.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let out = visible_records(rows(), "ГАЙ", &SortConfig::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "гайка");
    }

    #[test]
    fn filter_applies_before_sort() {
        let sort = SortConfig {
            key: "name",
            direction: SortDirection::Descending,
        };
        let out = visible_records(rows(), "а", &sort);
        // "гайка" и "Шайба" содержат "а"; по имени по убыванию.
        assert_eq!(
            out.iter().map(|r| r.name.as_str()).collect::<Vec<_>>(),
            vec!["Шайба", "гайка"]
        );
    }

    #[test]
    fn sort_by_id_is_numeric() {
        let mut items = rows();
        items.push(Row { id: 10, name: "Анкер".into() });
        let out = visible_records(items, "", &SortConfig::default());
        assert_eq!(
            out.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 10]
        );
    }

    #[test]
    fn blank_and_whitespace_names_are_rejected() {
        assert_eq!(accepted_name(""), None);
        assert_eq!(accepted_name("   \t  "), None);
        assert_eq!(accepted_name("  Болт  "), Some("Болт".to_string()));
    }

    #[test]
    fn normalized_draft_equals_original_means_no_change() {
        let original = Row { id: 1, name: "гайка".into() };
        let mut draft = Row { id: 1, name: "  гайка  ".into() };
        draft.normalize();
        assert_eq!(draft, original);
    }
}
