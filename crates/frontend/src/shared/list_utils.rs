//! Универсальные утилиты списков: сортировка, поиск, UI-компоненты строк ввода.

use crate::shared::icons::icon;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Текущая сортировка таблицы: колонка + направление.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        SortConfig {
            key: "id",
            direction: SortDirection::Ascending,
        }
    }
}

impl SortConfig {
    /// Клик по заголовку: та же колонка — смена направления,
    /// другая колонка — по возрастанию.
    pub fn toggled(self, key: &'static str) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        SortConfig { key, direction }
    }

    pub fn apply(&self, cmp: Ordering) -> Ordering {
        match self.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    }
}

/// Сравнение строк без учёта регистра (замена localeCompare оригинала).
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Индикатор сортировки для заголовка колонки.
pub fn sort_indicator(sort: &SortConfig, key: &str) -> &'static str {
    if sort.key == key {
        match sort.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    } else {
        ""
    }
}

/// Кликабельный заголовок колонки с индикатором сортировки.
pub fn sort_header(
    sort: RwSignal<SortConfig>,
    key: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <th style="cursor: pointer; user-select: none;" on:click=move |_| sort.update(|s| *s = s.toggled(key))>
            {move || format!("{label}{}", sort_indicator(&sort.get(), key))}
        </th>
    }
}

/// Строка поиска с кнопкой очистки. Фильтр применяется на каждый ввод,
/// без задержки: список уже загружен целиком.
#[component]
pub fn SearchInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div style="position: relative; display: inline-flex; align-items: center; width: 100%; margin-bottom: 8px;">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                style="width: 100%; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #595c5f; line-height: 1;"
                        on:click=move |_| value.set(String::new())
                        title="Очистить"
                    >
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                ().into_any()
            }}
        </div>
    }
}

/// Строка добавления новой записи: поле имени + кнопка подтверждения.
#[component]
pub fn AddInput(
    #[prop(into)] value: RwSignal<String>,
    #[prop(into)] placeholder: String,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <div style="display: flex; align-items: center; gap: 6px; margin-bottom: 8px;">
            <input
                type="text"
                class="form-control"
                placeholder=placeholder
                style="flex: 1; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        on_submit.run(());
                    }
                }
            />
            <button
                class="btn-icon btn-success"
                title="Добавить запись"
                on:click=move |_| on_submit.run(())
            >
                {icon("check")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_key_alternates_direction() {
        let s = SortConfig::default();
        let s = s.toggled("name");
        assert_eq!(s.key, "name");
        assert_eq!(s.direction, SortDirection::Ascending);
        let s = s.toggled("name");
        assert_eq!(s.direction, SortDirection::Descending);
        let s = s.toggled("name");
        assert_eq!(s.direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_other_key_resets_to_ascending() {
        let s = SortConfig {
            key: "name",
            direction: SortDirection::Descending,
        };
        let s = s.toggled("phone");
        assert_eq!(s.key, "phone");
        assert_eq!(s.direction, SortDirection::Ascending);
    }

    #[test]
    fn indicator_only_on_active_column() {
        let s = SortConfig::default();
        assert_eq!(sort_indicator(&s, "id"), " ▲");
        assert_eq!(sort_indicator(&s, "name"), "");
        let s = s.toggled("id");
        assert_eq!(sort_indicator(&s, "id"), " ▼");
    }

    #[test]
    fn case_insensitive_compare() {
        assert_eq!(cmp_ci("Акция", "акция"), Ordering::Equal);
        assert!(cmp_ci("abc", "ABD") == Ordering::Less);
    }
}
