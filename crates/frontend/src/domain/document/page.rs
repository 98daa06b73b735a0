use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{sort_header, AddInput, SearchInput};
use contracts::domain::document::{DocType, Document};
use leptos::prelude::*;

use super::model::TEXTS;

/// Журнал документов. Выпадающий список типа перезагружает таблицу,
/// новый документ создаётся с текущим выбранным типом.
#[component]
pub fn DocumentPage() -> impl IntoView {
    let doc_type = RwSignal::new(DocType::Income);

    let ctl = ListController::<Document>::new(
        Signal::derive(move || format!("/api/documents?type={}", doc_type.get().as_str())),
        "/api/documents",
        "/api/documents",
        TEXTS,
    );
    ctl.mount();

    view! {
        <div class="page">
            <h2>{move || format!("Список документов: {}", doc_type.get().label())}</h2>
            <select
                class="form-control"
                style="margin-bottom: 8px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                on:change=move |ev| {
                    if let Some(t) = DocType::from_str(&event_target_value(&ev)) {
                        doc_type.set(t);
                    }
                }
            >
                {DocType::ALL
                    .into_iter()
                    .map(|t| view! {
                        <option value=t.as_str() selected=move || doc_type.get() == t>
                            {t.label()}
                        </option>
                    })
                    .collect_view()}
            </select>

            <AddInput
                value=ctl.new_name
                placeholder="Новый документ"
                on_submit=Callback::new(move |_| {
                    let t = doc_type.get_untracked();
                    ctl.create(move |name| {
                        serde_json::json!({ "name": name, "doc_type": t.as_str() })
                    })
                })
            />
            <SearchInput value=ctl.search placeholder="Поиск по названию" />

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header(ctl.sort, "id", "Код")}
                        {sort_header(ctl.sort, "doc_number", "Номер")}
                        {sort_header(ctl.sort, "name", "Название")}
                        {sort_header(ctl.sort, "doc_type", "Тип")}
                        {sort_header(ctl.sort, "doc_date", "Дата")}
                        {sort_header(ctl.sort, "status", "Статус")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let edit_id = ctl.edit_id.get();
                        ctl.visible()
                            .into_iter()
                            .map(|d| {
                                if edit_id == Some(d.id) {
                                    match ctl.draft_snapshot() {
                                        Some(draft) => edit_row(ctl, draft).into_any(),
                                        None => display_row(ctl, d).into_any(),
                                    }
                                } else {
                                    display_row(ctl, d).into_any()
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || ctl.loading.get().then(|| view! { <div class="table-status">"Загрузка..."</div> })}
            {move || ctl.error.get().map(|e| view! {
                <div class="table-status" style="color: red;">{format!("Ошибка: {e}")}</div>
            })}
            {move || (!ctl.loading.get() && !ctl.has_rows.get())
                .then(|| view! { <div class="table-status">"Данных пока нет"</div> })}

            {move || ctl.pending_delete.get().map(|_| view! {
                <ConfirmModal
                    message=Signal::derive(move || ctl.delete_message())
                    on_confirm=Callback::new(move |_| ctl.confirm_delete())
                    on_cancel=Callback::new(move |_| ctl.cancel_delete())
                />
            })}
        </div>
    }
}

fn display_row(ctl: ListController<Document>, d: Document) -> impl IntoView {
    let edit_target = d.clone();
    let delete_target = d.clone();
    view! {
        <tr>
            <td>{d.id}</td>
            <td>{d.doc_number.clone()}</td>
            <td>{d.name.clone()}</td>
            <td>{d.doc_type.label()}</td>
            <td>{format_datetime(&d.doc_date)}</td>
            <td>{d.status.clone()}</td>
            <td class="row-actions">
                <button class="btn-icon" title="Редактировать" on:click=move |_| ctl.start_edit(&edit_target)>
                    {icon("edit")}
                </button>
                <button class="btn-icon btn-danger" title="Удалить" on:click=move |_| ctl.request_delete(&delete_target)>
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}

fn edit_row(ctl: ListController<Document>, draft: Document) -> impl IntoView {
    view! {
        <tr class="row-editing">
            <td>{draft.id}</td>
            <td>{draft.doc_number.clone()}</td>
            <td>
                <input
                    class="cell-input"
                    value=draft.name.clone()
                    on:input=move |ev| ctl.update_draft(|d| d.name = event_target_value(&ev))
                />
            </td>
            <td>{draft.doc_type.label()}</td>
            <td>{format_datetime(&draft.doc_date)}</td>
            <td>{draft.status.clone()}</td>
            <td class="row-actions">
                <button class="btn-icon btn-success" title="Сохранить" on:click=move |_| ctl.save_edit()>
                    {icon("check")}
                </button>
                <button class="btn-icon" title="Отменить" on:click=move |_| ctl.cancel_edit()>
                    {icon("x")}
                </button>
            </td>
        </tr>
    }
}
