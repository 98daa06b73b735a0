use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{sort_header, AddInput, SearchInput};
use contracts::domain::counterparty::{Counterparty, CounterpartyRole};
use leptos::prelude::*;

use super::model::TEXTS;

/// Справочник контрагентов: таблица с поиском, сортировкой,
/// строчным редактированием и удалением через подтверждение.
#[component]
pub fn CounterpartyPage() -> impl IntoView {
    let ctl = ListController::<Counterparty>::new(
        Signal::derive(|| "/api/counterparties".to_string()),
        "/api/counterparties",
        "/api/counterparties",
        TEXTS,
    );
    ctl.mount();

    view! {
        <div class="page">
            <h2>"Контрагенты"</h2>
            <AddInput
                value=ctl.new_name
                placeholder="Новый контрагент"
                on_submit=Callback::new(move |_| {
                    ctl.create(|name| serde_json::json!({ "name": name }))
                })
            />
            <SearchInput value=ctl.search placeholder="Поиск по имени" />

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header(ctl.sort, "id", "Код")}
                        {sort_header(ctl.sort, "name", "Имя")}
                        {sort_header(ctl.sort, "phone", "Телефон")}
                        {sort_header(ctl.sort, "address", "Адрес")}
                        {sort_header(ctl.sort, "role", "Роль")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let edit_id = ctl.edit_id.get();
                        ctl.visible()
                            .into_iter()
                            .map(|c| {
                                if edit_id == Some(c.id) {
                                    match ctl.draft_snapshot() {
                                        Some(draft) => edit_row(ctl, draft).into_any(),
                                        None => display_row(ctl, c).into_any(),
                                    }
                                } else {
                                    display_row(ctl, c).into_any()
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

fn display_row(ctl: ListController<Counterparty>, c: Counterparty) -> impl IntoView {
    let edit_target = c.clone();
    let delete_target = c.clone();
    view! {
        <tr>
            <td>{c.id}</td>
            <td>{c.name.clone()}</td>
            <td>{c.phone.clone().unwrap_or_else(|| "нет данных".into())}</td>
            <td>{c.address.clone().unwrap_or_else(|| "нет данных".into())}</td>
            <td>{c.role_label()}</td>
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

fn edit_row(ctl: ListController<Counterparty>, draft: Counterparty) -> impl IntoView {
    view! {
        <tr class="row-editing">
            <td>{draft.id}</td>
            <td>
                <input
                    class="cell-input"
                    value=draft.name.clone()
                    on:input=move |ev| ctl.update_draft(|d| d.name = event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    class="cell-input"
                    value=draft.phone.clone().unwrap_or_default()
                    on:input=move |ev| ctl.update_draft(|d| {
                        let v = event_target_value(&ev);
                        d.phone = (!v.is_empty()).then_some(v);
                    })
                />
            </td>
            <td>
                <input
                    class="cell-input"
                    value=draft.address.clone().unwrap_or_default()
                    on:input=move |ev| ctl.update_draft(|d| {
                        let v = event_target_value(&ev);
                        d.address = (!v.is_empty()).then_some(v);
                    })
                />
            </td>
            <td>
                <select
                    class="cell-input"
                    on:change=move |ev| ctl.update_draft(|d| {
                        d.role = CounterpartyRole::from_str(&event_target_value(&ev));
                    })
                >
                    <option value="" selected=draft.role.is_none()>"нет данных"</option>
                    <option value="customer" selected=(draft.role == Some(CounterpartyRole::Customer))>
                        "Клиент"
                    </option>
                    <option value="supplier" selected=(draft.role == Some(CounterpartyRole::Supplier))>
                        "Поставщик"
                    </option>
                </select>
            </td>
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
