use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{sort_header, SearchInput};
use crate::shared::notifications::Notifications;
use contracts::domain::location::{Location, LocationType};
use leptos::prelude::*;
use leptos_router::components::A;

use super::model::texts;

/// Локации с вкладками «Склады» / «Точки продаж». Маршрут задаёт только
/// начальную вкладку, у каждой вкладки свой контроллер и свои тексты
/// уведомлений.
#[component]
pub fn LocationPage(location_type: LocationType) -> impl IntoView {
    let tab = RwSignal::new(location_type);

    let storages = location_controller(LocationType::Storage);
    let salespoints = location_controller(LocationType::Salespoint);
    storages.mount();
    salespoints.mount();

    let tab_button = move |t: LocationType| {
        view! {
            <button
                class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                on:click=move |_| tab.set(t)
            >
                {match t {
                    LocationType::Storage => "Склады",
                    LocationType::Salespoint => "Точки продаж",
                }}
            </button>
        }
    };

    view! {
        <div class="page">
            <h2>"Локации"</h2>
            <div class="tab-bar">
                {tab_button(LocationType::Storage)}
                {tab_button(LocationType::Salespoint)}
            </div>
            {move || match tab.get() {
                LocationType::Storage => {
                    view! { <LocationTab ctl=storages location_type=LocationType::Storage /> }
                        .into_any()
                }
                LocationType::Salespoint => {
                    view! { <LocationTab ctl=salespoints location_type=LocationType::Salespoint /> }
                        .into_any()
                }
            }}
        </div>
    }
}

fn location_controller(t: LocationType) -> ListController<Location> {
    ListController::new(
        Signal::derive(move || format!("/api/locations?type={}", t.as_str())),
        "/api/locations",
        "/api/locations",
        texts(t),
    )
}

#[component]
fn LocationTab(ctl: ListController<Location>, location_type: LocationType) -> impl IntoView {
    let notify = Notifications::use_context();
    let new_address = RwSignal::new(String::new());

    // Успешное добавление очищает поле имени в контроллере;
    // адрес очищается следом.
    Effect::new(move |_| {
        if ctl.new_name.with(|n| n.is_empty()) {
            new_address.set(String::new());
        }
    });

    let add = move |_: ()| {
        // Для локации обязательны оба поля, не только имя.
        let name = ctl.new_name.get_untracked().trim().to_string();
        let address = new_address.get_untracked().trim().to_string();
        if name.is_empty() || address.is_empty() {
            notify.error("Имя и адрес не могут быть пустыми");
            return;
        }
        ctl.create(move |name| {
            serde_json::json!({
                "name": name,
                "address": address,
                "type": location_type.as_str(),
            })
        });
    };

    view! {
        <div>
            <div style="display: flex; align-items: center; gap: 6px; margin-bottom: 8px;">
                <input
                    type="text"
                    class="form-control"
                    placeholder="Название"
                    style="flex: 1; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    prop:value=move || ctl.new_name.get()
                    on:input=move |ev| ctl.new_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    class="form-control"
                    placeholder="Адрес"
                    style="flex: 1; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                    prop:value=move || new_address.get()
                    on:input=move |ev| new_address.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            add(());
                        }
                    }
                />
                <button class="btn-icon btn-success" title="Добавить запись" on:click=move |_| add(())>
                    {icon("check")}
                </button>
            </div>
            <SearchInput value=ctl.search placeholder="Поиск по названию" />

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header(ctl.sort, "id", "Код")}
                        {sort_header(ctl.sort, "name", "Название")}
                        {sort_header(ctl.sort, "address", "Адрес")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let edit_id = ctl.edit_id.get();
                        ctl.visible()
                            .into_iter()
                            .map(|l| {
                                if edit_id == Some(l.id) {
                                    match ctl.draft_snapshot() {
                                        Some(draft) => edit_row(ctl, draft).into_any(),
                                        None => display_row(ctl, l).into_any(),
                                    }
                                } else {
                                    display_row(ctl, l).into_any()
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

fn display_row(ctl: ListController<Location>, l: Location) -> impl IntoView {
    let edit_target = l.clone();
    let delete_target = l.clone();
    let href = format!("{}/{}", l.location_type.details_route(), l.id);
    view! {
        <tr>
            <td>{l.id}</td>
            <td>
                <A href=href>{l.name.clone()}</A>
            </td>
            <td>{l.address.clone()}</td>
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

fn edit_row(ctl: ListController<Location>, draft: Location) -> impl IntoView {
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
                    value=draft.address.clone()
                    on:input=move |ev| ctl.update_draft(|d| d.address = event_target_value(&ev))
                />
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
