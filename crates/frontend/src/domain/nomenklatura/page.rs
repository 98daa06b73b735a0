use crate::shared::confirm_modal::ConfirmModal;
use crate::shared::icons::icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{sort_header, AddInput, SearchInput};
use contracts::domain::nomenklatura::{Nomenklatura, NomenklaturaGroup};
use leptos::prelude::*;
use leptos_router::components::A;

use super::model::{GROUP_TEXTS, PRODUCT_TEXTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Groups,
    Products,
}

/// Каталог товаров: две вкладки над одной страницей.
/// Группы загружаются всегда, они же питают выпадающий список
/// при редактировании товара.
#[component]
pub fn NomenklaturaPage() -> impl IntoView {
    let tab = RwSignal::new(Tab::Products);

    let groups = ListController::<NomenklaturaGroup>::new(
        Signal::derive(|| "/api/nomenklatura_groups".to_string()),
        "/api/nomenklatura_groups",
        "/api/nomenklatura_groups",
        GROUP_TEXTS,
    );
    groups.mount();

    let products = ListController::<Nomenklatura>::new(
        Signal::derive(|| "/api/nomenklatura".to_string()),
        "/api/nomenklatura",
        "/api/nomenklatura",
        PRODUCT_TEXTS,
    );
    products.mount();

    let tab_button = move |t: Tab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == t { "tab tab-active" } else { "tab" }
                on:click=move |_| tab.set(t)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="page">
            <h2>"Товары"</h2>
            <div class="tab-bar">
                {tab_button(Tab::Groups, "Группы")}
                {tab_button(Tab::Products, "Товары")}
            </div>
            {move || match tab.get() {
                Tab::Groups => view! { <GroupsTab ctl=groups /> }.into_any(),
                Tab::Products => view! { <ProductsTab ctl=products groups=groups /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn GroupsTab(ctl: ListController<NomenklaturaGroup>) -> impl IntoView {
    view! {
        <div>
            <AddInput
                value=ctl.new_name
                placeholder="Новая группа"
                on_submit=Callback::new(move |_| {
                    ctl.create(|name| serde_json::json!({ "name": name }))
                })
            />
            <SearchInput value=ctl.search placeholder="Поиск по названию" />

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header(ctl.sort, "name", "Название")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let edit_id = ctl.edit_id.get();
                        ctl.visible()
                            .into_iter()
                            .map(|g| {
                                if edit_id == Some(g.id) {
                                    match ctl.draft_snapshot() {
                                        Some(draft) => group_edit_row(ctl, draft).into_any(),
                                        None => group_row(ctl, g).into_any(),
                                    }
                                } else {
                                    group_row(ctl, g).into_any()
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

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

fn group_row(ctl: ListController<NomenklaturaGroup>, g: NomenklaturaGroup) -> impl IntoView {
    let edit_target = g.clone();
    let delete_target = g.clone();
    view! {
        <tr>
            <td>{g.name.clone()}</td>
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

fn group_edit_row(ctl: ListController<NomenklaturaGroup>, draft: NomenklaturaGroup) -> impl IntoView {
    view! {
        <tr class="row-editing">
            <td>
                <input
                    class="cell-input"
                    value=draft.name.clone()
                    on:input=move |ev| ctl.update_draft(|d| d.name = event_target_value(&ev))
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

#[component]
fn ProductsTab(
    ctl: ListController<Nomenklatura>,
    groups: ListController<NomenklaturaGroup>,
) -> impl IntoView {
    view! {
        <div>
            <AddInput
                value=ctl.new_name
                placeholder="Новый товар"
                on_submit=Callback::new(move |_| {
                    ctl.create(|name| serde_json::json!({ "name": name }))
                })
            />
            <SearchInput value=ctl.search placeholder="Поиск по названию" />

            <table class="data-table">
                <thead>
                    <tr>
                        {sort_header(ctl.sort, "name", "Название")}
                        {sort_header(ctl.sort, "measurement", "Ед. изм.")}
                        {sort_header(ctl.sort, "group", "Группа")}
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let edit_id = ctl.edit_id.get();
                        ctl.visible()
                            .into_iter()
                            .map(|p| {
                                if edit_id == Some(p.id) {
                                    match ctl.draft_snapshot() {
                                        Some(draft) => product_edit_row(ctl, groups, draft).into_any(),
                                        None => product_row(ctl, p).into_any(),
                                    }
                                } else {
                                    product_row(ctl, p).into_any()
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

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

fn product_row(ctl: ListController<Nomenklatura>, p: Nomenklatura) -> impl IntoView {
    let edit_target = p.clone();
    let delete_target = p.clone();
    let href = format!("/item/{}", p.id);
    view! {
        <tr>
            <td>
                <A href=href>{p.name.clone()}</A>
            </td>
            <td>{p.measurement.clone()}</td>
            <td>{p.group_name.clone().unwrap_or_else(|| "без группы".into())}</td>
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

fn product_edit_row(
    ctl: ListController<Nomenklatura>,
    groups: ListController<NomenklaturaGroup>,
    draft: Nomenklatura,
) -> impl IntoView {
    let group_options = groups.items.get_untracked();
    let selected_group = draft.group_id;
    view! {
        <tr class="row-editing">
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
                    value=draft.measurement.clone()
                    on:input=move |ev| ctl.update_draft(|d| d.measurement = event_target_value(&ev))
                />
            </td>
            <td>
                <select
                    class="cell-input"
                    on:change=move |ev| ctl.update_draft(|d| {
                        d.group_id = event_target_value(&ev).parse::<i64>().ok();
                    })
                >
                    <option value="" selected=selected_group.is_none()>"без группы"</option>
                    {group_options
                        .into_iter()
                        .map(|g| view! {
                            <option value=g.id.to_string() selected=(selected_group == Some(g.id))>
                                {g.name.clone()}
                            </option>
                        })
                        .collect_view()}
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
