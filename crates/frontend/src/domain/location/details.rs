use crate::shared::api;
use crate::shared::icons::icon;
use contracts::domain::inventory::InventoryRow;
use contracts::domain::location::LocationType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

/// Остатки по локации. Одна страница на оба типа, различаются
/// только заголовок и обратная ссылка.
#[component]
pub fn LocationDetailsPage(location_type: LocationType) -> impl IntoView {
    let params = use_params_map();
    let location_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
    });

    let inventory: RwSignal<Vec<InventoryRow>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);

    Effect::new(move |_| {
        let id = location_id.get();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_json::<Vec<InventoryRow>>(&format!("/api/inventory/{id}")).await {
                Ok(rows) => inventory.set(rows),
                Err(e) => {
                    log::error!("Ошибка загрузки остатков {id}: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let back_href = match location_type {
        LocationType::Storage => "/storage",
        LocationType::Salespoint => "/salepoint",
    };
    let title = move || match location_type {
        LocationType::Storage => format!("Остатки на складе {}", location_id.get()),
        LocationType::Salespoint => format!("Остатки в точке продаж {}", location_id.get()),
    };

    view! {
        <div class="page">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 10px;">
                <A href=back_href attr:class="btn-icon" attr:title="К списку">
                    {icon("back")}
                </A>
                <h2>{title}</h2>
            </div>

            {move || loading.get().then(|| view! { <div class="table-status">"Загрузка..."</div> })}
            {move || error.get().map(|e| view! {
                <div class="table-status" style="color: red;">{format!("Ошибка: {e}")}</div>
            })}

            {move || (!loading.get() && error.get().is_none()).then(|| view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Товар"</th>
                            <th>"Единицы измерения"</th>
                            <th>"Количество"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {inventory
                            .get()
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td>{row.product_name.clone()}</td>
                                    <td>{row.measurement.clone()}</td>
                                    <td>{row.quantity}</td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            })}

            {move || (!loading.get() && error.get().is_none() && inventory.with(|i| i.is_empty()))
                .then(|| view! { <div class="table-status">"Данных пока нет"</div> })}
        </div>
    }
}
