use crate::shared::api;
use crate::shared::icons::icon;
use crate::shared::image::{prepare_upload, ImageError};
use crate::shared::notifications::Notifications;
use contracts::domain::nomenklatura::NomenklaturaDetails;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use wasm_bindgen::JsCast;

/// Карточка товара: изображение и описание.
/// Страница открывается по прямой ссылке `/item/:id`.
#[component]
pub fn NomenklaturaDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let item_id = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
    });

    let notify = Notifications::use_context();
    let item: RwSignal<Option<NomenklaturaDetails>> = RwSignal::new(None);
    let description = RwSignal::new(String::new());
    let loading = RwSignal::new(true);
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    let uploading = RwSignal::new(false);
    let selected_file: RwSignal<Option<web_sys::File>> = RwSignal::new(None);

    Effect::new(move |_| {
        let id = item_id.get();
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_json::<NomenklaturaDetails>(&format!("/api/nomenklatura/details/{id}"))
                .await
            {
                Ok(details) => {
                    description.set(details.description.clone());
                    item.set(Some(details));
                }
                Err(e) => {
                    log::error!("Ошибка загрузки карточки {id}: {e}");
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        selected_file.set(file);
    };

    let upload_image = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            notify.warning("Выберите изображение перед загрузкой");
            return;
        };
        let id = item_id.get_untracked();
        let filename = file.name();
        uploading.set(true);
        spawn_local(async move {
            let result = async {
                let blob = prepare_upload(file).await.map_err(|e| match e {
                    ImageError::TooLarge => "Файл больше 10 МБ".to_string(),
                    ImageError::Encode(msg) => msg,
                })?;
                let form = web_sys::FormData::new()
                    .map_err(|_| "форма не создана".to_string())?;
                form.append_with_blob_and_filename("image", &blob, &filename)
                    .map_err(|_| "файл не добавлен в форму".to_string())?;
                api::post_form(&format!("/api/nomenklatura/details/{id}/update-image"), form)
                    .await
                    .map_err(|e| e.to_string())
            }
            .await;

            match result {
                Ok(response) => {
                    if let Some(url) = response.get("image_url").and_then(|v| v.as_str()) {
                        let url = url.to_string();
                        item.update(|i| {
                            if let Some(details) = i {
                                details.image_url = url;
                            }
                        });
                    }
                    selected_file.set(None);
                    notify.success("Изображение успешно загружено!");
                }
                Err(msg) => {
                    log::error!("Ошибка загрузки изображения: {msg}");
                    notify.error(&format!("Ошибка при загрузке изображения: {msg}"));
                }
            }
            uploading.set(false);
        });
    };

    let save_description = move |_| {
        let id = item_id.get_untracked();
        let body = serde_json::json!({ "description": description.get_untracked() });
        spawn_local(async move {
            match api::post_json(
                &format!("/api/nomenklatura/details/{id}/update-description"),
                &body,
            )
            .await
            {
                Ok(_) => notify.success("Описание успешно обновлено!"),
                Err(e) => {
                    log::error!("Ошибка обновления описания: {e}");
                    notify.error("Ошибка при обновлении описания");
                }
            }
        });
    };

    view! {
        <div class="page">
            <div style="display: flex; align-items: center; gap: 10px; margin-bottom: 10px;">
                <A href="/items" attr:class="btn-icon" attr:title="К списку товаров">
                    {icon("back")}
                </A>
                <h2>{move || item.with(|i| i.as_ref().map(|d| d.name.clone()).unwrap_or_default())}</h2>
            </div>

            {move || loading.get().then(|| view! { <div class="table-status">"Загрузка..."</div> })}
            {move || error.get().map(|e| view! {
                <div class="table-status" style="color: red;">{format!("Ошибка: {e}")}</div>
            })}

            {move || (!loading.get() && error.get().is_none()).then(|| view! {
                <div style="display: grid; gap: 20px; max-width: 640px;">
                    <div style="text-align: center; border: 1px solid #ccc; padding: 20px;">
                        {move || {
                            let url = item.with(|i| {
                                i.as_ref().map(|d| d.image_url.clone()).unwrap_or_default()
                            });
                            if url.is_empty() {
                                view! { <div style="font-size: 16px; color: #aaa;">"NO IMAGE"</div> }
                                    .into_any()
                            } else {
                                let src = if url.starts_with('/') { api::api_url(&url) } else { url };
                                view! {
                                    <img src=src style="max-width: 100%; max-height: 300px;" />
                                }
                                .into_any()
                            }
                        }}
                        <div style="display: flex; justify-content: space-evenly; align-items: center; margin-top: 12px;">
                            <label class="btn-icon" title="Выбрать файл" style="cursor: pointer;">
                                {icon("search")}
                                <input
                                    type="file"
                                    accept="image/*"
                                    style="display: none;"
                                    on:change=on_file_change
                                />
                            </label>
                            <span style="font-size: 14px; color: #595c5f;">
                                {move || selected_file.get().map(|f| f.name()).unwrap_or_default()}
                            </span>
                            <button
                                class="btn-icon btn-success"
                                title="Загрузить изображение"
                                disabled=move || uploading.get()
                                on:click=upload_image
                            >
                                {icon("upload")}
                            </button>
                        </div>
                    </div>

                    <div style="border: 1px solid #ccc; padding: 20px;">
                        <textarea
                            class="form-control"
                            rows="6"
                            style="width: 100%; resize: vertical;"
                            placeholder="Описание товара"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                        <button
                            class="btn-icon btn-success"
                            title="Сохранить описание"
                            style="margin-top: 8px;"
                            on:click=save_description
                        >
                            {icon("check")}
                        </button>
                    </div>
                </div>
            })}
        </div>
    }
}

fn event_target<T: JsCast>(ev: &leptos::ev::Event) -> T {
    use wasm_bindgen::JsValue;
    let target: JsValue = ev.target().map(JsValue::from).unwrap_or(JsValue::NULL);
    target.unchecked_into()
}
