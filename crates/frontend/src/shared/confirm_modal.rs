use leptos::ev;
use leptos::prelude::*;

/// Модальное окно подтверждения удаления. Видимостью и контекстом
/// («что удаляем») управляет вызывающая страница.
#[component]
pub fn ConfirmModal(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            style="position: fixed; top: 0; left: 0; width: 100vw; height: 100vh; background-color: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;"
            on:click=move |_| on_cancel.run(())
        >
            <div
                style="background-color: white; padding: 20px; border-radius: 5px; text-align: center; margin: 0 15px; min-width: 280px;"
                on:click=stop_propagation
            >
                <div style="padding: 10px; border-bottom: 1px solid #ddd; font-size: 16px;">
                    {move || message.get()}
                </div>
                <div style="display: flex; gap: 10px; justify-content: center; padding-top: 15px;">
                    <button
                        style="background-color: #4CAF50; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; min-width: 120px;"
                        on:click=move |_| on_confirm.run(())
                    >
                        "Да"
                    </button>
                    <button
                        style="background-color: #f44336; color: white; padding: 10px 20px; border: none; border-radius: 5px; cursor: pointer; min-width: 120px;"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Нет"
                    </button>
                </div>
            </div>
        </div>
    }
}
