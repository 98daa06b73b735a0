use leptos::prelude::*;

/// Встроенные SVG-иконки. Цвет берётся из currentColor кнопки.
pub fn icon(name: &str) -> AnyView {
    match name {
        "check" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.4" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M5 13.4l3 3a1 1 0 0 0 1.4 0L19 7"/>
            </svg>
        }.into_any(),
        "x" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.4" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M7 17L17 7"/>
                <path d="M7 7l10 10"/>
            </svg>
        }.into_any(),
        "edit" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M6 8.5h12"/>
                <path d="M6 12h12"/>
                <path d="M6 15.5h12"/>
            </svg>
        }.into_any(),
        "back" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.4" stroke-linecap="round" stroke-linejoin="round" transform="rotate(270)" aria-hidden="true">
                <path d="M9.5 7l5 5-5 5"/>
            </svg>
        }.into_any(),
        "upload" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <path d="M5 12v6a1 1 0 0 0 1 1h12a1 1 0 0 0 1-1v-6"/>
                <path d="M12 3v12"/>
                <path d="M12 15l4-4"/>
                <path d="M12 15l-4-4"/>
            </svg>
        }.into_any(),
        "search" => view! {
            <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="10.5" cy="10.5" r="6.5"/>
                <path d="M20 20l-4.5-4.5"/>
            </svg>
        }.into_any(),
        _ => view! { <span>{format!("[{name}]")}</span> }.into_any(),
    }
}
