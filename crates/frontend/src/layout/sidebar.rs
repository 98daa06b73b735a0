//! Боковое меню со ссылками на разделы.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

struct MenuItem {
    href: &'static str,
    label: &'static str,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem { href: "/statistic", label: "Статистика" },
        MenuItem { href: "/salepoint", label: "Точки продаж" },
        MenuItem { href: "/storage", label: "Склады" },
        MenuItem { href: "/items", label: "Товары" },
        MenuItem { href: "/debtbook", label: "Долговая книга" },
        MenuItem { href: "/customer", label: "Контрагенты" },
        MenuItem { href: "/worker", label: "Сотрудники" },
        MenuItem { href: "/order", label: "Заказы" },
        MenuItem { href: "/analitic", label: "Аналитика" },
        MenuItem { href: "/setting", label: "Настройка" },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            <div class="sidebar-title">
                <A href="/">"AsiaSeti CRM"</A>
            </div>
            <ul class="sidebar-menu">
                {menu_items()
                    .into_iter()
                    .map(|item| {
                        let href = item.href;
                        let is_active = move || location.pathname.get() == href;
                        view! {
                            <li class=move || {
                                if is_active() { "sidebar-item sidebar-item-active" } else { "sidebar-item" }
                            }>
                                <A href=href>{item.label}</A>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
