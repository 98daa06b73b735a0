//! Очередь уведомлений: не более трёх видимых одновременно,
//! остальные ждут в FIFO-очереди. Видимое уведомление живёт 3 секунды.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;

pub const MAX_VISIBLE: usize = 3;
pub const DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Info => "notification-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationItem {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// Чистое состояние очереди, без сигналов и таймеров.
#[derive(Debug, Default)]
pub struct NotificationState {
    pub visible: Vec<NotificationItem>,
    pub queue: Vec<NotificationItem>,
}

impl NotificationState {
    /// Добавляет уведомление. Возвращает true, если оно сразу стало видимым
    /// (и вызывающему нужно запустить таймер автозакрытия).
    pub fn push(&mut self, item: NotificationItem) -> bool {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push(item);
            true
        } else {
            self.queue.push(item);
            false
        }
    }

    /// Убирает видимое уведомление по id. Повторный вызов безвреден:
    /// таймер, сработавший после ручного закрытия, ничего не найдёт.
    pub fn remove(&mut self, id: i64) {
        self.visible.retain(|n| n.id != id);
    }

    /// Продвигает ожидающие уведомления в освободившиеся слоты.
    /// Возвращает id ставших видимыми — им нужны таймеры.
    pub fn promote(&mut self) -> Vec<i64> {
        let mut promoted = Vec::new();
        while self.visible.len() < MAX_VISIBLE && !self.queue.is_empty() {
            let next = self.queue.remove(0);
            promoted.push(next.id);
            self.visible.push(next);
        }
        promoted
    }
}

/// Идентификатор на основе времени; монотонный тай-брейк на случай
/// двух уведомлений в одну миллисекунду.
fn next_id() -> i64 {
    thread_local! {
        static LAST: Cell<i64> = const { Cell::new(0) };
    }
    LAST.with(|last| {
        let now = js_sys::Date::now() as i64;
        let id = now.max(last.get() + 1);
        last.set(id);
        id
    })
}

/// Реактивная обёртка, кладётся в leptos-контекст один раз на приложение.
#[derive(Clone, Copy)]
pub struct Notifications {
    state: RwSignal<NotificationState>,
}

impl Notifications {
    /// Создаёт хранилище, регистрирует его в контексте и вешает наблюдателя,
    /// продвигающего очередь при освобождении слота.
    pub fn provide() -> Self {
        let this = Notifications {
            state: RwSignal::new(NotificationState::default()),
        };
        provide_context(this);

        Effect::new(move |_| {
            let needs_promotion = this
                .state
                .with(|s| s.visible.len() < MAX_VISIBLE && !s.queue.is_empty());
            if needs_promotion {
                let promoted = this
                    .state
                    .try_update(|s| s.promote())
                    .unwrap_or_default();
                for id in promoted {
                    this.schedule_dismiss(id);
                }
            }
        });

        this
    }

    pub fn use_context() -> Self {
        expect_context::<Notifications>()
    }

    pub fn push(&self, kind: NotificationKind, title: &str, message: &str) {
        let item = NotificationItem {
            id: next_id(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
        };
        let id = item.id;
        let became_visible = self.state.try_update(|s| s.push(item)).unwrap_or(false);
        if became_visible {
            self.schedule_dismiss(id);
        }
    }

    pub fn success(&self, message: &str) {
        self.push(NotificationKind::Success, "", message);
    }

    pub fn error(&self, message: &str) {
        self.push(NotificationKind::Error, "", message);
    }

    pub fn warning(&self, message: &str) {
        self.push(NotificationKind::Warning, "", message);
    }

    pub fn info(&self, message: &str) {
        self.push(NotificationKind::Info, "", message);
    }

    pub fn remove(&self, id: i64) {
        self.state.update(|s| s.remove(id));
    }

    fn schedule_dismiss(&self, id: i64) {
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            state.update(|s| s.remove(id));
        });
    }

    pub fn visible(&self) -> Vec<NotificationItem> {
        self.state.with(|s| s.visible.clone())
    }
}

/// Контейнер уведомлений, один на приложение.
#[component]
pub fn NotificationStack() -> impl IntoView {
    let notifications = Notifications::use_context();

    view! {
        <div id="notification-container">
            <For
                each=move || notifications.visible()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=format!("notification {}", n.kind.css_class())>
                            <button
                                class="notification-close"
                                on:click=move |_| notifications.remove(id)
                            />
                            <div class="notification-title">{n.title.clone()}</div>
                            <div class="notification-message">{n.message.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64) -> NotificationItem {
        NotificationItem {
            id,
            kind: NotificationKind::Info,
            title: String::new(),
            message: format!("сообщение {id}"),
        }
    }

    #[test]
    fn fourth_notification_is_queued() {
        let mut s = NotificationState::default();
        assert!(s.push(item(1)));
        assert!(s.push(item(2)));
        assert!(s.push(item(3)));
        assert!(!s.push(item(4)));
        assert_eq!(s.visible.len(), 3);
        assert_eq!(s.queue.len(), 1);
    }

    #[test]
    fn queue_promotes_fifo_when_slot_frees() {
        let mut s = NotificationState::default();
        for id in 1..=5 {
            s.push(item(id));
        }
        s.remove(2);
        let promoted = s.promote();
        assert_eq!(promoted, vec![4]);
        assert_eq!(s.visible.len(), 3);
        assert_eq!(s.queue.len(), 1);
        assert_eq!(s.queue[0].id, 5);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut s = NotificationState::default();
        s.push(item(1));
        s.remove(1);
        s.remove(1);
        assert!(s.visible.is_empty());
    }

    #[test]
    fn promote_fills_all_free_slots() {
        let mut s = NotificationState::default();
        for id in 1..=6 {
            s.push(item(id));
        }
        s.remove(1);
        s.remove(2);
        s.remove(3);
        assert_eq!(s.promote(), vec![4, 5, 6]);
        assert!(s.queue.is_empty());
        assert_eq!(s.visible.len(), 3);
    }
}
