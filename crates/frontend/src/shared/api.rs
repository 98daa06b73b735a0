//! HTTP-клиент для REST API. Все запросы идут на тот же хост,
//! что и страница, но на порт 3000.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Сетевая ошибка: сервер не ответил.
    Network(String),
    /// Сервер ответил не-2xx статусом.
    Status(u16),
    /// Тело ответа не разобралось как ожидаемый JSON.
    Decode(String),
}

impl ApiError {
    /// 409 — конфликт уникальности (дубликат имени).
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Status(409))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "сеть: {msg}"),
            ApiError::Status(code) => write!(f, "HTTP {code}"),
            ApiError::Decode(msg) => write!(f, "ответ не разобран: {msg}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

fn api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_else(|| "localhost".to_string());
    format!("http://{hostname}:3000")
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn check_status(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = Request::get(&api_url(path)).send().await?;
    check_status(&resp)?;
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn post_json(
    path: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value, ApiError> {
    let resp = Request::post(&api_url(path))
        .header("Content-Type", "application/json")
        .body(body.to_string())?
        .send()
        .await?;
    check_status(&resp)?;
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn put_json(path: &str, body: &serde_json::Value) -> Result<(), ApiError> {
    let resp = Request::put(&api_url(path))
        .header("Content-Type", "application/json")
        .body(body.to_string())?
        .send()
        .await?;
    check_status(&resp)
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let resp = Request::delete(&api_url(path)).send().await?;
    check_status(&resp)
}

/// multipart/form-data: браузер сам выставляет Content-Type с boundary.
pub async fn post_form(
    path: &str,
    form: web_sys::FormData,
) -> Result<serde_json::Value, ApiError> {
    let resp = Request::post(&api_url(path)).body(form)?.send().await?;
    check_status(&resp)?;
    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_only_409() {
        assert!(ApiError::Status(409).is_conflict());
        assert!(!ApiError::Status(500).is_conflict());
        assert!(!ApiError::Network("timeout".into()).is_conflict());
    }

    #[test]
    fn display_includes_status_code() {
        assert_eq!(ApiError::Status(404).to_string(), "HTTP 404");
    }
}
