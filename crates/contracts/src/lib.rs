//! Общие контракты REST API: типы записей и перечисления,
//! сериализация которых повторяет JSON сервера.

pub mod domain;
