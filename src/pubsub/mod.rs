//! Подсистема Publish–Subscribe (pub/sub).
//!
//! Этот модуль реализует внутрипроцессное ядро уведомлений: издание
//! (`Magazine`) хранит упорядоченный реестр подписчиков и при публикации
//! выпуска синхронно уведомляет каждого из них.
//!
//! - `delivery`: исходы регистрации, отчёт о доставке, счётчики.
//! - `library`: подписчик-библиотека.
//! - `magazine`: реестр подписчиков и движок доставки.
//! - `name`: проверенные имена и заголовки выпусков.
//! - `reader`: подписчик-читатель.
//! - `subscriber`: трейт подписчика и его идентичность.

pub mod delivery;
pub mod library;
pub mod magazine;
pub mod name;
pub mod reader;
pub mod subscriber;

// Публичный экспорт всех типов из вложенных модулей, чтобы упростить доступ к
// ним из внешнего кода.
pub use delivery::*;
pub use library::*;
pub use magazine::*;
pub use name::*;
pub use reader::*;
pub use subscriber::*;
