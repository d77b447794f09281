use std::fmt;

use num_enum::TryFromPrimitive;

/// Коды статуса для категоризации ошибок.
///
/// # Диапазоны:
/// - 0xxx: Успех
/// - 1xxx: Общие ошибки
/// - 2xxx: Ошибки данных (валидация входа)
/// - 4xxx: Ошибки доставки уведомлений
///
/// `num_enum::TryFromPrimitive` даёт нативную реализацию `TryFrom<u32>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u32)]
#[non_exhaustive]
pub enum StatusCode {
    // === 0xxx: Успех ===
    Success = 0,

    // === 1xxx: Общие ошибки ===
    Unknown = 1000,
    Internal = 1003,
    InvalidArgs = 1004,

    // === 2xxx: Ошибки данных ===
    NotFound = 2000,
    AlreadyExists = 2001,
    InvalidValue = 2004,

    // === 4xxx: Доставка ===
    DeliveryFailed = 4000,
    SubscriberPanicked = 4001,
}

impl StatusCode {
    /// Числовое представление кода статуса.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Пытается получить вариант `StatusCode` из `u32`.
    ///
    /// Возвращает `None`, если значение не соответствует ни одному варианту.
    pub fn from_u32(v: u32) -> Option<Self> {
        Self::try_from(v).ok()
    }

    /// Является ли код ошибкой со стороны вызывающего: проблема во входных
    /// данных, которую можно исправить и повторить.
    pub fn is_client_error(&self) -> bool {
        matches!(self.code(), 1004 | 2000..=2999)
    }

    /// Ошибка возникла внутри подписчика во время доставки (диапазон 4xxx).
    pub fn is_delivery_error(&self) -> bool {
        (4000..=4999).contains(&self.code())
    }
}

impl From<StatusCode> for u32 {
    fn from(c: StatusCode) -> Self {
        c.code()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?} ({})", self, self.code())
    }
}
