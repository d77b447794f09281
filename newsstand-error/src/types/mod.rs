pub mod notify;
pub mod validation;

// Публичный экспорт всех типов ошибок из вложенных модулей, чтобы упростить
// доступ к ним из внешнего кода.
pub use notify::*;
pub use validation::*;
