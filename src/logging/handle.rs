use tracing_appender::non_blocking::WorkerGuard;

/// Handle для управления lifecycle логирования.
///
/// Держит guard файлового sink'а: пока handle жив, фоновый writer продолжает
/// запись, при drop буфер сбрасывается на диск.
pub struct LoggingHandle {
    /// File guard (есть, если file logging включён)
    file_guard: Option<WorkerGuard>,
}

impl LoggingHandle {
    pub fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self { file_guard }
    }

    /// Включён ли файловый sink.
    pub fn has_file_sink(&self) -> bool {
        self.file_guard.is_some()
    }

    /// Завершает логирование: пишет итоговое событие и сбрасывает файловый
    /// буфер.
    pub fn shutdown(self) {
        tracing::info!(file_sink = self.has_file_sink(), "Logging system shut down");
        drop(self.file_guard);
    }
}
