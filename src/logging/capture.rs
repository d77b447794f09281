//! Буферный writer для проверки логов в тестах.

use std::{
    io,
    sync::{Arc, Mutex},
};

use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
pub(crate) struct VecMakeWriter(Arc<Mutex<Vec<u8>>>);

pub(crate) struct VecWriterGuard(Arc<Mutex<Vec<u8>>>);

impl VecMakeWriter {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl<'a> MakeWriter<'a> for VecMakeWriter {
    type Writer = VecWriterGuard;

    fn make_writer(&'a self) -> Self::Writer {
        VecWriterGuard(self.0.clone())
    }
}

impl io::Write for VecWriterGuard {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Выполняет `f` с временным subscriber'ом и возвращает всё, что было
/// залогировано.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let writer = VecMakeWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    writer.contents()
}
