//! `tracing` の出力先を Workers のコンソールにする

use std::io;

use tracing_subscriber::fmt::MakeWriter;

/// 1イベント分の出力を溜め、破棄時にコンソールへ書き出す
#[derive(Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            worker::console_log!("{}", String::from_utf8_lossy(&self.buffer).trim_end());
        }
    }
}

pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::default()
    }
}

/// サブスクライバーを登録する（Workers では時刻を取得できないため時刻は出さない）
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .try_init();

    if installed.is_err() {
        worker::console_log!("tracing subscriber was already installed");
    }
}
