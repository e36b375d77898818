//! OSC 52 剪贴板

use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// 把 `text` 写入系统剪贴板的 OSC 52 转义序列
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// 请求终端把 `text` 复制到剪贴板
pub fn copy(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}
