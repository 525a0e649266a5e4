macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod chain_ops;
pub mod config_ops;
pub mod dict_file;
pub mod kana_ops;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Print `value` as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        die!(serde_json::to_string_pretty(value), "JSON serialization failed: {}")
    );
}

/// Pad `s` with spaces to `width` terminal columns.
pub(crate) fn pad(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w < width {
        format!("{s}{}", " ".repeat(width - w))
    } else {
        s.to_string()
    }
}
