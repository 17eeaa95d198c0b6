/// Размер тела ответа для строки лога запросов: `512 B`, `12.4 KB`, `1.3 MB`
pub fn format_bytes(len: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let len_f = len as f64;
    if len_f < KB {
        format!("{} B", len)
    } else if len_f < MB {
        format!("{:.1} KB", len_f / KB)
    } else {
        format!("{:.1} MB", len_f / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.0 KB");
        assert_eq!(format_bytes(12_697), "12.4 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
