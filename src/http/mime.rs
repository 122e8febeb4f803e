/// Infers a Content-Type value from a path's file extension.
///
/// Textual types carry an explicit `;charset=utf-8` suffix because the
/// response Content-Length is computed on the UTF-8 encoded body.
pub fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("htm") | Some("html") => "text/html;charset=utf-8",
        Some("css") => "text/css;charset=utf-8",
        Some("js") => "application/javascript",
        Some("json") => "application/json",
        Some("txt") => "text/plain;charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_types_carry_charset() {
        assert_eq!(content_type_for("/index.html"), "text/html;charset=utf-8");
        assert_eq!(content_type_for("/css/styles.css"), "text/css;charset=utf-8");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(content_type_for("/data.bin"), "application/octet-stream");
        assert_eq!(content_type_for("/noext"), "application/octet-stream");
    }
}
