//! Memo text normalization

/// Normalize memo bodies for plain-text display.
///
/// `<br>` tags (any case, with or without a closing slash) and `\r\n` / `\r`
/// line endings all become `\n`.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use orgboard_common::format::normalize_memo_text;
///
/// assert_eq!(normalize_memo_text("줄1<br>줄2\r\n줄3\r줄4"), "줄1\n줄2\n줄3\n줄4");
/// # }
/// ```
pub fn normalize_memo_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut out = String::with_capacity(unified.len());
    let mut rest = unified.as_str();

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match br_tag_len(tail) {
            Some(len) => {
                out.push('\n');
                rest = &tail[len..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of a `<br>`, `<br/>` or `<br />` tag at the start of `text`.
fn br_tag_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.len() < 4 || !bytes[1].eq_ignore_ascii_case(&b'b') || !bytes[2].eq_ignore_ascii_case(&b'r')
    {
        return None;
    }
    let mut idx = 3;
    while idx < bytes.len() && bytes[idx] == b' ' {
        idx += 1;
    }
    if idx < bytes.len() && bytes[idx] == b'/' {
        idx += 1;
    }
    (idx < bytes.len() && bytes[idx] == b'>').then_some(idx + 1)
}
