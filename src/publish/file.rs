pub const REVIEWS_HEADER: &str = "reviews:\n";

/// New file content: any leading comments, the header, the new entry, then
/// whatever entries were already there.
pub fn compose_file(existing: Option<&str>, entry: &str) -> String {
    let (preamble, entries) = existing.map(split_header).unwrap_or(("", ""));

    let mut content = String::from(preamble);
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(REVIEWS_HEADER);
    content.push_str(entry);

    if !entries.trim().is_empty() {
        if !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(entries);
    }

    content
}

/// Splits an existing file into the lines before the list (blank lines,
/// comments, document markers) and the list items after the header.
fn split_header(existing: &str) -> (&str, &str) {
    let mut offset = 0;

    for line in existing.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed == "---" {
            offset += line.len();
            continue;
        }

        let preamble = &existing[..offset];
        return match trimmed {
            "reviews:" | "reviews: []" => (preamble, &existing[offset + line.len()..]),
            _ => (preamble, &existing[offset..]),
        };
    }

    (existing, "")
}
