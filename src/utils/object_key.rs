/// Derives the storage key for a submitted URL.
///
/// Keys follow `qr_codes/<name>.png`, where `<name>` is everything after the
/// last `//` in the URL (the whole URL when no `//` is present). Distinct URLs
/// that share this suffix map to the same key; the newer upload overwrites the
/// older object.
pub fn derive_object_key(url: &str) -> String {
    let suffix = url.split("//").last().unwrap_or(url);
    format!("qr_codes/{}.png", sanitize_key_component(suffix))
}

/// Public address of a stored object. Constructed locally, not returned by S3.
pub fn public_object_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}

// S3 keys accept a narrower alphabet than URLs; anything outside it becomes '-'.
fn sanitize_key_component(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '/' | '.' | '-' | '_' | '~') {
                c
            } else {
                '-'
            }
        })
        .collect()
}
