use std::io;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::distributions::Alphanumeric;
use rand::Rng;
use rocket::fs::TempFile;

use crate::settings::Settings;

/// Public path prefix uploaded files are served under.
pub(crate) const UPLOAD_PREFIX: &str = "/uploads";

/// Write this request's uploads into the upload directory and return their
/// servable paths, in the order the files were received.
///
/// Files are durable before any path is returned; if the surrounding
/// request fails afterwards the files stay behind unreferenced.
pub(crate) async fn store_uploads(
    files: &mut [TempFile<'_>],
    settings: &Settings,
) -> io::Result<Vec<String>> {
    let upload_dir = settings.upload_dir();

    let mut stored = Vec::with_capacity(files.len());
    for file in files.iter_mut() {
        // Browsers submit a nameless empty part for an untouched file input.
        if file.len() == 0 && file.raw_name().is_none() {
            continue;
        }

        let name = unique_name(file);
        file.copy_to(upload_dir.join(&name)).await?;
        stored.push(format!("{}/{}", UPLOAD_PREFIX, name));
    }

    Ok(stored)
}

fn unique_name(file: &TempFile<'_>) -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    match extension(file) {
        Some(ext) => format!("{}-{}.{}", timestamp, suffix, ext),
        None => format!("{}-{}", timestamp, suffix),
    }
}

fn extension(file: &TempFile<'_>) -> Option<String> {
    let raw = file.raw_name()?.dangerous_unsafe_unsanitized_raw().as_str();
    Path::new(raw)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
}
