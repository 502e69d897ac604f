use indicatif::ProgressBar;
use std::ffi::OsString;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::Result;

const DEFAULT_FILENAME: &str = "features.geojson";

/// Derives a local cache filename from the last path segment of the URL.
pub fn filename_for_url(url: &str) -> String {
    let trimmed = url.split(['?', '#']).next().unwrap_or(url);
    match trimmed.rsplit('/').next() {
        Some(segment) if !segment.is_empty() && segment != trimmed => segment.to_string(),
        _ => DEFAULT_FILENAME.to_string(),
    }
}

fn partial_filepath_for(output_filepath: &Path) -> PathBuf {
    let mut filename = match output_filepath.file_name() {
        Some(name) => name.to_os_string(),
        None => OsString::from(DEFAULT_FILENAME),
    };
    filename.push(".part");
    output_filepath.with_file_name(filename)
}

/// Downloads a remote dataset to `output_filepath`, reporting progress on a
/// bar when the server announces a content length and on a spinner otherwise.
///
/// The body is streamed to a scratch file that is renamed into place only
/// when the transfer completes; a failed transfer leaves nothing at
/// `output_filepath`.
pub fn download_dataset(url: &str, output_filepath: &Path) -> Result<()> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("poi-map")
        .build()?;
    let response = client.get(url).send()?.error_for_status()?;
    let progress = match response.content_length() {
        Some(length) => ProgressBar::new(length),
        None => ProgressBar::new_spinner(),
    };

    let partial_filepath = partial_filepath_for(output_filepath);
    let mut reader = progress.wrap_read(response);
    let mut outfile = fs::File::create(&partial_filepath)?;
    let copied = io::copy(&mut reader, &mut outfile);
    drop(outfile);
    if let Err(err) = copied {
        let _ = fs::remove_file(&partial_filepath);
        return Err(err.into());
    }
    progress.finish();
    fs::rename(&partial_filepath, output_filepath)?;
    Ok(())
}

/// Ensures the dataset behind `url` exists under `output_dir`, downloading it
/// on the first call and reusing the local copy afterwards.
pub fn sync_dataset_to_file(url: &str, output_dir: &Path) -> Result<PathBuf> {
    let filename = filename_for_url(url);
    let output_filepath = output_dir.join(filename);
    if output_filepath.exists() {
        log::info!(
            "Local file exists for feature dataset: {:?}",
            output_filepath.canonicalize()
        );
        return Ok(output_filepath);
    }

    fs::create_dir_all(output_dir)?;
    log::info!("Downloading feature dataset from {}", url);
    download_dataset(url, &output_filepath)?;
    Ok(output_filepath)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use testdir::testdir;

    #[rstest]
    #[case("https://example.com/data/doha.geojson", "doha.geojson")]
    #[case("https://example.com/data/doha.geojson?raw=1", "doha.geojson")]
    #[case("https://example.com/data/", "features.geojson")] // Trailing slash falls back to the default name.
    fn filename_for_url_cases(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(filename_for_url(url), expected);
    }

    #[test]
    fn sync_reuses_an_existing_local_file() {
        let dir = testdir!();
        let filepath = dir.join("doha.geojson");
        fs::write(&filepath, "{}").unwrap();

        // The URL is never fetched when the cache file is already present.
        let synced = sync_dataset_to_file("https://example.com/data/doha.geojson", &dir).unwrap();
        assert_eq!(synced, filepath);
    }

    #[test]
    fn interrupted_download_leaves_no_cache_file() {
        let dir = testdir!();
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            // Announce far more bytes than are sent, then close the connection.
            let response = "HTTP/1.1 200 OK\r\nContent-Length: 1000\r\n\r\n0123456789";
            stream.write_all(response.as_bytes()).unwrap();
        });

        let url = format!("http://{}/doha.geojson", address);
        let filepath = dir.join("doha.geojson");
        let result = download_dataset(&url, &filepath);
        server.join().unwrap();

        assert!(result.is_err());
        assert!(!filepath.exists(), "no partial file may land at the cache path");
        assert!(!partial_filepath_for(&filepath).exists());

        // With nothing cached, a later sync attempts the download again
        // instead of reusing the truncated payload; the dead server makes
        // that attempt fail.
        assert!(sync_dataset_to_file(&url, &dir).is_err());
    }
}
