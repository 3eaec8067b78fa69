//! File-backed token storage with the cookie jar as cookie source.
//!
//! Each CLI run starts with an empty jar, so the cookies the server set at
//! login (`csrftoken`, session) are kept in a sibling `<token file>.cookies`
//! file and loaded back into the jar on the next run. The cookie file lives
//! and dies with the token: written on store, removed on clear.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lab_web::credentials::{CredentialProvider, TokenStore, csrf_from_cookies};
use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};

const COOKIE_SUFFIX: &str = ".cookies";

pub struct FileCredentials {
    path: PathBuf,
    cookie_path: PathBuf,
    jar: Arc<Jar>,
    base_url: Url,
}

/// `<token file>.cookies`, next to the token file.
pub fn cookie_path(token_path: &Path) -> PathBuf {
    let mut name = OsString::from(token_path.as_os_str());
    name.push(COOKIE_SUFFIX);
    PathBuf::from(name)
}

impl FileCredentials {
    pub fn new(path: PathBuf, jar: Arc<Jar>, base_url: Url) -> Self {
        let cookie_path = cookie_path(&path);
        Self { path, cookie_path, jar, base_url }
    }

    /// Load cookies saved by an earlier run into the jar.
    pub fn restore_cookies(&self) {
        let raw = match std::fs::read_to_string(&self.cookie_path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return,
            Err(error) => {
                tracing::warn!(path = %self.cookie_path.display(), %error, "failed to read cookies");
                return;
            }
        };
        let mut restored = 0;
        for pair in raw.trim().split("; ").filter(|p| p.contains('=')) {
            self.jar.add_cookie_str(pair, &self.base_url);
            restored += 1;
        }
        tracing::debug!(restored, "cookies restored");
    }

    /// Write the jar's cookies for the base URL to the cookie file.
    fn save_cookies(&self) {
        let Some(header) = self.jar.cookies(&self.base_url) else {
            return;
        };
        let Ok(cookies) = header.to_str() else {
            tracing::warn!("cookie header is not valid text; cookies not persisted");
            return;
        };
        if let Err(error) = std::fs::write(&self.cookie_path, cookies) {
            tracing::warn!(path = %self.cookie_path.display(), %error, "failed to persist cookies");
        }
    }
}

fn remove_if_present(path: &Path, what: &str) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(error) if error.kind() == ErrorKind::NotFound => {}
        Err(error) => tracing::warn!(path = %path.display(), %error, "failed to remove {what}"),
    }
}

impl CredentialProvider for FileCredentials {
    fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        (!token.is_empty()).then(|| token.to_owned())
    }

    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.base_url)?;
        csrf_from_cookies(header.to_str().ok()?)
    }
}

impl TokenStore for FileCredentials {
    fn store_token(&self, token: &str) {
        if let Err(error) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), %error, "failed to persist token");
        }
        self.save_cookies();
    }

    fn clear_token(&self) {
        remove_if_present(&self.path, "token");
        remove_if_present(&self.cookie_path, "cookies");
    }
}
