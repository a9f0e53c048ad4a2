//! Read-through cache for remote table files, keyed by source URL with a
//! fixed time-to-live. Staleness up to the TTL is acceptable and expected.
//! Fetched bytes are persisted under the XDG cache dir so a restart inside
//! the TTL window avoids refetching.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const CACHE_VERSION: u32 = 1;
const CACHE_DIR: &str = "ffc_terminal";
const INDEX_FILE: &str = "data_cache.json";

/// 10 minutes, matching the upstream refresh cadence.
pub const CACHE_TTL_SECS: u64 = 600;

static INDEX: Mutex<Option<CacheIndex>> = Mutex::new(None);

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct CacheIndex {
    version: u32,
    entries: HashMap<String, IndexEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    file_name: String,
    fetched_at: u64,
}

/// Return a local file holding the table at `url`, downloading only when the
/// cached copy is older than the TTL. Download failures propagate unmodified;
/// retry policy, if any, belongs to the caller.
pub fn fetch_file_cached(client: &Client, url: &str) -> Result<PathBuf> {
    let dir = app_cache_dir().context("no usable cache directory")?;

    let fresh_entry = {
        let mut guard = INDEX.lock().expect("data cache lock poisoned");
        let index = guard.get_or_insert_with(load_index);
        index.entries.get(url).and_then(|entry| {
            let age = now_secs().saturating_sub(entry.fetched_at);
            (age <= CACHE_TTL_SECS).then(|| entry.file_name.clone())
        })
    };
    if let Some(file_name) = fresh_entry {
        let path = dir.join(&file_name);
        if path.is_file() {
            return Ok(path);
        }
    }

    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("request {url}"))?
        .error_for_status()
        .with_context(|| format!("status for {url}"))?;
    let bytes = resp
        .bytes()
        .with_context(|| format!("read body {url}"))?;

    let file_name = file_name_for(url);
    let path = dir.join(&file_name);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &bytes).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, &path).with_context(|| format!("swap {}", path.display()))?;

    refresh_entry(url, file_name);
    Ok(path)
}

fn refresh_entry(url: &str, file_name: String) {
    let mut guard = INDEX.lock().expect("data cache lock poisoned");
    let index = guard.get_or_insert_with(load_index);
    index.version = CACHE_VERSION;
    index.entries.insert(
        url.to_string(),
        IndexEntry {
            file_name,
            fetched_at: now_secs(),
        },
    );
    let _ = save_index(index);
}

fn file_name_for(url: &str) -> String {
    let base = url.rsplit('/').next().unwrap_or(url);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' {
            c
        } else {
            '_'
        })
        .collect();
    if cleaned.is_empty() {
        "table.parquet".to_string()
    } else {
        cleaned
    }
}

fn load_index() -> CacheIndex {
    let Some(path) = index_path() else {
        return CacheIndex::default();
    };
    let Ok(raw) = fs::read_to_string(path) else {
        return CacheIndex::default();
    };
    let index = serde_json::from_str::<CacheIndex>(&raw).unwrap_or_default();
    if index.version != CACHE_VERSION {
        return CacheIndex::default();
    }
    index
}

fn save_index(index: &CacheIndex) -> Result<()> {
    let Some(path) = index_path() else {
        return Ok(());
    };
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(dir).ok();
    let tmp = path.with_extension("json.tmp");
    let json = serde_json::to_string(index).context("serialize data cache index")?;
    fs::write(&tmp, json).context("write data cache index")?;
    fs::rename(&tmp, &path).context("swap data cache index")?;
    Ok(())
}

fn index_path() -> Option<PathBuf> {
    app_cache_dir().map(|dir| dir.join(INDEX_FILE))
}

pub fn app_cache_dir() -> Option<PathBuf> {
    if let Ok(base) = std::env::var("XDG_CACHE_HOME") {
        if !base.trim().is_empty() {
            return Some(PathBuf::from(base).join(CACHE_DIR));
        }
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
