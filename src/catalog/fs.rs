//! Filesystem-backed asset catalog
//!
//! Answers type/size/dependency queries from the project tree and keeps the
//! authoritative asset-to-bundle tag store in
//! `.packgraph/assignments.yaml`. The store is the only state that survives
//! between sessions; the registry is rebuilt from it on every invocation.
//!
//! Dependency extraction is reference-based: JSON documents are walked for
//! string values that resolve to project files, other UTF-8 text assets are
//! scanned for quoted path-like tokens, and binary assets contribute no
//! references.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{AssetCatalog, AssetType, BundleAssignment};
use crate::error::{PackError, Result};
use crate::path_norm;
use crate::project::{ASSIGNMENTS_FILE, PROJECT_DIR};

/// Prefix for stable asset identifiers
pub const ID_PREFIX: &str = "pg1:";

/// Serialized form of the assignment store
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct AssignmentStore {
    /// Bundles in creation order, each with its members in assignment order
    #[serde(default)]
    bundles: Vec<StoredBundle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredBundle {
    name: String,
    #[serde(default)]
    assets: Vec<String>,
}

impl AssignmentStore {
    fn from_yaml(yaml: &str) -> Result<Self> {
        let store: Self = serde_yaml::from_str(yaml)?;
        Ok(store)
    }

    fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    fn drop_path(&mut self, path: &str) {
        for bundle in &mut self.bundles {
            bundle.assets.retain(|p| p != path);
        }
    }
}

/// Real [`AssetCatalog`] rooted at a project directory
#[derive(Debug)]
pub struct FsCatalog {
    root: PathBuf,
    store_path: PathBuf,
    store: AssignmentStore,
    /// Memoized direct references per asset path
    direct_refs: HashMap<String, Vec<String>>,
}

impl FsCatalog {
    /// Open the catalog for a project root
    ///
    /// A missing assignment store is treated as empty; a present but
    /// unparseable one is an error.
    pub fn open(root: &Path) -> Result<Self> {
        let store_path = root.join(PROJECT_DIR).join(ASSIGNMENTS_FILE);

        let store = if store_path.exists() {
            let content =
                fs::read_to_string(&store_path).map_err(|e| PackError::ConfigReadFailed {
                    path: store_path.display().to_string(),
                    reason: e.to_string(),
                })?;
            AssignmentStore::from_yaml(&content).map_err(|e| PackError::ConfigParseFailed {
                path: store_path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            AssignmentStore::default()
        };

        Ok(Self {
            root: root.to_path_buf(),
            store_path,
            store,
            direct_refs: HashMap::new(),
        })
    }

    /// Project root this catalog answers for
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn save_store(&self) -> Result<()> {
        let content = self.store.to_yaml()?;
        fs::write(&self.store_path, content).map_err(|e| PackError::StoreWriteFailed {
            path: self.store_path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Direct references of one asset, memoized per path
    fn direct_refs_of(&mut self, path: &str) -> Result<Vec<String>> {
        if let Some(refs) = self.direct_refs.get(path) {
            return Ok(refs.clone());
        }

        let abs = self.root.join(path);
        let bytes = fs::read(&abs).map_err(|e| PackError::CatalogFailure {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let refs = match String::from_utf8(bytes) {
            Ok(text) => self.extract_references(path, &text),
            // Binary assets carry no path references.
            Err(_) => Vec::new(),
        };

        self.direct_refs.insert(path.to_string(), refs.clone());
        Ok(refs)
    }

    fn extract_references(&self, referrer: &str, text: &str) -> Vec<String> {
        let (_, extension) = path_norm::split_name_extension(referrer);

        let candidates = if extension == "json" {
            match serde_json::from_str::<serde_json::Value>(text) {
                Ok(value) => {
                    let mut strings = Vec::new();
                    collect_json_strings(&value, &mut strings);
                    strings
                }
                // A malformed JSON asset is still a text asset.
                Err(_) => scan_quoted_paths(text),
            }
        } else {
            scan_quoted_paths(text)
        };

        let mut seen = HashSet::new();
        let mut refs = Vec::new();
        for candidate in candidates {
            if is_external_reference(&candidate) {
                continue;
            }
            let Some(resolved) = self.resolve_reference(referrer, &candidate) else {
                continue;
            };
            if resolved == referrer {
                continue;
            }
            if seen.insert(resolved.clone()) {
                refs.push(resolved);
            }
        }
        refs
    }

    /// Resolve a textual reference against the project
    ///
    /// Tried project-relative first, then relative to the referencing
    /// asset's directory. Only references to existing files resolve.
    fn resolve_reference(&self, referrer: &str, value: &str) -> Option<String> {
        let value = value.trim().trim_start_matches("./");
        if value.is_empty() {
            return None;
        }

        let root = &self.root;
        let mut candidates = vec![root.join(value)];
        if let Some(parent) = Path::new(referrer).parent() {
            candidates.push(root.join(parent).join(value));
        }

        for candidate in candidates {
            let normalized = path_norm::normalize_path(&candidate);
            if !normalized.is_file() {
                continue;
            }
            let normalized_root = path_norm::normalize_path(root);
            if let Ok(rel) = normalized.strip_prefix(&normalized_root) {
                return Some(path_norm::to_forward_slashes(rel));
            }
        }

        None
    }
}

impl AssetCatalog for FsCatalog {
    fn resolve_type(&self, path: &str) -> AssetType {
        let (_, extension) = path_norm::split_name_extension(path);
        AssetType::from_extension(&extension)
    }

    fn stable_id(&self, path: &str) -> String {
        format!("{}{}", ID_PREFIX, blake3::hash(path.as_bytes()).to_hex())
    }

    fn size_on_disk(&self, path: &str) -> Result<u64> {
        let abs = self.root.join(path);
        let metadata = fs::metadata(&abs).map_err(|e| PackError::CatalogFailure {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(metadata.len())
    }

    fn transitive_dependencies(&mut self, path: &str) -> Result<Vec<String>> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut closure = Vec::new();
        let mut queue: VecDeque<String> = self.direct_refs_of(path)?.into();

        while let Some(current) = queue.pop_front() {
            if current == path || !visited.insert(current.clone()) {
                continue;
            }
            queue.extend(self.direct_refs_of(&current)?);
            closure.push(current);
        }

        Ok(closure)
    }

    fn tag_asset(&mut self, path: &str, bundle: &str) -> Result<()> {
        let already_stored = self
            .store
            .bundles
            .iter()
            .any(|b| b.name == bundle && b.assets.iter().any(|p| p == path));
        // Re-tagging the stored owner keeps the slot and writes nothing.
        if already_stored {
            return Ok(());
        }

        self.store.drop_path(path);
        if let Some(stored) = self.store.bundles.iter_mut().find(|b| b.name == bundle) {
            stored.assets.push(path.to_string());
        } else {
            self.store.bundles.push(StoredBundle {
                name: bundle.to_string(),
                assets: vec![path.to_string()],
            });
        }
        self.save_store()
    }

    fn untag_asset(&mut self, path: &str) -> Result<()> {
        self.store.drop_path(path);
        self.save_store()
    }

    fn rename_bundle_namespace(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if let Some(stored) = self.store.bundles.iter_mut().find(|b| b.name == old_name) {
            stored.name = new_name.to_string();
            self.save_store()?;
        }
        Ok(())
    }

    fn release_bundle_namespace(&mut self, name: &str) -> Result<()> {
        self.store.bundles.retain(|b| b.name != name);
        self.save_store()
    }

    fn assignments(&self) -> Result<Vec<BundleAssignment>> {
        Ok(self
            .store
            .bundles
            .iter()
            .map(|b| BundleAssignment {
                bundle: b.name.clone(),
                assets: b.assets.clone(),
            })
            .collect())
    }
}

fn collect_json_strings(value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::String(s) => out.push(s.clone()),
        serde_json::Value::Array(items) => {
            for item in items {
                collect_json_strings(item, out);
            }
        }
        serde_json::Value::Object(map) => {
            for item in map.values() {
                collect_json_strings(item, out);
            }
        }
        _ => {}
    }
}

/// Scan a text asset for quoted path-like tokens
fn scan_quoted_paths(text: &str) -> Vec<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r#""([^"\n]+?\.[A-Za-z0-9]{1,8})"|'([^'\n]+?\.[A-Za-z0-9]{1,8})'"#)
            .expect("invalid quoted path regex")
    });

    pattern
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// References that can never resolve to a project file
fn is_external_reference(value: &str) -> bool {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^[a-z][a-z0-9+.-]*://").expect("invalid scheme regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
            ]
        })
        .iter()
        .any(|pattern| pattern.is_match(value))
}
