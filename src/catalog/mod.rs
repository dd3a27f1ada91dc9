//! Asset catalog abstraction
//!
//! The registry never touches the filesystem or the assignment store itself;
//! everything it needs to know about an asset (type, size, dependency
//! closure) and every external tagging side effect goes through the
//! [`AssetCatalog`] trait. The real implementation is [`FsCatalog`]; unit
//! tests drive the engine through [`MemoryCatalog`].

pub mod fs;
pub mod memory;

pub use fs::FsCatalog;
pub use memory::MemoryCatalog;

use crate::error::Result;

/// Coarse classification of an asset, resolved from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Texture,
    Audio,
    Model,
    Material,
    Scene,
    Shader,
    Font,
    Video,
    Data,
    Text,
    Other,
}

impl AssetType {
    /// Resolve an asset type from a lowercase extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "png" | "jpg" | "jpeg" | "tga" | "bmp" | "gif" | "psd" | "exr" | "hdr" | "webp" => {
                Self::Texture
            }
            "wav" | "mp3" | "ogg" | "flac" | "aiff" => Self::Audio,
            "fbx" | "obj" | "gltf" | "glb" | "blend" | "dae" => Self::Model,
            "mat" | "material" => Self::Material,
            "scene" | "level" | "prefab" => Self::Scene,
            "shader" | "glsl" | "hlsl" | "vert" | "frag" | "compute" => Self::Shader,
            "ttf" | "otf" | "woff" | "woff2" | "fnt" => Self::Font,
            "mp4" | "mov" | "webm" | "avi" | "mkv" => Self::Video,
            "json" | "yaml" | "yml" | "xml" | "csv" | "toml" => Self::Data,
            "txt" | "md" | "ini" | "cfg" => Self::Text,
            _ => Self::Other,
        }
    }

    /// Short lowercase label for display
    pub fn label(self) -> &'static str {
        match self {
            Self::Texture => "texture",
            Self::Audio => "audio",
            Self::Model => "model",
            Self::Material => "material",
            Self::Scene => "scene",
            Self::Shader => "shader",
            Self::Font => "font",
            Self::Video => "video",
            Self::Data => "data",
            Self::Text => "text",
            Self::Other => "other",
        }
    }
}

/// One bundle's ordered member list, as persisted by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleAssignment {
    /// Bundle name
    pub bundle: String,
    /// Project-relative member paths, in assignment order
    pub assets: Vec<String>,
}

/// The catalog service the registry consumes
///
/// Catalog failures are fatal for the in-progress operation: they surface to
/// the caller and are never retried.
pub trait AssetCatalog {
    /// Resolve the asset's type (pure extension mapping, never fails)
    fn resolve_type(&self, path: &str) -> AssetType;

    /// Stable identifier for an asset path
    fn stable_id(&self, path: &str) -> String;

    /// Size of the asset on disk in bytes
    fn size_on_disk(&self, path: &str) -> Result<u64>;

    /// Full transitive dependency closure of an asset, excluding the asset
    /// itself
    fn transitive_dependencies(&mut self, path: &str) -> Result<Vec<String>>;

    /// Tag an asset with the bundle that directly owns it
    ///
    /// An asset carries at most one tag; tagging moves it between bundles.
    /// Re-tagging with the current owner is a no-op that keeps the asset's
    /// stored position.
    fn tag_asset(&mut self, path: &str, bundle: &str) -> Result<()>;

    /// Clear an asset's bundle tag
    fn untag_asset(&mut self, path: &str) -> Result<()>;

    /// Re-key a bundle's stored entry under a new name
    ///
    /// The entry keeps its position and member order. A bundle with no
    /// stored members has no entry and needs no re-keying.
    fn rename_bundle_namespace(&mut self, old_name: &str, new_name: &str) -> Result<()>;

    /// Release a bundle name from the catalog's namespace after a delete
    fn release_bundle_namespace(&mut self, name: &str) -> Result<()>;

    /// Ordered view of all bundle assignments, the rebuild source for a new
    /// session
    fn assignments(&self) -> Result<Vec<BundleAssignment>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_type_from_extension() {
        assert_eq!(AssetType::from_extension("png"), AssetType::Texture);
        assert_eq!(AssetType::from_extension("wav"), AssetType::Audio);
        assert_eq!(AssetType::from_extension("fbx"), AssetType::Model);
        assert_eq!(AssetType::from_extension("scene"), AssetType::Scene);
        assert_eq!(AssetType::from_extension("json"), AssetType::Data);
        assert_eq!(AssetType::from_extension("exe"), AssetType::Other);
        assert_eq!(AssetType::from_extension(""), AssetType::Other);
    }

    #[test]
    fn test_asset_type_label() {
        assert_eq!(AssetType::Texture.label(), "texture");
        assert_eq!(AssetType::Other.label(), "other");
    }
}
