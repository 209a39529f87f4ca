//! Texture resolution with fallback candidates
//!
//! Asset folders are rarely consistent about directory layout, file
//! extension or capitalization, so each texture has an ordered list of
//! candidate locations. The resolver probes them in order and keeps the
//! first one that yields a usable image. When none does, the surface
//! falls back to a flat color.

use crate::catalog;
use crate::error::TextureError;
use orrery_core::Color;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Default upper bound for either texture dimension
pub const DEFAULT_MAX_TEXTURE_SIZE: u32 = 4096;

/// Identifies one surface texture of the scene
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureKey {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// Saturn's ring band
    Ring,
    Moon,
}

impl TextureKey {
    /// Get all texture keys
    pub fn all() -> &'static [TextureKey] {
        &[
            TextureKey::Sun,
            TextureKey::Mercury,
            TextureKey::Venus,
            TextureKey::Earth,
            TextureKey::Mars,
            TextureKey::Jupiter,
            TextureKey::Saturn,
            TextureKey::Uranus,
            TextureKey::Neptune,
            TextureKey::Ring,
            TextureKey::Moon,
        ]
    }

    /// Ordered candidate locations, most specific first
    pub fn candidates(&self) -> &'static [&'static str] {
        match self {
            TextureKey::Sun => &[
                "/textures/sol/sun",
                "/textures/sol/sun.JPG",
                "/textures/sol/Sun.jpg",
                "/textures/sol/Sun.JPG",
                "/textures/sol/sun.jpeg",
                "/textures/sol/sun.JPEG",
                "/textures/sol/Sun.jpeg",
                "/textures/sol/Sun.JPEG",
                "/textures/sol/sun.png",
                "/textures/sol/sun.PNG",
                "/textures/sol/sun.webp",
                "/textures/sol/sun.WEBP",
                "/textures/sun.jpg",
                "/textures/sun.JPG",
                "/textures/sun.png",
                "/textures/sun.PNG",
                "/textures/sun.webp",
                "/textures/sun.WEBP",
            ],
            TextureKey::Mercury => &[
                "/textures/planetas/mercury.jpg",
                "/textures/mercury.jpg",
                "/textures/planetas/mercury.png",
            ],
            TextureKey::Venus => &[
                "/textures/planetas/venus.jpg",
                "/textures/venus.jpg",
                "/textures/planetas/venus.png",
            ],
            TextureKey::Earth => &[
                "/textures/planetas/earth.jpg",
                "/textures/earth.jpg",
                "/textures/planetas/earth.png",
            ],
            TextureKey::Mars => &[
                "/textures/planetas/mars.jpg",
                "/textures/mars.jpg",
                "/textures/planetas/mars.png",
            ],
            TextureKey::Jupiter => &[
                "/textures/planetas/jupiter.jpg",
                "/textures/jupiter.jpg",
                "/textures/planetas/jupiter.png",
            ],
            TextureKey::Saturn => &[
                "/textures/planetas/saturn.jpg",
                "/textures/saturn.jpg",
                "/textures/planetas/saturn.png",
            ],
            TextureKey::Uranus => &[
                "/textures/planetas/uranus.jpg",
                "/textures/uranus.jpg",
                "/textures/planetas/uranus.png",
            ],
            TextureKey::Neptune => &[
                "/textures/planetas/neptune.jpg",
                "/textures/neptune.jpg",
                "/textures/planetas/neptune.png",
            ],
            TextureKey::Ring => &[
                "/textures/planetas/saturn_ring_alpha.png",
                "/textures/planetas/saturn-ring.png",
                "/textures/saturn_ring_alpha.png",
                "/textures/saturn-ring.png",
            ],
            TextureKey::Moon => &[
                "/textures/luna/moon.jpg",
                "/textures/moon.jpg",
                "/textures/luna/moon.png",
            ],
        }
    }

    /// Flat color used when no candidate resolves
    pub fn fallback_color(&self) -> Color {
        match self {
            TextureKey::Sun => Color::from_hex(0xffcc66),
            TextureKey::Ring => Color::from_hex(0xd9c9a5).with_alpha(0.85),
            TextureKey::Moon => Color::from_hex(0xaaaaaa),
            planet => catalog::catalog()
                .iter()
                .find(|b| b.facts().texture == *planet)
                .map(|b| b.facts().display_color())
                .unwrap_or(Color::rgb(0.67, 0.67, 0.67)),
        }
    }
}

/// Dimensions reported by a texture source
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Something that can report whether a candidate location holds an image
pub trait TextureSource {
    /// Probe a candidate location and report its dimensions
    fn probe(&self, location: &str) -> Result<ImageInfo, TextureError>;
}

/// Reads candidates from a local asset root using the `image` crate
#[derive(Clone, Debug)]
pub struct FsTextureSource {
    root: PathBuf,
}

impl FsTextureSource {
    /// Create a source rooted at `root`; candidates starting with `/` are
    /// resolved relative to it
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a candidate location onto the filesystem
    pub fn resolve_path(&self, location: &str) -> PathBuf {
        self.root.join(location.trim_start_matches('/'))
    }
}

impl TextureSource for FsTextureSource {
    fn probe(&self, location: &str) -> Result<ImageInfo, TextureError> {
        if is_remote(location) {
            return Err(TextureError::Unsupported(location.to_string()));
        }

        let path = self.resolve_path(location);
        if !path.is_file() {
            return Err(TextureError::NotFound(path.display().to_string()));
        }

        let (width, height) =
            image::image_dimensions(&path).map_err(|e| TextureError::Decode {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(ImageInfo { width, height })
    }
}

fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http:") || lower.starts_with("https:") || lower.starts_with("data:")
}

/// A candidate that resolved to a usable image
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedTexture {
    pub key: TextureKey,
    /// The candidate location that succeeded
    pub location: String,
    /// Size as stored
    pub source_size: (u32, u32),
    /// Size after fitting into the max texture size
    pub size: (u32, u32),
    /// Mipmaps are only generated for power-of-two textures
    pub mipmaps: bool,
}

impl ResolvedTexture {
    pub fn was_downscaled(&self) -> bool {
        self.size != self.source_size
    }
}

/// What a body is drawn with
#[derive(Clone, Debug, PartialEq)]
pub enum Surface {
    Textured(ResolvedTexture),
    Flat(Color),
}

/// Probes candidate lists against a [`TextureSource`]
pub struct TextureResolver<S: TextureSource> {
    source: S,
    max_size: u32,
}

impl<S: TextureSource> TextureResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_size: DEFAULT_MAX_TEXTURE_SIZE,
        }
    }

    /// Set the largest dimension a texture may have before downscaling
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size.max(1);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve the first usable candidate for `key`
    pub fn resolve(&self, key: TextureKey) -> Option<ResolvedTexture> {
        self.resolve_candidates(key, key.candidates())
    }

    /// Resolve the first usable candidate from an explicit list
    pub fn resolve_candidates(
        &self,
        key: TextureKey,
        candidates: &[&str],
    ) -> Option<ResolvedTexture> {
        for location in candidates {
            let info = match self.source.probe(location) {
                Ok(info) => info,
                Err(e) => {
                    debug!("Texture candidate {} skipped: {}", location, e);
                    continue;
                }
            };

            if info.width <= 1 && info.height <= 1 {
                warn!(
                    "Texture candidate {} is a {}x{} placeholder",
                    location, info.width, info.height
                );
                continue;
            }

            let size = fit_within(info.width, info.height, self.max_size);
            if size != (info.width, info.height) {
                warn!(
                    "Downscaled {} from {}x{} to {}x{}",
                    location, info.width, info.height, size.0, size.1
                );
            }

            return Some(ResolvedTexture {
                key,
                location: (*location).to_string(),
                source_size: (info.width, info.height),
                size,
                mipmaps: size.0.is_power_of_two() && size.1.is_power_of_two(),
            });
        }

        None
    }

    /// Resolve `key` or fall back to its flat color
    pub fn surface(&self, key: TextureKey) -> Surface {
        match self.resolve(key) {
            Some(texture) => Surface::Textured(texture),
            None => {
                debug!("No texture for {:?}, using flat color", key);
                Surface::Flat(key.fallback_color())
            }
        }
    }
}

/// Scale `(width, height)` down uniformly so neither side exceeds `max`
fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    let scale = (max as f64 / width as f64).min(max as f64 / height as f64);
    (
        ((width as f64 * scale).floor() as u32).max(1),
        ((height as f64 * scale).floor() as u32).max(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    /// In-memory source keyed by location
    struct MapSource(FxHashMap<&'static str, ImageInfo>);

    impl MapSource {
        fn with(entries: &[(&'static str, u32, u32)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|&(loc, width, height)| (loc, ImageInfo { width, height }))
                    .collect(),
            )
        }
    }

    impl TextureSource for MapSource {
        fn probe(&self, location: &str) -> Result<ImageInfo, TextureError> {
            self.0
                .get(location)
                .copied()
                .ok_or_else(|| TextureError::NotFound(location.to_string()))
        }
    }

    #[test]
    fn test_first_available_candidate_wins() {
        let resolver = TextureResolver::new(MapSource::with(&[
            ("/textures/earth.jpg", 2048, 1024),
            ("/textures/planetas/earth.png", 1024, 512),
        ]));
        let tex = resolver.resolve(TextureKey::Earth).unwrap();
        assert_eq!(tex.location, "/textures/earth.jpg");
        assert!(tex.mipmaps);
    }

    #[test]
    fn test_placeholder_is_skipped() {
        let resolver = TextureResolver::new(MapSource::with(&[
            ("/textures/luna/moon.jpg", 1, 1),
            ("/textures/moon.jpg", 1000, 500),
        ]));
        let tex = resolver.resolve(TextureKey::Moon).unwrap();
        assert_eq!(tex.location, "/textures/moon.jpg");
        assert!(!tex.mipmaps);
    }

    #[test]
    fn test_oversized_texture_is_fit_preserving_aspect() {
        let resolver = TextureResolver::new(MapSource::with(&[(
            "/textures/planetas/mars.jpg",
            8192,
            4096,
        )]))
        .with_max_size(4096);
        let tex = resolver.resolve(TextureKey::Mars).unwrap();
        assert_eq!(tex.size, (4096, 2048));
        assert!(tex.was_downscaled());
    }

    #[test]
    fn test_missing_texture_falls_back_to_flat_color() {
        let resolver = TextureResolver::new(MapSource::with(&[]));
        assert_eq!(
            resolver.surface(TextureKey::Sun),
            Surface::Flat(Color::from_hex(0xffcc66))
        );
        assert_eq!(
            resolver.surface(TextureKey::Neptune),
            Surface::Flat(Color::from_hex(0x4169e1))
        );
    }

    #[test]
    fn test_every_key_has_candidates() {
        for key in TextureKey::all() {
            assert!(!key.candidates().is_empty(), "{:?}", key);
        }
    }

    #[test]
    fn test_fs_source_rejects_remote_and_missing() {
        let source = FsTextureSource::new("/nonexistent-orrery-assets");
        assert!(matches!(
            source.probe("https://example.com/sun.jpg"),
            Err(TextureError::Unsupported(_))
        ));
        assert!(matches!(
            source.probe("/textures/sun.jpg"),
            Err(TextureError::NotFound(_))
        ));
        assert_eq!(
            source.resolve_path("/textures/sun.jpg"),
            PathBuf::from("/nonexistent-orrery-assets/textures/sun.jpg")
        );
    }
}
