//! # photo-prep
//!
//! Turns a folder of photos into web-ready assets for a static gallery site:
//! every image is rotated upright from its EXIF tag, flattened to RGB, scaled
//! down to fit 1200×1200, and re-encoded as lossy WebP. A JSON manifest lists
//! each converted image with its public path, orientation, a random caption, a
//! placeholder date, and whether it is the designated hero shot.
//!
//! # Pipeline
//!
//! ```text
//! config  →  scan  →  convert (per file)  →  manifest.json
//! ```
//!
//! One sequential pass, no caching: each run reconverts everything and
//! rewrites the manifest. A file that fails to convert is reported and left
//! out; the rest of the run is unaffected.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run settings: stock defaults with optional TOML overrides |
//! | [`scan`] | Lists source images plus the hero file |
//! | [`imaging`] | Decode, orient, fit, and encode a single image |
//! | [`manifest`] | Manifest entry type, output naming, JSON writer |
//! | [`process`] | The batch run tying scan, conversion, and manifest together |
//! | [`output`] | Console formatting of scan results and run progress |

pub mod config;
pub mod imaging;
pub mod manifest;
pub mod output;
pub mod process;
pub mod scan;
