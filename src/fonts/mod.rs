//! Font discovery shared by text measurement and SVG rasterization.
//!
//! Measurement and rasterization must agree on glyph advances, so both read the faces selected
//! here: Parley gets the raw bytes, usvg gets the `fontdb` database and a resolver that prefers the
//! selected family.

use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

use crate::foundation::error::{ChronosError, ChronosResult};

/// Families tried in order when picking the wallpaper face.
pub const PREFERRED_FAMILIES: &[&str] = &["Liberation Sans", "Arial", "Helvetica", "DejaVu Sans"];

/// Regular and bold faces of one family plus the database handed to usvg.
#[derive(Clone)]
pub struct FontSet {
    family: String,
    faces: Vec<Arc<Vec<u8>>>,
    db: Arc<fontdb::Database>,
}

impl std::fmt::Debug for FontSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSet")
            .field("family", &self.family)
            .field("faces", &self.faces.len())
            .field("db_faces", &self.db.len())
            .finish()
    }
}

impl FontSet {
    /// Load faces from `fonts_dir` (if any) and fall back to system fonts when the directory has
    /// none of the preferred families.
    #[tracing::instrument(level = "debug")]
    pub fn discover(fonts_dir: Option<&Path>) -> ChronosResult<Self> {
        let mut db = fontdb::Database::new();
        if let Some(dir) = fonts_dir {
            load_fonts_from_dir(&mut db, dir);
        }

        let mut family = pick_family(&db);
        if family.is_none() {
            db.load_system_fonts();
            family = pick_family(&db);
        }
        let family = family.ok_or_else(|| {
            ChronosError::resource_missing(match fonts_dir {
                Some(dir) => format!("no usable font in '{}' or system fonts", dir.display()),
                None => "no usable system font".to_owned(),
            })
        })?;

        let mut ids = Vec::new();
        for weight in [fontdb::Weight::NORMAL, fontdb::Weight::BOLD] {
            let families = [fontdb::Family::Name(&family)];
            let query = fontdb::Query {
                families: &families,
                weight,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            if let Some(id) = db.query(&query)
                && !ids.contains(&id)
            {
                ids.push(id);
            }
        }

        let mut faces = Vec::with_capacity(ids.len());
        for id in ids {
            let bytes = db
                .with_face_data(id, |data, _index| data.to_vec())
                .ok_or_else(|| {
                    ChronosError::resource_missing(format!("font data for '{family}' unreadable"))
                })?;
            faces.push(Arc::new(bytes));
        }

        tracing::info!(family = %family, faces = faces.len(), "fonts selected");
        Ok(Self {
            family,
            faces,
            db: Arc::new(db),
        })
    }

    /// Selected family name, as written into SVG `font-family`.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw face bytes (regular first, then bold when distinct).
    pub fn faces(&self) -> &[Arc<Vec<u8>>] {
        &self.faces
    }

    /// Shared font database for usvg.
    pub fn database(&self) -> Arc<fontdb::Database> {
        self.db.clone()
    }
}

fn pick_family(db: &fontdb::Database) -> Option<String> {
    PREFERRED_FAMILIES
        .iter()
        .map(|name| fontdb::Family::Name(*name))
        .chain(std::iter::once(fontdb::Family::SansSerif))
        .find_map(|family| {
            let families = [family];
            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight::NORMAL,
                stretch: fontdb::Stretch::Normal,
                style: fontdb::Style::Normal,
            };
            let id = db.query(&query)?;
            db.face(id)?.families.first().map(|(name, _)| name.clone())
        })
        .or_else(|| {
            db.faces()
                .next()
                .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        })
}

fn load_fonts_from_dir(db: &mut fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "fonts directory not readable");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc") {
            continue;
        }
        if let Err(err) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %err, "skipping font file");
        }
    }
}

/// Resolve every SVG font request to `family`, honouring weight and style.
pub(crate) fn font_resolver(family: String) -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(move |font, fontdb| {
            let style = match font.style() {
                usvg::FontStyle::Normal => fontdb::Style::Normal,
                usvg::FontStyle::Italic => fontdb::Style::Italic,
                usvg::FontStyle::Oblique => fontdb::Style::Oblique,
            };
            let families = [fontdb::Family::Name(&family), fontdb::Family::SansSerif];
            let query = fontdb::Query {
                families: &families,
                weight: fontdb::Weight(font.weight()),
                stretch: fontdb::Stretch::Normal,
                style,
            };
            fontdb
                .query(&query)
                .or_else(|| fontdb.faces().next().map(|f| f.id))
        }),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/mod.rs"]
mod tests;
