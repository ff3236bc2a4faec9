//! Manufacturer catalogs loaded from TOML.
//!
//! A catalog is a list of [`CameraSpec`] records. The built-in makers are
//! always available; extra records can be parsed from a TOML document with
//! one `[[camera]]` table per maker.

use serde::Deserialize;

use super::composite::Camera;
use super::factory::{CameraFactory, CameraMaker, CameraSpec};
use crate::trace::SharedSink;
use crate::traits::{FactoryError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    camera: Vec<CameraSpec>,
}

/// Set of manufacturer records, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    specs: Vec<CameraSpec>,
}

impl Catalog {
    /// Catalog holding the built-in makers.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            specs: CameraMaker::ALL.into_iter().map(CameraMaker::spec).collect(),
        }
    }

    /// Parse a catalog from a TOML document.
    pub fn from_toml_str(document: &str) -> Result<Self> {
        // Part and speed errors arrive here as serde messages.
        let parsed: CatalogDocument =
            toml::from_str(document).map_err(|err| FactoryError::Catalog(err.to_string()))?;

        let mut catalog = Self::default();
        for spec in parsed.camera {
            catalog.insert(spec)?;
        }
        Ok(catalog)
    }

    /// Add every record of `other`, rejecting duplicate names.
    pub fn extend(&mut self, other: Self) -> Result<()> {
        for spec in other.specs {
            self.insert(spec)?;
        }
        Ok(())
    }

    fn insert(&mut self, spec: CameraSpec) -> Result<()> {
        if spec.name.trim().is_empty() {
            return Err(FactoryError::Catalog("camera name must not be empty".to_owned()));
        }
        if self.get(&spec.name).is_some() {
            return Err(FactoryError::Catalog(format!(
                "duplicate camera name: {:?}",
                spec.name
            )));
        }
        self.specs.push(spec);
        Ok(())
    }

    /// Find a record by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CameraSpec> {
        self.specs
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    /// Names of every record, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|spec| spec.name.as_str())
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the catalog has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Build the camera recorded under `name`.
    pub fn build(&self, name: &str, sink: SharedSink) -> Result<Camera> {
        let spec = self
            .get(name)
            .ok_or_else(|| FactoryError::UnknownCameraMaker(name.to_owned()))?;
        Ok(CameraFactory::from_spec(spec, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{FilmKind, MirrorKind, ShutterKind};
    use crate::trace::MemorySink;
    use std::sync::Arc;

    const LEICA: &str = r#"
        [[camera]]
        name = "Leica"
        film = "fuji"
        shutter = "leaf"
        mirror = "pellicle"
        speed = 1000
    "#;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Canon", "Nikon", "Pentax"]);
        assert!(catalog.get("pentax").is_some());
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml_str(LEICA).expect("valid catalog");
        let leica = catalog.get("LEICA").expect("leica present");
        assert_eq!(leica.film, FilmKind::Fuji);
        assert_eq!(leica.shutter, ShutterKind::Leaf);
        assert_eq!(leica.mirror, MirrorKind::Pellicle);
        assert_eq!(leica.speed.denominator(), 1000);
    }

    #[test]
    fn test_empty_document_is_empty_catalog() {
        let catalog = Catalog::from_toml_str("").expect("empty catalog");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unknown_part_rejected() {
        let document = LEICA.replace("\"fuji\"", "\"polaroid\"");
        let err = Catalog::from_toml_str(&document).expect_err("unknown film");
        assert!(err.to_string().contains("polaroid"), "got: {err}");
    }

    #[test]
    fn test_zero_speed_rejected() {
        let document = LEICA.replace("1000", "0");
        let err = Catalog::from_toml_str(&document).expect_err("zero speed");
        assert!(err.to_string().contains("1/0"), "got: {err}");
    }

    #[test]
    fn test_missing_field_rejected() {
        let document = LEICA.replace("mirror = \"pellicle\"", "");
        assert!(Catalog::from_toml_str(&document).is_err());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut catalog = Catalog::builtin();
        let document = LEICA.replace("Leica", "canon");
        let extra = Catalog::from_toml_str(&document).expect("valid catalog");
        let err = catalog.extend(extra).expect_err("duplicate name");
        assert!(matches!(err, FactoryError::Catalog(_)));
    }

    #[test]
    fn test_build_from_catalog() {
        let mut catalog = Catalog::builtin();
        catalog
            .extend(Catalog::from_toml_str(LEICA).expect("valid catalog"))
            .expect("no duplicates");

        let sink = MemorySink::new();
        let camera = catalog
            .build("leica", Arc::<MemorySink>::clone(&sink))
            .expect("leica builds");
        camera.take_picture();

        let lines = sink.lines();
        assert_eq!(lines.first().map(String::as_str), Some("Leica is taking a picture"));
        assert!(lines.contains(&"Leaf shutter speed has been set to 1/1000".to_owned()));
    }

    #[test]
    fn test_build_unknown_name() {
        let err = Catalog::builtin()
            .build("Minolta", MemorySink::new())
            .expect_err("not in catalog");
        assert!(matches!(err, FactoryError::UnknownCameraMaker(ref k) if k == "Minolta"));
    }
}
