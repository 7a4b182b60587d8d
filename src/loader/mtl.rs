//! Wavefront MTL parsing, limited to the directives the bundled models use.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
}

impl Material {
    fn named(name: String) -> Self {
        Self {
            name,
            ambient: [0.2, 0.2, 0.2],
            diffuse: [0.8, 0.8, 0.8],
            specular: [0.0, 0.0, 0.0],
        }
    }
}

/// Materials keyed by name, the resolved form of one MTL file.
#[derive(Debug, Clone, Default)]
pub struct MaterialLibrary {
    materials: HashMap<String, Material>,
}

impl MaterialLibrary {
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

fn parse_color(mut it: std::str::SplitWhitespace<'_>, fallback: f32) -> [f32; 3] {
    let mut channel = || it.next().and_then(|t| t.parse().ok()).unwrap_or(fallback);
    [channel(), channel(), channel()]
}

/// Parse an MTL file. Unknown directives are skipped; a missing file is an
/// error (the geometry stage must not run without its materials).
pub fn load_material_library(path: &Path) -> Result<MaterialLibrary> {
    let file = File::open(path)
        .with_context(|| format!("failed to open material file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut materials = HashMap::new();
    let mut current: Option<Material> = None;

    for line in reader.lines() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut it = trimmed.split_whitespace();
        let tag = it.next().unwrap_or("");
        match tag {
            "newmtl" => {
                if let Some(done) = current.take() {
                    materials.insert(done.name.clone(), done);
                }
                let name = it.next().unwrap_or("").to_string();
                current = Some(Material::named(name));
            }
            "Ka" => {
                if let Some(m) = current.as_mut() {
                    m.ambient = parse_color(it, 0.2);
                }
            }
            "Kd" => {
                if let Some(m) = current.as_mut() {
                    m.diffuse = parse_color(it, 0.8);
                }
            }
            "Ks" => {
                if let Some(m) = current.as_mut() {
                    m.specular = parse_color(it, 0.0);
                }
            }
            // There is no transparency path, so `d` is skipped along with the
            // other unused directives.
            _ => {}
        }
    }
    if let Some(done) = current.take() {
        materials.insert(done.name.clone(), done);
    }

    Ok(MaterialLibrary { materials })
}
