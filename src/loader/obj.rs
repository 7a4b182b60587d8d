//! Wavefront OBJ parsing: v/vn/f/usemtl/mtllib, fan triangulation, vertex
//! colors taken from the active material's diffuse term.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context, Result};
use glam::Vec3;

use super::MaterialLibrary;
use crate::types::Vertex;

const DEFAULT_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Geometry ready for GPU upload, plus the material library names the file
/// referenced (in order of appearance).
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub material_libraries: Vec<String>,
}

/// One `f` corner: 1-based indices, negative counts from the end, 0 = absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Corner {
    v: i32,
    vn: i32,
}

fn parse_corner(token: &str) -> Corner {
    let mut parts = token
        .split('/')
        .map(|s| if s.is_empty() { 0 } else { s.parse::<i32>().unwrap_or(0) });
    let v = parts.next().unwrap_or(0);
    let _vt = parts.next();
    let vn = parts.next().unwrap_or(0);
    Corner { v, vn }
}

fn resolve(index: i32, len: usize) -> Option<usize> {
    let resolved = if index > 0 {
        index as i64 - 1
    } else {
        len as i64 + index as i64
    };
    (0..len as i64).contains(&resolved).then_some(resolved as usize)
}

/// Parse an OBJ file, resolving face colors against `materials`. Polygon
/// faces are triangulated with a fan; files without `vn` records get flat
/// face normals.
pub fn load_geometry(path: &Path, materials: &MaterialLibrary) -> Result<MeshData> {
    let file = File::open(path)
        .with_context(|| format!("failed to open geometry file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut positions: Vec<Vec3> = Vec::new();
    let mut normals: Vec<Vec3> = Vec::new();
    let mut mesh = MeshData::default();
    let mut current_color = DEFAULT_COLOR;
    // (corner, color bits) -> emitted vertex index
    let mut dedup: HashMap<(Corner, [u32; 3]), u32> = HashMap::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut it = trimmed.split_whitespace();
        let tag = it.next().unwrap_or("");
        match tag {
            "v" => {
                let mut coord = || it.next().and_then(|t| t.parse::<f32>().ok()).unwrap_or(0.0);
                positions.push(Vec3::new(coord(), coord(), coord()));
            }
            "vn" => {
                let mut coord = || it.next().and_then(|t| t.parse::<f32>().ok()).unwrap_or(0.0);
                normals.push(Vec3::new(coord(), coord(), coord()));
            }
            "mtllib" => {
                for name in it {
                    mesh.material_libraries.push(name.to_string());
                }
            }
            "usemtl" => {
                let name = it.next().unwrap_or("");
                current_color = materials
                    .get(name)
                    .map(|m| m.diffuse)
                    .unwrap_or(DEFAULT_COLOR);
            }
            "f" => {
                let corners: Vec<Corner> = it.map(parse_corner).collect();
                if corners.len() < 3 {
                    continue;
                }
                for i in 1..corners.len() - 1 {
                    let triangle = [corners[0], corners[i], corners[i + 1]];
                    emit_triangle(
                        &triangle,
                        &positions,
                        &normals,
                        current_color,
                        &mut dedup,
                        &mut mesh,
                    )
                    .with_context(|| {
                        format!("bad face at {}:{}", path.display(), line_no + 1)
                    })?;
                }
            }
            _ => {}
        }
    }

    Ok(mesh)
}

fn emit_triangle(
    triangle: &[Corner; 3],
    positions: &[Vec3],
    normals: &[Vec3],
    color: [f32; 3],
    dedup: &mut HashMap<(Corner, [u32; 3]), u32>,
    mesh: &mut MeshData,
) -> Result<()> {
    let mut resolved = [(Vec3::ZERO, None); 3];
    for (slot, corner) in resolved.iter_mut().zip(triangle.iter()) {
        let Some(vi) = resolve(corner.v, positions.len()) else {
            bail!("vertex index {} out of range", corner.v);
        };
        let normal = if corner.vn != 0 {
            match resolve(corner.vn, normals.len()) {
                Some(ni) => Some(normals[ni]),
                None => bail!("normal index {} out of range", corner.vn),
            }
        } else {
            None
        };
        *slot = (positions[vi], normal);
    }

    let has_normals = resolved.iter().all(|(_, n)| n.is_some());
    let color_key = color.map(f32::to_bits);

    if has_normals {
        for (corner, (position, normal)) in triangle.iter().zip(resolved.iter()) {
            let key = (*corner, color_key);
            let index = *dedup.entry(key).or_insert_with(|| {
                mesh.vertices.push(Vertex::new(
                    position.to_array(),
                    normal.unwrap_or(Vec3::Z).to_array(),
                    color,
                ));
                (mesh.vertices.len() - 1) as u32
            });
            mesh.indices.push(index);
        }
    } else {
        // No usable smooth normals: emit a flat-shaded triangle.
        let normal = (resolved[1].0 - resolved[0].0)
            .cross(resolved[2].0 - resolved[0].0)
            .normalize_or_zero();
        for (position, _) in resolved.iter() {
            mesh.vertices
                .push(Vertex::new(position.to_array(), normal.to_array(), color));
            mesh.indices.push((mesh.vertices.len() - 1) as u32);
        }
    }
    Ok(())
}
