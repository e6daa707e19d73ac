//! Wavefront OBJ mesh loading
//!
//! Supports `v`/`vt`/`vn` statements and `f` faces in all four index forms
//! (`v`, `v/vt`, `v//vn`, `v/vt/vn`), with fan triangulation of polygons and
//! negative (relative) indices. Flat normals are computed when the file
//! provides none.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::Vec3;

use crate::renderer::{Mesh, Vertex};

/// Load a mesh from an OBJ file
///
/// # Errors
///
/// Returns an error if the file cannot be read, a statement cannot be
/// parsed, or the file contains no faces
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let file = File::open(path.as_ref()).map_err(|e| ObjError::IoError(e.to_string()))?;
    parse_obj(BufReader::new(file))
}

/// Parse OBJ data from a reader
pub fn parse_obj(reader: impl BufRead) -> Result<Mesh, ObjError> {
    let mut positions: Vec<[f32; 3]> = Vec::new();
    let mut uvs: Vec<[f32; 2]> = Vec::new();
    let mut normals: Vec<[f32; 3]> = Vec::new();
    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line_no = line_index + 1;
        let line = line.map_err(|e| ObjError::IoError(e.to_string()))?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match keyword {
            "v" => positions.push(parse_floats::<3>(&args, line_no)?),
            "vt" => uvs.push(parse_floats::<2>(&args, line_no)?),
            "vn" => normals.push(parse_floats::<3>(&args, line_no)?),
            "f" => {
                if args.len() < 3 {
                    return Err(ObjError::ParseError {
                        line: line_no,
                        message: String::from("face needs at least three vertices"),
                    });
                }

                let mut face = Vec::with_capacity(args.len());
                for token in &args {
                    face.push(parse_face_vertex(token, &positions, &uvs, &normals, line_no)?);
                }

                // Fan-triangulate; quads and larger polygons become triangles
                for i in 1..face.len() - 1 {
                    let base = vertices.len() as u32;
                    vertices.push(face[0]);
                    vertices.push(face[i]);
                    vertices.push(face[i + 1]);
                    indices.extend([base, base + 1, base + 2]);
                }
            }
            // Object, group, smoothing, and material statements are ignored
            _ => {}
        }
    }

    if vertices.is_empty() {
        return Err(ObjError::Empty);
    }

    if vertices.iter().all(|v| v.normal == [0.0, 0.0, 0.0]) {
        compute_flat_normals(&mut vertices, &indices);
    }

    Ok(Mesh::from_data(vertices, indices))
}

fn parse_floats<const N: usize>(args: &[&str], line: usize) -> Result<[f32; N], ObjError> {
    if args.len() < N {
        return Err(ObjError::ParseError {
            line,
            message: format!("expected {N} components, found {}", args.len()),
        });
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(args) {
        *slot = token.parse().map_err(|_| ObjError::ParseError {
            line,
            message: format!("invalid number `{token}`"),
        })?;
    }
    Ok(out)
}

fn parse_face_vertex(
    token: &str,
    positions: &[[f32; 3]],
    uvs: &[[f32; 2]],
    normals: &[[f32; 3]],
    line: usize,
) -> Result<Vertex, ObjError> {
    let mut refs = token.split('/');

    let position = match refs.next() {
        Some(r) if !r.is_empty() => positions[resolve_index(r, positions.len(), line)?],
        _ => {
            return Err(ObjError::ParseError {
                line,
                message: format!("invalid face vertex `{token}`"),
            });
        }
    };

    let uv = match refs.next() {
        Some(r) if !r.is_empty() => uvs[resolve_index(r, uvs.len(), line)?],
        _ => [0.0, 0.0],
    };

    let normal = match refs.next() {
        Some(r) if !r.is_empty() => normals[resolve_index(r, normals.len(), line)?],
        _ => [0.0, 0.0, 0.0],
    };

    Ok(Vertex::new(position, normal, uv))
}

/// Resolve a one-based or negative (relative) OBJ index
fn resolve_index(token: &str, len: usize, line: usize) -> Result<usize, ObjError> {
    let index: i64 = token.parse().map_err(|_| ObjError::ParseError {
        line,
        message: format!("invalid index `{token}`"),
    })?;

    let resolved = if index < 0 {
        len as i64 + index
    } else {
        index - 1
    };

    if resolved < 0 || resolved >= len as i64 {
        return Err(ObjError::ParseError {
            line,
            message: format!("index {index} out of range"),
        });
    }

    Ok(resolved as usize)
}

fn compute_flat_normals(vertices: &mut [Vertex], indices: &[u32]) {
    for triangle in indices.chunks_exact(3) {
        let (a, b, c) = (
            triangle[0] as usize,
            triangle[1] as usize,
            triangle[2] as usize,
        );
        let p0 = Vec3::from(vertices[a].position);
        let p1 = Vec3::from(vertices[b].position);
        let p2 = Vec3::from(vertices[c].position);

        let normal = (p1 - p0).cross(p2 - p0).normalize_or_zero();
        vertices[a].normal = normal.into();
        vertices[b].normal = normal.into();
        vertices[c].normal = normal.into();
    }
}

/// Errors that can occur during OBJ loading
#[derive(Debug, Clone)]
pub enum ObjError {
    /// IO error reading the file
    IoError(String),
    /// Malformed statement
    ParseError { line: usize, message: String },
    /// The file contains no faces
    Empty,
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::ParseError { line, message } => write!(f, "Parse error at line {line}: {message}"),
            Self::Empty => write!(f, "No faces in OBJ data"),
        }
    }
}

impl std::error::Error for ObjError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str) -> Result<Mesh, ObjError> {
        parse_obj(data.as_bytes())
    }

    #[test]
    fn test_parse_triangle() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        // Counter-clockwise in the XY plane faces +Z
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 1 1 0\n\
             v 0 1 0\n\
             f 1 2 3 4\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices.len(), 6);
    }

    #[test]
    fn test_full_index_form() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             vt 0 0\n\
             vt 1 0\n\
             vt 0 1\n\
             vn 0 0 1\n\
             f 1/1/1 2/2/1 3/3/1\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices[1].uv, [1.0, 0.0]);
        assert_eq!(mesh.vertices[2].normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_position_and_normal_form() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 0 1\n\
             vn 0 1 0\n\
             f 1//1 2//1 3//1\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.vertices[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn test_negative_indices() {
        let mesh = parse(
            "v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f -3 -2 -1\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_comments_and_unknown_statements_ignored() {
        let mesh = parse(
            "# a comment\n\
             o ball\n\
             s off\n\
             usemtl none\n\
             v 0 0 0\n\
             v 1 0 0\n\
             v 0 1 0\n\
             f 1 2 3\n",
        )
        .unwrap();
        assert_eq!(mesh.vertices.len(), 3);
    }

    #[test]
    fn test_invalid_number_reports_line() {
        let err = parse("v 0 0 0\nv 1 nope 0\n").unwrap_err();
        match err {
            ObjError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_index() {
        let err = parse("v 0 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, ObjError::ParseError { line: 2, .. }));
    }

    #[test]
    fn test_no_faces_is_empty() {
        assert!(matches!(parse("v 0 0 0\n"), Err(ObjError::Empty)));
        assert!(matches!(parse(""), Err(ObjError::Empty)));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_obj("does/not/exist.obj"),
            Err(ObjError::IoError(_))
        ));
    }
}
