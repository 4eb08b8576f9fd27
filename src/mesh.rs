//! Face-vertex meshes.
//!
//! The rasterizer only reads geometry through the [`Geometry`] trait, one
//! vertex or face at a time, so callers may mutate positions between frames
//! (e.g. spin the model) and every draw sees the fresh values.
//!
//! [`Mesh`] is the bundled implementation, loadable from a Wavefront OBJ
//! subset.

use crate::error::{Error, Result};
use crate::geometry::Vec3;
use std::path::Path;

/// Read-only view of a triangle mesh.
pub trait Geometry {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of triangular faces.
    fn face_count(&self) -> usize;

    /// Position of vertex `i`.
    fn vertex(&self, i: usize) -> Vec3;

    /// Vertex indices of face `i`, in winding order.
    fn face(&self, i: usize) -> [usize; 3];
}

/// Triangle mesh with validated face indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Build a mesh, checking that every face index addresses a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FaceIndexOutOfRange`] for the first bad index.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(Error::FaceIndexOutOfRange {
                    face,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Parse Wavefront OBJ text.
    ///
    /// Only `v` and `f` records are used. Face corners may be written as
    /// `i`, `i/t`, `i//n` or `i/t/n`; indices are 1-based, and negative
    /// indices count back from the last vertex read so far. Polygons with
    /// more than three corners are split into a triangle fan.
    ///
    /// OBJ is y-up while screen rows grow downwards, so y is mirrored and
    /// each face's winding is reversed to keep camera-facing faces facing +Z.
    ///
    /// # Example
    ///
    /// ```
    /// use tiny_raster::mesh::{Geometry, Mesh};
    ///
    /// let mesh = Mesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
    /// assert_eq!(mesh.face_count(), 1);
    /// assert_eq!(mesh.face(0), [0, 2, 1]);
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let mut vertices = Vec::new();
        let mut faces = Vec::new();

        for (idx, raw) in source.lines().enumerate() {
            let line = idx + 1;
            let mut tokens = raw.split_whitespace();

            match tokens.next() {
                Some("v") => {
                    let mut coord = || -> Result<f64> {
                        let token = tokens.next().ok_or_else(|| Error::MeshParse {
                            line,
                            message: "vertex needs three coordinates".to_string(),
                        })?;
                        token.parse().map_err(|_| Error::MeshParse {
                            line,
                            message: format!("invalid coordinate '{token}'"),
                        })
                    };
                    let (x, y, z) = (coord()?, coord()?, coord()?);
                    vertices.push(Vec3::new(x, -y, z));
                }
                Some("f") => {
                    let corners = tokens
                        .map(|token| parse_corner(token, vertices.len(), line))
                        .collect::<Result<Vec<_>>>()?;
                    if corners.len() < 3 {
                        return Err(Error::MeshParse {
                            line,
                            message: format!("face needs at least 3 corners, got {}", corners.len()),
                        });
                    }
                    for pair in corners[1..].windows(2) {
                        faces.push([corners[0], pair[1], pair[0]]);
                    }
                }
                _ => {}
            }
        }

        let mesh = Self::new(vertices, faces)?;
        log::debug!(
            "parsed mesh: {} vertices, {} faces",
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    /// Load a Wavefront OBJ file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// All vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// All faces.
    #[must_use]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Replace every vertex with `f(vertex)`.
    pub fn transform<F: FnMut(Vec3) -> Vec3>(&mut self, mut f: F) {
        for v in &mut self.vertices {
            *v = f(*v);
        }
    }

    /// Rotate every vertex around the +Y axis by `angle` radians.
    pub fn rotate_y(&mut self, angle: f64) {
        if angle == 0.0 {
            return;
        }
        self.transform(|v| v.rotate_y(angle));
    }
}

fn parse_corner(token: &str, vertices_so_far: usize, line: usize) -> Result<usize> {
    let index_str = token.split('/').next().unwrap_or_default();
    let index: i64 = index_str.parse().map_err(|_| Error::MeshParse {
        line,
        message: format!("invalid face corner '{token}'"),
    })?;

    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i - 1),
        i => Some(vertices_so_far as i64 + i),
    };

    resolved
        .and_then(|i| usize::try_from(i).ok())
        .ok_or_else(|| Error::MeshParse {
            line,
            message: format!("face index {index} does not address a vertex"),
        })
}

impl Geometry for Mesh {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn vertex(&self, i: usize) -> Vec3 {
        self.vertices[i]
    }

    fn face(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }
}
