//! Line-model geometry and its text loader.
//!
//! The format is line oriented with whitespace separated tokens:
//!
//! ```text
//! o <name>
//! v <x> <y> <z>
//! f <i1>[/..] <i2>[/..] ... <in>[/..]
//! ```
//!
//! Every other leading token is ignored. Vertices live in one pool shared by
//! all objects, and face indices point into it 1-based.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use thiserror::Error;

use crate::math::vec3::Vec3;

/// Geometry scale used when none is configured.
pub const DEFAULT_SCALE: f64 = 200.0;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open model '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read model data: {0}")]
    Read(#[from] io::Error),
    #[error("line {line}: malformed number '{token}' in '{directive}' directive")]
    Parse {
        line: usize,
        directive: &'static str,
        token: String,
    },
}

/// How malformed numeric tokens are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Malformed numbers read as zero and are reported through `log::warn!`.
    #[default]
    Lenient,
    /// Malformed numbers abort the load with [`LoadError::Parse`].
    Strict,
}

/// A polygon given as 1-based indices into [`Mesh::vertices`].
/// Index order defines the winding. Indices below 1 never resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    indices: Vec<i64>,
}

impl Face {
    pub fn new(indices: Vec<i64>) -> Self {
        Self { indices }
    }

    pub fn indices(&self) -> &[i64] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Index pairs along the outline. The outline is closed on purpose: the
    /// last index pairs with the first, so a triangle yields all three sides.
    ///
    /// A two-index face yields its single segment once.
    pub fn edges(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let n = self.indices.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (self.indices[i], self.indices[(i + 1) % n]))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    name: String,
    faces: Vec<Face>,
}

impl Object {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }
}

/// Loaded geometry: named objects over a shared vertex pool.
///
/// Read-only once loaded, so a frame loop can borrow it every tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    objects: Vec<Object>,
    vertices: Vec<Vec3>,
}

impl Mesh {
    pub fn new(objects: Vec<Object>, vertices: Vec<Vec3>) -> Self {
        Self { objects, vertices }
    }

    /// Load a model file, negating Y and scaling every vertex by `scale`.
    pub fn load(path: impl AsRef<Path>, scale: f64, mode: ParseMode) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mesh = Self::from_reader(BufReader::new(file), scale, mode)?;
        info!(
            "Loaded {} objects and {} vertices from {}",
            mesh.objects.len(),
            mesh.vertices.len(),
            path.display()
        );
        Ok(mesh)
    }

    /// Load a model file with [`DEFAULT_SCALE`] and lenient parsing.
    pub fn load_default(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load(path, DEFAULT_SCALE, ParseMode::Lenient)
    }

    pub fn from_reader<R: BufRead>(reader: R, scale: f64, mode: ParseMode) -> Result<Self, LoadError> {
        let mut mesh = Mesh::default();
        let mut current: Option<Object> = None;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = i + 1;
            let mut tokens = line.split_whitespace();

            match tokens.next() {
                Some("o") => {
                    mesh.flush_object(current.take());
                    current = Some(Object::new(tokens.next().unwrap_or_default()));
                }
                Some("v") => {
                    let mut coords = [0.0; 3];
                    for coord in coords.iter_mut() {
                        let token = tokens.next().unwrap_or_default();
                        *coord = parse_number(token, line_number, "v", mode)?;
                    }
                    let [x, y, z] = coords;
                    // Source files are Y-up, the canvas is Y-down.
                    mesh.vertices.push(Vec3::new(x, -y, z).scale(scale));
                }
                Some("f") => {
                    let indices = tokens
                        .map(|group| {
                            let index = group.split('/').next().unwrap_or_default();
                            parse_number(index, line_number, "f", mode)
                        })
                        .collect::<Result<Vec<i64>, _>>()?;
                    current
                        .get_or_insert_with(|| Object::new(""))
                        .add_face(Face::new(indices));
                }
                _ => {}
            }
        }

        mesh.flush_object(current);
        Ok(mesh)
    }

    fn flush_object(&mut self, object: Option<Object>) {
        if let Some(object) = object.filter(|o| !o.faces.is_empty()) {
            self.objects.push(object);
        }
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Resolve a 1-based index. Returns `None` when it falls outside the pool,
    /// which includes zero and negative indices.
    pub fn vertex(&self, index: i64) -> Option<Vec3> {
        usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.vertices.get(i))
            .copied()
    }

    /// Resolve every index of `face`, or `None` if any is out of range.
    pub fn face_vertices(&self, face: &Face) -> Option<Vec<Vec3>> {
        face.indices().iter().map(|&i| self.vertex(i)).collect()
    }
}

fn parse_number<T>(token: &str, line: usize, directive: &'static str, mode: ParseMode) -> Result<T, LoadError>
where
    T: FromStr + Default,
{
    match token.parse() {
        Ok(value) => Ok(value),
        Err(_) if mode == ParseMode::Strict => Err(LoadError::Parse {
            line,
            directive,
            token: token.to_string(),
        }),
        Err(_) => {
            warn!("line {line}: malformed number '{token}' in '{directive}', using 0");
            Ok(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TRIANGLE: &str = "o tri\nv 0.0 1.0 0.0\nv 1.0 -0.5 0.25\nv -1.0 0.0 2.0\nf 1 2 3\n";

    fn parse(text: &str) -> Mesh {
        Mesh::from_reader(text.as_bytes(), 2.0, ParseMode::Lenient).unwrap()
    }

    #[test]
    fn test_single_triangle() {
        let mesh = parse(TRIANGLE);

        assert_eq!(mesh.objects().len(), 1);
        let object = &mesh.objects()[0];
        assert_eq!(object.name(), "tri");
        assert_eq!(object.faces().len(), 1);
        assert_eq!(object.faces()[0].indices(), &[1, 2, 3]);

        let v = mesh.vertices();
        assert_eq!(v.len(), 3);
        assert_relative_eq!(v[0].y, -2.0);
        assert_relative_eq!(v[1].x, 2.0);
        assert_relative_eq!(v[1].y, 1.0);
        assert_relative_eq!(v[1].z, 0.5);
        assert_relative_eq!(v[2].z, 4.0);
    }

    #[test]
    fn test_face_index_subfields() {
        let mesh = parse("o quad\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1/7/3 2//4 3/1 4\n");
        assert_eq!(mesh.objects()[0].faces()[0].indices(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_objects_dropped() {
        let text = "o empty\no full\nv 0 0 0\nv 1 0 0\nf 1 2\no trailing\n";
        let mesh = parse(text);
        assert_eq!(mesh.objects().len(), 1);
        assert_eq!(mesh.objects()[0].name(), "full");
    }

    #[test]
    fn test_multiple_objects_share_pool() {
        let text = "o a\nv 0 0 0\nv 1 0 0\nf 1 2\no b\nv 2 0 0\nf 2 3\n";
        let mesh = parse(text);
        assert_eq!(mesh.objects().len(), 2);
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.objects()[1].faces()[0].indices(), &[2, 3]);
    }

    #[test]
    fn test_faces_before_any_object_kept() {
        let mesh = parse("v 0 0 0\nv 1 1 1\nf 1 2\n");
        assert_eq!(mesh.objects().len(), 1);
        assert_eq!(mesh.objects()[0].name(), "");
    }

    #[test]
    fn test_unknown_directives_ignored() {
        let text = "# comment\nvn 0 1 0\nvt 0.5 0.5\nusemtl red\n\n".to_string() + TRIANGLE;
        let mesh = parse(&text);
        assert_eq!(mesh.vertices().len(), 3);
        assert_eq!(mesh.objects().len(), 1);
    }

    #[test]
    fn test_lenient_malformed_number_is_zero() {
        let mesh = parse("o x\nv abc 1 2\nv 1\nf 1 zz\n");
        assert_eq!(mesh.vertices()[0], Vec3::new(0.0, -2.0, 4.0));
        assert_eq!(mesh.vertices()[1], Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(mesh.objects()[0].faces()[0].indices(), &[1, 0]);
    }

    #[test]
    fn test_strict_malformed_number_errors() {
        let result = Mesh::from_reader("o x\nv 0 0 0\nv 1 oops 0\n".as_bytes(), 1.0, ParseMode::Strict);
        match result {
            Err(LoadError::Parse { line, directive, token }) => {
                assert_eq!(line, 3);
                assert_eq!(directive, "v");
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = Mesh::load_default("definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("here.obj"));
    }

    #[test]
    fn test_face_vertices_bounds() {
        let mesh = parse(TRIANGLE);
        let face = &mesh.objects()[0].faces()[0];
        assert_eq!(mesh.face_vertices(face).map(|v| v.len()), Some(3));
        assert_eq!(mesh.vertex(0), None);
        assert_eq!(mesh.vertex(4), None);
        assert!(mesh.face_vertices(&Face::new(vec![1, 9])).is_none());
        assert_eq!(mesh.vertex(-1), None);
        assert_eq!(mesh.vertex(i64::MIN), None);
    }

    #[test]
    fn test_negative_indices_parse_but_never_resolve() {
        let text = "o neg\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf -1 -2 -3\n";
        let mesh = Mesh::from_reader(text.as_bytes(), 1.0, ParseMode::Strict).unwrap();

        let face = &mesh.objects()[0].faces()[0];
        assert_eq!(face.indices(), &[-1, -2, -3]);
        assert!(mesh.face_vertices(face).is_none());
        assert!(face.edges().all(|(a, b)| mesh.vertex(a).is_none() && mesh.vertex(b).is_none()));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("tinyrast-load-{}.obj", std::process::id()));
        std::fs::write(&path, TRIANGLE).unwrap();

        let loaded = Mesh::load(&path, 2.0, ParseMode::Strict);
        std::fs::remove_file(&path).unwrap();

        let mesh = loaded.unwrap();
        assert_eq!(mesh, parse(TRIANGLE));
        assert_eq!(mesh.objects()[0].name(), "tri");
        assert_eq!(mesh.vertices().len(), 3);
        assert_relative_eq!(mesh.vertices()[0].y, -2.0);
    }

    #[test]
    fn test_face_edges() {
        let tri = Face::new(vec![1, 2, 3]);
        assert_eq!(tri.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 3), (3, 1)]);

        let segment = Face::new(vec![4, 5]);
        assert_eq!(segment.edges().collect::<Vec<_>>(), vec![(4, 5)]);

        assert_eq!(Face::new(vec![1]).edges().count(), 0);
    }
}
