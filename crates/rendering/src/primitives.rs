//! Unit-space primitive library.
//!
//! Every primitive is a pure function of its tag: positions and normals are
//! homogeneous 4-tuples (`w = 1` for points, `w = 0` for normals) in a fixed
//! local frame, and indices are offset by a caller-supplied base vertex so
//! the library never needs to know about the buffer it is appended to.
//! Faces wind counter-clockwise seen from outside.

use std::f32::consts::{FRAC_PI_2, TAU};

/// Segments around the cylinder and the dome.
pub const ROUND_SEGMENTS: u32 = 16;
/// Latitude rings of the dome below its single apex vertex.
pub const DOME_RINGS: u32 = 8;
/// Half-width of the double-window mullion bar.
const MULLION_HALF_WIDTH: f32 = 0.05;
/// How far the mullion stands proud of the glass.
const MULLION_DEPTH: f32 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// `[0,1]^3`, four vertices per face.
    Cube,
    /// `[0,1]^2` in the `z = 0` plane, facing +z.
    Square,
    /// Glass pane (vertices 0..4) plus a raised mullion bar (vertices 4..8).
    DoubleWindow,
    /// Gable roof over `[0,1]^2`, ridge along z at `x = 0.5`, apex `y = 1`.
    PitchedRoof,
    /// Dome over the unit disc centred at `(0.5, 0.5)` in x/z, apex `y = 1`.
    RoundRoof,
    /// Frustum: base `[0,1]^2`, top `[0.25,0.75]^2`, same layout as `Cube`.
    SteppedRoof,
    /// Radius 0.5 around `(0.5, 0.5)` in x/z, `y` in `[0,1]`, capped.
    Cylinder,
}

/// Unit-space shape data for one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitGeometry {
    pub positions: Vec<[f32; 4]>,
    pub normals: Vec<[f32; 4]>,
    /// Local indices starting at 0.
    pub indices: Vec<u32>,
}

impl Primitive {
    pub const ALL: [Primitive; 7] = [
        Primitive::Cube,
        Primitive::Square,
        Primitive::DoubleWindow,
        Primitive::PitchedRoof,
        Primitive::RoundRoof,
        Primitive::SteppedRoof,
        Primitive::Cylinder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Primitive::Cube => "cube",
            Primitive::Square => "square",
            Primitive::DoubleWindow => "double window",
            Primitive::PitchedRoof => "pitched roof",
            Primitive::RoundRoof => "round roof",
            Primitive::SteppedRoof => "stepped roof",
            Primitive::Cylinder => "cylinder",
        }
    }

    pub fn geometry(self) -> UnitGeometry {
        match self {
            Primitive::Cube => box_faces(cube_corner),
            Primitive::Square => quads(&[[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]]]),
            Primitive::DoubleWindow => double_window(),
            Primitive::PitchedRoof => pitched_roof(),
            Primitive::RoundRoof => dome(),
            Primitive::SteppedRoof => box_faces(frustum_corner),
            Primitive::Cylinder => cylinder(),
        }
    }

    pub fn positions(self) -> Vec<[f32; 4]> {
        self.geometry().positions
    }

    pub fn normals(self) -> Vec<[f32; 4]> {
        self.geometry().normals
    }

    /// Triangle list with every index shifted by `base`.
    pub fn indices(self, base: u32) -> Vec<u32> {
        self.geometry().indices.into_iter().map(|i| i + base).collect()
    }

    pub fn vertex_count(self) -> usize {
        match self {
            Primitive::Cube | Primitive::SteppedRoof => 24,
            Primitive::Square => 4,
            Primitive::DoubleWindow => 8,
            Primitive::PitchedRoof => 14,
            Primitive::RoundRoof => (DOME_RINGS * (ROUND_SEGMENTS + 1) + 1) as usize,
            Primitive::Cylinder => (4 * (ROUND_SEGMENTS + 1) + 2) as usize,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

fn point(p: [f32; 3]) -> [f32; 4] {
    [p[0], p[1], p[2], 1.0]
}

fn direction(n: [f32; 3]) -> [f32; 4] {
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    [n[0] / len, n[1] / len, n[2] / len, 0.0]
}

fn face_normal(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [f32; 3] {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Flat-shaded quads, each wound `0 1 2 / 0 2 3` and normal taken from its
/// first triangle.
fn quads(faces: &[[[f32; 3]; 4]]) -> UnitGeometry {
    let mut geo = UnitGeometry {
        positions: Vec::with_capacity(faces.len() * 4),
        normals: Vec::with_capacity(faces.len() * 4),
        indices: Vec::with_capacity(faces.len() * 6),
    };
    for face in faces {
        let base = geo.positions.len() as u32;
        let n = direction(face_normal(face[0], face[1], face[2]));
        for corner in face {
            geo.positions.push(point(*corner));
            geo.normals.push(n);
        }
        geo.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    geo
}

/// Corner order of the six box faces: +z, -z, +y, -y, +x, -x.
const BOX_FACES: [[[f32; 3]; 4]; 6] = [
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
    [[0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
    [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0]],
    [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0]],
];

fn cube_corner(c: [f32; 3]) -> [f32; 3] {
    c
}

/// Pulls the top corners of the unit cube in to `[0.25, 0.75]`.
fn frustum_corner(c: [f32; 3]) -> [f32; 3] {
    if c[1] > 0.5 {
        [0.25 + 0.5 * c[0], c[1], 0.25 + 0.5 * c[2]]
    } else {
        c
    }
}

fn box_faces(map: fn([f32; 3]) -> [f32; 3]) -> UnitGeometry {
    let faces: Vec<[[f32; 3]; 4]> = BOX_FACES
        .iter()
        .map(|face| [map(face[0]), map(face[1]), map(face[2]), map(face[3])])
        .collect();
    quads(&faces)
}

fn double_window() -> UnitGeometry {
    let (l, r) = (0.5 - MULLION_HALF_WIDTH, 0.5 + MULLION_HALF_WIDTH);
    quads(&[
        [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        [
            [l, 0.0, MULLION_DEPTH],
            [r, 0.0, MULLION_DEPTH],
            [r, 1.0, MULLION_DEPTH],
            [l, 1.0, MULLION_DEPTH],
        ],
    ])
}

fn pitched_roof() -> UnitGeometry {
    let mut geo = quads(&[
        [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.5, 1.0, 1.0], [0.5, 1.0, 0.0]],
        [[1.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.5, 1.0, 0.0], [0.5, 1.0, 1.0]],
    ]);
    let gables = [
        [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.5, 1.0, 0.0]],
        [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.5, 1.0, 1.0]],
    ];
    for tri in gables {
        let base = geo.positions.len() as u32;
        let n = direction(face_normal(tri[0], tri[1], tri[2]));
        for corner in tri {
            geo.positions.push(point(corner));
            geo.normals.push(n);
        }
        geo.indices.extend_from_slice(&[base, base + 1, base + 2]);
    }
    geo
}

/// Latitude rings below the apex, then a single apex vertex closed with a
/// fan so no row of triangles collapses onto the pole.
fn dome() -> UnitGeometry {
    let row = ROUND_SEGMENTS + 1;
    let count = (DOME_RINGS * row + 1) as usize;
    let mut geo = UnitGeometry {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        indices: Vec::with_capacity(((2 * DOME_RINGS - 1) * ROUND_SEGMENTS * 3) as usize),
    };
    for ring in 0..DOME_RINGS {
        let theta = ring as f32 / DOME_RINGS as f32 * FRAC_PI_2;
        let (sin_t, cos_t) = theta.sin_cos();
        for seg in 0..=ROUND_SEGMENTS {
            let phi = seg as f32 / ROUND_SEGMENTS as f32 * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let (dx, dy, dz) = (cos_t * cos_p, sin_t, cos_t * sin_p);
            geo.positions
                .push(point([0.5 + 0.5 * dx, dy, 0.5 + 0.5 * dz]));
            // ellipsoid with radii (0.5, 1, 0.5)
            geo.normals.push(direction([2.0 * dx, dy, 2.0 * dz]));
        }
    }
    let apex = geo.positions.len() as u32;
    geo.positions.push(point([0.5, 1.0, 0.5]));
    geo.normals.push([0.0, 1.0, 0.0, 0.0]);

    for ring in 0..DOME_RINGS - 1 {
        for seg in 0..ROUND_SEGMENTS {
            let a = ring * row + seg;
            let b = a + 1;
            let c = a + row;
            let d = c + 1;
            geo.indices.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    let top = (DOME_RINGS - 1) * row;
    for seg in 0..ROUND_SEGMENTS {
        let a = top + seg;
        geo.indices.extend_from_slice(&[a, apex, a + 1]);
    }
    geo
}

fn cylinder() -> UnitGeometry {
    let segs = ROUND_SEGMENTS;
    let count = (4 * (segs + 1) + 2) as usize;
    let mut geo = UnitGeometry {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
        indices: Vec::with_capacity((segs * 12) as usize),
    };
    let ring: Vec<(f32, f32)> = (0..=segs)
        .map(|i| (i as f32 / segs as f32 * TAU).sin_cos())
        .map(|(s, c)| (c, s))
        .collect();

    // side: bottom/top pairs
    for &(c, s) in &ring {
        let n = [c, 0.0, s, 0.0];
        geo.positions.push(point([0.5 + 0.5 * c, 0.0, 0.5 + 0.5 * s]));
        geo.normals.push(n);
        geo.positions.push(point([0.5 + 0.5 * c, 1.0, 0.5 + 0.5 * s]));
        geo.normals.push(n);
    }
    for i in 0..segs {
        let b0 = 2 * i;
        let t0 = b0 + 1;
        let b1 = b0 + 2;
        let t1 = b0 + 3;
        geo.indices.extend_from_slice(&[b0, t0, b1, b1, t0, t1]);
    }

    // caps: centre then rim
    for (y, ny) in [(1.0, 1.0), (0.0, -1.0)] {
        let centre = geo.positions.len() as u32;
        geo.positions.push(point([0.5, y, 0.5]));
        geo.normals.push([0.0, ny, 0.0, 0.0]);
        for &(c, s) in &ring {
            geo.positions.push(point([0.5 + 0.5 * c, y, 0.5 + 0.5 * s]));
            geo.normals.push([0.0, ny, 0.0, 0.0]);
        }
        for i in 0..segs {
            let r0 = centre + 1 + i;
            let r1 = r0 + 1;
            if ny > 0.0 {
                geo.indices.extend_from_slice(&[centre, r1, r0]);
            } else {
                geo.indices.extend_from_slice(&[centre, r0, r1]);
            }
        }
    }
    geo
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xyz(v: [f32; 4]) -> [f32; 3] {
        [v[0], v[1], v[2]]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    #[test]
    fn test_vertex_counts_match_geometry() {
        for prim in Primitive::ALL {
            let geo = prim.geometry();
            assert_eq!(geo.positions.len(), prim.vertex_count(), "{}", prim.name());
            assert_eq!(geo.normals.len(), prim.vertex_count(), "{}", prim.name());
            assert_eq!(geo.indices.len() % 3, 0, "{}", prim.name());
            assert!(geo
                .indices
                .iter()
                .all(|i| (*i as usize) < prim.vertex_count()));
        }
    }

    #[test]
    fn test_homogeneous_components() {
        for prim in Primitive::ALL {
            assert!(prim.positions().iter().all(|p| p[3] == 1.0), "{}", prim.name());
            assert!(prim.normals().iter().all(|n| n[3] == 0.0), "{}", prim.name());
        }
    }

    #[test]
    fn test_normals_are_unit_length() {
        for prim in Primitive::ALL {
            for n in prim.normals() {
                let len = dot(xyz(n), xyz(n)).sqrt();
                assert!((len - 1.0).abs() < 1e-5, "{}: {n:?}", prim.name());
            }
        }
    }

    #[test]
    fn test_indices_offset_by_base() {
        let local = Primitive::Cube.indices(0);
        let shifted = Primitive::Cube.indices(100);
        assert_eq!(local.len(), 36);
        for (a, b) in local.iter().zip(&shifted) {
            assert_eq!(*a + 100, *b);
        }
    }

    #[test]
    fn test_positions_inside_unit_box() {
        for prim in Primitive::ALL {
            for p in prim.positions() {
                for c in xyz(p) {
                    assert!((-1e-6..=1.0 + 1e-6).contains(&c), "{}: {p:?}", prim.name());
                }
            }
        }
    }

    #[test]
    fn test_faces_wind_outward() {
        // no slivers: every triangle has real area, and its geometric normal
        // agrees with the stored normal at each of its corners
        for prim in Primitive::ALL {
            let geo = prim.geometry();
            for tri in geo.indices.chunks(3) {
                let [a, b, c] = [0, 1, 2].map(|k| xyz(geo.positions[tri[k] as usize]));
                let geometric = face_normal(a, b, c);
                assert!(
                    dot(geometric, geometric).sqrt() > 1e-4,
                    "{}: degenerate {tri:?}",
                    prim.name()
                );
                for corner in tri {
                    let stored = xyz(geo.normals[*corner as usize]);
                    assert!(dot(geometric, stored) > 0.0, "{}: {tri:?}", prim.name());
                }
            }
        }
    }

    #[test]
    fn test_dome_closes_on_one_apex() {
        let geo = Primitive::RoundRoof.geometry();
        let apex: Vec<usize> = (0..geo.positions.len())
            .filter(|i| geo.positions[*i][1] == 1.0)
            .collect();
        assert_eq!(apex.len(), 1);
        assert_eq!(geo.positions[apex[0]], [0.5, 1.0, 0.5, 1.0]);
        let fan = geo
            .indices
            .iter()
            .filter(|i| **i as usize == apex[0])
            .count();
        assert_eq!(fan, ROUND_SEGMENTS as usize);
    }

    #[test]
    fn test_stepped_roof_top_is_half_size() {
        let top: Vec<[f32; 4]> = Primitive::SteppedRoof
            .positions()
            .into_iter()
            .filter(|p| p[1] == 1.0)
            .collect();
        assert!(!top.is_empty());
        for p in top {
            assert!((0.25..=0.75).contains(&p[0]) && (0.25..=0.75).contains(&p[2]));
        }
    }

    #[test]
    fn test_double_window_mullion_stands_proud() {
        let positions = Primitive::DoubleWindow.positions();
        assert!(positions[..4].iter().all(|p| p[2] == 0.0));
        assert!(positions[4..].iter().all(|p| p[2] > 0.0));
    }
}
