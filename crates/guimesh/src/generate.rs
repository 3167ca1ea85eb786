//! Mesh generation for quadrilaterals, boxes, and lines.
//!
//! Lines are built as a ribbon of quadrilaterals. At each point of the line an
//! edge is placed perpendicular to the line (or along the miter direction at a
//! joint), and consecutive edges are joined by a quadrilateral whose texture is
//! the slice of the line's texture proportional to arc length.

use guimath::{Color, EPSILON, Float, VectorF};
use itertools::Itertools;

use crate::{MITER_FLOOR, Mesh, Result, TextureDescriptor, Triangle, Vertex};

/// Constructs a quadrilateral from four corners in counterclockwise order.
///
/// The quadrilateral is split into the triangles `(0, 1, 2)` and `(2, 3, 0)`.
/// Corners are assigned the texture coordinates of `texture`, starting from
/// the bottom left and proceeding counterclockwise. No check is made that the
/// corners are planar or convex.
pub fn quadrilateral(texture: &TextureDescriptor, corners: [(VectorF, Color); 4]) -> Mesh {
    let texture_coords = texture.corners();
    let [v1, v2, v3, v4] = std::array::from_fn(|i| {
        let (position, color) = corners[i];
        Vertex::new(position, color, texture_coords[i])
    });
    Mesh::from_triangles(
        Some(texture.image.clone()),
        vec![Triangle::new(v1, v2, v3), Triangle::new(v3, v4, v1)],
    )
}

/// Textures for each face of [`unit_box()`]. A face with no texture is
/// omitted.
#[derive(Debug, Default, Copy, Clone)]
pub struct BoxFaces<'a> {
    /// Face at `x = 0`.
    pub nx: Option<&'a TextureDescriptor>,
    /// Face at `x = 1`.
    pub px: Option<&'a TextureDescriptor>,
    /// Face at `y = 0`.
    pub ny: Option<&'a TextureDescriptor>,
    /// Face at `y = 1`.
    pub py: Option<&'a TextureDescriptor>,
    /// Face at `z = 0`.
    pub nz: Option<&'a TextureDescriptor>,
    /// Face at `z = 1`.
    pub pz: Option<&'a TextureDescriptor>,
}

impl<'a> BoxFaces<'a> {
    /// Uses the same texture for all six faces.
    pub fn all(texture: &'a TextureDescriptor) -> Self {
        Self {
            nx: Some(texture),
            px: Some(texture),
            ny: Some(texture),
            py: Some(texture),
            nz: Some(texture),
            pz: Some(texture),
        }
    }
}

/// Constructs the white cube from `(0, 0, 0)` to `(1, 1, 1)`, with the
/// exterior of each face wound counterclockwise.
///
/// # Errors
///
/// Returns [`crate::MeshError::TextureMismatch`] if two faces use different
/// images.
pub fn unit_box(faces: BoxFaces<'_>) -> Result<Mesh> {
    // Bit 0 is X, bit 1 is Y, and bit 2 is Z.
    let corner = |i: u8| {
        let bit = |b: u8| ((i >> b) & 1) as Float;
        (VectorF::new(bit(0), bit(1), bit(2)), Color::WHITE)
    };

    let mut mesh = Mesh::new();
    for (texture, indices) in [
        (faces.nx, [0, 4, 6, 2]),
        (faces.px, [5, 1, 3, 7]),
        (faces.ny, [0, 1, 5, 4]),
        (faces.py, [6, 7, 3, 2]),
        (faces.nz, [1, 0, 2, 3]),
        (faces.pz, [4, 5, 7, 6]),
    ] {
        if let Some(texture) = texture {
            mesh.add(quadrilateral(texture, indices.map(corner)))?;
        }
    }
    Ok(mesh)
}

/// Cross-section of a line at one of its points.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Edge {
    /// Point on the left side of the line, looking along it with +Z toward
    /// the viewer.
    left: VectorF,
    /// Point on the right side of the line.
    right: VectorF,
    /// Arc length from the start of the line.
    distance: Float,
}

impl Edge {
    fn new(center: VectorF, dir: VectorF, width: Float, distance: Float) -> Self {
        Self {
            left: center - dir * width,
            right: center + dir * width,
            distance,
        }
    }
}

/// Returns the unit vector perpendicular to `tangent` in the XY plane,
/// pointing to the right of it.
fn perpendicular(tangent: VectorF) -> Result<VectorF> {
    Ok(tangent.cross(VectorF::Z).normalize()?)
}

fn start_edge(start: VectorF, next: VectorF, distance: Float, width: Float) -> Result<Edge> {
    let tangent = (next - start).normalize()?;
    Ok(Edge::new(start, perpendicular(tangent)?, width, distance))
}

fn end_edge(prev: VectorF, end: VectorF, distance: Float, width: Float) -> Result<Edge> {
    let tangent = (end - prev).normalize()?;
    Ok(Edge::new(end, perpendicular(tangent)?, width, distance))
}

/// Returns the edge at the joint `p2` between the segments `p1 -> p2` and
/// `p2 -> p3`.
fn middle_edge(
    p1: VectorF,
    p2: VectorF,
    p3: VectorF,
    distance: Float,
    width: Float,
) -> Result<Edge> {
    let t1 = (p2 - p1).normalize()?;
    let t2 = (p2 - p3).normalize()?;
    let mut dir = t1 + t2;
    if dir.abs_squared() < EPSILON * EPSILON {
        // The line continues straight through `p2`.
        dir = perpendicular(t1)?;
    } else {
        dir = dir.normalize()?;
        if dir.dot(t1.cross(VectorF::Z)) < 0.0 {
            dir = -dir;
        }
        dir *= miter_scale(p1, p2, p3, t1, t2, width);
    }
    Ok(Edge::new(p2, dir, width, distance))
}

/// Returns the length of the miter at a joint, as a multiple of the line
/// width.
///
/// The ideal miter length is `sqrt(2 / (1 - t1·t2))`. At sharp joints this
/// grows without bound, so it is limited to the length of the shorter adjacent
/// segment, or [`MITER_FLOOR`] line widths if that is larger.
fn miter_scale(
    p1: VectorF,
    p2: VectorF,
    p3: VectorF,
    t1: VectorF,
    t2: VectorF,
    width: Float,
) -> Float {
    let shorter_segment = (p2 - p1).abs_squared().min((p2 - p3).abs_squared()).sqrt();
    let limit = (shorter_segment / width).max(MITER_FLOOR);
    let ideal = Float::sqrt(2.0) / (1.0 - t1.dot(t2)).max(0.0).sqrt();
    limit.min(ideal)
}

/// Removes each point that is within [`EPSILON`] of the last point kept.
fn dedup_points(points: &[VectorF]) -> Vec<VectorF> {
    points
        .iter()
        .copied()
        .dedup_by(|a, b| (*b - *a).abs_squared() < EPSILON * EPSILON)
        .collect()
}

/// Joins consecutive edges with quadrilaterals, slicing the texture by arc
/// length.
fn ribbon<'a>(
    edges: impl IntoIterator<Item = &'a Edge>,
    texture: &TextureDescriptor,
    color: Color,
    total_distance: Float,
) -> Result<Mesh> {
    let mut mesh = Mesh::new();
    for (e0, e1) in edges.into_iter().tuple_windows() {
        let segment_texture = texture.sub_texture(
            e0.distance / total_distance,
            e1.distance / total_distance,
            0.0,
            1.0,
        );
        mesh.add(quadrilateral(
            &segment_texture,
            [
                (e0.right, color),
                (e1.right, color),
                (e1.left, color),
                (e0.left, color),
            ],
        ))?;
    }
    Ok(mesh)
}

/// Constructs an open line through `points` with half-width `width`.
///
/// Consecutive points closer than [`EPSILON`] are merged. If fewer than two
/// distinct points remain, the result is empty. The texture's U axis runs
/// along the line in proportion to arc length and its V axis runs across it.
///
/// # Errors
///
/// Returns an error if some segment of the line is parallel to the Z axis.
pub fn line(
    points: &[VectorF],
    texture: &TextureDescriptor,
    color: Color,
    width: Float,
) -> Result<Mesh> {
    let points = dedup_points(points);
    let (&[first, second, ..], &[.., second_last, last]) = (&*points, &*points) else {
        return Ok(Mesh::new());
    };

    let mut distance = 0.0;
    let mut edges = Vec::with_capacity(points.len());
    edges.push(start_edge(first, second, distance, width)?);
    for (&p1, &p2, &p3) in points.iter().tuple_windows() {
        distance += (p2 - p1).abs();
        edges.push(middle_edge(p1, p2, p3, distance, width)?);
    }
    distance += (last - second_last).abs();
    edges.push(end_edge(second_last, last, distance, width)?);

    ribbon(&edges, texture, color, distance)
}

/// Constructs a closed line through `points` with half-width `width`, joining
/// the last point back to the first.
///
/// Points are merged as in [`line()`], and a final point that coincides with
/// the first is dropped. With only two distinct points, this is the same as
/// [`line()`].
///
/// The texture's U axis runs once around the loop, so the closing segment
/// ends at `u = 1` instead of running backward to `u = 0`.
///
/// # Errors
///
/// Returns an error if some segment of the line is parallel to the Z axis.
pub fn line_loop(
    points: &[VectorF],
    texture: &TextureDescriptor,
    color: Color,
    width: Float,
) -> Result<Mesh> {
    let mut points = dedup_points(points);
    if let (Some(&first), Some(&last)) = (points.first(), points.last())
        && points.len() > 1
        && (last - first).abs_squared() < EPSILON * EPSILON
    {
        points.pop();
    }
    if points.len() < 3 {
        return line(&points, texture, color, width);
    }

    // The edge at each point depends on the point before it and the point
    // after it, so edge `i` is at point `i + 1`.
    let mut distance = 0.0;
    let mut edges = Vec::with_capacity(points.len() + 1);
    for (&p1, &p2, &p3) in points.iter().circular_tuple_windows() {
        edges.push(middle_edge(p1, p2, p3, distance, width)?);
        distance += (p3 - p2).abs();
    }
    // Close the loop with a copy of the first edge at the end of the texture.
    if let Some(&first_edge) = edges.first() {
        edges.push(Edge {
            distance,
            ..first_edge
        });
    }

    ribbon(&edges, texture, color, distance)
}
