//! Rendering widgets into depth ranges, and clipping canvases to their
//! viewports.
//!
//! The renderer looks down the -Z axis from the origin. Widgets are laid out
//! on the plane `z = -1`, and each widget is given a range of depths to draw
//! into so that later widgets are drawn in front of earlier ones.

use guimath::{Float, Matrix, VectorF, interpolate};

use crate::{Mesh, NEAR_PLANE_OFFSET, Plane, Result, cut_all, transform};

/// Default distance to the front of the depth range.
pub const DEFAULT_MIN_Z: Float = 0.1;
/// Default distance to the back of the depth range.
pub const DEFAULT_MAX_Z: Float = 10.0;

/// Something that can be rendered to a mesh.
pub trait Render {
    /// Renders to a mesh whose depth is between `min_z` and `max_z`.
    ///
    /// `has_focus` is whether this element has keyboard focus.
    fn render(&self, min_z: Float, max_z: Float, has_focus: bool) -> Result<Mesh>;

    /// Renders with the default depth range and with focus.
    fn render_default(&self) -> Result<Mesh> {
        self.render(DEFAULT_MIN_Z, DEFAULT_MAX_Z, true)
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, min_z: Float, max_z: Float, has_focus: bool) -> Result<Mesh> {
        (**self).render(min_z, max_z, has_focus)
    }
}

/// Renders each element in order into its own slice of the depth range, with
/// the first element at the back, and concatenates the results.
///
/// Element `i` of `n` is rendered into the range from
/// `lerp((i+1)/n, max_z, min_z)` to `lerp(i/n, max_z, min_z)`. Only the
/// element at `focus_index` has focus, and only if `has_focus` is true.
pub fn render_layers(
    elements: &[&dyn Render],
    min_z: Float,
    max_z: Float,
    has_focus: bool,
    focus_index: Option<usize>,
) -> Result<Mesh> {
    let mut ret = Mesh::new();
    let n = elements.len() as Float;
    for (i, element) in elements.iter().enumerate() {
        let layer_min_z = interpolate((i + 1) as Float / n, max_z, min_z);
        let layer_max_z = interpolate(i as Float / n, max_z, min_z);
        let focused = has_focus && focus_index == Some(i);
        ret.add(element.render(layer_min_z, layer_max_z, focused)?)?;
    }
    Ok(ret)
}

/// Ordered stack of elements, rendered back to front.
#[derive(Default)]
pub struct Layers<'a> {
    elements: Vec<Box<dyn Render + 'a>>,
    focus_index: Option<usize>,
}

impl std::fmt::Debug for Layers<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layers")
            .field("len", &self.elements.len())
            .field("focus_index", &self.focus_index)
            .finish()
    }
}

impl<'a> Layers<'a> {
    /// Constructs an empty stack.
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds an element in front of all existing elements.
    pub fn push(&mut self, element: impl Render + 'a) -> &mut Self {
        self.elements.push(Box::new(element));
        self
    }
    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }
    /// Returns whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    /// Returns the index of the element with focus.
    pub fn focus_index(&self) -> Option<usize> {
        self.focus_index
    }
    /// Sets the element with focus. An index past the end clears focus.
    pub fn set_focus(&mut self, index: Option<usize>) {
        self.focus_index = index.filter(|&i| i < self.elements.len());
    }
}

impl Render for Layers<'_> {
    fn render(&self, min_z: Float, max_z: Float, has_focus: bool) -> Result<Mesh> {
        let elements = self.elements.iter().map(|e| &**e as &dyn Render).collect::<Vec<_>>();
        render_layers(&elements, min_z, max_z, has_focus, self.focus_index)
    }
}

/// Rectangle of the `z = -1` plane that a canvas draws into.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub min_x: Float,
    /// Right edge.
    pub max_x: Float,
    /// Bottom edge.
    pub min_y: Float,
    /// Top edge.
    pub max_y: Float,
}

impl Viewport {
    /// Constructs a viewport from its edges.
    pub const fn new(min_x: Float, max_x: Float, min_y: Float, max_y: Float) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Returns the width of the viewport.
    pub fn width(&self) -> Float {
        self.max_x - self.min_x
    }
    /// Returns the height of the viewport.
    pub fn height(&self) -> Float {
        self.max_y - self.min_y
    }
    /// Returns the center of the viewport.
    pub fn center(&self) -> (Float, Float) {
        (
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_y + self.max_y),
        )
    }
    /// Returns half the length of the shorter side. Canvas coordinates from
    /// -1 to 1 span the shorter side.
    pub fn scale(&self) -> Float {
        0.5 * self.width().min(self.height())
    }
    /// Returns whether a point on the `z = -1` plane is inside the viewport,
    /// including its boundary.
    pub fn contains(&self, x: Float, y: Float) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }

    /// Returns the transformation from canvas coordinates to viewport
    /// coordinates, scaled along each ray from the origin.
    pub fn canvas_to_viewport(&self) -> Matrix {
        let s = self.scale();
        let (cx, cy) = self.center();
        Matrix::from_rows([
            [s, 0.0, -cx, 0.0],
            [0.0, s, -cy, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }
    /// Converts a point on the `z = -1` plane to canvas coordinates. This is
    /// used to locate the mouse within a canvas.
    pub fn viewport_to_canvas(&self, x: Float, y: Float) -> (Float, Float) {
        let s = self.scale();
        let (cx, cy) = self.center();
        ((x - cx) / s, (y - cy) / s)
    }

    /// Returns the half-spaces bounding the visible region: the pyramid from
    /// the origin through the edges of the viewport, in front of the near
    /// plane.
    pub fn clip_planes(&self) -> [Plane; 5] {
        [
            Plane::new(VectorF::new(-1.0, 0.0, -self.min_x), 0.0),
            Plane::new(VectorF::new(1.0, 0.0, self.max_x), 0.0),
            Plane::new(VectorF::new(0.0, -1.0, -self.min_y), 0.0),
            Plane::new(VectorF::new(0.0, 1.0, self.max_y), 0.0),
            Plane::new(VectorF::Z, NEAR_PLANE_OFFSET),
        ]
    }
}

/// Maps `mesh` from canvas coordinates into `viewport`, clips it to the
/// visible region, and scales it uniformly so that its farthest point is at
/// depth `max_z`.
///
/// # Errors
///
/// Returns an error if clipping fails.
pub fn clip_to_viewport(mesh: &Mesh, viewport: &Viewport, max_z: Float) -> Result<Mesh> {
    let mapped = transform(&viewport.canvas_to_viewport(), mesh);
    let clipped = cut_all(&mapped, &viewport.clip_planes())?;
    log::trace!(
        "clipped canvas mesh from {} to {} triangles",
        mesh.len(),
        clipped.len(),
    );
    // Every remaining point is in front of the near plane, so `min_z` is
    // negative.
    match clipped.min_z() {
        None => Ok(clipped),
        Some(min_z) => Ok(transform(&Matrix::scale(max_z / -min_z), &clipped)),
    }
}

/// Element that draws a mesh produced on demand, clipped to a viewport.
pub struct Canvas<F> {
    /// Region of the screen the canvas occupies.
    pub viewport: Viewport,
    generate: F,
}

impl<F> std::fmt::Debug for Canvas<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl<F: Fn() -> Result<Mesh>> Canvas<F> {
    /// Constructs a canvas that calls `generate` each time it is rendered.
    pub fn new(viewport: Viewport, generate: F) -> Self {
        Self { viewport, generate }
    }
}

impl<F: Fn() -> Result<Mesh>> Render for Canvas<F> {
    fn render(&self, _min_z: Float, max_z: Float, _has_focus: bool) -> Result<Mesh> {
        clip_to_viewport(&(self.generate)()?, &self.viewport, max_z)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use guimath::{Color, EPSILON, assert_approx_eq};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Image, TextureCoord, TextureDescriptor, Triangle, Vertex, generate};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Square from `(-r, -r)` to `(r, r)` at depth `z`.
    fn square(r: Float, z: Float) -> Mesh {
        let td = TextureDescriptor::whole(Image::new(1, 1));
        let p = |x, y| (VectorF::new(x, y, z), Color::WHITE);
        generate::quadrilateral(&td, [p(-r, -r), p(r, -r), p(r, r), p(-r, r)])
    }

    #[test]
    fn test_clip_to_viewport_bounds_and_depth() {
        init_logging();
        let viewport = Viewport::new(-1.0, 3.0, -1.0, 1.0);
        let mesh = clip_to_viewport(&square(3.0, -1.0), &viewport, 10.0).expect("clip");
        assert!(!mesh.is_empty());
        assert_approx_eq!(mesh.min_z().expect("nonempty"), -10.0);
        for v in mesh.iter().flat_map(|tri| tri.vertices) {
            // Project back onto the `z = -1` plane.
            let x = v.position.x / -v.position.z;
            let y = v.position.y / -v.position.z;
            assert!((-1.0 - EPSILON..=3.0 + EPSILON).contains(&x), "{x}");
            assert!((-1.0 - EPSILON..=1.0 + EPSILON).contains(&y), "{y}");
        }
    }

    #[test]
    fn test_clip_to_viewport_behind_camera() {
        init_logging();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0);
        let mesh = clip_to_viewport(&square(1.0, 1.0), &viewport, 10.0).expect("clip");
        assert!(mesh.is_empty());
        assert!(clip_to_viewport(&Mesh::new(), &viewport, 10.0).expect("clip").is_empty());
    }

    #[test]
    fn test_viewport_canvas_round_trip() {
        let viewport = Viewport::new(0.0, 4.0, 1.0, 2.0);
        assert_eq!(viewport.scale(), 0.5);
        assert!(viewport.contains(4.0, 1.5));
        assert!(!viewport.contains(2.0, 2.5));

        let p = viewport.canvas_to_viewport().apply(VectorF::new(0.5, -1.0, -1.0));
        assert_approx_eq!(p, VectorF::new(2.25, 1.0, -1.0));
        let (x, y) = viewport.viewport_to_canvas(p.x, p.y);
        assert_approx_eq!(x, 0.5);
        assert_approx_eq!(y, -1.0);
    }

    #[test]
    fn test_canvas_render() {
        init_logging();
        let viewport = Viewport::new(-1.0, 1.0, -1.0, 1.0);
        let canvas = Canvas::new(viewport, || Ok(square(0.5, -1.0)));
        let mesh = canvas.render_default().expect("render");
        assert_eq!(mesh.len(), 2);
        assert_approx_eq!(mesh.min_z().expect("nonempty"), -DEFAULT_MAX_Z);

        let td = TextureDescriptor::whole(Image::new(1, 1));
        let failing = Canvas::new(viewport, || {
            generate::line(&[VectorF::ZERO, VectorF::Z], &td, Color::WHITE, 0.1)
        });
        assert!(failing.render_default().is_err());
    }

    /// Element that records how it was rendered and emits one triangle at
    /// the back of its range.
    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(Float, Float, bool)>>,
    }

    impl Render for Recorder {
        fn render(&self, min_z: Float, max_z: Float, has_focus: bool) -> Result<Mesh> {
            self.calls.borrow_mut().push((min_z, max_z, has_focus));
            let position = VectorF::new(0.0, 0.0, -max_z);
            let v = Vertex::new(position, Color::WHITE, TextureCoord::default());
            Ok(Mesh::from_triangles(None, vec![Triangle::new(v, v, v)]))
        }
    }

    #[test]
    fn test_render_layers() {
        let recorders: [Recorder; 4] = Default::default();
        let elements: Vec<&dyn Render> = recorders.iter().map(|r| r as &dyn Render).collect();
        let mesh = render_layers(&elements, 0.0, 4.0, true, Some(2)).expect("render");

        // First element at the back.
        let depths = mesh.iter().map(|tri| tri.vertices[0].position.z).collect::<Vec<_>>();
        assert_eq!(depths, [-4.0, -3.0, -2.0, -1.0]);
        for (i, r) in recorders.iter().enumerate() {
            let z = i as Float;
            assert_eq!(*r.calls.borrow(), [(3.0 - z, 4.0 - z, i == 2)]);
        }

        // Focus only reaches an element if the container has it.
        render_layers(&elements, 0.0, 4.0, false, Some(2)).expect("render");
        assert!(recorders.iter().all(|r| !r.calls.borrow()[1].2));

        assert!(render_layers(&[], 0.0, 4.0, true, None).expect("render").is_empty());
    }

    #[test]
    fn test_nested_layers() {
        let recorders: [Recorder; 3] = Default::default();
        let mut inner = Layers::new();
        inner.push(&recorders[1]).push(&recorders[2]);
        inner.set_focus(Some(1));
        let mut outer = Layers::new();
        outer.push(&recorders[0]).push(inner);
        outer.set_focus(Some(1));
        assert_eq!(outer.len(), 2);

        let mesh = outer.render(0.0, 4.0, true).expect("render");
        assert_eq!(mesh.len(), 3);
        assert_eq!(*recorders[0].calls.borrow(), [(2.0, 4.0, false)]);
        assert_eq!(*recorders[1].calls.borrow(), [(1.0, 2.0, false)]);
        assert_eq!(*recorders[2].calls.borrow(), [(0.0, 1.0, true)]);

        outer.set_focus(Some(5));
        assert_eq!(outer.focus_index(), None);
    }
}
