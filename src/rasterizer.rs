//! The rasterizer facade.
//!
//! [`Rasterizer`] owns the canvas and is its only writer. Each frame the
//! caller draws (lines, triangles, whole meshes), optionally injects an
//! overlay, then calls [`Rasterizer::render`] to hand the finished pixels
//! to a [`PresentationSink`] and start the next frame on a cleared canvas.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::Config;
use crate::error::Result;
use crate::geometry::{ScreenPoint, Vec3};
use crate::mesh::Geometry;
use crate::overlay::Overlay;
use crate::present::{Frame, PresentationSink};
use crate::projection;
use crate::render::{self, FillStrategy};
use serde::{Deserialize, Serialize};

/// How a mesh is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Flat-shaded filled faces, back faces culled.
    #[default]
    Shaded,
    /// Face edges only.
    Wireframe,
}

/// Software rasterizer over an owned [`Canvas`].
#[derive(Debug, Clone)]
pub struct Rasterizer {
    canvas: Canvas,
    clear_color: Color,
    wireframe_color: Color,
    light_direction: Vec3,
    fill: FillStrategy,
    overlay: Option<Overlay>,
}

impl Rasterizer {
    /// Create a rasterizer with a `width x height` canvas cleared to black.
    ///
    /// # Example
    ///
    /// ```
    /// use tiny_raster::rasterizer::Rasterizer;
    ///
    /// let r = Rasterizer::new(800, 600);
    /// assert_eq!(r.canvas().width(), 800);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let mut rasterizer = Self {
            canvas: Canvas::new(width, height),
            clear_color: Color::BLACK,
            wireframe_color: Color::GREEN,
            light_direction: Vec3::UNIT_Z,
            fill: FillStrategy::default(),
            overlay: None,
        };
        rasterizer.canvas.clear(rasterizer.clear_color);
        rasterizer
    }

    /// Create a rasterizer from the window and render sections of `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.window.width, config.window.height)
            .with_clear_color(config.render.clear_color)
            .with_wireframe_color(config.render.wireframe_color)
            .with_light_direction(config.render.light_direction)
            .with_fill_strategy(config.render.fill)
    }

    /// Set the clear color and clear the canvas to it.
    #[must_use]
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self.canvas.clear(color);
        self
    }

    /// Set the wireframe line color.
    #[must_use]
    pub fn with_wireframe_color(mut self, color: Color) -> Self {
        self.wireframe_color = color;
        self
    }

    /// Set the direction towards the light. A zero vector keeps the
    /// current direction.
    #[must_use]
    pub fn with_light_direction(mut self, direction: Vec3) -> Self {
        match direction.normalized() {
            Some(d) => self.light_direction = d,
            None => log::warn!("ignoring zero light direction"),
        }
        self
    }

    /// Set the fill strategy used by [`Rasterizer::draw`].
    #[must_use]
    pub fn with_fill_strategy(mut self, fill: FillStrategy) -> Self {
        self.fill = fill;
        self
    }

    // ========================================================================
    // Canvas
    // ========================================================================

    /// The canvas being drawn into.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Clear color.
    #[must_use]
    pub const fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Fill strategy used for shaded meshes.
    #[must_use]
    pub const fn fill_strategy(&self) -> FillStrategy {
        self.fill
    }

    /// Normalized direction towards the light.
    #[must_use]
    pub const fn light_direction(&self) -> Vec3 {
        self.light_direction
    }

    /// Reallocate the canvas; prior contents are discarded.
    ///
    /// A zero side leaves an empty canvas on which every draw is a no-op.
    pub fn resize_canvas(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        self.canvas.clear(self.clear_color);
    }

    /// Map a vertex to pixel coordinates on the current canvas.
    #[must_use]
    pub fn world_to_screen(&self, v: Vec3) -> ScreenPoint {
        projection::world_to_screen(v, self.canvas.width(), self.canvas.height())
    }

    /// Clamp a point onto the current canvas.
    #[must_use]
    pub fn clamp_to_canvas(&self, p: ScreenPoint) -> ScreenPoint {
        self.canvas.clamp(p)
    }

    // ========================================================================
    // Primitives
    // ========================================================================

    /// Draw a line between two screen points.
    pub fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: Color) {
        render::draw_line(&mut self.canvas, from.x, from.y, to.x, to.y, color);
    }

    /// Fill a triangle with the barycentric bounding-box strategy.
    pub fn draw_triangle(&mut self, a: ScreenPoint, b: ScreenPoint, c: ScreenPoint, color: Color) {
        render::fill_triangle_barycentric(&mut self.canvas, a, b, c, color);
    }

    /// Fill a triangle with the scanline sweep strategy.
    pub fn draw_triangle_sweep(
        &mut self,
        a: ScreenPoint,
        b: ScreenPoint,
        c: ScreenPoint,
        color: Color,
    ) {
        render::fill_triangle_sweep(&mut self.canvas, a, b, c, color);
    }

    /// Fill a triangle with an explicit strategy.
    pub fn fill_triangle(
        &mut self,
        strategy: FillStrategy,
        a: ScreenPoint,
        b: ScreenPoint,
        c: ScreenPoint,
        color: Color,
    ) {
        strategy.fill(&mut self.canvas, [a, b, c], color);
    }

    // ========================================================================
    // Meshes
    // ========================================================================

    /// Draw a mesh flat-shaded.
    ///
    /// Each face is lit by `max(0, n . light)` where `n` is the normalized
    /// `(v1 - v0) x (v2 - v0)`; faces with no light (back faces) and faces
    /// of zero area are skipped.
    pub fn draw<G: Geometry + ?Sized>(&mut self, mesh: &G) {
        let mut drawn = 0usize;
        for i in 0..mesh.face_count() {
            let [i0, i1, i2] = mesh.face(i);
            let (v0, v1, v2) = (mesh.vertex(i0), mesh.vertex(i1), mesh.vertex(i2));

            let Some(normal) = (v1 - v0).cross(v2 - v0).normalized() else {
                continue;
            };
            let intensity = normal.dot(self.light_direction);
            if intensity <= 0.0 {
                continue;
            }

            let corners = [
                self.world_to_screen(v0),
                self.world_to_screen(v1),
                self.world_to_screen(v2),
            ];
            self.fill.fill(&mut self.canvas, corners, Color::grey(intensity));
            drawn += 1;
        }
        log::trace!("shaded {drawn}/{} faces", mesh.face_count());
    }

    /// Draw every face edge of a mesh in the wireframe color.
    pub fn draw_wireframe<G: Geometry + ?Sized>(&mut self, mesh: &G) {
        for i in 0..mesh.face_count() {
            let face = mesh.face(i);
            for j in 0..3 {
                let from = self.world_to_screen(mesh.vertex(face[j]));
                let to = self.world_to_screen(mesh.vertex(face[(j + 1) % 3]));
                render::draw_line(&mut self.canvas, from.x, from.y, to.x, to.y, self.wireframe_color);
            }
        }
    }

    /// Draw a mesh in the given mode.
    pub fn draw_mesh<G: Geometry + ?Sized>(&mut self, mesh: &G, mode: RenderMode) {
        match mode {
            RenderMode::Shaded => self.draw(mesh),
            RenderMode::Wireframe => self.draw_wireframe(mesh),
        }
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Set the overlay composited on every following frame.
    pub fn draw_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Remove the pending overlay.
    pub fn clear_overlay(&mut self) {
        self.overlay = None;
    }

    /// The pending overlay, if any.
    #[must_use]
    pub const fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    /// Finish the frame: composite the overlay, hand the pixels to `sink`,
    /// then clear the canvas for the next frame.
    ///
    /// The canvas is cleared even when the sink fails.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sink reports.
    pub fn render<S: PresentationSink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        if let Some(overlay) = &self.overlay {
            self.canvas.composite(overlay);
        }

        let frame = Frame::new(self.canvas.width(), self.canvas.height(), self.canvas.pixels());
        let result = sink.present(&frame);
        match &result {
            Ok(()) => log::trace!("presented {}x{} frame", frame.width(), frame.height()),
            Err(e) => log::warn!("presentation failed: {e}"),
        }

        self.canvas.clear(self.clear_color);
        result
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
