/// Camera maps between screen pixels and grid cells for the host view.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
    /// Offset captured when the current pan gesture began
    pan_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub const MIN_ZOOM: f32 = 0.25;
    pub const MAX_ZOOM: f32 = 8.0;

    pub fn new() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            pan_anchor: None,
        }
    }

    /// Center a grid of the given size inside a viewport
    pub fn centered(grid: (usize, usize), viewport: (f32, f32), cell_size: f32) -> Self {
        Self {
            offset_x: (viewport.0 - grid.0 as f32 * cell_size) / 2.0,
            offset_y: (viewport.1 - grid.1 as f32 * cell_size) / 2.0,
            ..Self::new()
        }
    }

    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    /// Move the view so it sits `offset` pixels away from where the
    /// current drag started
    pub fn pan_from_anchor(&mut self, offset: (f32, f32)) {
        let anchor = *self.pan_anchor.get_or_insert((self.offset_x, self.offset_y));
        self.offset_x = anchor.0 + offset.0;
        self.offset_y = anchor.1 + offset.1;
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Convert screen coordinates to grid coordinates (may be off-grid)
    pub fn screen_to_grid(&self, screen: (f32, f32), cell_size: f32) -> (i32, i32) {
        let scale = cell_size * self.zoom;
        let grid_x = ((screen.0 - self.offset_x) / scale).floor() as i32;
        let grid_y = ((screen.1 - self.offset_y) / scale).floor() as i32;
        (grid_x, grid_y)
    }

    /// Convert grid coordinates to the screen position of the cell's corner
    pub fn grid_to_screen(&self, grid_x: usize, grid_y: usize, cell_size: f32) -> (f32, f32) {
        let scale = cell_size * self.zoom;
        (
            grid_x as f32 * scale + self.offset_x,
            grid_y as f32 * scale + self.offset_y,
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_grid_inverse() {
        let mut camera = Camera::new();
        camera.offset_x = 15.0;
        camera.zoom = 2.0;
        let (sx, sy) = camera.grid_to_screen(4, 7, 10.0);
        assert_eq!(camera.screen_to_grid((sx + 1.0, sy + 1.0), 10.0), (4, 7));
    }

    #[test]
    fn test_left_of_grid_is_negative() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_grid((-0.5, 3.0), 10.0), (-1, 0));
    }

    #[test]
    fn test_pan_is_relative_to_anchor() {
        let mut camera = Camera::new();
        camera.pan_from_anchor((5.0, 0.0));
        camera.pan_from_anchor((8.0, -2.0));
        assert_eq!((camera.offset_x, camera.offset_y), (8.0, -2.0));

        camera.end_pan();
        camera.pan_from_anchor((1.0, 1.0));
        assert_eq!((camera.offset_x, camera.offset_y), (9.0, -1.0));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new();
        camera.zoom_by(100.0);
        assert_eq!(camera.zoom, Camera::MAX_ZOOM);
    }
}
