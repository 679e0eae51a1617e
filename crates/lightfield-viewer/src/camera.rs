use glam::DVec2;
use winit::event::{ElementState, MouseButton, WindowEvent};

/// Where the virtual camera sits on the view grid, each axis normalized to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: DVec2,
}

impl Camera {
    /// Grid centre; the position a fresh viewer starts from.
    pub const CENTER: DVec2 = DVec2::new(0.5, 0.5);

    pub fn new() -> Self {
        Self {
            position: Self::CENTER,
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Moves by `delta` and clamps each axis to [0, 1].
    pub fn offset(&mut self, delta: DVec2) {
        self.position = (self.position + delta).clamp(DVec2::ZERO, DVec2::ONE);
    }

    pub fn reset(&mut self) {
        self.position = Self::CENTER;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Which point a drag delta is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DragMode {
    /// Every move is measured from the press point, so deltas accumulate
    /// while the cursor stays away from it.
    #[default]
    Anchored,
    /// Every move is measured from the previous move.
    Incremental,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { reference: DVec2 },
}

/// Turns left-button drags into camera movement across the view grid.
pub struct CameraController {
    mode: DragMode,
    state: DragState,
    cursor: Option<DVec2>,
}

impl CameraController {
    /// Creates an idle controller.
    pub fn new(mode: DragMode) -> Self {
        Self {
            mode,
            state: DragState::Idle,
            cursor: None,
        }
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Handles window events and updates the camera.
    ///
    /// `viewport` is the surface size in physical pixels, the same space as
    /// cursor positions.
    pub fn handle_event(&mut self, event: &WindowEvent, viewport: [u32; 2], camera: &mut Camera) {
        match event {
            WindowEvent::MouseInput {
                button: MouseButton::Left,
                state,
                ..
            } => match state {
                ElementState::Pressed => {
                    if let Some(cursor) = self.cursor {
                        self.press(cursor);
                    }
                }
                ElementState::Released => self.release(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                let cursor = DVec2::new(position.x, position.y);
                self.cursor = Some(cursor);
                self.drag_to(cursor, viewport, camera);
            }
            _ => {}
        }
    }

    /// Starts a drag at `point`.
    pub fn press(&mut self, point: DVec2) {
        self.state = DragState::Dragging { reference: point };
    }

    /// Moves the camera by the cursor offset from the reference point,
    /// normalized by the shorter viewport side.
    pub fn drag_to(&mut self, point: DVec2, viewport: [u32; 2], camera: &mut Camera) {
        let DragState::Dragging { reference } = self.state else {
            return;
        };

        let size = viewport[0].min(viewport[1]);
        if size == 0 {
            return;
        }

        camera.offset((point - reference) / size as f64);

        if self.mode == DragMode::Incremental {
            self.state = DragState::Dragging { reference: point };
        }
    }

    pub fn release(&mut self) {
        self.state = DragState::Idle;
    }
}
