//! Parameter panel drawn with egui on top of the refocused view.

use crate::viewer::ViewerState;

/// Draws the focus/aperture controls and light-field info.
pub fn draw_controls(ctx: &egui::Context, viewer: &mut ViewerState) {
    egui::Window::new("Light Field")
        .default_pos([12.0, 12.0])
        .resizable(false)
        .show(ctx, |ui| {
            let mut focus = viewer.focus_point();
            let focus_slider = egui::Slider::new(&mut focus, -0.05..=0.05)
                .text("Focus")
                .clamp_to_range(false);
            if ui.add(focus_slider).changed() {
                viewer.set_focus_point(focus);
            }

            let max_aperture = viewer
                .shape()
                .map_or(10.0, |s| s.rows.max(s.cols) as f32);
            let mut aperture = viewer.aperture_size();
            let aperture_slider = egui::Slider::new(&mut aperture, 0.0..=max_aperture)
                .text("Aperture")
                .clamp_to_range(false);
            if ui.add(aperture_slider).changed() {
                viewer.set_aperture_size(aperture);
            }

            ui.separator();

            let position = viewer.camera.position();
            ui.label(format!("Camera: ({:.3}, {:.3})", position.x, position.y));
            if let (Some(k), Some(shape)) = (viewer.nearest_view(), viewer.shape()) {
                let (row, col) = shape.cell(k);
                ui.label(format!("Nearest view: #{k} (row {row}, col {col})"));
            }
            if ui.button("Reset camera").clicked() {
                viewer.camera.reset();
            }

            ui.separator();

            match viewer.shape() {
                Some(shape) => {
                    ui.label(format!(
                        "{} x {} views of {}",
                        shape.rows,
                        shape.cols,
                        viewer.image_size()
                    ));
                }
                None => {
                    ui.label("No light field loaded. Drop a directory of views here.");
                }
            }
        });
}
