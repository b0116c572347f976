use flexscope_core::consts::PLACEHOLDER_IMAGE_SIZE;
use flexscope_core::input::ViewportEvent;
use flexscope_core::viewport::{ViewportTransform, ZoomDirection};

use crate::app::FlexscopeApp;
use crate::convert::{image_rect, to_point};

const GRID_CELLS: usize = 8;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    if app.console.viewport().is_none() {
        egui::CentralPanel::default().show(ctx, |ui| {
            super::placeholder(ui, "No image selected", Some("Pick one from the Gallery"));
        });
        return;
    }

    info_bar(ctx, app);

    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        ui.painter()
            .rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        handle_pointer(ui, &response, app, rect);
        handle_wheel(ctx, &response, app);

        let Some(viewport) = app.console.viewport() else {
            return;
        };
        if response.hovered() || viewport.is_dragging() {
            ctx.set_cursor_icon(if viewport.is_dragging() {
                egui::CursorIcon::Grabbing
            } else {
                egui::CursorIcon::Grab
            });
        }

        let transform = viewport.current_transform();
        draw_image(&ui.painter_at(rect), &transform, rect, &viewport.active_image().name);
    });
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, app: &mut FlexscopeApp, rect: egui::Rect) {
    let dragging = app
        .console
        .viewport()
        .is_some_and(|viewport| viewport.is_dragging());

    // Leaving the viewer ends the drag just like releasing the button.
    if dragging && !ui.rect_contains_pointer(rect) {
        app.send_viewport_event(ViewportEvent::PointerLeave);
        return;
    }

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let [x, y] = to_point(pos);
            app.send_viewport_event(ViewportEvent::PointerDown { x, y });
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let [x, y] = to_point(pos);
            app.send_viewport_event(ViewportEvent::PointerMove { x, y });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        app.send_viewport_event(ViewportEvent::PointerUp);
    }
}

fn handle_wheel(ctx: &egui::Context, response: &egui::Response, app: &mut FlexscopeApp) {
    if !response.hovered() {
        return;
    }
    let scroll = ctx.input(|i| i.raw_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }

    // egui reports wheel-away-from-user as positive; the viewer expects the
    // browser convention where that is negative.
    let suppress = app.send_viewport_event(ViewportEvent::Wheel {
        delta_y: -(scroll as f64),
    });
    if suppress {
        ctx.input_mut(|i| {
            i.raw_scroll_delta = egui::Vec2::ZERO;
            i.smooth_scroll_delta = egui::Vec2::ZERO;
        });
    }
}

/// Paint the opaque image surface. Pixel data is not available here, so the
/// image is a labelled grid of its logical size.
fn draw_image(painter: &egui::Painter, transform: &ViewportTransform, viewport: egui::Rect, name: &str) {
    let img = image_rect(transform, viewport, PLACEHOLDER_IMAGE_SIZE);
    painter.rect_filled(img, 0.0, egui::Color32::from_gray(70));

    let stroke = egui::Stroke::new(1.0, egui::Color32::from_gray(90));
    for i in 1..GRID_CELLS {
        let f = i as f32 / GRID_CELLS as f32;
        let x = img.left() + img.width() * f;
        let y = img.top() + img.height() * f;
        painter.line_segment([egui::pos2(x, img.top()), egui::pos2(x, img.bottom())], stroke);
        painter.line_segment([egui::pos2(img.left(), y), egui::pos2(img.right(), y)], stroke);
    }

    painter.rect_stroke(
        img,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(140)),
        egui::StrokeKind::Inside,
    );
    painter.text(
        img.center(),
        egui::Align2::CENTER_CENTER,
        name,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn info_bar(ctx: &egui::Context, app: &mut FlexscopeApp) {
    let Some(viewport) = app.console.viewport() else {
        return;
    };
    let name = viewport.active_image().name.clone();
    let percent = viewport.current_transform().zoom_percent();

    egui::TopBottomPanel::bottom("image_info").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Right-to-left: reversed visual order.
                if ui.button("Reset").on_hover_text("Reset").clicked() {
                    app.send_viewport_event(ViewportEvent::Reset);
                }
                if ui.button("+").on_hover_text("Zoom In").clicked() {
                    app.send_viewport_event(ViewportEvent::ZoomButton(ZoomDirection::In));
                }
                ui.label(format!("{percent}%"));
                if ui.button("\u{2212}").on_hover_text("Zoom Out").clicked() {
                    app.send_viewport_event(ViewportEvent::ZoomButton(ZoomDirection::Out));
                }
            });
        });
    });
}
