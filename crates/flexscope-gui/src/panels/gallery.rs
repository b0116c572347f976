use flexscope_core::gallery::ImageDescriptor;

use crate::app::FlexscopeApp;

const CARD_WIDTH: f32 = 220.0;
const THUMB_HEIGHT: f32 = 120.0;

enum CardAction {
    Open(u32),
    Add(u32),
}

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        if app.console.gallery().is_empty() {
            super::placeholder(ui, "No captured images", None);
            return;
        }

        let active_id = app.console.selected_image().map(|img| img.id);
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for item in app.console.gallery().iter() {
                    if let Some(a) = card(ui, item, active_id == Some(item.id)) {
                        action = Some(a);
                    }
                }
            });
        });
    });

    let result = match action {
        Some(CardAction::Open(id)) => app.console.open_image(id),
        Some(CardAction::Add(id)) => app.console.add_image(id),
        None => Ok(()),
    };
    if let Err(e) = result {
        app.ui_state.add_log(format!("ERROR: {e}"));
    }
}

fn card(ui: &mut egui::Ui, item: &ImageDescriptor, active: bool) -> Option<CardAction> {
    let mut action = None;
    let stroke = if active {
        ui.visuals().selection.stroke
    } else {
        ui.visuals().widgets.noninteractive.bg_stroke
    };

    egui::Frame::group(ui.style()).stroke(stroke).show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            let (rect, thumb) =
                ui.allocate_exact_size(egui::vec2(CARD_WIDTH, THUMB_HEIGHT), egui::Sense::click());
            ui.painter()
                .rect_filled(rect, 2.0, egui::Color32::from_gray(60));
            if thumb.clicked() {
                action = Some(CardAction::Open(item.id));
            }

            if ui.link(egui::RichText::new(&item.name).strong()).clicked() {
                action = Some(CardAction::Open(item.id));
            }
            ui.small(&item.timestamp);
            ui.horizontal(|ui| {
                if let Some(ref tag) = item.tag {
                    ui.small(egui::RichText::new(tag).color(ui.visuals().selection.bg_fill));
                }
                if !item.selected && ui.button("ADD").clicked() {
                    action = Some(CardAction::Add(item.id));
                }
            });
        });
    });

    action
}
