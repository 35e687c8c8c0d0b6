//! Card list widgets.

use client_core::{CardView, CommandGateway, FocusController, PLACEHOLDER_NOTICE};
use egui::{load::TexturePoll, Align, Align2, Color32, FontId, RichText};

const THUMBNAIL_MAX: f32 = 220.0;

pub fn show_placeholder(ui: &mut egui::Ui) {
    ui.add_space(10.0);
    egui::Frame::group(ui.style())
        .fill(ui.visuals().selection.bg_fill.gamma_multiply(0.3))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(PLACEHOLDER_NOTICE).strong());
        });
}

pub fn show_cards(
    ui: &mut egui::Ui,
    cards: &[CardView],
    focus: &mut FocusController,
    gateway: &CommandGateway,
) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in cards {
                // Widget state (image, grid, button) is keyed by image id.
                ui.push_id(card.key, |ui| {
                    let (response, image_settled) = show_card(ui, card, gateway);
                    if focus.should_scroll(card) {
                        response.scroll_to_me(Some(Align::TOP));
                        if image_settled {
                            focus.settle(card.key);
                        }
                    }
                });
                ui.add_space(8.0);
            }
        });
}

/// Returns the card response and whether its image has stopped loading,
/// either ready or failed.
fn show_card(
    ui: &mut egui::Ui,
    card: &CardView,
    gateway: &CommandGateway,
) -> (egui::Response, bool) {
    let mut image_settled = false;
    let response = egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_top(|ui| {
                let image = egui::Image::new(card.source.as_str())
                    .max_size(egui::vec2(THUMBNAIL_MAX, THUMBNAIL_MAX))
                    .maintain_aspect_ratio(true)
                    .show_loading_spinner(true);
                image_settled = !matches!(
                    image.load_for_size(ui.ctx(), ui.available_size()),
                    Ok(TexturePoll::Pending { .. })
                );
                ui.add(image);
                ui.vertical(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(Align::Min), |ui| {
                        if ui.small_button("✕").on_hover_text("Remove").clicked() {
                            let _ = card.activate_close(gateway);
                        }
                    });
                    egui::Grid::new("metadata")
                        .num_columns(2)
                        .striped(true)
                        .show(ui, |ui| {
                            for (key, value) in &card.metadata {
                                ui.label(RichText::new(key).strong());
                                ui.label(value.as_str());
                                ui.end_row();
                            }
                        });
                    ui.add_space(4.0);
                    ui.label(RichText::new(&card.caption).small().weak());
                });
            });
        })
        .response;
    (response, image_settled)
}

/// Shown while files hover over the window.
pub fn paint_drop_hint(ui: &egui::Ui) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    painter.rect_filled(rect, 6.0, Color32::from_black_alpha(140));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "Drop to add",
        FontId::proportional(22.0),
        Color32::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use client_core::{FileUrlLocator, ResourceLocator};
    use egui::load::BytesPoll;

    fn load_through_file_loader(ctx: &egui::Context, uri: &str) -> Result<usize, String> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            match ctx.try_load_bytes(uri) {
                Ok(BytesPoll::Ready { bytes, .. }) => return Ok(bytes.len()),
                Ok(BytesPoll::Pending { .. }) if Instant::now() < deadline => {
                    std::thread::sleep(Duration::from_millis(5));
                }
                Ok(BytesPoll::Pending { .. }) => return Err(format!("{uri}: still pending")),
                Err(err) => return Err(err.to_string()),
            }
        }
    }

    #[test]
    fn card_sources_with_spaces_and_non_ascii_names_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = egui::Context::default();
        egui_extras::install_image_loaders(&ctx);

        for name in ["plain.png", "my image.png", "画像 1.png"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"\x89PNG\r\n\x1a\n").expect("write");
            let uri = FileUrlLocator.locate(&path.to_string_lossy());
            assert_eq!(load_through_file_loader(&ctx, &uri), Ok(8), "{name}");
        }
    }
}
