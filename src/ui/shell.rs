// Folio - ui/shell.rs
//
// One full frame of the window: theme synchronisation, the sidebar, and the
// animated content area. Kept free of eframe so frames can be driven from a
// bare egui::Context.

use super::panels;
use super::theme::{self, ThemeSync};
use crate::app::state::AppState;
use crate::core::motion::MotionFrame;

/// Frame-to-frame UI bookkeeping that is not application state.
#[derive(Debug, Default)]
pub struct Shell {
    theme: ThemeSync,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// The theme flag last pushed into the egui context.
    pub fn applied_theme(&self) -> Option<bool> {
        self.theme.applied()
    }

    /// Lay out and paint one frame. Returns what the content area drew.
    pub fn show(&mut self, ctx: &egui::Context, state: &mut AppState) -> MotionFrame {
        // Runs before anything is painted, including on the first frame.
        self.theme.sync(ctx, state.dark_mode());
        let palette = theme::palette(state.dark_mode());

        egui::SidePanel::left("sidebar")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(
                egui::Frame::default().inner_margin(egui::Margin::same(theme::SIDEBAR_MARGIN)),
            )
            .show(ctx, |ui| {
                let margin = f32::from(theme::SIDEBAR_MARGIN);
                panels::sidebar::paint_background(ui, ui.max_rect().expand(margin), &palette);
                panels::sidebar::render(ui, state, &palette);
            });

        // A toggle clicked in the sidebar takes effect before the content
        // area; the pass is redone so the sidebar repaints in it too.
        if self.theme.sync(ctx, state.dark_mode()) {
            ctx.request_discard("theme toggled");
        }
        let palette = theme::palette(state.dark_mode());

        let now = ctx.input(|i| i.time);
        let frame = state.motion_frame(now);

        let central_frame = egui::Frame::central_panel(&ctx.style())
            .inner_margin(egui::Margin::same(theme::CONTENT_MARGIN));
        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        let avail = ui.available_rect_before_wrap();
                        let width = avail.width().min(theme::CONTENT_MAX_WIDTH);
                        let left = avail.left() + ((avail.width() - width) / 2.0).max(0.0);
                        let rect = egui::Rect::from_min_max(
                            egui::pos2(left, avail.top() + frame.offset_y),
                            egui::pos2(left + width, avail.bottom() + frame.offset_y),
                        );
                        ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                            ui.multiply_opacity(frame.opacity);
                            panels::render(ui, state, &frame, &palette);
                        });
                    });
            });

        if !frame.settled {
            ctx.request_repaint();
        }

        frame
    }
}
