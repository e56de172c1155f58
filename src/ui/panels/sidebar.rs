// Folio - ui/panels/sidebar.rs
//
// Left sidebar: avatar and name, section navigation, social links and the
// theme toggle. The two state-changing controls in the app live here.

use crate::app::state::AppState;
use crate::core::content::{PROFILE, SOCIAL_LINKS};
use crate::core::model::{Section, SocialLink};
use crate::ui::theme::{self, Palette};
use egui::{Color32, RichText};

/// Paint the vertical gradient behind the sidebar.
pub fn paint_background(ui: &egui::Ui, rect: egui::Rect, palette: &Palette) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), palette.sidebar_top);
    mesh.colored_vertex(rect.right_top(), palette.sidebar_top);
    mesh.colored_vertex(rect.left_bottom(), palette.sidebar_bottom);
    mesh.colored_vertex(rect.right_bottom(), palette.sidebar_bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    ui.ctx()
        .layer_painter(ui.layer_id())
        .add(egui::Shape::mesh(mesh));
}

/// Render the sidebar contents.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, palette: &Palette) {
    ui.vertical_centered(|ui| {
        avatar(ui, palette);
        ui.add_space(16.0);
        ui.label(
            RichText::new(PROFILE.name)
                .size(24.0)
                .strong()
                .color(Color32::WHITE),
        );
        ui.label(
            RichText::new(PROFILE.title)
                .small()
                .color(palette.sidebar_subtitle),
        );
    });
    ui.add_space(32.0);

    for &section in Section::all() {
        if nav_item(ui, section, state.section() == section).clicked() {
            state.select(section);
        }
        ui.add_space(8.0);
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
        ui.horizontal(|ui| {
            for link in &SOCIAL_LINKS {
                social_link(ui, link);
                ui.add_space(8.0);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if theme_toggle(ui, state.dark_mode()).clicked() {
                    state.toggle_theme();
                }
            });
        });
    });
}

/// Round placeholder portrait with a border.
fn avatar(ui: &mut egui::Ui, palette: &Palette) {
    let size = egui::Vec2::splat(theme::AVATAR_RADIUS * 2.0);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter();
    painter.circle(
        rect.center(),
        theme::AVATAR_RADIUS - theme::AVATAR_BORDER / 2.0,
        Color32::from_white_alpha(40),
        egui::Stroke::new(theme::AVATAR_BORDER, palette.avatar_border),
    );
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "\u{1f464}",
        egui::FontId::proportional(56.0),
        Color32::WHITE,
    );
}

fn nav_item(ui: &mut egui::Ui, section: Section, active: bool) -> egui::Response {
    let text = RichText::new(format!("{}   {}", section.icon(), section.label()))
        .size(18.0)
        .color(Color32::WHITE);
    let fill = if active {
        Color32::from_white_alpha(26)
    } else {
        Color32::TRANSPARENT
    };
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .stroke(egui::Stroke::NONE)
            .min_size(egui::vec2(ui.available_width(), theme::NAV_ITEM_HEIGHT)),
    )
}

fn social_link(ui: &mut egui::Ui, link: &SocialLink) {
    let response = ui.add(icon_button(link.glyph)).on_hover_text(link.name);
    if response.clicked() {
        if link.has_target() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(link.url));
        } else {
            tracing::debug!(link = link.name, "Placeholder link clicked");
        }
    }
}

fn theme_toggle(ui: &mut egui::Ui, dark_mode: bool) -> egui::Response {
    let (glyph, hint) = if dark_mode {
        ("\u{2600}", "Switch to light theme")
    } else {
        ("\u{1f319}", "Switch to dark theme")
    };
    ui.add(icon_button(glyph)).on_hover_text(hint)
}

fn icon_button(glyph: &str) -> egui::Button<'static> {
    let text = RichText::new(glyph.to_owned())
        .size(20.0)
        .color(Color32::WHITE);
    egui::Button::new(text).frame(false)
}
