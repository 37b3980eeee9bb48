// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Example navigation list.

use eframe::egui;

use crate::models::example::ExampleEntry;

/// Render the example menu; returns the path of a clicked, inactive entry.
pub fn view(ui: &mut egui::Ui, entries: &[ExampleEntry]) -> Option<String> {
    let mut target = None;

    ui.add_space(6.0);
    ui.label(
        egui::RichText::new("Examples")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(4.0);

    for entry in entries {
        let button = egui::Button::new(format!("{} {}", entry.icon, entry.name))
            .selected(entry.is_active)
            .min_size(egui::vec2(ui.available_width(), 0.0));
        if ui.add(button).on_hover_text(entry.path).clicked() && !entry.is_active {
            target = Some(entry.path.to_string());
        }
    }

    target
}
