// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Application entry point wiring egui/eframe to launch the Hashpad UI.

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::mvu::Backends;
use crate::ui::HashpadApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([820.0, 520.0])
            .with_min_inner_size([560.0, 360.0]),
        ..Default::default()
    };

    log::info!(
        "starting at {} with {} workers ({:?})",
        config.initial_route,
        config.workers,
        config.algorithm
    );

    eframe::run_native(
        "Hashpad",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(HashpadApp::new(
                &config,
                Backends::native(config.algorithm),
            )))
        }),
    )
}
