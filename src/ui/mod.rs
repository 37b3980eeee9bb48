// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Top-level egui application shell.
//! Handles layout, the example sidebar, and wiring to the background workers.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::config::AppConfig;
use crate::models::example::{self, ExampleId};
use crate::mvu::{self, AppModel, Backends, Command, Msg};
use crate::ui::components::notifications::NotificationsMsg;
use crate::ui::components::{file_hash, notifications, sidebar};

/// Stateful egui application hosting the example pages.
pub struct HashpadApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl HashpadApp {
    /// Spawn `config.workers` command workers and build the initial model.
    pub fn new(config: &AppConfig, backends: Backends) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let backends = Arc::new(backends);
        for _ in 0..config.workers {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let backends = Arc::clone(&backends);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &backends);
                    let _ = msg_tx.send(msg);
                }
            });
        }
        log::debug!("spawned {} command workers", config.workers);

        Self {
            model: AppModel::new(&config.initial_route, config.notification_secs),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for HashpadApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which the
    /// runtime still calls every frame before `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: drains worker results, applies queued messages,
    /// dispatches resulting commands, then renders the shell and active page.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command workers.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        let now = ctx.input(|i| i.time);
        self.inbox
            .push(Msg::Notifications(NotificationsMsg::Expire(now)));

        // Apply in arrival order so a pick result precedes anything queued after it.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                log::debug!("dispatching {cmd:?}");
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        if let Some(text) = self.model.clipboard.take() {
            ctx.copy_text(text);
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Hashpad");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::SidePanel::left("examples")
            .resizable(false)
            .exact_width(180.0)
            .show(ctx, |ui| {
                let entries = example::entries(&self.model.route);
                if let Some(path) = sidebar::view(ui, &entries) {
                    self.inbox.push(Msg::Navigate(path));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match example::resolve(&self.model.route) {
                Some(ExampleId::FileHash) => {
                    let msgs = file_hash::view(ui, &self.model.file_hash);
                    self.inbox.extend(msgs.into_iter().map(Msg::FileHash));
                }
                None => self.render_not_found(ui),
            });
        });

        let toast_msgs = notifications::view(ctx, &self.model.notifications);
        self.inbox
            .extend(toast_msgs.into_iter().map(Msg::Notifications));

        // Keep frames coming while work is outstanding or toasts need to expire.
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        } else if self.model.pending_commands > 0 || !self.model.notifications.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

impl HashpadApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Placeholder for routes with no registered example.
    fn render_not_found(&mut self, ui: &mut egui::Ui) {
        ui.heading("Page not found");
        ui.label(format!("Nothing is registered at {}.", self.model.route));
        ui.add_space(8.0);
        let back = egui::Button::new(format!(
            "{} Back to examples",
            egui_phosphor::regular::ARROW_LEFT
        ));
        if ui.add(back).clicked() {
            self.inbox
                .push(Msg::Navigate(example::default_route().to_string()));
        }
    }

    /// Render latest status message and background activity.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let text = self.model.status.as_deref().unwrap_or("Ready");
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}
