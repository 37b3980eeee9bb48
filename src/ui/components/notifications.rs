// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Transient toast notifications stacked in the bottom-right corner.

use eframe::egui;

/// Default time a toast stays visible, in seconds.
pub const DEFAULT_TTL_SECS: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// One queued toast.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// UI clock time of first display; `None` until the next frame stamps it.
    shown_at: Option<f64>,
}

/// Toast queue with time-based expiry.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationsModel {
    items: Vec<Notification>,
    next_id: u64,
    ttl: f64,
}

impl Default for NotificationsModel {
    fn default() -> Self {
        Self::with_ttl(DEFAULT_TTL_SECS)
    }
}

/// Messages emitted by the toast overlay.
#[derive(Clone, Debug, PartialEq)]
pub enum NotificationsMsg {
    Dismiss(u64),
    /// Frame clock tick used to stamp and expire toasts.
    Expire(f64),
}

impl NotificationsModel {
    pub fn with_ttl(ttl: f64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            ttl: ttl.max(0.0),
        }
    }

    /// Queue a toast and return its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            shown_at: None,
        });
        id
    }

    /// Visible toasts, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    fn expire(&mut self, now: f64) {
        let ttl = self.ttl;
        for item in &mut self.items {
            item.shown_at.get_or_insert(now);
        }
        self.items
            .retain(|n| n.shown_at.is_some_and(|t| now - t < ttl));
    }
}

pub fn update(model: &mut NotificationsModel, msg: NotificationsMsg) {
    match msg {
        NotificationsMsg::Dismiss(id) => model.dismiss(id),
        NotificationsMsg::Expire(now) => model.expire(now),
    }
}

/// Draw the toast stack and return dismiss clicks.
pub fn view(ctx: &egui::Context, model: &NotificationsModel) -> Vec<NotificationsMsg> {
    let mut msgs = Vec::new();
    if model.is_empty() {
        return msgs;
    }

    egui::Area::new(egui::Id::new("notifications"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -36.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for item in model.items() {
                let (icon, color) = match item.kind {
                    NotificationKind::Info => (
                        egui_phosphor::regular::INFO,
                        ui.visuals().text_color(),
                    ),
                    NotificationKind::Error => (
                        egui_phosphor::regular::WARNING_CIRCLE,
                        ui.visuals().error_fg_color,
                    ),
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(360.0);
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icon).color(color));
                        ui.label(egui::RichText::new(&item.message).color(color));
                        if ui.small_button(egui_phosphor::regular::X).clicked() {
                            msgs.push(NotificationsMsg::Dismiss(item.id));
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut model = NotificationsModel::default();

        let a = model.push("one", NotificationKind::Info);
        let b = model.push("two", NotificationKind::Error);

        assert!(b > a);
        assert_eq!(model.items().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_target() {
        let mut model = NotificationsModel::default();
        let a = model.push("one", NotificationKind::Info);
        model.push("two", NotificationKind::Info);

        update(&mut model, NotificationsMsg::Dismiss(a));

        assert_eq!(model.items().len(), 1);
        assert_eq!(model.items()[0].message, "two");
    }

    // TTL counts from the first frame a toast is seen, not from push time.
    #[test]
    fn expire_after_ttl_from_first_display() {
        let mut model = NotificationsModel::with_ttl(2.0);
        model.push("boom", NotificationKind::Error);

        update(&mut model, NotificationsMsg::Expire(10.0));
        assert_eq!(model.items().len(), 1);

        update(&mut model, NotificationsMsg::Expire(11.5));
        assert_eq!(model.items().len(), 1);

        update(&mut model, NotificationsMsg::Expire(12.0));
        assert!(model.is_empty());
    }

    #[test]
    fn negative_ttl_is_clamped() {
        let mut model = NotificationsModel::with_ttl(-1.0);
        model.push("gone", NotificationKind::Info);

        update(&mut model, NotificationsMsg::Expire(0.0));

        assert!(model.is_empty());
    }
}
