// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::path::PathBuf;
use std::sync::Arc;

use crate::logic::{DigestAlgorithm, DigestService, FilePicker, NativePicker, PickerOptions};
use crate::models::example;
use crate::ui::components::file_hash::{self, FileHashCommand, FileHashModel, FileHashMsg};
use crate::ui::components::notifications::{
    self, NotificationKind, NotificationsModel, NotificationsMsg,
};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Active route, already normalized.
    pub route: String,
    /// File hash page state.
    pub file_hash: FileHashModel,
    /// Toast queue.
    pub notifications: NotificationsModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
    /// Text waiting to be placed on the clipboard; drained by the UI where ctx is available.
    pub clipboard: Option<String>,
}

impl AppModel {
    pub fn new(route: &str, notification_ttl: f64) -> Self {
        Self {
            route: example::normalize_route(route),
            notifications: NotificationsModel::with_ttl(notification_ttl),
            ..Default::default()
        }
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    Navigate(String),
    FileHash(FileHashMsg),
    Notifications(NotificationsMsg),
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    PickFile,
    ComputeDigest { request_id: u64, path: PathBuf },
}

/// Services the worker threads call into.
#[derive(Clone)]
pub struct Backends {
    pub picker: Arc<dyn FilePicker>,
    pub digest: Arc<dyn DigestService>,
}

impl Backends {
    /// Native picker plus the digest backend for `algorithm`.
    pub fn native(algorithm: DigestAlgorithm) -> Self {
        Self {
            picker: Arc::new(NativePicker),
            digest: algorithm.service(),
        }
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(route) => {
            let route = example::normalize_route(&route);
            if route != model.route {
                log::info!("navigating to {route}");
                model.route = route;
            }
        }
        Msg::FileHash(m) => {
            let mut page_cmds = Vec::new();
            if let Some(event) = file_hash::update(&mut model.file_hash, m, &mut page_cmds) {
                surface_event(model, event.message, event.is_error);
            }
            for c in page_cmds {
                match c {
                    FileHashCommand::PickFile => cmds.push(Command::PickFile),
                    FileHashCommand::ComputeDigest { request_id, path } => {
                        cmds.push(Command::ComputeDigest { request_id, path })
                    }
                    FileHashCommand::CopyToClipboard(text) => {
                        model.clipboard = Some(text);
                        model
                            .notifications
                            .push("Digest copied to clipboard", NotificationKind::Info);
                    }
                }
            }
        }
        Msg::Notifications(m) => notifications::update(&mut model.notifications, m),
    }
}

/// Execute a command on the calling (worker) thread and return the resulting message.
pub fn run_command(cmd: Command, backends: &Backends) -> Msg {
    match cmd {
        Command::PickFile => {
            let options = PickerOptions::single_file("Select a file to hash");
            let picked = backends
                .picker
                .pick_file(&options)
                .map_err(|err| format!("{err:#}"));
            Msg::FileHash(FileHashMsg::FilePicked(picked))
        }
        Command::ComputeDigest { request_id, path } => {
            let algorithm = backends.digest.algorithm();
            let result = match backends.digest.digest(&path) {
                Ok(digest) => {
                    log::info!("{algorithm} of {} computed", path.display());
                    // Details are cosmetic; a failed stat does not fail the request.
                    let details = crate::utils::file_details(&path)
                        .inspect_err(|err| log::debug!("no details for {}: {err:#}", path.display()))
                        .ok();
                    Ok((digest, details))
                }
                Err(err) => {
                    log::warn!("{algorithm} of {} failed: {err:#}", path.display());
                    Err(format!("{err:#}"))
                }
            };
            Msg::FileHash(FileHashMsg::DigestComputed {
                request_id,
                algorithm,
                result,
            })
        }
    }
}

/// Update status and notifications consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model
            .notifications
            .push(message.clone(), NotificationKind::Error);
    }
    model.status = Some(message);
}
