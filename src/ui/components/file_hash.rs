// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Hashpad contributors

//! File hash example: pick a file, request its digest, show the result.

use std::path::PathBuf;

use eframe::egui;

use crate::utils::FileDetails;
use crate::utils::file_info::{format_bytes, icon_for};

/// MVU state for the file hash page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileHashModel {
    file_path: Option<PathBuf>,
    hash_result: String,
    details: Option<FileDetails>,
    algorithm: &'static str,
    /// Id of the most recently issued digest request.
    latest_request: u64,
    /// Set while the latest request has not answered yet.
    pending: bool,
    /// Set while a picker dialog is open.
    picking: bool,
}

/// Messages emitted by the view or produced by finished commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileHashMsg {
    SelectFile,
    /// Picker outcome: `Ok(None)` is a cancellation.
    FilePicked(Result<Option<PathBuf>, String>),
    CalculateHash,
    DigestComputed {
        request_id: u64,
        algorithm: &'static str,
        result: Result<(String, Option<FileDetails>), String>,
    },
    CopyResult,
}

/// Side effects requested by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileHashCommand {
    PickFile,
    ComputeDigest { request_id: u64, path: PathBuf },
    CopyToClipboard(String),
}

/// User-facing feedback for the status line and notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHashEvent {
    /// Text to display.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl FileHashModel {
    /// Path chosen by the user, if any.
    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }

    /// Digest text of the latest completed request, or empty.
    pub fn hash_result(&self) -> &str {
        &self.hash_result
    }

    /// Size/type of the digested file when the latest request succeeded.
    pub fn details(&self) -> Option<&FileDetails> {
        self.details.as_ref()
    }

    /// Whether a digest request is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether a picker dialog is currently open.
    pub fn is_picking(&self) -> bool {
        self.picking
    }
}

/// Apply a message to the model. Returns a user-facing event when relevant.
pub fn update(
    model: &mut FileHashModel,
    msg: FileHashMsg,
    cmds: &mut Vec<FileHashCommand>,
) -> Option<FileHashEvent> {
    match msg {
        FileHashMsg::SelectFile => {
            // One dialog at a time.
            if !model.picking {
                model.picking = true;
                cmds.push(FileHashCommand::PickFile);
            }
            None
        }
        FileHashMsg::FilePicked(picked) => {
            model.picking = false;
            match picked {
                Ok(Some(path)) => {
                    model.file_path = Some(path);
                    calculate_hash(model, cmds);
                }
                Ok(None) => {}
                Err(err) => log::debug!("file picker failed, treating as cancelled: {err}"),
            }
            None
        }
        FileHashMsg::CalculateHash => {
            calculate_hash(model, cmds);
            None
        }
        FileHashMsg::DigestComputed {
            request_id,
            algorithm,
            result,
        } => apply_digest(model, request_id, algorithm, result),
        FileHashMsg::CopyResult => {
            if model.hash_result.is_empty() {
                return None;
            }
            cmds.push(FileHashCommand::CopyToClipboard(model.hash_result.clone()));
            None
        }
    }
}

/// Clear the previous result and issue one digest request for the stored path.
fn calculate_hash(model: &mut FileHashModel, cmds: &mut Vec<FileHashCommand>) {
    let Some(path) = model.file_path.clone() else {
        return;
    };
    model.hash_result.clear();
    model.details = None;
    model.latest_request += 1;
    model.pending = true;
    cmds.push(FileHashCommand::ComputeDigest {
        request_id: model.latest_request,
        path,
    });
}

fn apply_digest(
    model: &mut FileHashModel,
    request_id: u64,
    algorithm: &'static str,
    result: Result<(String, Option<FileDetails>), String>,
) -> Option<FileHashEvent> {
    if request_id != model.latest_request {
        log::debug!(
            "discarding stale digest response {request_id} (latest {})",
            model.latest_request
        );
        return None;
    }
    model.pending = false;
    model.algorithm = algorithm;

    match result {
        Ok((digest, details)) => {
            model.hash_result = digest;
            model.details = details;
            let name = model
                .file_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            Some(FileHashEvent {
                message: format!("{algorithm} computed for {name}"),
                is_error: false,
            })
        }
        Err(err) => Some(FileHashEvent {
            message: err,
            is_error: true,
        }),
    }
}

/// Render the page and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &FileHashModel) -> Vec<FileHashMsg> {
    let mut msgs = Vec::new();

    ui.heading("File hash");
    ui.label(
        egui::RichText::new("Select a file to compute a digest of its contents.")
            .small()
            .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        let select = egui::Button::new(format!(
            "{} Select file",
            egui_phosphor::regular::FOLDER_OPEN
        ));
        if ui
            .add_enabled(!model.is_picking(), select)
            .on_disabled_hover_text("A file dialog is already open")
            .clicked()
        {
            msgs.push(FileHashMsg::SelectFile);
        }

        let can_recalc = model.file_path().is_some() && !model.is_pending();
        let recalc = egui::Button::new(format!(
            "{} Recalculate",
            egui_phosphor::regular::ARROW_CLOCKWISE
        ));
        if ui
            .add_enabled(can_recalc, recalc)
            .on_disabled_hover_text("Select a file first")
            .clicked()
        {
            msgs.push(FileHashMsg::CalculateHash);
        }
    });

    ui.add_space(8.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("file_hash_grid")
            .num_columns(2)
            .spacing(egui::vec2(8.0, 10.0))
            .min_col_width(100.0)
            .show(ui, |ui| {
                ui.label("File");
                match model.file_path() {
                    Some(path) => {
                        let icon = model
                            .details()
                            .map(|d| icon_for(&d.mime))
                            .unwrap_or(egui_phosphor::regular::FILE);
                        ui.label(format!("{icon} {}", path.display()));
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("No file selected")
                                .color(egui::Color32::from_gray(150)),
                        );
                    }
                }
                ui.end_row();

                if let Some(details) = model.details() {
                    ui.label("Details");
                    ui.label(format!("{} · {}", format_bytes(details.size), details.mime));
                    ui.end_row();
                }

                let label = if model.algorithm.is_empty() {
                    "Digest"
                } else {
                    model.algorithm
                };
                ui.label(label);
                render_result(ui, model, &mut msgs);
                ui.end_row();
            });
    });

    msgs
}

fn render_result(ui: &mut egui::Ui, model: &FileHashModel, msgs: &mut Vec<FileHashMsg>) {
    if model.is_pending() {
        ui.horizontal(|ui| {
            ui.add(egui::Spinner::new().size(14.0));
            ui.label("Calculating…");
        });
    } else if model.hash_result().is_empty() {
        ui.label(egui::RichText::new("—").color(egui::Color32::from_gray(150)));
    } else {
        ui.horizontal(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(model.hash_result()).monospace())
                    .selectable(true),
            );
            if ui
                .small_button(egui_phosphor::regular::COPY)
                .on_hover_text("Copy digest")
                .clicked()
            {
                msgs.push(FileHashMsg::CopyResult);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::field_reassign_with_default)]

    use super::*;

    fn picked(path: &str) -> FileHashMsg {
        FileHashMsg::FilePicked(Ok(Some(PathBuf::from(path))))
    }

    fn answer(request_id: u64, result: Result<&str, &str>) -> FileHashMsg {
        FileHashMsg::DigestComputed {
            request_id,
            algorithm: "SHA-256",
            result: result.map(|d| (d.to_string(), None)).map_err(str::to_string),
        }
    }

    #[test]
    fn select_file_requests_picker() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();

        let event = update(&mut model, FileHashMsg::SelectFile, &mut cmds);

        assert!(event.is_none());
        assert_eq!(cmds, vec![FileHashCommand::PickFile]);
    }

    #[test]
    fn second_select_while_dialog_open_is_ignored() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();

        update(&mut model, FileHashMsg::SelectFile, &mut cmds);
        update(&mut model, FileHashMsg::SelectFile, &mut cmds);

        assert_eq!(cmds, vec![FileHashCommand::PickFile]);
        assert!(model.is_picking());
    }

    #[test]
    fn picker_outcome_reopens_selection() {
        for outcome in [
            Ok(None),
            Err("portal unavailable".to_string()),
            Ok(Some(PathBuf::from("/tmp/a.txt"))),
        ] {
            let mut model = FileHashModel::default();
            let mut cmds = Vec::new();
            update(&mut model, FileHashMsg::SelectFile, &mut cmds);

            update(&mut model, FileHashMsg::FilePicked(outcome), &mut cmds);

            assert!(!model.is_picking());
            cmds.clear();
            update(&mut model, FileHashMsg::SelectFile, &mut cmds);
            assert_eq!(cmds, vec![FileHashCommand::PickFile]);
        }
    }

    #[test]
    fn picked_file_is_stored_and_hashed_immediately() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();

        update(&mut model, picked("/tmp/a.txt"), &mut cmds);

        assert_eq!(model.file_path(), Some(&PathBuf::from("/tmp/a.txt")));
        assert!(model.is_pending());
        assert_eq!(
            cmds,
            vec![FileHashCommand::ComputeDigest {
                request_id: 1,
                path: PathBuf::from("/tmp/a.txt"),
            }]
        );
    }

    #[test]
    fn cancelled_picker_leaves_state_untouched() {
        let mut model = FileHashModel::default();
        model.file_path = Some(PathBuf::from("/tmp/prev.txt"));
        model.hash_result = "abc".into();
        let before = model.clone();
        let mut cmds = Vec::new();

        let event = update(&mut model, FileHashMsg::FilePicked(Ok(None)), &mut cmds);

        assert!(event.is_none());
        assert!(cmds.is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn picker_error_is_silent() {
        let mut model = FileHashModel::default();
        let before = model.clone();
        let mut cmds = Vec::new();

        let event = update(
            &mut model,
            FileHashMsg::FilePicked(Err("portal unavailable".into())),
            &mut cmds,
        );

        assert!(event.is_none());
        assert!(cmds.is_empty());
        assert_eq!(model, before);
    }

    #[test]
    fn calculate_without_path_is_noop() {
        let mut model = FileHashModel::default();
        model.hash_result = "kept".into();
        let mut cmds = Vec::new();

        update(&mut model, FileHashMsg::CalculateHash, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.hash_result(), "kept");
        assert!(!model.is_pending());
    }

    #[test]
    fn calculate_clears_previous_result() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();
        update(&mut model, picked("/tmp/a.txt"), &mut cmds);
        update(&mut model, answer(1, Ok("first")), &mut cmds);
        assert_eq!(model.hash_result(), "first");

        update(&mut model, FileHashMsg::CalculateHash, &mut cmds);

        assert_eq!(model.hash_result(), "");
        assert!(model.is_pending());
    }

    #[test]
    fn digest_success_stores_result_verbatim() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();
        update(&mut model, picked("/tmp/a.txt"), &mut cmds);

        let event = update(&mut model, answer(1, Ok("e3b0c4...")), &mut cmds)
            .expect("success event");

        assert!(!event.is_error);
        assert_eq!(event.message, "SHA-256 computed for a.txt");
        assert_eq!(model.hash_result(), "e3b0c4...");
        assert!(!model.is_pending());
    }

    #[test]
    fn digest_failure_reports_error_and_keeps_result_empty() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();
        update(&mut model, picked("/tmp/b.txt"), &mut cmds);

        let event = update(&mut model, answer(1, Err("file not found")), &mut cmds)
            .expect("error event");

        assert!(event.is_error);
        assert_eq!(event.message, "file not found");
        assert_eq!(model.hash_result(), "");
        assert_eq!(model.file_path(), Some(&PathBuf::from("/tmp/b.txt")));
    }

    // A slow answer for an earlier selection must not overwrite the newer one.
    #[test]
    fn stale_response_is_discarded() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();
        update(&mut model, picked("/tmp/a.txt"), &mut cmds);
        update(&mut model, picked("/tmp/b.txt"), &mut cmds);

        let event = update(&mut model, answer(1, Ok("digest-of-a")), &mut cmds);

        assert!(event.is_none());
        assert_eq!(model.hash_result(), "");
        assert!(model.is_pending());

        update(&mut model, answer(2, Ok("digest-of-b")), &mut cmds);
        assert_eq!(model.hash_result(), "digest-of-b");
    }

    #[test]
    fn copy_requires_a_result() {
        let mut model = FileHashModel::default();
        let mut cmds = Vec::new();

        assert!(update(&mut model, FileHashMsg::CopyResult, &mut cmds).is_none());
        assert!(cmds.is_empty());

        model.hash_result = "abc".into();
        update(&mut model, FileHashMsg::CopyResult, &mut cmds);
        assert_eq!(cmds, vec![FileHashCommand::CopyToClipboard("abc".into())]);
    }
}
