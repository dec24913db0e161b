use std::sync::mpsc;
use std::sync::Arc;

use img2latex_core::acquire::{first_image, from_browse, AcquisitionSource, Candidate};
use img2latex_core::client::LatexService;
use img2latex_core::config::ServiceConfig;
use img2latex_core::consts::IMAGE_EXTENSIONS;
use img2latex_core::listener::{EventHub, Subscription};
use img2latex_core::selection::SelectedImage;
use img2latex_core::state::{ConverterState, Transition};
use tracing::{debug, info, warn};

use crate::convert::thumbnail;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::paste::{self, PasteEvent, PasteGesture};
use crate::states::{PreviewState, UIState};
use crate::worker;

pub struct Img2LatexApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: ServiceConfig,
    pub state: ConverterState,
    pub ui_state: UIState,
    pub preview: PreviewState,
    ctx: egui::Context,
    paste_hub: EventHub<PasteEvent>,
    paste_gesture: PasteGesture,
    /// Paste handler registration; dropped with the view.
    _paste_subscription: Subscription<PasteEvent>,
}

impl Img2LatexApp {
    pub fn new(ctx: &egui::Context, service: Arc<dyn LatexService>, config: ServiceConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(service, result_tx.clone(), ctx.clone());

        let paste_hub = EventHub::new();
        let paste_subscription = paste::subscribe(&paste_hub, result_tx.clone(), ctx.clone());

        let mut ui_state = UIState::default();
        ui_state.add_log(format!(
            "Endpoint: {} (field '{}')",
            config.endpoint, config.field_name
        ));

        Self {
            cmd_tx,
            result_tx,
            result_rx,
            config,
            state: ConverterState::new(),
            ui_state,
            preview: PreviewState::default(),
            ctx: ctx.clone(),
            paste_hub,
            paste_gesture: PasteGesture::default(),
            _paste_subscription: paste_subscription,
        }
    }

    /// Drain all pending results from the worker and helper threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Acquired { source, image } => {
                    self.acquire(ctx, source, image);
                }
                WorkerResult::ConvertComplete { outcome } => {
                    let succeeded = outcome.succeeded();
                    self.transition(outcome.transition);
                    let elapsed = format_duration(outcome.elapsed);
                    if succeeded {
                        self.ui_state.add_log(format!("Converted in {elapsed}"));
                    } else {
                        self.ui_state
                            .add_log(format!("ERROR: conversion failed after {elapsed}"));
                    }
                }
                WorkerResult::BrowseClosed => {
                    self.ui_state.end_browse();
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn transition(&mut self, transition: Transition) {
        self.state = self.state.apply(transition);
    }

    fn acquire(&mut self, ctx: &egui::Context, source: AcquisitionSource, image: SelectedImage) {
        info!("{source}: selected {}", image.name());
        self.ui_state.add_log(format!(
            "{source}: {} ({}, {} bytes)",
            image.name(),
            image.mime(),
            image.len()
        ));
        self.update_preview(ctx, &image);
        self.transition(Transition::Acquire(image));
    }

    fn update_preview(&mut self, ctx: &egui::Context, image: &SelectedImage) {
        match thumbnail(image) {
            Some(color_image) => {
                let texture = ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR);
                self.preview.texture = Some(texture);
            }
            None => {
                debug!("No preview for {}", image.name());
                self.preview.clear();
            }
        }
    }

    /// Begin a conversion of the held image; no-op when not permitted.
    pub fn submit(&mut self) {
        let Some((next, job)) = self.state.begin_submission() else {
            return;
        };
        self.state = next;
        self.send_command(WorkerCommand::Convert { job });
    }

    /// Open the native file picker on a helper thread. Ignored while a
    /// picker is already open.
    pub fn browse(&mut self) {
        if !self.ui_state.begin_browse() {
            debug!("File picker already open");
            return;
        }
        let result_tx = self.result_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            let picked = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file();
            let _ = result_tx.send(WorkerResult::BrowseClosed);
            ctx.request_repaint();
            let Some(path) = picked else {
                return;
            };
            let message = match from_browse(&path) {
                Ok(image) => WorkerResult::Acquired {
                    source: AcquisitionSource::Browse,
                    image,
                },
                Err(e) => WorkerResult::Log {
                    message: format!("Browse: {e}"),
                },
            };
            let _ = result_tx.send(message);
            ctx.request_repaint();
        });
    }

    /// Read the OS clipboard and hand it to the paste listeners.
    pub fn paste_from_clipboard(&self) {
        let event = paste::read_clipboard();
        if self.paste_hub.publish(&event) == 0 {
            warn!("Paste received with no active listener");
        }
    }

    fn handle_paste(&mut self, ctx: &egui::Context) {
        if self.paste_gesture.detect(ctx) {
            self.paste_from_clipboard();
        }
    }

    fn handle_drops(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        self.ui_state.drag_active = hovering;

        if dropped.is_empty() {
            return;
        }

        let candidates = dropped.into_iter().filter_map(|file| {
            let mime = Some(file.mime.as_str()).filter(|m| !m.is_empty());
            if let Some(bytes) = file.bytes {
                let name = if file.name.is_empty() {
                    "dropped image".to_string()
                } else {
                    file.name.clone()
                };
                return Some(Candidate::new(name, mime, bytes.to_vec()));
            }
            let path = file.path?;
            match Candidate::from_path(&path) {
                Ok(c) => Some(c),
                Err(e) => {
                    warn!("Failed to read dropped file {}: {e}", path.display());
                    None
                }
            }
        });

        if let Some(image) = first_image(AcquisitionSource::Drop, candidates) {
            self.acquire(ctx, AcquisitionSource::Drop, image);
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for Img2LatexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.handle_drops(ctx);
        self.handle_paste(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::converter::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Image to LaTeX")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image to LaTeX");
                        ui.label("Formula recognition client");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
