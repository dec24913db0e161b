use std::sync::mpsc;
use std::sync::Arc;

use img2latex_core::client::LatexService;
use img2latex_core::state::SubmissionJob;
use img2latex_core::submit::execute;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    service: Arc<dyn LatexService>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("img2latex-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, service, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    service: Arc<dyn LatexService>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Convert { job } => {
                handle_convert(service.as_ref(), &job, &tx, &ctx);
            }
        }
    }
}

fn handle_convert(
    service: &dyn LatexService,
    job: &SubmissionJob,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: format!("Uploading {} ({} bytes)...", job.image.name(), job.image.len()),
        },
    );

    let outcome = execute(service, job);
    send(tx, ctx, WorkerResult::ConvertComplete { outcome });
}
