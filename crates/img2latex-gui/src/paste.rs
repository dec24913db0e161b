use std::sync::mpsc;

use img2latex_core::acquire::{first_image, AcquisitionSource, Candidate};
use img2latex_core::listener::{EventHub, Subscription};
use img2latex_core::selection::SelectedImage;
use tracing::{debug, warn};

use crate::messages::WorkerResult;

/// Clipboard contents captured at the moment of a paste.
pub struct PasteEvent {
    pub items: Vec<Candidate>,
}

/// Register the view's paste handler. The handler lives exactly as long
/// as the returned subscription.
pub fn subscribe(
    hub: &EventHub<PasteEvent>,
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> Subscription<PasteEvent> {
    hub.subscribe(move |event: &PasteEvent| {
        match first_image(AcquisitionSource::Paste, event.items.iter().cloned()) {
            Some(image) => {
                let _ = result_tx.send(WorkerResult::Acquired {
                    source: AcquisitionSource::Paste,
                    image,
                });
                ctx.request_repaint();
            }
            None => debug!("Paste ignored: clipboard holds no image"),
        }
    })
}

/// Tracks the Ctrl/Cmd+V gesture across frames.
///
/// egui-winit only emits `Event::Paste` on the press when the clipboard
/// holds text, and emits no key press at all for Ctrl/Cmd+V. The key
/// release is always delivered, so an image-only clipboard is detected
/// from the release. A release following an `Event::Paste` belongs to
/// the same gesture and is swallowed.
#[derive(Default)]
pub struct PasteGesture {
    release_pending: bool,
}

impl PasteGesture {
    /// True when this frame carries a paste gesture.
    pub fn detect(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| self.observe(&i.events))
    }

    pub fn observe(&mut self, events: &[egui::Event]) -> bool {
        let mut requested = false;
        for event in events {
            match event {
                egui::Event::Paste(_) => {
                    self.release_pending = true;
                    requested = true;
                }
                egui::Event::Key {
                    key: egui::Key::V,
                    pressed: false,
                    modifiers,
                    ..
                } if modifiers.command => {
                    if self.release_pending {
                        self.release_pending = false;
                    } else {
                        requested = true;
                    }
                }
                _ => {}
            }
        }
        requested
    }
}

/// Snapshot the OS clipboard as paste candidates, image first.
pub fn read_clipboard() -> PasteEvent {
    let mut items = Vec::new();

    let mut clipboard = match arboard::Clipboard::new() {
        Ok(c) => c,
        Err(e) => {
            warn!("Clipboard unavailable: {e}");
            return PasteEvent { items };
        }
    };

    match clipboard.get_image() {
        Ok(data) => {
            let Some((width, height)) = image_dimensions(data.width, data.height) else {
                warn!(
                    "Clipboard image too large: {}x{}",
                    data.width, data.height
                );
                return PasteEvent { items };
            };
            match SelectedImage::from_rgba(width, height, data.bytes.into_owned()) {
                Ok(image) => items.push(Candidate::new(
                    image.name(),
                    Some(image.mime()),
                    image.bytes().to_vec(),
                )),
                Err(e) => warn!("Failed to encode clipboard image: {e}"),
            }
        }
        Err(e) => debug!("No clipboard image: {e}"),
    }

    if let Ok(text) = clipboard.get_text() {
        items.push(Candidate::new("clipboard.txt", Some("text/plain"), text.into_bytes()));
    }

    PasteEvent { items }
}

fn image_dimensions(width: usize, height: usize) -> Option<(u32, u32)> {
    Some((u32::try_from(width).ok()?, u32::try_from(height).ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd_v(pressed: bool) -> egui::Event {
        egui::Event::Key {
            key: egui::Key::V,
            physical_key: Some(egui::Key::V),
            pressed,
            repeat: false,
            modifiers: egui::Modifiers::COMMAND,
        }
    }

    fn image_candidate() -> Candidate {
        let image = SelectedImage::from_rgba(2, 1, vec![255; 8]).unwrap();
        Candidate::new(image.name(), Some(image.mime()), image.bytes().to_vec())
    }

    fn text_candidate() -> Candidate {
        Candidate::new("clipboard.txt", Some("text/plain"), b"x^2".to_vec())
    }

    #[test]
    fn test_text_paste_event_triggers() {
        let mut gesture = PasteGesture::default();
        assert!(gesture.observe(&[egui::Event::Paste("x^2".into())]));
    }

    #[test]
    fn test_command_v_release_triggers() {
        let mut gesture = PasteGesture::default();
        assert!(gesture.observe(&[cmd_v(false)]));
    }

    #[test]
    fn test_plain_v_release_is_ignored() {
        let mut gesture = PasteGesture::default();
        let plain = egui::Event::Key {
            key: egui::Key::V,
            physical_key: Some(egui::Key::V),
            pressed: false,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        assert!(!gesture.observe(&[plain]));
    }

    #[test]
    fn test_text_paste_then_release_is_one_gesture() {
        let mut gesture = PasteGesture::default();
        assert!(gesture.observe(&[egui::Event::Paste("x".into())]));
        assert!(!gesture.observe(&[cmd_v(false)]));
        // The next gesture is detected again.
        assert!(gesture.observe(&[cmd_v(false)]));
    }

    #[test]
    fn test_image_only_clipboard_detected_through_context() {
        let ctx = egui::Context::default();
        let mut gesture = PasteGesture::default();
        let mut frames = Vec::new();

        // Press with an image-only clipboard: egui-winit emits nothing.
        for events in [Vec::new(), vec![cmd_v(false)]] {
            let input = egui::RawInput {
                events,
                ..Default::default()
            };
            let mut hit = false;
            let _ = ctx.run(input, |ctx| hit |= gesture.detect(ctx));
            frames.push(hit);
        }

        assert_eq!(frames, vec![false, true]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_oversized_clipboard_dimensions_rejected() {
        assert_eq!(image_dimensions(640, 480), Some((640, 480)));
        assert_eq!(image_dimensions(u32::MAX as usize, 1), Some((u32::MAX, 1)));
        assert_eq!(image_dimensions(usize::MAX, 1), None);
        assert_eq!(image_dimensions(1, usize::MAX), None);
    }

    #[test]
    fn test_handler_sends_pasted_image() {
        let hub = EventHub::new();
        let (tx, rx) = mpsc::channel();
        let _sub = subscribe(&hub, tx, egui::Context::default());

        let event = PasteEvent {
            items: vec![text_candidate(), image_candidate()],
        };
        assert_eq!(hub.publish(&event), 1);

        match rx.try_recv() {
            Ok(WorkerResult::Acquired { source, image }) => {
                assert_eq!(source, AcquisitionSource::Paste);
                assert_eq!(image.mime(), "image/png");
            }
            _ => panic!("expected an acquired image"),
        }
    }

    #[test]
    fn test_handler_ignores_text_only_paste() {
        let hub = EventHub::new();
        let (tx, rx) = mpsc::channel();
        let _sub = subscribe(&hub, tx, egui::Context::default());

        hub.publish(&PasteEvent {
            items: vec![text_candidate()],
        });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscription_stops_sending() {
        let hub = EventHub::new();
        let (tx, rx) = mpsc::channel();
        let sub = subscribe(&hub, tx, egui::Context::default());
        drop(sub);

        let event = PasteEvent {
            items: vec![image_candidate()],
        };
        assert_eq!(hub.publish(&event), 0);
        assert!(rx.try_recv().is_err());
    }
}
