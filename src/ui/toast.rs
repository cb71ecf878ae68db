//! Transient notifications in the bottom-right corner.

use std::collections::VecDeque;
use std::time::Duration;

use eframe::egui::{self, Align2, Margin, RichText, Stroke};

use super::components::colors;

/// Most toasts on screen at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
    /// egui input time (seconds) after which the toast disappears.
    expires_at: f64,
}

/// Queue of visible toasts.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    lifetime: f64,
}

impl Toasts {
    pub fn new(lifetime_secs: f32) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime: f64::from(lifetime_secs),
        }
    }

    pub fn push(&mut self, now: f64, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) {
        self.items.push_back(Toast {
            kind,
            title: title.into(),
            description: description.into(),
            expires_at: now + self.lifetime,
        });
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    pub fn success(&mut self, now: f64, title: impl Into<String>, description: impl Into<String>) {
        self.push(now, ToastKind::Success, title, description);
    }

    pub fn error(&mut self, now: f64, title: impl Into<String>, description: impl Into<String>) {
        self.push(now, ToastKind::Error, title, description);
    }

    /// Drop toasts whose time is up.
    pub fn prune(&mut self, now: f64) {
        self.items.retain(|toast| toast.expires_at > now);
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Seconds until the next toast expires.
    fn next_expiry(&self, now: f64) -> Option<f64> {
        self.items
            .iter()
            .map(|toast| (toast.expires_at - now).max(0.0))
            .reduce(f64::min)
    }

    /// Prune expired toasts and render the rest.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        self.prune(now);

        let Some(remaining) = self.next_expiry(now) else {
            return;
        };
        // Wake up when the next one expires even if nothing else happens.
        ctx.request_repaint_after(Duration::from_secs_f64(remaining));

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(Align2::RIGHT_BOTTOM, [-16.0, -16.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                for toast in &self.items {
                    let accent = match toast.kind {
                        ToastKind::Success => colors::SUCCESS,
                        ToastKind::Error => colors::ERROR,
                    };
                    egui::Frame::popup(ui.style())
                        .stroke(Stroke::new(1.0, accent))
                        .inner_margin(Margin::same(12))
                        .show(ui, |ui| {
                            ui.set_width(280.0);
                            ui.label(RichText::new(&toast.title).strong().color(accent));
                            ui.label(&toast.description);
                        });
                    ui.add_space(8.0);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_expire() {
        let mut toasts = Toasts::new(4.0);
        toasts.success(10.0, "Success", "Report created successfully");
        assert_eq!(toasts.len(), 1);

        toasts.prune(13.9);
        assert_eq!(toasts.len(), 1);

        toasts.prune(14.0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut toasts = Toasts::new(4.0);
        for i in 0..5 {
            toasts.error(f64::from(i), "Error", format!("failure {i}"));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        let first = toasts.iter().next().expect("toast present");
        assert_eq!(first.description, "failure 2");
    }

    #[test]
    fn test_next_expiry() {
        let mut toasts = Toasts::new(4.0);
        assert_eq!(toasts.next_expiry(0.0), None);

        toasts.success(1.0, "Success", "a");
        toasts.success(2.0, "Success", "b");
        assert_eq!(toasts.next_expiry(3.0), Some(2.0));
        assert_eq!(toasts.next_expiry(9.0), Some(0.0));
    }

    #[test]
    fn test_kind_is_kept() {
        let mut toasts = Toasts::new(4.0);
        toasts.error(0.0, "Error", "Please enter a bulletin title");
        let toast = toasts.iter().next().expect("toast present");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Error");
    }
}
