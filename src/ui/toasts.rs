// BiasViz - GPL-3.0-or-later
// This file is part of BiasViz.
//
// Copyright (C) 2025 BiasViz Authors
//
// BiasViz is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// BiasViz is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with BiasViz.  If not, see <https://www.gnu.org/licenses/>.

//! Toast notifications for request results.

use egui::Align2;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};

/// How long error toasts stay visible (in seconds)
const ERROR_TOAST_SECS: f64 = 8.0;

/// How long success toasts stay visible (in seconds)
const SUCCESS_TOAST_SECS: f64 = 3.0;

/// Manages toast notifications for the app
pub struct ToastManager {
    toasts: Toasts,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManager {
    pub fn new() -> Self {
        let toasts = Toasts::new()
            .anchor(Align2::RIGHT_BOTTOM, (-10.0, -10.0))
            .direction(egui::Direction::BottomUp);
        Self { toasts }
    }

    /// Show an error toast (auto-dismisses after timeout)
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Error, ERROR_TOAST_SECS);
    }

    /// Show a success toast (auto-dismisses after timeout)
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Success, SUCCESS_TOAST_SECS);
    }

    pub fn show_info(&mut self, message: impl Into<String>) {
        self.add(message.into(), ToastKind::Info, SUCCESS_TOAST_SECS);
    }

    fn add(&mut self, text: String, kind: ToastKind, seconds: f64) {
        self.toasts.add(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default()
                .duration_in_seconds(seconds)
                .show_progress(true),
            ..Default::default()
        });
    }

    /// Render all toasts - call this in the update loop
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
