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

use super::navbar::render_navbar;
use super::pages;
use super::windows;
use super::{ToastManager, UiAction};

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::config::GlobalConfig;
use crate::core::link::{fragment_id, share_link};
use crate::gateway::{
    GatewayError, HttpGateway, LoadMessage, LoadOutcome, RequestKind, RequestLoader,
};
use crate::state::{AppState, Event, Page};

/// Main application
pub struct BiasVizApp {
    /// Navigation and data state, replaced on every event
    state: AppState,

    /// Starts service requests on background threads
    loader: RequestLoader,

    /// Receiver for finished requests
    load_receiver: Receiver<LoadMessage>,

    config: GlobalConfig,

    toasts: ToastManager,

    /// Share link passed on the command line, resolved on the first frame
    initial_link: Option<String>,

    /// Whether to show the About window
    show_about: bool,

    /// Last title sent to the viewport
    current_title: &'static str,
}

impl BiasVizApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: GlobalConfig,
        initial_link: Option<String>,
    ) -> Result<Self, GatewayError> {
        let gateway = HttpGateway::new(&config.api_base_url, config.request_timeout())?;
        let (loader, load_receiver) = RequestLoader::new(Arc::new(gateway));

        Ok(Self {
            state: AppState::new(),
            loader: loader.with_repaint(cc.egui_ctx.clone()),
            load_receiver,
            config,
            toasts: ToastManager::new(),
            initial_link,
            show_about: false,
            current_title: "",
        })
    }

    /// Start a request, superseding whatever is still in flight
    fn start(&mut self, kind: RequestKind) {
        tracing::info!("Starting {:?} request", kind.tag());
        self.dispatch(Event::RequestStarted(kind.tag()));
        self.loader.spawn(self.state.generation(), kind);
    }

    fn dispatch(&mut self, event: Event) {
        self.state = std::mem::take(&mut self.state).reduce(event);
    }

    fn copy_link(&mut self, ctx: &egui::Context, id: &str) {
        let link = share_link(&self.config.share_origin, id);
        tracing::info!("Copied share link {link}");
        ctx.copy_text(link);
        self.toasts.show_success("Link copied to clipboard");
    }

    /// Feed finished requests into the state machine
    fn process_responses(&mut self) {
        while let Ok(msg) = self.load_receiver.try_recv() {
            let current = msg.generation == self.state.generation() && self.state.is_loading();
            let failed = matches!(msg.outcome, LoadOutcome::Failed { .. });
            let missed = msg.outcome == LoadOutcome::NotFound;

            self.dispatch(Event::from(msg));

            if current && failed {
                if let Some(status) = self.state.status() {
                    self.toasts.show_error(status.to_string());
                }
            } else if current && missed {
                self.toasts.show_info("Nothing found for that link");
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, actions: Vec<UiAction>) {
        for action in actions {
            match action {
                UiAction::Dispatch(event) => self.dispatch(event),
                UiAction::Start(kind) => self.start(kind),
                UiAction::CopyLink(id) => self.copy_link(ctx, &id),
            }
        }
    }

    fn update_window_title(&mut self, ctx: &egui::Context) {
        let title = self.state.window_title();
        if title != self.current_title {
            self.current_title = title;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!("BiasViz - {title}")));
        }
    }

    /// Render bottom status panel
    fn render_status_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if self.state.is_loading() {
                ui.spinner();
                ui.label("Waiting for the bias service...");
            } else if let Some(status) = self.state.status() {
                ui.label(status);
            } else {
                ui.label(format!("{} dataset(s) loaded", self.state.repository().len()));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("About").clicked() {
                    self.show_about = true;
                }
                ui.label(egui::RichText::new(&self.config.api_base_url).small().weak());
            });
        });
    }

    fn render_central_panel(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        if self.state.is_loading() {
            ui.vertical_centered(|ui| {
                ui.add_space(150.0);
                ui.spinner();
                ui.add_space(10.0);
                ui.label(egui::RichText::new("Loading...").size(16.0).strong());
            });
            return;
        }

        match self.state.page() {
            Page::Landing => pages::render_landing_page(ui, actions),
            Page::Upload => pages::render_upload_page(ui, &self.state, actions),
            Page::Graph => match self.state.selected_dataset() {
                Some(dataset) => pages::render_dataset_page(ui, dataset, actions),
                None => {
                    ui.label("No dataset selected.");
                }
            },
            Page::Compare => pages::render_compare_page(ui, &self.state, actions),
        }
    }

    /// Category drill-downs and the picker, depending on the page
    fn render_windows(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        if let Some(name) = self.state.open_category() {
            let still_open = match self.state.page() {
                Page::Graph => self
                    .state
                    .selected_dataset()
                    .and_then(|d| d.find_category(name))
                    .is_some_and(|category| windows::render_category_window(ctx, category)),
                Page::Compare => self.state.compare_pair().is_some_and(|(first, second)| {
                    windows::render_category_compare_window(ctx, first, second, name)
                }),
                Page::Landing | Page::Upload => false,
            };
            if !still_open {
                actions.push(Event::CloseCategory.into());
            }
        }

        if self.state.is_category_picker_open() {
            if let Some(dataset) = self.state.selected_dataset() {
                windows::render_category_picker(ctx, dataset, actions);
            }
        }

        if self.show_about {
            windows::render_about_window(ctx, &mut self.show_about, &self.config.api_base_url);
        }
    }
}

impl eframe::App for BiasVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Resolve the share link passed on the command line
        if let Some(link) = self.initial_link.take() {
            match fragment_id(&link) {
                Some(id) => self.start(RequestKind::ResolveLink(id)),
                None => tracing::warn!("Ignoring link without an id: {link}"),
            }
        }

        self.process_responses();

        if let Some(id) = self.state.share_link_id().map(str::to_string) {
            self.copy_link(ctx, &id);
            self.dispatch(Event::ClearShareLink);
        }

        self.update_window_title(ctx);

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            render_navbar(ui, &self.state, &mut actions);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            self.render_status_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_central_panel(ui, &mut actions);
        });

        if !self.state.is_loading() {
            self.render_windows(ctx, &mut actions);
        }

        self.apply(ctx, actions);
        self.toasts.show(ctx);
    }
}
