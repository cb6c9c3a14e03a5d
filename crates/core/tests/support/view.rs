//! Recording view

use agendar_core::BookingView;
use agendar_domain::{AgendaEntry, BookingLinks, BookingSummary, UiState};
use parking_lot::Mutex;

/// One call made on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    SetPhone(String),
    ShowState(UiState),
    RenderSummary(BookingSummary),
    SetLinks(BookingLinks),
    ShowAgenda,
    AppendAgendaEntry(String),
    ResetForm,
    Alert(String),
}

#[derive(Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn agenda_lines(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ViewCall::AppendAgendaEntry(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn last_links(&self) -> Option<BookingLinks> {
        self.calls().into_iter().rev().find_map(|call| match call {
            ViewCall::SetLinks(links) => Some(links),
            _ => None,
        })
    }

    fn push(&self, call: ViewCall) {
        self.calls.lock().push(call);
    }
}

impl BookingView for RecordingView {
    fn set_phone(&self, masked: &str) {
        self.push(ViewCall::SetPhone(masked.to_string()));
    }

    fn show_state(&self, state: UiState) {
        self.push(ViewCall::ShowState(state));
    }

    fn render_summary(&self, summary: &BookingSummary) {
        self.push(ViewCall::RenderSummary(summary.clone()));
    }

    fn set_links(&self, links: &BookingLinks) {
        self.push(ViewCall::SetLinks(links.clone()));
    }

    fn show_agenda(&self) {
        self.push(ViewCall::ShowAgenda);
    }

    fn append_agenda_entry(&self, entry: &AgendaEntry) {
        self.push(ViewCall::AppendAgendaEntry(entry.to_string()));
    }

    fn reset_form(&self) {
        self.push(ViewCall::ResetForm);
    }

    fn alert(&self, message: &str) {
        self.push(ViewCall::Alert(message.to_string()));
    }
}
