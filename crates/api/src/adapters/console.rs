//! Terminal view for the booking screen
//!
//! [`ConsoleView`] renders what a web page would show as plain text lines.
//! [`run_console`] reads the form field by field from a line-based input.

use std::io::Write;

use agendar_core::BookingView;
use agendar_domain::{AgendaEntry, BookingForm, BookingLinks, BookingSummary, UiState};
use parking_lot::Mutex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{mask_phone, new_booking, submit_booking};
use crate::AppContext;

/// [`BookingView`] that writes to any `Write` sink
pub struct ConsoleView<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Write one line; write failures are dropped.
    pub fn line(&self, text: &str) {
        let mut out = self.out.lock();
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    /// Write a prompt without a newline
    pub fn prompt(&self, text: &str) {
        let mut out = self.out.lock();
        let _ = write!(out, "{text}");
        let _ = out.flush();
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> BookingView for ConsoleView<W> {
    fn set_phone(&self, masked: &str) {
        self.line(&format!("  -> {masked}"));
    }

    fn show_state(&self, state: UiState) {
        match state {
            UiState::Form => self.line("=== Agende seu atendimento ==="),
            UiState::Confirmed => self.line("=== Solicitação enviada ==="),
        }
    }

    fn render_summary(&self, summary: &BookingSummary) {
        for line in summary.lines() {
            self.line(&line);
        }
    }

    fn set_links(&self, links: &BookingLinks) {
        self.line(&format!("Confirmar pelo WhatsApp: {}", links.whatsapp));
        self.line(&format!("Adicionar ao Google Agenda: {}", links.calendar));
    }

    fn show_agenda(&self) {
        self.line("--- Agenda do escritório ---");
    }

    fn append_agenda_entry(&self, entry: &AgendaEntry) {
        self.line(&format!("{}. {entry}", entry.sequence));
    }

    fn reset_form(&self) {}

    fn alert(&self, message: &str) {
        self.line(&format!("[!] {message}"));
    }
}

/// How a console session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSummary {
    pub confirmed: usize,
    pub rejected: usize,
}

/// Drive the booking screen from `input` until it ends or the person stops
///
/// # Errors
/// Returns I/O errors from `input` and non-rejection booking errors.
pub async fn run_console<R, W>(
    ctx: &AppContext,
    input: &mut R,
    view: &ConsoleView<W>,
) -> anyhow::Result<ConsoleSummary>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut summary = ConsoleSummary { confirmed: 0, rejected: 0 };
    view.show_state(ctx.flow.state());

    loop {
        let Some(form) = read_form(ctx, input, view).await? else {
            return Ok(summary);
        };

        match submit_booking(ctx, view, &form).await {
            Ok(_) => summary.confirmed += 1,
            Err(err) if err.is_rejection() => {
                summary.rejected += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        view.prompt("Novo agendamento? [s/N] ");
        match read_line(input).await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("s") => {
                new_booking(ctx, view);
            }
            _ => return Ok(summary),
        }
    }
}

async fn read_form<R, W>(
    ctx: &AppContext,
    input: &mut R,
    view: &ConsoleView<W>,
) -> anyhow::Result<Option<BookingForm>>
where
    R: AsyncBufRead + Unpin,
    W: Write + Send,
{
    let mut form = BookingForm::default();

    macro_rules! field {
        ($label:expr) => {{
            view.prompt($label);
            match read_line(input).await? {
                Some(value) => value,
                None => return Ok(None),
            }
        }};
    }

    form.name = field!("Nome completo: ");
    let raw_phone = field!("Telefone (WhatsApp): ");
    form.phone = mask_phone(ctx, view, &raw_phone);
    form.email = field!("E-mail: ");

    let areas = &ctx.config.form.areas;
    for (index, area) in areas.iter().enumerate() {
        view.line(&format!("  {}) {area}", index + 1));
    }
    form.area = pick_area(areas, &field!("Área de interesse: "));

    form.date = field!("Data (AAAA-MM-DD): ");
    form.time = field!("Horário (HH:MM): ");
    form.notes = field!("Observações: ");

    Ok(Some(form))
}

/// A number picks from `areas`; anything else is taken as typed.
fn pick_area(areas: &[String], answer: &str) -> String {
    let answer = answer.trim();
    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| areas.get(index))
        .cloned()
        .unwrap_or_else(|| answer.to_string())
}

async fn read_line<R>(input: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = String::new();
    if input.read_line(&mut buf).await? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}
