//! Shared helpers for application-layer integration tests.

#![allow(dead_code)]

use std::io;
use std::sync::Arc;

use agendar_common::testing::MockClock;
use agendar_core::BookingGateway;
use agendar_domain::{AgendarError, BookingForm, Config, FormPolicy, IntegrationPayload};
use agendar_lib::AppContext;
use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory log sink for `tracing_subscriber::fmt`.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Gateway double that keeps every payload it receives.
#[derive(Default)]
pub struct CapturedPayloads {
    payloads: Mutex<Vec<IntegrationPayload>>,
}

impl CapturedPayloads {
    pub fn count(&self) -> usize {
        self.payloads.lock().len()
    }

    pub fn last(&self) -> Option<IntegrationPayload> {
        self.payloads.lock().last().cloned()
    }
}

#[async_trait]
impl BookingGateway for CapturedPayloads {
    async fn send(&self, payload: &IntegrationPayload) -> Result<(), AgendarError> {
        self.payloads.lock().push(payload.clone());
        Ok(())
    }
}

/// Context in UTC whose "today" is 2024-07-29.
pub fn test_context(policy: FormPolicy) -> (AppContext, Arc<CapturedPayloads>) {
    let mut config = Config::default();
    config.calendar.timezone = Some("UTC".to_string());
    config.form.policy = policy;

    let today = NaiveDate::from_ymd_opt(2024, 7, 29).expect("valid date");
    let gateway = Arc::new(CapturedPayloads::default());
    let ctx = AppContext::new_with_parts(
        config,
        Arc::new(MockClock::on_date(today)),
        Arc::clone(&gateway) as Arc<dyn BookingGateway>,
    )
    .expect("test context should build");

    (ctx, gateway)
}

pub fn ana_silva_form(date: &str) -> BookingForm {
    BookingForm {
        name: "Ana Silva".to_string(),
        phone: "(11) 98765-4321".to_string(),
        email: "ana@x.com".to_string(),
        area: "Trabalhista".to_string(),
        date: date.to_string(),
        time: "14:00".to_string(),
        notes: String::new(),
    }
}
