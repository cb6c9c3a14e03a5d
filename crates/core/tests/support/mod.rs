//! Shared test helpers for `agendar-core` integration tests.
//!
//! Provides a view that records every call and gateways that capture or
//! refuse payloads, so flow tests can assert on what the screen saw.

#![allow(dead_code)]

pub mod gateway;
pub mod view;

use std::sync::Arc;

use agendar_common::testing::MockClock;
use agendar_core::{BookingFlow, BookingGateway, BookingProcessor, ProcessorSettings};
use agendar_domain::{BookingForm, Config, FormPolicy};
use chrono::NaiveDate;

use self::gateway::RecordingGateway;

/// Office settings pinned to UTC so calendar timestamps are stable
pub fn utc_settings(policy: FormPolicy) -> ProcessorSettings {
    let mut config = Config::default();
    config.calendar.timezone = Some("UTC".to_string());
    config.form.policy = policy;
    ProcessorSettings::from_config(&config).expect("default config is valid")
}

/// Flow whose "today" is 2024-07-29 in UTC
pub fn flow_on_2024_07_29(gateway: Arc<RecordingGateway>) -> BookingFlow {
    flow_with(utc_settings(FormPolicy::Permissive), gateway)
}

pub fn flow_with(settings: ProcessorSettings, gateway: Arc<RecordingGateway>) -> BookingFlow {
    flow_with_gateway(settings, gateway)
}

/// Flow on 2024-07-29 with any gateway
pub fn flow_with_gateway(
    settings: ProcessorSettings,
    gateway: Arc<dyn BookingGateway>,
) -> BookingFlow {
    let today = NaiveDate::from_ymd_opt(2024, 7, 29).expect("valid date");
    let processor = BookingProcessor::new(settings, Arc::new(MockClock::on_date(today)), gateway);
    BookingFlow::new(processor)
}

pub fn booking_form(name: &str, area: &str, date: &str, time: &str) -> BookingForm {
    BookingForm {
        name: name.to_string(),
        phone: "(11) 98765-4321".to_string(),
        email: "cliente@example.com".to_string(),
        area: area.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        notes: String::new(),
    }
}
