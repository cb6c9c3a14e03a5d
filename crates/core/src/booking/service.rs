//! Booking processor - core business logic

use std::sync::Arc;

use agendar_common::time::Clock;
use agendar_domain::{
    mask_phone, BookingForm, BookingLinks, BookingRequest, BookingSummary, Config, Confirmation,
    FormPolicy, IntegrationPayload, Result,
};
use chrono::NaiveDate;
use tracing::{debug, error, info};

use super::ports::BookingGateway;
use super::validation::{validate_date, validate_form};
use crate::links::calendar::{build_calendar_link, CalendarEventSettings};
use crate::links::whatsapp::build_whatsapp_link;

/// Office-side inputs for processing a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorSettings {
    pub whatsapp_number: String,
    pub calendar: CalendarEventSettings,
    pub areas: Vec<String>,
    pub policy: FormPolicy,
}

impl ProcessorSettings {
    /// Derive settings from application configuration
    ///
    /// # Errors
    /// Returns `AgendarError::Config` when the configured time zone is unknown.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            whatsapp_number: config.office.whatsapp_number.clone(),
            calendar: CalendarEventSettings {
                title_prefix: config.calendar.event_title_prefix.clone(),
                duration_minutes: config.calendar.event_duration_minutes,
                location: config.office.location.clone(),
                timezone: config.timezone()?,
            },
            areas: config.form.areas.clone(),
            policy: config.form.policy,
        })
    }
}

/// Turns a submitted form into a confirmation
pub struct BookingProcessor {
    settings: ProcessorSettings,
    clock: Arc<dyn Clock>,
    gateway: Arc<dyn BookingGateway>,
}

impl BookingProcessor {
    /// Create a new processor
    pub fn new(
        settings: ProcessorSettings,
        clock: Arc<dyn Clock>,
        gateway: Arc<dyn BookingGateway>,
    ) -> Self {
        Self { settings, clock, gateway }
    }

    pub fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    /// Phone field value as the person types
    pub fn mask_phone(&self, raw: &str) -> String {
        mask_phone(raw)
    }

    /// Today's date in the office zone
    pub fn today(&self) -> NaiveDate {
        self.settings.calendar.timezone.today(self.clock.now_utc())
    }

    /// Reject a date before today
    ///
    /// # Errors
    /// Returns `AgendarError::PastDate` for a date before today.
    pub fn validate_date(&self, date_text: &str) -> Result<()> {
        validate_date(date_text, self.today())
    }

    pub fn build_booking(&self, form: &BookingForm) -> BookingRequest {
        BookingRequest::from_form(form)
    }

    pub fn build_links(&self, booking: &BookingRequest) -> BookingLinks {
        BookingLinks {
            whatsapp: build_whatsapp_link(booking, &self.settings.whatsapp_number),
            calendar: build_calendar_link(booking, &self.settings.calendar),
        }
    }

    /// Validate `form` and derive everything the confirmation shows
    ///
    /// Has no side effects; a rejected form leaves nothing behind.
    ///
    /// # Errors
    /// Returns `AgendarError::PastDate` or, under the strict policy,
    /// `AgendarError::InvalidInput`.
    pub fn prepare(&self, form: &BookingForm) -> Result<Confirmation> {
        self.validate_date(&form.date)?;

        let booking = self.build_booking(form);
        validate_form(&booking, self.settings.policy, &self.settings.areas)?;

        let summary = BookingSummary::from_booking(&booking);
        let links = self.build_links(&booking);
        debug!(date = %booking.date, time = %booking.time, "Booking links generated");

        Ok(Confirmation { booking, summary, links })
    }

    /// Prepare the confirmation and hand the booking to the gateway
    ///
    /// A gateway failure is logged and does not reject the booking.
    ///
    /// # Errors
    /// Same as [`Self::prepare`].
    pub async fn submit(&self, form: &BookingForm) -> Result<Confirmation> {
        let confirmation = self.prepare(form)?;

        let payload = IntegrationPayload::new(
            self.clock.now_utc(),
            confirmation.booking.clone(),
            confirmation.links.clone(),
        );
        if let Err(err) = self.gateway.send(&payload).await {
            error!(error = %err, booking_id = %payload.id, "Failed to deliver booking payload");
        }

        info!(area = %confirmation.booking.area, date = %confirmation.booking.date, "Booking accepted");
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use agendar_common::testing::MockClock;
    use agendar_domain::{AgendarError, OfficeTimeZone};
    use async_trait::async_trait;
    use chrono_tz::Tz;
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct CapturingGateway {
        sent: Mutex<Vec<IntegrationPayload>>,
        fail: bool,
    }

    #[async_trait]
    impl BookingGateway for CapturingGateway {
        async fn send(&self, payload: &IntegrationPayload) -> Result<()> {
            self.sent.lock().push(payload.clone());
            if self.fail {
                return Err(AgendarError::Integration("backend offline".into()));
            }
            Ok(())
        }
    }

    fn settings() -> ProcessorSettings {
        let mut config = Config::default();
        config.calendar.timezone = Some("UTC".into());
        ProcessorSettings::from_config(&config).unwrap()
    }

    fn processor(gateway: Arc<CapturingGateway>) -> BookingProcessor {
        let clock = MockClock::on_date(NaiveDate::from_ymd_opt(2024, 7, 29).unwrap());
        BookingProcessor::new(settings(), Arc::new(clock), gateway)
    }

    fn ana_form(date: &str) -> BookingForm {
        BookingForm {
            name: "Ana Silva".into(),
            phone: "(11) 98765-4321".into(),
            email: "ana@x.com".into(),
            area: "Trabalhista".into(),
            date: date.into(),
            time: "14:00".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn settings_follow_config() {
        let settings = settings();
        assert_eq!(settings.whatsapp_number, "5511999998888");
        assert_eq!(settings.calendar.duration_minutes, 60);
        assert_eq!(settings.calendar.timezone, OfficeTimeZone::Named(Tz::UTC));
        assert_eq!(settings.policy, FormPolicy::Permissive);
    }

    #[test]
    fn unknown_zone_is_a_config_error() {
        let mut config = Config::default();
        config.calendar.timezone = Some("Mars/Olympus".into());
        let err = ProcessorSettings::from_config(&config).unwrap_err();
        assert!(matches!(err, AgendarError::Config(_)));
    }

    #[test]
    fn prepare_builds_summary_and_links() {
        let processor = processor(Arc::default());

        let confirmation = processor.prepare(&ana_form("2024-07-29")).unwrap();

        assert_eq!(confirmation.summary.date_display, "29/07/2024");
        assert_eq!(confirmation.summary.time, "14:00");
        assert!(confirmation.links.whatsapp.starts_with("https://wa.me/5511999998888?text="));
        assert!(confirmation.links.calendar.contains("&dates=20240729T140000Z/20240729T150000Z&"));
    }

    #[test]
    fn prepare_rejects_past_date() {
        let processor = processor(Arc::default());
        let err = processor.prepare(&ana_form("2024-07-28")).unwrap_err();
        assert!(matches!(err, AgendarError::PastDate(_)));
    }

    #[test]
    fn strict_policy_rejects_bad_fields() {
        let mut settings = settings();
        settings.policy = FormPolicy::Strict;
        let clock = MockClock::on_date(NaiveDate::from_ymd_opt(2024, 7, 29).unwrap());
        let processor =
            BookingProcessor::new(settings, Arc::new(clock), Arc::new(CapturingGateway::default()));

        let mut form = ana_form("2024-07-29");
        form.email = "ana@".into();

        let err = processor.prepare(&form).unwrap_err();
        assert_eq!(err, AgendarError::InvalidInput("email: Invalid email format".into()));
    }

    #[tokio::test]
    async fn submit_sends_payload() {
        let gateway = Arc::new(CapturingGateway::default());
        let processor = processor(Arc::clone(&gateway));

        let confirmation = processor.submit(&ana_form("2024-07-30")).await.unwrap();

        let sent = gateway.sent.lock();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].booking, confirmation.booking);
        assert_eq!(sent[0].links, confirmation.links);
        assert_eq!(sent[0].endpoint, "/api/agendamento");
    }

    #[tokio::test]
    async fn submit_survives_gateway_failure() {
        let gateway = Arc::new(CapturingGateway { fail: true, ..CapturingGateway::default() });
        let processor = processor(Arc::clone(&gateway));

        assert!(processor.submit(&ana_form("2024-07-30")).await.is_ok());
        assert_eq!(gateway.sent.lock().len(), 1);
    }

    #[tokio::test]
    async fn rejected_submit_sends_nothing() {
        let gateway = Arc::new(CapturingGateway::default());
        let processor = processor(Arc::clone(&gateway));

        assert!(processor.submit(&ana_form("2024-07-01")).await.is_err());
        assert!(gateway.sent.lock().is_empty());
    }
}
