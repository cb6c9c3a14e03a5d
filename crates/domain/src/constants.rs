//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application. Office-specific values here are only defaults; deployments
//! override them through [`crate::config::Config`].

// Phone mask
pub const PHONE_MAX_DIGITS: usize = 11;
pub const AREA_CODE_DIGITS: usize = 2;
pub const SUBSCRIBER_HYPHEN_AFTER: usize = 5;

// Deep links
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";
pub const CALENDAR_TEMPLATE_URL: &str = "https://www.google.com/calendar/render?action=TEMPLATE";
pub const CALENDAR_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
pub const INVALID_DATE_MARKER: &str = "Invalid Date";

// Office defaults
pub const DEFAULT_WHATSAPP_NUMBER: &str = "5511999998888";
pub const DEFAULT_OFFICE_LOCATION: &str = "Nosso Escritório - Endereço Completo";
pub const DEFAULT_EVENT_TITLE_PREFIX: &str = "Consulta Jurídica";
pub const DEFAULT_EVENT_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_AREAS: &[&str] =
    &["Trabalhista", "Cível", "Família", "Previdenciário", "Criminal", "Empresarial"];
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Outbound integration stand-in
pub const INTEGRATION_ENDPOINT: &str = "/api/agendamento";

// User-facing messages
pub const PAST_DATE_MESSAGE: &str =
    "A data do atendimento não pode ser no passado. Por favor, escolha uma data futura.";
pub const INVALID_FORM_MESSAGE: &str = "Verifique os dados do formulário.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Não foi possível concluir o agendamento. Tente novamente.";
