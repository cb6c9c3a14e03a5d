//! WhatsApp click-to-chat link

use agendar_domain::constants::WHATSAPP_BASE_URL;
use agendar_domain::BookingRequest;

/// Message pre-filled in the chat with the office
pub fn whatsapp_message(booking: &BookingRequest) -> String {
    [
        "Olá! Gostaria de agendar um atendimento.".to_string(),
        format!("- Nome: {}", booking.name),
        format!("- Área: {}", booking.area),
        format!("- Data: {}", booking.date_display()),
        format!("- Horário: {}", booking.time),
    ]
    .join("\n")
}

/// `https://wa.me/<office_number>?text=<encoded message>`
pub fn build_whatsapp_link(booking: &BookingRequest, office_number: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}{office_number}?text={}",
        urlencoding::encode(&whatsapp_message(booking))
    )
}

#[cfg(test)]
mod tests {
    use agendar_domain::BookingForm;

    use super::*;

    fn booking() -> BookingRequest {
        BookingRequest::from_form(&BookingForm {
            name: "Ana Silva".into(),
            area: "Trabalhista".into(),
            date: "2024-07-29".into(),
            time: "14:00".into(),
            ..BookingForm::default()
        })
    }

    #[test]
    fn message_lists_booking_fields() {
        assert_eq!(
            whatsapp_message(&booking()),
            "Olá! Gostaria de agendar um atendimento.\n- Nome: Ana Silva\n- Área: Trabalhista\n- \
             Data: 29/07/2024\n- Horário: 14:00"
        );
    }

    #[test]
    fn link_targets_office_number() {
        let link = build_whatsapp_link(&booking(), "5511999998888");
        assert!(link.starts_with("https://wa.me/5511999998888?text="));
    }

    #[test]
    fn text_parameter_round_trips() {
        let link = build_whatsapp_link(&booking(), "5511999998888");
        let (_, encoded) = link.split_once("?text=").unwrap();

        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));

        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, whatsapp_message(&booking()));
        assert!(decoded.contains("Ana Silva"));
        assert!(decoded.contains("Trabalhista"));
    }
}
