use crate::models::BusinessCard;

/// Render a card as a VCARD 3.0 document. Optional fields produce a line only
/// when populated; special characters in values are escaped per RFC 2426.
pub fn render(card: &BusinessCard) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape(&card.name)),
    ];

    if let Some(title) = non_empty(&card.title) {
        lines.push(format!("TITLE:{}", escape(title)));
    }
    if let Some(company) = non_empty(&card.company) {
        lines.push(format!("ORG:{}", escape(company)));
    }
    if let Some(email) = non_empty(&card.email) {
        lines.push(format!("EMAIL:{}", escape(email)));
    }
    if let Some(phone) = non_empty(&card.phone) {
        lines.push(format!("TEL:{}", escape(phone)));
    }
    if let Some(website) = non_empty(&card.website) {
        lines.push(format!("URL:{}", escape(website)));
    }
    if let Some(address) = non_empty(&card.address) {
        lines.push(format!("ADR:;;{};;;", escape(address)));
    }

    lines.push("END:VCARD".to_string());
    lines.join("\r\n")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(',', "\\,")
        .replace(';', "\\;")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn sample_card() -> BusinessCard {
        BusinessCard {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            name: "Ada Lovelace".to_string(),
            title: Some("Engineer".to_string()),
            company: Some("Analytical Engines, Ltd".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: None,
            secondary_phone: None,
            website: None,
            address: None,
            bio: None,
            social_links: None,
            image_url: None,
            theme: "default".to_string(),
            is_public: true,
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn renders_only_populated_fields() {
        let vcard = render(&sample_card());
        assert!(vcard.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Ada Lovelace"));
        assert!(vcard.contains("TITLE:Engineer"));
        assert!(vcard.contains("EMAIL:ada@example.com"));
        assert!(!vcard.contains("TEL:"));
        assert!(!vcard.contains("URL:"));
        assert!(vcard.ends_with("END:VCARD"));
    }

    #[test]
    fn escapes_separator_characters() {
        let mut card = sample_card();
        card.company = Some("Engines, Ltd; Analytical".to_string());
        let vcard = render(&card);
        assert!(vcard.contains("ORG:Engines\\, Ltd\\; Analytical"));
    }
}
