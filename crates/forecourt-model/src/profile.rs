// SPDX-License-Identifier: Apache-2.0

use crate::envelope::SettingsDocument;

/// Immutable business defaults. A fetched settings document never replaces
/// this record wholesale; `patched` merges it key by key and returns a new
/// profile, leaving the defaults untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessProfile {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub whatsapp: String,
    pub whatsapp_message: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    pub instagram: String,
    pub facebook: String,
}

impl Default for BusinessProfile {
    fn default() -> Self {
        Self {
            name: "Forecourt Rentals".to_string(),
            tagline: "Drive the city on your terms".to_string(),
            description: "A small fleet, honest prices, and a car ready when you land."
                .to_string(),
            whatsapp: "+212600000000".to_string(),
            whatsapp_message: "Hello! I'd like to book a car.".to_string(),
            email: "contact@forecourt.example".to_string(),
            address: "12 Marina Boulevard, Casablanca".to_string(),
            hours: "Mon-Sun 08:00-20:00".to_string(),
            instagram: "forecourt.rentals".to_string(),
            facebook: "forecourtrentals".to_string(),
        }
    }
}

impl BusinessProfile {
    /// Sparse patch: only recognized keys carrying a non-empty string value
    /// overwrite the corresponding field. Everything else keeps the default.
    #[must_use]
    pub fn patched(&self, doc: &SettingsDocument) -> Self {
        let mut out = self.clone();
        for (key, value) in &doc.entries {
            let Some(raw) = value.as_str() else {
                continue;
            };
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            match key.as_str() {
                "name" => out.name = text.to_string(),
                "tagline" => out.tagline = text.to_string(),
                "description" => out.description = text.to_string(),
                "whatsapp" => out.whatsapp = text.to_string(),
                "whatsappMessage" => out.whatsapp_message = text.to_string(),
                "email" => out.email = text.to_string(),
                "address" => out.address = text.to_string(),
                "hours" => out.hours = text.to_string(),
                "instagram" => out.instagram = text.to_string(),
                "facebook" => out.facebook = text.to_string(),
                _ => {}
            }
        }
        out
    }

    #[must_use]
    pub fn whatsapp_url(&self) -> String {
        self.whatsapp_url_with(&self.whatsapp_message)
    }

    /// Contact link with a caller-supplied message, e.g. one naming the
    /// vehicle. Non-digits are stripped from the number per the wa.me
    /// address format.
    #[must_use]
    pub fn whatsapp_url_with(&self, message: &str) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        let text: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
        format!("https://wa.me/{digits}?text={text}")
    }
}
