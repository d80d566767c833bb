//! Payloads exchanged with the Resend `/emails` endpoint.

use serde::{Deserialize, Serialize};

/// An email ready to hand to the provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundEmail {
    /// Sender, either `addr` or `Display Name <addr>`
    pub from: String,

    /// Recipients
    pub to: Vec<String>,

    /// Subject line
    pub subject: String,

    /// HTML body
    pub html: String,
}

/// Body returned by Resend when an email was accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SendEmailResponse {
    /// Provider-assigned email ID
    pub id: String,
}

/// Error body returned by Resend on failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Escape text for inclusion in an HTML body.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_email_serialization() {
        let email = OutboundEmail {
            from: "Studio <hello@example.com>".to_string(),
            to: vec!["owner@example.com".to_string()],
            subject: "Hi".to_string(),
            html: "<p>Hi</p>".to_string(),
        };

        let json = serde_json::to_value(&email).unwrap();
        assert_eq!(json["from"], "Studio <hello@example.com>");
        assert_eq!(json["to"][0], "owner@example.com");
        assert_eq!(json["html"], "<p>Hi</p>");
    }

    #[test]
    fn test_provider_error_body() {
        let body: ProviderErrorBody = serde_json::from_str(
            r#"{"statusCode":422,"name":"validation_error","message":"Invalid `to` field."}"#,
        )
        .unwrap();
        assert_eq!(body.status_code, Some(422));
        assert_eq!(body.message.as_deref(), Some("Invalid `to` field."));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }
}
