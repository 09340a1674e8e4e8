//! Deterministic prompt construction from letter requests.

use serde::Deserialize;

use crate::draft::error::DraftError;

/// Structured letter request fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredLetterRequest {
    /// Short matter title.
    #[serde(default)]
    pub title: Option<String>,
    /// Name of the person the letter is written for.
    pub sender_name: String,
    /// Postal address of the sender.
    #[serde(default)]
    pub sender_address: Option<String>,
    /// Attorney name to sign the letter with.
    #[serde(default)]
    pub attorney_name: Option<String>,
    /// Recipient of the letter.
    pub recipient_name: String,
    /// Subject of the dispute or request.
    pub subject: String,
    /// The outcome the sender is asking for.
    #[serde(default)]
    pub desired_resolution: Option<String>,
    /// Kind of letter (demand, cease-and-desist, complaint, ...).
    #[serde(default)]
    pub letter_type: Option<String>,
}

/// Legacy free-form drafting payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDraftRequest {
    /// Letter title; the only mandatory legacy field.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional template text to base the letter on.
    #[serde(default)]
    pub template_body: Option<String>,
    /// Requested tone (formal, firm, conciliatory, ...).
    #[serde(default)]
    pub tone: Option<String>,
    /// Requested length (short, medium, long).
    #[serde(default)]
    pub length: Option<String>,
}

/// The two accepted input forms for drafting.
#[derive(Debug, Clone)]
pub enum DraftInput {
    /// Structured request fields.
    Structured(StructuredLetterRequest),
    /// Legacy title/template/tone/length payload.
    Legacy(LegacyDraftRequest),
}

fn require(field: &'static str, value: &str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::BlankField(field))
    } else {
        Ok(())
    }
}

fn push_field(prompt: &mut String, label: &str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        prompt.push_str(label);
        prompt.push_str(": ");
        prompt.push_str(value);
        prompt.push('\n');
    }
}

/// Builds the drafting prompt for the text-generation API.
///
/// The prompt is a pure function of the input: identical requests produce
/// identical prompts, so drafts are reproducible up to the API's own
/// nondeterminism.
///
/// # Errors
///
/// Returns `DraftError::InsufficientInput` when the legacy form carries no
/// title, and `DraftError::BlankField` when a mandatory structured field
/// is blank.
pub fn build_prompt(input: &DraftInput) -> Result<String, DraftError> {
    match input {
        DraftInput::Structured(req) => {
            require("senderName", &req.sender_name)?;
            require("recipientName", &req.recipient_name)?;
            require("subject", &req.subject)?;

            let mut prompt = String::from(
                "Draft a formal legal letter based on the following details.\n\n",
            );
            if let Some(letter_type) = &req.letter_type {
                push_field(&mut prompt, "Letter type", letter_type);
            }
            if let Some(title) = &req.title {
                push_field(&mut prompt, "Matter", title);
            }
            push_field(&mut prompt, "On behalf of", &req.sender_name);
            if let Some(address) = &req.sender_address {
                push_field(&mut prompt, "Sender address", address);
            }
            push_field(&mut prompt, "Addressed to", &req.recipient_name);
            push_field(&mut prompt, "Regarding", &req.subject);
            if let Some(resolution) = &req.desired_resolution {
                push_field(&mut prompt, "Desired resolution", resolution);
            }
            if let Some(attorney) = &req.attorney_name {
                push_field(&mut prompt, "Signed by attorney", attorney);
            }
            prompt.push_str(
                "\nWrite the complete letter body, ready to send, \
                 without placeholders for missing information.",
            );
            Ok(prompt)
        }
        DraftInput::Legacy(req) => {
            let Some(title) = req.title.as_deref().map(str::trim).filter(|t| !t.is_empty())
            else {
                return Err(DraftError::InsufficientInput);
            };

            let mut prompt = format!("Draft a legal letter titled \"{title}\".\n");
            if let Some(template) = &req.template_body {
                push_field(&mut prompt, "Base it on this template", template);
            }
            if let Some(tone) = &req.tone {
                push_field(&mut prompt, "Tone", tone);
            }
            if let Some(length) = &req.length {
                push_field(&mut prompt, "Length", length);
            }
            prompt.push_str("\nWrite the complete letter body, ready to send.");
            Ok(prompt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structured() -> StructuredLetterRequest {
        StructuredLetterRequest {
            title: Some("Deposit dispute".to_string()),
            sender_name: "Jamie Doe".to_string(),
            sender_address: Some("1 Main St, Springfield".to_string()),
            attorney_name: Some("Alex Reed, Esq.".to_string()),
            recipient_name: "Acme Property Management".to_string(),
            subject: "Unreturned security deposit".to_string(),
            desired_resolution: Some("Full refund within 14 days".to_string()),
            letter_type: Some("demand".to_string()),
        }
    }

    #[test]
    fn test_structured_prompt_embeds_all_fields() {
        let prompt = build_prompt(&DraftInput::Structured(structured())).unwrap();
        assert!(prompt.contains("Jamie Doe"));
        assert!(prompt.contains("Acme Property Management"));
        assert!(prompt.contains("Unreturned security deposit"));
        assert!(prompt.contains("Full refund within 14 days"));
        assert!(prompt.contains("Alex Reed, Esq."));
        assert!(prompt.contains("demand"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let input = DraftInput::Structured(structured());
        assert_eq!(build_prompt(&input).unwrap(), build_prompt(&input).unwrap());
    }

    #[test]
    fn test_structured_blank_mandatory_field_fails() {
        let mut req = structured();
        req.subject = "   ".to_string();
        let result = build_prompt(&DraftInput::Structured(req));
        assert!(matches!(result, Err(DraftError::BlankField("subject"))));
    }

    #[test]
    fn test_legacy_requires_title() {
        let result = build_prompt(&DraftInput::Legacy(LegacyDraftRequest::default()));
        assert!(matches!(result, Err(DraftError::InsufficientInput)));

        let result = build_prompt(&DraftInput::Legacy(LegacyDraftRequest {
            title: Some("  ".to_string()),
            ..LegacyDraftRequest::default()
        }));
        assert!(matches!(result, Err(DraftError::InsufficientInput)));
    }

    #[test]
    fn test_legacy_prompt_with_optional_fields() {
        let prompt = build_prompt(&DraftInput::Legacy(LegacyDraftRequest {
            title: Some("Late invoice".to_string()),
            template_body: None,
            tone: Some("firm".to_string()),
            length: Some("short".to_string()),
        }))
        .unwrap();
        assert!(prompt.contains("Late invoice"));
        assert!(prompt.contains("Tone: firm"));
        assert!(prompt.contains("Length: short"));
    }

    #[test]
    fn test_blank_optional_fields_are_skipped() {
        let mut req = structured();
        req.desired_resolution = Some("  ".to_string());
        let prompt = build_prompt(&DraftInput::Structured(req)).unwrap();
        assert!(!prompt.contains("Desired resolution"));
    }
}
