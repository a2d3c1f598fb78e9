//! Parsing of the DNA extraction answer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::client::GeminiError;

/// Physical and stylistic traits extracted from a portrait.
///
/// Keys the model did not return are omitted on serialization; keys outside
/// this set are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDna {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub genero: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub idade: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub formato_rosto: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tom_pele: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cor_olhos: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub formato_sobrancelhas: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub formato_nariz: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub labios: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cabelo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub altura: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tipo_corpo: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub tatuagens: Option<String>,
}

impl ExtractedDna {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Accept strings, numbers and booleans as text; the model sometimes
/// answers `"idade": 28`. Null, arrays and objects count as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// Remove a surrounding markdown code fence (```` ``` ```` or ```` ```json ````).
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Parse the model's answer into [`ExtractedDna`].
pub fn parse_extracted_dna(text: &str) -> Result<ExtractedDna, GeminiError> {
    serde_json::from_str(strip_code_fences(text))
        .map_err(|e| GeminiError::Malformed(format!("DNA answer is not a JSON object: {e}")))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn strips_json_fence() {
        let text = "```json\n{\"cabelo\": \"preto\"}\n```";
        assert_eq!(strip_code_fences(text), "{\"cabelo\": \"preto\"}");
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\n{}\n```\n"), "{}");
    }

    #[test]
    fn leaves_plain_json_alone() {
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
    }

    #[test]
    fn parses_known_keys_and_drops_unknown() {
        let dna = parse_extracted_dna(
            r#"```json
{"formatoRosto": "Oval", "idade": 28, "corOlhos": null, "humor": "alegre"}
```"#,
        )
        .unwrap();

        assert_eq!(dna.formato_rosto.as_deref(), Some("Oval"));
        assert_eq!(dna.idade.as_deref(), Some("28"));
        assert!(dna.cor_olhos.is_none());

        let json = serde_json::to_value(&dna).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "formatoRosto": "Oval", "idade": "28" })
        );
    }

    #[test]
    fn rejects_non_json_answer() {
        let result = parse_extracted_dna("Desculpe, não consigo ver a imagem.");
        assert_matches!(result, Err(GeminiError::Malformed(_)));
    }

    #[test]
    fn empty_object_is_empty_dna() {
        assert!(parse_extracted_dna("{}").unwrap().is_empty());
    }
}
