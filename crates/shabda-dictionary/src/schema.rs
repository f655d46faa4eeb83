use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shabda_core::dictionary::LookupError;
use shabda_types::{DictionaryResult, Sense, Translation};

// Response shape of GET /api/v1/entries/{language}/{word}
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiResponse {
    word: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    entries: Vec<ApiEntry>,
    source: Option<ApiSource>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiEntry {
    #[serde(deserialize_with = "null_as_default")]
    language: ApiLanguage,
    #[serde(rename = "partOfSpeech")]
    part_of_speech: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    senses: Vec<ApiSense>,
    #[serde(deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiLanguage {
    code: Option<String>,
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSense {
    definition: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    examples: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    synonyms: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    translations: Vec<ApiTranslation>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiTranslation {
    #[serde(deserialize_with = "null_as_default")]
    language: ApiLanguage,
    word: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiSource {
    url: Option<String>,
}

/// `null` gets the same fallback as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Examples are usually plain strings, occasionally `{ "text": ... }`
fn example_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.as_str(),
        Value::Object(map) => map.get("text")?.as_str()?,
        _ => return None,
    };
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

/// Parse and normalize an API response body.
///
/// Returns `NotFound` when the body is valid but holds no usable definition.
pub fn parse_response(body: &str, requested: &str) -> Result<DictionaryResult, LookupError> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    let mut senses = Vec::new();
    let mut translations = Vec::new();

    for entry in response.entries {
        let part_of_speech = non_blank(entry.part_of_speech);

        for sense in entry.senses {
            for t in sense.translations {
                if let Some(word) = non_blank(t.word) {
                    translations.push(Translation {
                        language_code: t.language.code,
                        language_name: t.language.name,
                        word,
                    });
                }
            }

            let Some(meaning) = non_blank(sense.definition) else {
                continue;
            };

            let mut synonyms = Vec::new();
            for s in sense.synonyms.iter().chain(entry.synonyms.iter()) {
                push_unique(&mut synonyms, s);
            }

            senses.push(Sense {
                meaning,
                part_of_speech: part_of_speech.clone(),
                examples: sense.examples.iter().filter_map(example_text).collect(),
                synonyms,
                language_code: entry.language.code.clone(),
                language_name: entry.language.name.clone(),
            });
        }
    }

    if senses.is_empty() {
        return Err(LookupError::NotFound(requested.to_string()));
    }

    Ok(DictionaryResult {
        headword: non_blank(response.word).unwrap_or_else(|| requested.to_string()),
        senses,
        translations,
        source_url: response.source.and_then(|s| non_blank(s.url)),
    })
}
