use super::{FilterCriteria, QueryParseError, QueryParser};

/// Instructions sent ahead of the user's query. `{query}` is replaced verbatim.
pub const CRITERIA_PROMPT: &str = r#"Parse the following housing search query into structured filters.

Query: "{query}"

Extract the following information if mentioned:
- Number of bedrooms (as an integer)
- Maximum price (as an integer, no currency symbols)
- Minimum price (as an integer, no currency symbols)
- City name
- Neighborhood name
- Whether near transit (true/false)
- Whether pet friendly (true/false)
- Whether furnished (true/false)
- Property type (one of: Studio, Apartment, House, Condo)

Return a JSON object with only these fields. If a field is not mentioned, set it to null.
Example response for "2 bedroom apartment in San Francisco under $3000":
{"bedrooms": 2, "maxPrice": 3000, "minPrice": null, "city": "San Francisco", "neighborhood": null, "nearTransit": null, "petFriendly": null, "furnished": null, "propertyType": "Apartment"}"#;

/// Text-completion backend, e.g. an HTTP client for a hosted language model.
pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, QueryParseError>;
}

/// Prompts a completion backend and reads criteria out of its reply.
///
/// Adapter for an external language-model service. The crate ships no backend;
/// a deployment supplies its own [`Completion`] client, and without one the
/// service falls back to [`KeywordQueryParser`](super::KeywordQueryParser).
pub struct CompletionQueryParser<C> {
    backend: C,
}

impl<C: Completion> CompletionQueryParser<C> {
    pub fn new(backend: C) -> Self {
        Self { backend }
    }

    pub fn prompt_for(query: &str) -> String {
        CRITERIA_PROMPT.replace("{query}", query.trim())
    }
}

impl<C: Completion> QueryParser for CompletionQueryParser<C> {
    fn parse(&self, query: &str) -> Result<FilterCriteria, QueryParseError> {
        if query.trim().is_empty() {
            return Err(QueryParseError::Empty);
        }

        let reply = self.backend.complete(&Self::prompt_for(query))?;
        tracing::debug!(reply_len = reply.len(), "completion reply received");
        extract_criteria_json(&reply)
    }
}

/// Pulls the outermost `{ ... }` out of a reply that may wrap it in a code fence
/// or surrounding prose, then decodes it.
pub fn extract_criteria_json(reply: &str) -> Result<FilterCriteria, QueryParseError> {
    let start = reply.find('{').ok_or(QueryParseError::NoJsonObject)?;
    let end = reply.rfind('}').ok_or(QueryParseError::NoJsonObject)?;
    if end < start {
        return Err(QueryParseError::NoJsonObject);
    }

    let criteria = serde_json::from_str(&reply[start..=end])?;
    Ok(criteria)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct ScriptedCompletion {
        reply: Result<String, String>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedCompletion {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    impl Completion for ScriptedCompletion {
        fn complete(&self, prompt: &str) -> Result<String, QueryParseError> {
            self.prompts
                .lock()
                .expect("prompt log poisoned")
                .push(prompt.to_string());
            self.reply.clone().map_err(QueryParseError::Unavailable)
        }
    }

    #[test]
    fn extracts_plain_fenced_and_wrapped_objects() {
        let plain = extract_criteria_json(r#"{"bedrooms": 1}"#).expect("plain");
        assert_eq!(plain.bedrooms, Some(1));

        let fenced = extract_criteria_json("```json\n{\"maxPrice\": 2500}\n```").expect("fenced");
        assert_eq!(fenced.max_price, Some(2500));

        let prose = extract_criteria_json(
            "Here are the filters: {\"city\": \"Oakland\", \"petFriendly\": true} Let me know!",
        )
        .expect("prose");
        assert_eq!(prose.city.as_deref(), Some("Oakland"));
        assert_eq!(prose.pet_friendly, Some(true));
    }

    #[test]
    fn missing_or_malformed_json_is_an_error() {
        assert!(matches!(
            extract_criteria_json("no filters here"),
            Err(QueryParseError::NoJsonObject)
        ));
        assert!(matches!(
            extract_criteria_json("} backwards {"),
            Err(QueryParseError::NoJsonObject)
        ));
        assert!(matches!(
            extract_criteria_json(r#"{"bedrooms": "two"}"#),
            Err(QueryParseError::Json(_))
        ));
    }

    #[test]
    fn parser_embeds_query_in_prompt() {
        let backend = ScriptedCompletion::replying(r#"{"furnished": true}"#);
        let parser = CompletionQueryParser::new(backend);

        let criteria = parser.parse("  furnished place  ").expect("parses");
        assert_eq!(criteria.furnished, Some(true));

        let prompts = parser.backend.prompts.lock().expect("prompt log").clone();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Query: \"furnished place\""));
    }

    #[test]
    fn backend_failures_propagate() {
        let parser = CompletionQueryParser::new(ScriptedCompletion {
            reply: Err("rate limited".to_string()),
            prompts: Mutex::new(Vec::new()),
        });
        assert!(matches!(
            parser.parse("studio"),
            Err(QueryParseError::Unavailable(_))
        ));
        assert!(matches!(parser.parse(" "), Err(QueryParseError::Empty)));
    }
}
