use serde::Serialize;

/// Presence test for a fixed, ordered list of suspicious phrases.
#[derive(Debug, Clone)]
pub struct KeywordScanner {
    phrases: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KeywordScan {
    pub count: u32,
    pub found: Vec<String>,
}

impl KeywordScanner {
    pub fn new(phrases: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            if !phrase.is_empty() && !unique.contains(&phrase) {
                unique.push(phrase);
            }
        }
        Self { phrases: unique }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Case-sensitive substring scan; a phrase counts once however often it occurs.
    pub fn scan(&self, text: Option<&str>) -> KeywordScan {
        let Some(text) = text else {
            return KeywordScan::default();
        };

        let found: Vec<String> = self
            .phrases
            .iter()
            .filter(|phrase| text.contains(phrase.as_str()))
            .cloned()
            .collect();

        KeywordScan {
            count: found.len() as u32,
            found,
        }
    }
}
