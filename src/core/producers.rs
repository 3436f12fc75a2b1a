use crate::core::WordProducer;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_required_field};

#[derive(Debug, Clone, Copy, Default)]
pub struct LaurelWordProducer;

impl WordProducer for LaurelWordProducer {
    fn word(&self) -> String {
        "Laurel".to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct YannyWordProducer;

impl WordProducer for YannyWordProducer {
    fn word(&self) -> String {
        "Yanny".to_string()
    }
}

/// Says whatever word the configuration supplies.
#[derive(Debug, Clone)]
pub struct PropertiesWordProducer {
    word: String,
}

impl PropertiesWordProducer {
    pub fn new(word: impl Into<String>) -> Self {
        Self { word: word.into() }
    }

    pub fn from_properties(properties: &ProducerProperties) -> Result<Self> {
        let word = validate_required_field("hearing.say_word", &properties.say_word)?;
        validate_non_empty_string("hearing.say_word", word)?;
        Ok(Self::new(word.clone()))
    }
}

impl WordProducer for PropertiesWordProducer {
    fn word(&self) -> String {
        self.word.clone()
    }
}

/// Configuration values handed to producer factories.
#[derive(Debug, Clone, Default)]
pub struct ProducerProperties {
    pub say_word: Option<String>,
}
