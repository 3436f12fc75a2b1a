use crate::core::WordProducer;

pub struct HearingInterpreter {
    producer: Box<dyn WordProducer>,
    producer_name: String,
}

impl HearingInterpreter {
    pub fn new(producer_name: impl Into<String>, producer: Box<dyn WordProducer>) -> Self {
        Self {
            producer,
            producer_name: producer_name.into(),
        }
    }

    pub fn what_i_heard(&self) -> String {
        let word = self.producer.word();
        tracing::debug!("{} producer says: {}", self.producer_name, word);
        word
    }

    /// Name of the registry candidate this interpreter was built from.
    pub fn producer_name(&self) -> &str {
        &self.producer_name
    }
}

impl std::fmt::Debug for HearingInterpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HearingInterpreter")
            .field("producer_name", &self.producer_name)
            .finish()
    }
}
