use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    #[serde(default)]
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub specialties: Vec<Specialty>,
}

impl Vet {
    pub fn new(id: u32, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            specialties: Vec::new(),
        }
    }

    pub fn with_specialty(mut self, specialty: Specialty) -> Self {
        self.specialties.push(specialty);
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Specialties ordered by name, the order views display them in.
    pub fn specialties_sorted(&self) -> Vec<&Specialty> {
        let mut sorted: Vec<&Specialty> = self.specialties.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    pub fn nr_of_specialties(&self) -> usize {
        self.specialties.len()
    }
}

/// Envelope over the vet list, serialized as `{"vetList": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vets {
    vet_list: Vec<Vet>,
}

impl Vets {
    pub fn new(vet_list: Vec<Vet>) -> Self {
        Self { vet_list }
    }

    pub fn vet_list(&self) -> &[Vet] {
        &self.vet_list
    }

    pub fn into_vet_list(self) -> Vec<Vet> {
        self.vet_list
    }
}

impl From<Vec<Vet>> for Vets {
    fn from(vet_list: Vec<Vet>) -> Self {
        Self::new(vet_list)
    }
}

/// Values a view model can carry to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    Vets(Vets),
    List(Vec<ModelValue>),
}

impl ModelValue {
    pub fn as_vets(&self) -> Option<&Vets> {
        match self {
            ModelValue::Vets(vets) => Some(vets),
            _ => None,
        }
    }
}

impl From<Vets> for ModelValue {
    fn from(vets: Vets) -> Self {
        ModelValue::Vets(vets)
    }
}

impl From<&str> for ModelValue {
    fn from(text: &str) -> Self {
        ModelValue::Text(text.to_string())
    }
}

impl From<String> for ModelValue {
    fn from(text: String) -> Self {
        ModelValue::Text(text)
    }
}

impl From<i64> for ModelValue {
    fn from(value: i64) -> Self {
        ModelValue::Integer(value)
    }
}

impl From<bool> for ModelValue {
    fn from(value: bool) -> Self {
        ModelValue::Flag(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialties_sorted_by_name() {
        let vet = Vet::new(2, "Helen", "Leary")
            .with_specialty(Specialty { id: 3, name: "surgery".to_string() })
            .with_specialty(Specialty { id: 1, name: "radiology".to_string() });

        let names: Vec<&str> = vet
            .specialties_sorted()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["radiology", "surgery"]);
        assert_eq!(vet.nr_of_specialties(), 2);
        assert_eq!(vet.full_name(), "Helen Leary");
    }

    #[test]
    fn test_vets_serializes_with_vet_list_key() {
        let vets = Vets::new(vec![Vet::new(1, "James", "Carter")]);
        let json = serde_json::to_value(&vets).unwrap();

        assert_eq!(json["vetList"][0]["firstName"], "James");
        assert_eq!(json["vetList"][0]["specialties"], serde_json::json!([]));
    }

    #[test]
    fn test_default_vet_deserializes_from_empty_object() {
        let vet: Vet = serde_json::from_str("{}").unwrap();
        assert_eq!(vet, Vet::default());
    }
}
