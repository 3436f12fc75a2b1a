use crate::core::controller::{VETS_MODEL_KEY, VET_LIST_VIEW};
use crate::core::{ModelSink, ModelValue, Vets};
use crate::utils::error::{ClinicError, Result};

/// Insertion-ordered view model. Putting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    entries: Vec<(String, ModelValue)>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ModelValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl ModelSink for Model {
    fn put(&mut self, key: &str, value: ModelValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }
}

/// Renders a view identifier against a populated model.
pub fn render(view: &str, model: &Model) -> Result<String> {
    match view {
        VET_LIST_VIEW => {
            let vets = model
                .get(VETS_MODEL_KEY)
                .and_then(ModelValue::as_vets)
                .ok_or_else(|| ClinicError::RenderError {
                    message: format!("view '{}' needs a '{}' entry", view, VETS_MODEL_KEY),
                })?;
            Ok(render_vet_list(vets))
        }
        other => Err(ClinicError::RenderError {
            message: format!("unknown view '{}'", other),
        }),
    }
}

fn render_vet_list(vets: &Vets) -> String {
    let mut html = String::from("<h2>Veterinarians</h2>\n<table id=\"vets\">\n");
    html.push_str("  <thead><tr><th>Name</th><th>Specialties</th></tr></thead>\n  <tbody>\n");

    for vet in vets.vet_list() {
        let specialties = if vet.nr_of_specialties() == 0 {
            "none".to_string()
        } else {
            vet.specialties_sorted()
                .iter()
                .map(|s| escape_html(&s.name))
                .collect::<Vec<_>>()
                .join(" ")
        };
        html.push_str(&format!(
            "    <tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(&vet.full_name()),
            specialties
        ));
    }

    html.push_str("  </tbody>\n</table>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn to_json(vets: &Vets) -> Result<String> {
    Ok(serde_json::to_string_pretty(vets)?)
}
