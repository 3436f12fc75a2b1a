use crate::core::{ClinicService, Specialty, Vet};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Reads vets from a CSV file with header `id,first_name,last_name,specialties`.
/// Specialties are `;`-separated names.
#[derive(Debug, Clone)]
pub struct CsvClinicService {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct VetRow {
    id: u32,
    first_name: String,
    last_name: String,
    #[serde(default)]
    specialties: String,
}

impl CsvClinicService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(data: &[u8]) -> Result<Vec<Vet>> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data);

        // ids follow first appearance across the file
        let mut specialty_ids: HashMap<String, u32> = HashMap::new();
        let mut vets = Vec::new();

        for row in reader.deserialize::<VetRow>() {
            let row = row?;
            let mut vet = Vet::new(row.id, &row.first_name, &row.last_name);

            for name in row.specialties.split(';').map(str::trim).filter(|s| !s.is_empty()) {
                let next_id = specialty_ids.len() as u32 + 1;
                let id = *specialty_ids.entry(name.to_string()).or_insert(next_id);
                vet = vet.with_specialty(Specialty {
                    id,
                    name: name.to_string(),
                });
            }
            vets.push(vet);
        }

        Ok(vets)
    }
}

#[async_trait]
impl ClinicService for CsvClinicService {
    async fn find_vets(&self) -> Result<Vec<Vet>> {
        tracing::debug!("Reading vets from {}", self.path.display());
        let data = std::fs::read(&self.path)?;
        let vets = Self::parse(&data)?;
        tracing::debug!("Read {} vets from CSV", vets.len());
        Ok(vets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ClinicError;

    #[test]
    fn test_parse_assigns_specialty_ids_by_first_appearance() {
        let csv = "id,first_name,last_name,specialties\n\
                   1,James,Carter,\n\
                   2,Helen,Leary,radiology\n\
                   3,Linda,Douglas,surgery;dentistry\n\
                   4,Rafael,Ortega,surgery\n";

        let vets = CsvClinicService::parse(csv.as_bytes()).unwrap();
        assert_eq!(vets.len(), 4);
        assert_eq!(vets[0].nr_of_specialties(), 0);
        assert_eq!(vets[2].specialties[1], Specialty { id: 3, name: "dentistry".to_string() });
        assert_eq!(vets[3].specialties[0].id, 2);
    }

    #[test]
    fn test_parse_rejects_bad_id() {
        let csv = "id,first_name,last_name,specialties\nx,James,Carter,\n";
        assert!(matches!(
            CsvClinicService::parse(csv.as_bytes()),
            Err(ClinicError::CsvError(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let service = CsvClinicService::new("/nonexistent/vets.csv");
        assert!(matches!(service.find_vets().await, Err(ClinicError::IoError(_))));
    }
}
