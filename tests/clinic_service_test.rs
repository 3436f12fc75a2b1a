use anyhow::Result;
use clinic_demo::{
    render, to_json, AppConfig, ClinicError, ClinicService, CsvClinicService, HttpClinicService,
    Model, VetController,
};
use httpmock::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[tokio::test]
async fn http_service_reads_vet_array() -> Result<()> {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/vets.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "firstName": "James", "lastName": "Carter", "specialties": []},
                    {"id": 2, "firstName": "Helen", "lastName": "Leary",
                     "specialties": [{"id": 1, "name": "radiology"}]}
                ]));
        })
        .await;

    let service = HttpClinicService::new(server.url("/vets.json"));
    let vets = service.find_vets().await?;

    api_mock.assert_async().await;
    assert_eq!(vets.len(), 2);
    assert_eq!(vets[1].specialties[0].name, "radiology");
    Ok(())
}

#[tokio::test]
async fn http_service_reads_envelope() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/vets");
            then.status(200).json_body(serde_json::json!({
                "vetList": [{"id": 3, "firstName": "Linda", "lastName": "Douglas"}]
            }));
        })
        .await;

    let controller = VetController::new(HttpClinicService::new(server.url("/vets")));
    let vets = controller.show_resources_vet_list().await?;

    assert_eq!(vets.vet_list().len(), 1);
    assert_eq!(vets.vet_list()[0].full_name(), "Linda Douglas");
    Ok(())
}

#[tokio::test]
async fn http_service_error_status_is_service_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/vets");
            then.status(500);
        })
        .await;

    let service = HttpClinicService::new(server.url("/vets"));
    assert!(matches!(
        service.find_vets().await,
        Err(ClinicError::ServiceError { .. })
    ));
}

#[tokio::test]
async fn csv_config_renders_vet_list() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("vets.csv");
    let mut file = std::fs::File::create(&csv_path)?;
    writeln!(file, "id,first_name,last_name,specialties")?;
    writeln!(file, "1,James,Carter,")?;
    writeln!(file, "2,Linda,Douglas,surgery;dentistry")?;
    drop(file);

    let normalized_path = csv_path.to_str().unwrap().replace('\\', "/");
    let config = AppConfig::from_toml_str(&format!(
        "[clinic]\nsource = \"csv\"\ncsv_path = \"{}\"\n",
        normalized_path
    ))?;

    let controller = VetController::new(config.clinic_service()?);
    let mut model = Model::new();
    let view = controller.show_vet_list(&mut model).await?;
    let html = render(view, &model)?;

    assert!(html.contains("<tr><td>James Carter</td><td>none</td></tr>"));
    assert!(html.contains("<tr><td>Linda Douglas</td><td>dentistry surgery</td></tr>"));

    let json = to_json(&controller.show_resources_vet_list().await?)?;
    assert!(json.contains("\"vetList\""));
    Ok(())
}

#[tokio::test]
async fn csv_service_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let service = CsvClinicService::new(temp_dir.path().join("missing.csv"));
    assert!(matches!(
        service.find_vets().await,
        Err(ClinicError::IoError(_))
    ));
}
