use actix_web::{http::StatusCode, test, web, App};
use serde_json::Value;

use factura_generator::api::{configure_routes, ApiState};
use factura_generator::models::round_to;

const CATEGORIAS_VALIDAS: [&str; 8] = [
    "Dulces", "Carnes", "Frutas", "Bebidas", "Lacteos", "Granos", "Aseo", "Panaderia",
];

fn state() -> web::Data<ApiState> {
    web::Data::new(ApiState::new())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

#[actix_web::test]
async fn test_read_root() {
    let (status, data) = get_json("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["mensaje"], "API Generador de Facturas");
    assert_eq!(data["version"], "1.0.0");
    assert_eq!(data["endpoints"]["generar_factura"], "/api/factura/{numero_factura}");
}

#[actix_web::test]
async fn test_health_check() {
    let (status, data) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data, serde_json::json!({"status": "ok", "servicio": "backend-api"}));
}

#[actix_web::test]
async fn test_generar_factura_exitoso() {
    let (status, data) = get_json("/api/factura/FAC-TEST-001").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["numero_factura"], "FAC-TEST-001");
    assert!(data["fecha_emision"].is_string());

    let empresa = &data["empresa"];
    for field in ["nombre", "direccion", "telefono", "email"] {
        assert!(!empresa[field].as_str().unwrap().is_empty(), "empresa.{}", field);
    }
    let cliente = &data["cliente"];
    for field in ["nombre", "direccion", "telefono"] {
        assert!(!cliente[field].as_str().unwrap().is_empty(), "cliente.{}", field);
    }

    let detalle = data["detalle"].as_array().unwrap();
    assert!((3..=8).contains(&detalle.len()));
}

#[actix_web::test]
async fn test_calculos_factura() {
    let (_, data) = get_json("/api/factura/FAC-TEST-001").await;

    let detalle = data["detalle"].as_array().unwrap();
    let subtotal_calculado: f64 = detalle
        .iter()
        .map(|item| item["cantidad"].as_f64().unwrap() * item["precio_unitario"].as_f64().unwrap())
        .sum();

    let subtotal = data["subtotal"].as_f64().unwrap();
    let impuesto = data["impuesto"].as_f64().unwrap();
    let total = data["total"].as_f64().unwrap();

    assert_eq!(subtotal, subtotal_calculado);
    assert!((impuesto - round_to(subtotal_calculado * 0.19, 2)).abs() < 0.01);
    assert!((total - (subtotal_calculado + impuesto)).abs() < 0.01);
}

#[actix_web::test]
async fn test_valores_positivos_y_categorias_validas() {
    let (_, data) = get_json("/api/factura/FAC-TEST-001").await;

    assert!(data["subtotal"].as_f64().unwrap() >= 0.0);
    assert!(data["impuesto"].as_f64().unwrap() >= 0.0);
    assert!(data["total"].as_f64().unwrap() >= 0.0);

    for item in data["detalle"].as_array().unwrap() {
        assert!(item["cantidad"].as_u64().unwrap() > 0);
        assert!(item["precio_unitario"].as_f64().unwrap() > 0.0);
        assert!(CATEGORIAS_VALIDAS.contains(&item["categoria"].as_str().unwrap()));
    }
}

#[actix_web::test]
async fn test_multiples_facturas_diferentes() {
    let (status1, data1) = get_json("/api/factura/FAC-001").await;
    let (status2, data2) = get_json("/api/factura/FAC-002").await;

    assert_eq!(status1, StatusCode::OK);
    assert_eq!(status2, StatusCode::OK);
    assert_ne!(data1["numero_factura"], data2["numero_factura"]);
}

#[actix_web::test]
async fn test_numero_factura_is_echoed_without_validation() {
    let (status, data) = get_json("/api/factura/factura%20libre%20%23%C3%B1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(data["numero_factura"], "factura libre #ñ");
}

#[actix_web::test]
async fn test_metrics_count_generated_invoices() {
    let app = test::init_service(App::new().app_data(state()).configure(configure_routes)).await;

    let req = test::TestRequest::get().uri("/api/factura/FAC-MET-1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("facturas_generadas_total"));
}
