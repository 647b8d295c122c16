use pretty_assertions::assert_eq;
use std::sync::Once;
use tests::{overpass_response, places_response};
use triage_geo::{GeoPoint, HospitalSearchResponse, UserLocationRecord};
use triage_map::{MapConfig, MapListBinding};

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
        log::info!("Test logger initialized");
    });
}

fn user() -> GeoPoint {
    UserLocationRecord {
        lat: 12.8407,
        lon: 80.1534,
    }
    .to_point()
    .unwrap()
}

#[test]
fn places_payload_renders_markers_and_route() {
    init_logger();
    let response = HospitalSearchResponse::from_json(&places_response()).unwrap();
    let mut binding = MapListBinding::default();
    binding.load_response(response).unwrap();
    binding.set_user_location(Some(user()));

    let rows = binding.rows();
    assert_eq!(rows[0].rating_label.as_deref(), Some("★ 4.3"));
    assert_eq!(rows[0].distance_label, "3.4 KM");
    assert_eq!(rows[1].specialist_tag, "CARDIOLOGIST");

    binding.click_row(1).unwrap();
    let scene = binding.scene();
    assert_eq!(scene.markers.len(), 2);
    assert_eq!(scene.center(), user());
    let route = scene.route.as_ref().unwrap();
    assert_eq!(route.to, GeoPoint::new(12.9279, 77.6837).unwrap());

    let popup = &scene.marker_for(1).unwrap().popup;
    assert_eq!(popup.title, "Sakra World Hospital");
    assert_eq!(
        popup.link.as_ref().map(|l| l.href.as_str()),
        Some(rows[1].directions_url.as_str())
    );
}

#[test]
fn overpass_payload_survives_bad_record() {
    init_logger();
    let response = HospitalSearchResponse::from_json(&overpass_response()).unwrap();
    let mut binding = MapListBinding::default();
    binding.load_response(response).unwrap();

    let rows = binding.rows();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].distance_label, "NEARBY");
    assert_eq!(rows[0].rating_label, None);
    assert_eq!(rows[1].address, "Nearby");

    let scene = binding.scene();
    assert_eq!(
        scene.markers.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
        vec!["h1", "h3"]
    );
    assert_eq!(scene.rejected[0].id.as_str(), "h2");
    assert_eq!(scene.center(), GeoPoint::new(12.841, 80.154).unwrap());

    // selecting the unplaceable record is allowed but draws no line
    binding.set_user_location(Some(user()));
    binding.click_row(1).unwrap();
    assert_eq!(binding.scene().route, None);
}

#[test]
fn new_triage_run_resets_selection() {
    init_logger();
    let mut binding = MapListBinding::new(MapConfig::default()).unwrap();
    binding
        .load_response(HospitalSearchResponse::from_json(&places_response()).unwrap())
        .unwrap();
    binding.click_marker(0).unwrap();

    binding
        .load_response(HospitalSearchResponse::from_json(&overpass_response()).unwrap())
        .unwrap();
    assert_eq!(binding.selected_index(), None);
    assert!(binding.rows().iter().all(|r| !r.highlighted));
}

#[test]
fn scene_json_round_trips_through_front_end_shape() {
    let mut binding = MapListBinding::default();
    binding
        .load_response(HospitalSearchResponse::from_json(&places_response()).unwrap())
        .unwrap();
    binding.set_user_location(Some(user()));
    binding.click_marker(0).unwrap();

    let json = binding.scene().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["markers"][0]["popup"]["link"]["target"], "_blank");
    assert_eq!(value["user_marker"]["popup_label"], "Your location");
    assert_eq!(value["route"]["style"]["color"], "red");
    assert_eq!(value["viewport"]["zoom"], 13.0);
}
