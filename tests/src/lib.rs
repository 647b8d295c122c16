//! Shared fixtures for the end-to-end map tests.

use serde_json::json;

/// Google Places style payload: ratings present, ranked by distance.
pub fn places_response() -> String {
    json!({
        "triage": {
            "urgency": "High",
            "summary": "Chest pain radiating to the left arm.",
            "possible_conditions": ["Angina", "Myocardial infarction"],
            "advice": ["Call emergency services"],
            "specialist": "Cardiologist",
            "emergency": true
        },
        "hospitals": [
            {
                "name": "Narayana Health City",
                "lat": 12.8085, "lon": 77.6946,
                "address": "Bommasandra",
                "rating": 4.3,
                "maps_url": "https://www.google.com/maps/dir/?api=1&origin=12.84,80.15&destination=12.8085,77.6946&travelmode=driving",
                "distance_km": 3.4,
                "available_specialist": "Cardiologist"
            },
            {
                "name": "Sakra World Hospital",
                "lat": 12.9279, "lon": 77.6837,
                "address": "Bellandur",
                "rating": 4.1,
                "maps_url": "https://www.google.com/maps/dir/?api=1&origin=12.84,80.15&destination=12.9279,77.6837&travelmode=driving",
                "distance_km": 7.9,
                "available_specialist": "Cardiologist"
            }
        ],
        "latency_ms": 812.4
    })
    .to_string()
}

/// Overpass fallback payload: unrated, one record with broken coordinates.
pub fn overpass_response() -> String {
    json!({
        "triage": { "urgency": "Moderate", "specialist": "General Physician" },
        "hospitals": [
            {
                "name": "Unknown",
                "lat": 12.841, "lon": 80.154,
                "address": "Nearby",
                "rating": 0.0,
                "maps_url": "https://www.openstreetmap.org/directions?engine=fossgis_osrm_car&route=12.8407%2C80.1534%3B12.841%2C80.154",
                "distance_km": 0.0,
                "available_specialist": "General Physician"
            },
            {
                "name": "Broken Tags Clinic",
                "lat": 212.0, "lon": 80.16,
                "rating": 0.0,
                "maps_url": "",
                "distance_km": 1.2,
                "available_specialist": "General Physician"
            },
            {
                "name": "Chettinad Health City",
                "lat": 12.7983, "lon": 80.2173,
                "address": "Kelambakkam",
                "rating": 0.0,
                "maps_url": "https://www.openstreetmap.org/directions?engine=fossgis_osrm_car&route=12.8407%2C80.1534%3B12.7983%2C80.2173",
                "distance_km": 8.05,
                "available_specialist": "General Physician"
            }
        ],
        "latency_ms": 45.0
    })
    .to_string()
}
