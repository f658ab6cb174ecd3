use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// One office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
}

impl Location {
    fn office(id: &str, name: &str, address: &str, lat: f64, lng: f64, phone: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            coordinates: Coordinates::new(lat, lng),
            phone: Some(phone.to_string()),
            email: None,
            schedule: None,
        }
    }

    /// Whether `needle` (already lowercased) occurs in the name or address.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.address.to_lowercase().contains(needle)
    }
}

/// The company's offices, in display order.
#[must_use]
pub fn sample_locations() -> Vec<Location> {
    vec![
        Location::office(
            "1",
            "Caracas",
            "Ciudad Center. Calle Sanatorio del Ávila. Torre F. Piso 2. Boleíta Norte, Caracas. Venezuela.",
            10.491_016,
            -66.831_833,
            "+58 (212)-718.9700",
        ),
        Location::office(
            "2",
            "San Antonio del Táchira",
            "Av. 1ro. De Mayo Centro Cívico Piso 1 Local 1-6 San Antonio Edo.Tachira",
            7.817_551,
            -72.440_567,
            "+58 (276)-771.00.11",
        ),
        Location::office(
            "3",
            "La Guaira",
            "Av. Soublette, Sector El Cantón, Edificio Taurel, La Guaira, Edo-Vargas, Venezuela.",
            10.601_945,
            -66.933_567,
            "+58 (212)-303.2200",
        ),
        Location::office(
            "4",
            "Barquisimeto",
            "Av. Las Industrias Centro de Servicio Mercantil Piso 1 Ofc. 7. Barquisimeto, Edo. Lara.",
            10.064_696,
            -69.319_170,
            "+58 (251) 443.3198",
        ),
        Location::office(
            "5",
            "Maracaibo",
            "Av. 4 Bella Vista con calle 86A C. C Akrai Center Piso 2 Locales C-1 y C-2. Maracaibo; Edo. Zulia",
            10.641_413,
            -71.611_824,
            "+58 (261) 723.1164",
        ),
        Location::office(
            "6",
            "CUSALCA Catia La Mar",
            "Entrada Urb. Playa Grande, Zona Industrial. Catia La Mar, Edo. Vargas.",
            10.603_761,
            -67.033_211,
            "+58 (212) 352-1802",
        ),
        Location::office(
            "7",
            "Valencia",
            "Zona Ind. Sur. Av. Henry Ford. C.C. Paseo las Industrias. Valencia. Venezuela.",
            10.162_083,
            -67.993_889,
            "+58 (241) 8331808",
        ),
        Location::office(
            "8",
            "Puerto Cabello",
            "Prolongación Av. La Marina, detrás de La Catedral San José, Edif. Taurel & Cia., Puerto Cabello Edo- Carabobo. 2050 – Venezuela.",
            10.472_222,
            -68.012_500,
            "+58 (242) 406300",
        ),
    ]
}
