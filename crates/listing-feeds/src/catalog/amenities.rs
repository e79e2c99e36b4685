#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmenityEntry {
    pub code: &'static str,
    pub id: &'static str,
    pub label: &'static str,
}

const fn amenity(code: &'static str, id: &'static str, label: &'static str) -> AmenityEntry {
    AmenityEntry { code, id, label }
}

pub static DEFAULT_AMENITIES: &[AmenityEntry] = &[
    amenity("central-ac", "6540a1f2c3b4d5e6f7a83001", "Central A/C"),
    amenity("balcony", "6540a1f2c3b4d5e6f7a83002", "Balcony"),
    amenity("shared-pool", "6540a1f2c3b4d5e6f7a83003", "Shared Pool"),
    amenity("private-pool", "6540a1f2c3b4d5e6f7a83004", "Private Pool"),
    amenity("shared-gym", "6540a1f2c3b4d5e6f7a83005", "Shared Gym"),
    amenity("private-gym", "6540a1f2c3b4d5e6f7a83006", "Private Gym"),
    amenity("covered-parking", "6540a1f2c3b4d5e6f7a83007", "Covered Parking"),
    amenity("security", "6540a1f2c3b4d5e6f7a83008", "Security"),
    amenity("concierge", "6540a1f2c3b4d5e6f7a83009", "Concierge"),
    amenity("maids-room", "6540a1f2c3b4d5e6f7a8300a", "Maid's Room"),
    amenity("study", "6540a1f2c3b4d5e6f7a8300b", "Study"),
    amenity("built-in-wardrobes", "6540a1f2c3b4d5e6f7a8300c", "Built-in Wardrobes"),
    amenity("kitchen-appliances", "6540a1f2c3b4d5e6f7a8300d", "Kitchen Appliances"),
    amenity("pets-allowed", "6540a1f2c3b4d5e6f7a8300e", "Pets Allowed"),
    amenity("view-of-water", "6540a1f2c3b4d5e6f7a8300f", "View of Water"),
    amenity("view-of-landmark", "6540a1f2c3b4d5e6f7a83010", "View of Landmark"),
    amenity("childrens-play-area", "6540a1f2c3b4d5e6f7a83011", "Children's Play Area"),
    amenity("barbecue-area", "6540a1f2c3b4d5e6f7a83012", "Barbecue Area"),
    amenity("private-garden", "6540a1f2c3b4d5e6f7a83013", "Private Garden"),
    amenity("shared-spa", "6540a1f2c3b4d5e6f7a83014", "Shared Spa"),
    amenity("walk-in-closet", "6540a1f2c3b4d5e6f7a83015", "Walk-in Closet"),
    amenity("lobby-in-building", "6540a1f2c3b4d5e6f7a83016", "Lobby in Building"),
    amenity("conference-room", "6540a1f2c3b4d5e6f7a83017", "Conference Room"),
    amenity("networked", "6540a1f2c3b4d5e6f7a83018", "Networked"),
];

pub fn amenity_by_code(code: &str) -> Option<&'static AmenityEntry> {
    DEFAULT_AMENITIES.iter().find(|entry| entry.code == code)
}
