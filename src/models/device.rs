/// Appliances the prediction backend has models for: (id, display label).
/// The id is the backend appliance name.
const CATALOG: &[(&str, &str)] = &[
    ("House overall [kW]", "House Overall"),
    ("Furnace 1 [kW]", "Furnace 1"),
    ("Furnace 2 [kW]", "Furnace 2"),
    ("Dishwasher [kW]", "Dishwasher"),
    ("Fridge [kW]", "Fridge"),
    ("Microwave [kW]", "Microwave"),
    ("Home office [kW]", "Home Office"),
    ("Wine cellar [kW]", "Wine Cellar"),
    ("Garage door [kW]", "Garage Door"),
    ("Kitchen 12 [kW]", "Kitchen 12"),
    ("Kitchen 14 [kW]", "Kitchen 14"),
    ("Kitchen 38 [kW]", "Kitchen 38"),
    ("Living room [kW]", "Living Room"),
    ("Barn [kW]", "Barn"),
    ("Well [kW]", "Well"),
];

const UNIT_SUFFIX: &str = " [kW]";

/// A selectable appliance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    pub id: String,
    pub label: String,
}

impl Device {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// All selectable devices, in selector order
    pub fn catalog() -> Vec<Device> {
        CATALOG
            .iter()
            .map(|(id, label)| Device::new(*id, *label))
            .collect()
    }

    /// Look up a catalog device by id
    pub fn find(id: &str) -> Option<Device> {
        CATALOG
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(id, label)| Device::new(*id, *label))
    }

    /// Device selected when the page loads
    pub fn initial() -> Device {
        let (id, label) = CATALOG[0];
        Device::new(id, label)
    }

    /// Subtitle shown under the page header
    pub fn subtitle(&self) -> String {
        format!(
            "Predicted usage for {} based on today's hourly weather forecast.",
            self.label
        )
    }
}

/// Appliance name without its trailing unit marker
pub fn strip_unit(id: &str) -> &str {
    id.strip_suffix(UNIT_SUFFIX).unwrap_or(id)
}
