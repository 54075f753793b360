//! Built-in supply-chain and fleet seed catalogs.
//!
//! These rows bootstrap a fresh repository with a realistic supplier base,
//! parts catalog, and aircraft fleet. Seeding derives the supplier×part offer
//! matrix from these tables; see [`crate::db::services::seed_supply_chain`].

use chrono::NaiveDate;

use crate::models::{Aircraft, Part, Supplier};

/// The default supplier base.
pub fn default_suppliers() -> Vec<Supplier> {
    [
        ("SUP-001", "GE Aviation Parts", "Cincinnati, OH", 4.8, 5, 0.98),
        ("SUP-002", "Pratt & Whitney Supply", "Hartford, CT", 4.7, 6, 0.96),
        ("SUP-003", "Rolls-Royce Components", "Derby, UK", 4.9, 7, 0.99),
        ("SUP-004", "AAR Corp", "Wood Dale, IL", 4.5, 4, 0.94),
        ("SUP-005", "Honeywell Aerospace", "Phoenix, AZ", 4.6, 5, 0.95),
    ]
    .into_iter()
    .map(
        |(id, name, location, rating, delivery, reliability)| Supplier {
            supplier_id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            rating,
            avg_delivery_days: delivery,
            reliability_score: reliability,
        },
    )
    .collect()
}

/// The default engine parts catalog. Rush prices run 3x standard.
pub fn default_parts() -> Vec<Part> {
    [
        ("HPT-8472-A", "High-Pressure Turbine Blade Assembly", "Engine Core", 4200.0, 12600.0, 5, 15),
        ("FAN-3392-B", "Fan Blade Set (24 blades)", "Fan Module", 8500.0, 25500.0, 7, 8),
        ("BEAR-7721-C", "Main Shaft Bearing", "Engine Core", 3200.0, 9600.0, 4, 12),
        ("SEAL-4432-D", "Combustion Chamber Seal Kit", "Combustion", 850.0, 2550.0, 2, 45),
        ("FUEL-8821-E", "Fuel Nozzle Assembly", "Fuel System", 1200.0, 3600.0, 3, 30),
        ("IGN-2234-F", "Ignition System Complete", "Ignition", 2800.0, 8400.0, 6, 10),
        ("COMP-5543-G", "Compressor Blade Stage 1", "Compressor", 5200.0, 15600.0, 8, 6),
        ("COOL-6654-H", "Cooling Air Manifold", "Cooling", 1800.0, 5400.0, 4, 18),
    ]
    .into_iter()
    .map(
        |(number, name, category, standard, rush, lead, stock)| Part {
            part_number: number.to_string(),
            part_name: name.to_string(),
            category: category.to_string(),
            standard_price: standard,
            rush_price: rush,
            lead_time_days: lead,
            stock_quantity: stock,
        },
    )
    .collect()
}

/// The default monitored fleet.
pub fn default_aircraft() -> Vec<Aircraft> {
    [
        ("A320-001", "A320-200", "Airbus", 2018, 12340, "Operational", (2024, 9, 15)),
        ("A320-002", "A320-200", "Airbus", 2019, 8420, "Operational", (2024, 10, 1)),
        ("A320-003", "A320-200", "Airbus", 2020, 6200, "Operational", (2024, 10, 10)),
        ("A320-004", "A320-200", "Airbus", 2019, 10100, "Operational", (2024, 9, 20)),
        ("B737-001", "737-800", "Boeing", 2017, 15680, "Maintenance", (2024, 10, 20)),
    ]
    .into_iter()
    .map(
        |(id, model, manufacturer, year, hours, status, (y, m, d))| Aircraft {
            aircraft_id: id.to_string(),
            model: model.to_string(),
            manufacturer: manufacturer.to_string(),
            year_manufactured: year,
            total_flight_hours: hours,
            status: status.to_string(),
            last_maintenance_date: NaiveDate::from_ymd_opt(y, m, d),
        },
    )
    .collect()
}
