//! Demo data for a small dental practice.
//!
//! Used by the `roster-seed` binary and by `SEED_DEMO_DATA=true` at server
//! start. Seeding replaces whatever the store currently holds.

use std::collections::HashMap;

use chrono::Utc;

use crate::models::department::NewDepartment;
use crate::models::employee::NewEmployee;
use crate::store::{DirectoryStore, StoreError};

/// `(name, description)` for each demo department.
pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("General Dentistry", "General dental treatments."),
    ("Pediatric Dentistry", "Treatment of children."),
    ("Restorative Dentistry", "Tooth restoration."),
    ("Surgery", "Surgical procedures."),
    ("Orthodontics", "Bite correction and alignment."),
];

/// `(name, role, department name)` for each demo employee.
pub const EMPLOYEES: &[(&str, &str, &str)] = &[
    ("Alfred Christensen", "Junior Dentist", "General Dentistry"),
    ("John Dudley", "Hygienist", "General Dentistry"),
    ("Janet Doe", "Assistant", "General Dentistry"),
    ("Francisco Willard", "Pediatric Dentist", "Pediatric Dentistry"),
    ("Sarah Alvarez", "Assistant", "Pediatric Dentistry"),
    ("Lisa Harris", "Prosthodontist", "Restorative Dentistry"),
    ("Danny Perez", "Lab Technician", "Restorative Dentistry"),
    ("Leslie Roche", "Oral Surgeon", "Surgery"),
    ("Constance Smith", "Chief Orthodontist", "Orthodontics"),
    ("Travis Combs", "Orthodontic Technician", "Orthodontics"),
];

/// Counts of what [`seed_demo_data`] inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub employees: usize,
}

/// Clear the store, then insert the demo departments and employees.
///
/// Employees are linked to departments by looking up the generated id of the
/// department with the matching name.
pub async fn seed_demo_data(store: &dyn DirectoryStore) -> Result<SeedSummary, StoreError> {
    store.clear().await?;
    tracing::info!("Cleared existing directory data");

    let mut ids_by_name = HashMap::with_capacity(DEPARTMENTS.len());
    for (name, description) in DEPARTMENTS {
        let department = store
            .create_department(&NewDepartment::new(*name, Some(*description)))
            .await?;
        ids_by_name.insert(department.name, department.id);
    }
    tracing::info!(count = ids_by_name.len(), "Inserted departments");

    let hired_at = Utc::now();
    let mut employees = 0;
    for (name, role, department) in EMPLOYEES {
        let Some(department_id) = ids_by_name.get(*department).copied() else {
            tracing::warn!(
                employee = *name,
                department = *department,
                "Skipping employee with unknown department"
            );
            continue;
        };
        store
            .create_employee(&NewEmployee {
                name: name.to_string(),
                role: role.to_string(),
                department_id,
                hire_date: hired_at,
            })
            .await?;
        employees += 1;
    }
    tracing::info!(count = employees, "Inserted employees");

    Ok(SeedSummary {
        departments: ids_by_name.len(),
        employees,
    })
}
