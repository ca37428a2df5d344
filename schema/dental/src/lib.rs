//! Schema migrations for the DentBase dental-practice platform.
//!
//! One module per migration, keys fixed to their authoring timestamps,
//! listed here in apply order. `users` is provisioned by store bootstrap;
//! every other collection is created by exactly one migration below.
//!
//! Creation order follows the relation graph:
//!
//! ```text
//! users (bootstrap) → organizations → clinics → staff_members
//!                                   → patients → patient_transfers
//!                                   → appointments → treatment_records
//!                                   → dental_charts
//! treatments_catalog (independent)
//! ```

mod m1752829474_organizations;
mod m1752942562_clinics;
mod m1752943983_staff_members;
mod m1752946253_patients;
mod m1752946700_patient_transfers;
mod m1752952837_appointments;
mod m1752953160_treatments_catalog;
mod m1752953379_treatment_records;
mod m1752955000_dental_charts;

use dentbase_core::migrate::{MigrationError, MigrationSet};

/// The full dental schema, in apply order.
pub fn migrations() -> Result<MigrationSet, MigrationError> {
    MigrationSet::new(vec![
        m1752829474_organizations::migration(),
        m1752942562_clinics::migration(),
        m1752943983_staff_members::migration(),
        m1752946253_patients::migration(),
        m1752946700_patient_transfers::migration(),
        m1752952837_appointments::migration(),
        m1752953160_treatments_catalog::migration(),
        m1752953379_treatment_records::migration(),
        m1752955000_dental_charts::migration(),
    ])
}
