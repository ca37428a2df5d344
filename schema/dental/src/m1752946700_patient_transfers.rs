use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_946_700),
        name: "patient_transfers",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let patients = app.find_collection_by_name_or_id("patients")?.id;
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;

    let mut collection = Collection::base("patient_transfers");
    collection
        .fields
        .add(Field::relation("patient", patients).required());
    collection
        .fields
        .add(Field::relation("from_clinic", clinics).required());
    collection
        .fields
        .add(Field::relation("to_clinic", clinics).required());
    collection.fields.add(Field::date("transfer_date").required());
    collection.fields.add(Field::text("reason"));

    app.save(collection)?;

    Ok(())
}
