use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_953_379),
        name: "treatment_records",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let patients = app.find_collection_by_name_or_id("patients")?.id;
    let staff_members = app.find_collection_by_name_or_id("staff_members")?.id;
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;
    let appointments = app.find_collection_by_name_or_id("appointments")?.id;

    let mut collection = Collection::base("treatment_records");
    collection
        .fields
        .add(Field::relation("patient", patients).required());
    collection
        .fields
        .add(Field::relation("doctor", staff_members).required());
    collection
        .fields
        .add(Field::relation("clinic", clinics).required());
    collection
        .fields
        .add(Field::relation("appointment", appointments).required());
    collection
        .fields
        .add(Field::number("price_charged").required());
    // tooth numbers are stored in the Universal notation
    collection.fields.add(Field::json("tooth_numbers"));
    collection.fields.add(Field::text("clinical_notes"));

    app.save(collection)?;

    Ok(())
}
