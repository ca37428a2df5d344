use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_946_253),
        name: "patients",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;

    let mut collection = Collection::base("patients");
    collection
        .fields
        .add(Field::text("first_name").required().max_len(100));
    collection
        .fields
        .add(Field::text("last_name").required().max_len(100));
    collection
        .fields
        .add(Field::select("sex", ["male", "female"]).required());
    collection
        .fields
        .add(Field::relation("primary_clinic", clinics).required());
    collection.fields.add(Field::date("dob").required());
    collection.fields.add(Field::text("phone").required());
    collection.fields.add(Field::email("email"));
    collection.fields.add(Field::text("address"));
    collection.fields.add(Field::text("medical_history"));

    app.save(collection)?;

    Ok(())
}
