use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_952_837),
        name: "appointments",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let patients = app.find_collection_by_name_or_id("patients")?.id;
    let staff_members = app.find_collection_by_name_or_id("staff_members")?.id;
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;

    let mut collection = Collection::base("appointments");
    collection
        .fields
        .add(Field::relation("patient", patients).required());
    collection
        .fields
        .add(Field::relation("doctor", staff_members).required());
    collection
        .fields
        .add(Field::relation("clinic", clinics).required());
    collection.fields.add(Field::date("start_time").required());
    collection.fields.add(Field::date("end_time"));
    collection.fields.add(
        Field::select("status", [
            "scheduled",
            "confirmed",
            "completed",
            "cancelled",
            "no_show",
        ])
        .required(),
    );
    collection.fields.add(Field::text("reason").max_len(300));
    collection.fields.add(Field::text("notes").max_len(1000));

    app.save(collection)?;

    Ok(())
}
