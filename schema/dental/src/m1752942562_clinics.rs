use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_942_562),
        name: "clinics",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let organizations = app.find_collection_by_name_or_id("organizations")?.id;

    let mut collection = Collection::base("clinics");
    collection
        .fields
        .add(Field::text("clinic_name").required().max_len(100));
    collection
        .fields
        .add(Field::relation("organization", organizations).required());
    collection
        .fields
        .add(Field::text("address").required().max_len(100));
    collection.fields.add(Field::geo_point("geo_address"));
    collection
        .fields
        .add(Field::text("phone").required().max_len(100));
    collection.fields.add(Field::bool("is_active").required());

    app.save(collection)?;

    Ok(())
}
