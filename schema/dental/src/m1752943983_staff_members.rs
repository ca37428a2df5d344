use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_943_983),
        name: "staff_members",
        up,
        down: migrate::noop,
    }
}

fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let users = app.find_collection_by_name_or_id("users")?.id;
    let organizations = app.find_collection_by_name_or_id("organizations")?.id;
    let clinics = app.find_collection_by_name_or_id("clinics")?.id;

    let mut collection = Collection::base("staff_members");
    collection
        .fields
        .add(Field::relation("user", users).required());
    collection
        .fields
        .add(Field::relation("organization", organizations).required());
    collection
        .fields
        .add(Field::relation("clinic", clinics).required());
    collection.fields.add(
        Field::select("role", [
            "org_admin",
            "clinic_manager",
            "dentist",
            "receptionist",
        ])
        .required()
        .presentable(),
    );
    collection.fields.add(Field::bool("is_active").required());

    app.save(collection)?;

    Ok(())
}
