use dentbase_core::{
    app::App,
    migrate::{self, Migration, MigrationError, MigrationKey},
};
use dentbase_schema::{collection::Collection, field::Field};

pub(crate) fn migration() -> Migration {
    Migration {
        key: MigrationKey::new(1_752_953_160),
        name: "treatments_catalog",
        up,
        down: migrate::noop,
    }
}

// Catalog entries are organization-independent price-list rows; nothing to
// look up.
fn up(app: &mut dyn App) -> Result<(), MigrationError> {
    let mut collection = Collection::base("treatments_catalog");
    collection
        .fields
        .add(Field::text("name").required().max_len(100));
    collection.fields.add(Field::text("description").max_len(300));
    collection.fields.add(Field::number("default_price").required());

    app.save(collection)?;

    Ok(())
}
