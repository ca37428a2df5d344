//! System collections provisioned on every fresh store.
//!
//! The platform owns the `users` auth collection the same way it owns the
//! `id`/`created`/`updated` fields: application migrations resolve it through
//! the normal lookup path but never create it themselves.

use dentbase_schema::{collection::Collection, field::Field};

pub(crate) const USERS: &str = "users";

pub(crate) fn system_collections() -> Vec<Collection> {
    vec![users()]
}

fn users() -> Collection {
    let mut collection = Collection::auth(USERS);

    collection.fields.add(Field::email("email").required());
    collection.fields.add(Field::text("name").max_len(255));
    collection.fields.add(
        Field::file("avatar")
            .max_size(5 * 1024 * 1024)
            .mime_types(["image/png", "image/jpeg", "image/webp"]),
    );

    collection
}
