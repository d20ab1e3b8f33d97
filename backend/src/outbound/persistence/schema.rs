//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Accounts. `password_hash` holds an Argon2 PHC string.
    users (id) {
        id -> Uuid,
        username -> Varchar,
        password_hash -> Text,
    }
}

diesel::table! {
    groups (id) {
        id -> Int8,
        title -> Varchar,
        slug -> Varchar,
        description -> Text,
    }
}

diesel::table! {
    posts (id) {
        id -> Int8,
        text -> Text,
        pub_date -> Timestamptz,
        author_id -> Uuid,
        image -> Nullable<Text>,
        group_id -> Nullable<Int8>,
    }
}

diesel::table! {
    comments (id) {
        id -> Int8,
        post_id -> Int8,
        author_id -> Uuid,
        text -> Text,
        created -> Timestamptz,
    }
}

diesel::table! {
    /// Directed follow edges; unique per (`user_id`, `following_id`).
    follows (id) {
        id -> Int8,
        user_id -> Uuid,
        following_id -> Uuid,
    }
}

diesel::joinable!(posts -> users (author_id));
diesel::joinable!(comments -> users (author_id));
diesel::joinable!(follows -> users (following_id));

diesel::allow_tables_to_appear_in_same_query!(comments, follows, groups, posts, users);
