//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records with participant references into the employee table.
    tasks (id) {
        /// Internal task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Task lifecycle status.
        #[max_length = 50]
        status -> Varchar,
        /// Reporter email; foreign key into `employees`.
        #[max_length = 255]
        reporter -> Varchar,
        /// Assignee email; foreign key into `employees`.
        #[max_length = 255]
        assignee -> Varchar,
        /// Task priority.
        priority -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last status-change timestamp.
        updated_at -> Timestamptz,
    }
}
