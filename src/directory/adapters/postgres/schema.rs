//! Diesel schema for employee directory persistence.

diesel::table! {
    /// Employee records forming the manager hierarchy.
    employees (email) {
        /// Employee email, the primary key.
        #[max_length = 255]
        email -> Varchar,
        /// Stored password digest.
        password_hash -> Text,
        /// First name.
        first_name -> Text,
        /// Last name.
        last_name -> Text,
        /// Optional manager email; foreign key back into this table.
        #[max_length = 255]
        manager -> Nullable<Varchar>,
        /// Employee role.
        #[max_length = 50]
        role -> Varchar,
    }
}
