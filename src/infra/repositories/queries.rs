//! Fixed parameterized statements for the PostgreSQL store.

use sea_orm::{DbBackend, Statement};

use crate::domain::{NewProperty, NewUser};

const USER_COLUMNS: &str = "id, name, email, password";

fn statement<I>(sql: impl Into<String>, values: I) -> Statement
where
    I: IntoIterator<Item = sea_orm::Value>,
{
    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

/// Look up a user by email, ignoring case.
pub fn user_by_email(email: &str) -> Statement {
    statement(
        format!(
            "SELECT {} FROM users WHERE LOWER(email) = LOWER($1) LIMIT 1",
            USER_COLUMNS
        ),
        [email.into()],
    )
}

/// Look up a user by primary key.
pub fn user_by_id(id: i32) -> Statement {
    statement(
        format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS),
        [id.into()],
    )
}

/// Insert a user and return the stored row.
///
/// `user.password` is written as given; callers store a hash.
pub fn insert_user(user: &NewUser) -> Statement {
    statement(
        format!(
            "INSERT INTO users (name, email, password) VALUES ($1, $2, $3) RETURNING {}",
            USER_COLUMNS
        ),
        [
            user.name.as_str().into(),
            user.email.as_str().into(),
            user.password.as_str().into(),
        ],
    )
}

/// Completed reservations for a guest, oldest stay first.
pub fn reservations_for_guest(guest_id: i32, limit: u64) -> Statement {
    statement(
        "SELECT reservations.id AS reservation_id, reservations.start_date, \
         reservations.end_date, reservations.guest_id, properties.*, \
         AVG(property_reviews.rating)::float8 AS average_rating\n\
         FROM reservations\n\
         JOIN properties ON reservations.property_id = properties.id\n\
         LEFT JOIN property_reviews ON properties.id = property_reviews.property_id\n\
         WHERE reservations.guest_id = $1 AND reservations.end_date < now()::date\n\
         GROUP BY reservations.id, properties.id\n\
         ORDER BY reservations.start_date\n\
         LIMIT $2",
        [guest_id.into(), i64::try_from(limit).unwrap_or(i64::MAX).into()],
    )
}

/// Insert a property and return the stored row.
pub fn insert_property(property: &NewProperty) -> Statement {
    statement(
        "INSERT INTO properties (owner_id, title, description, thumbnail_photo_url, \
         cover_photo_url, cost_per_night, street, city, province, post_code, country, \
         parking_spaces, number_of_bathrooms, number_of_bedrooms)\n\
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)\n\
         RETURNING *",
        [
            property.owner_id.into(),
            property.title.as_str().into(),
            property.description.as_str().into(),
            property.thumbnail_photo_url.as_str().into(),
            property.cover_photo_url.as_str().into(),
            property.cost_per_night.into(),
            property.street.as_str().into(),
            property.city.as_str().into(),
            property.province.as_str().into(),
            property.post_code.as_str().into(),
            property.country.as_str().into(),
            property.parking_spaces.into(),
            property.number_of_bathrooms.into(),
            property.number_of_bedrooms.into(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Value;

    fn placeholders(sql: &str) -> usize {
        (1..=32).filter(|n| sql.contains(&format!("${}", n))).count()
    }

    #[test]
    fn test_user_by_email_is_case_insensitive() {
        let stmt = user_by_email("Ann@Example.com");
        assert!(stmt.sql.contains("LOWER(email) = LOWER($1)"));
        assert_eq!(
            stmt.values.unwrap().0,
            vec![Value::from("Ann@Example.com")]
        );
    }

    #[test]
    fn test_reservations_filters_past_stays() {
        let stmt = reservations_for_guest(4, 10);
        assert!(stmt.sql.contains("reservations.end_date < now()::date"));
        assert!(stmt.sql.contains("ORDER BY reservations.start_date"));
        assert_eq!(
            stmt.values.unwrap().0,
            vec![Value::from(4i32), Value::from(10i64)]
        );
    }

    #[test]
    fn test_insert_property_binds_all_fields() {
        let property = NewProperty {
            owner_id: 1,
            title: "Cozy loft".to_string(),
            description: "Downtown".to_string(),
            thumbnail_photo_url: "https://img/t.jpg".to_string(),
            cover_photo_url: "https://img/c.jpg".to_string(),
            cost_per_night: 12_500,
            street: "1 Main St".to_string(),
            city: "Toronto".to_string(),
            province: "Ontario".to_string(),
            post_code: "M5V 1A1".to_string(),
            country: "Canada".to_string(),
            parking_spaces: 1,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
        };
        let stmt = insert_property(&property);

        assert_eq!(placeholders(&stmt.sql), 14);
        assert_eq!(stmt.values.unwrap().0.len(), 14);
    }
}
