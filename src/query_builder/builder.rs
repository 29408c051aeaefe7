use sqlx::{PgPool, Postgres, QueryBuilder};

/// Incrementally built filtered query over one base SELECT.
///
/// Tracks whether a `WHERE` has been emitted so the first condition gets
/// `WHERE` and every later one gets `AND`; with no conditions the query text
/// carries no `WHERE` keyword at all. Column identifiers are compile-time
/// constants supplied by callers in this crate; filter values always go
/// through `push_bind`.
pub struct FilteredQuery {
    query: QueryBuilder<'static, Postgres>,
    has_conditions: bool,
}

impl FilteredQuery {
    /// Start from a base clause, e.g. `SELECT city, COUNT(*) FROM providers`.
    pub fn new(base: &str) -> Self {
        Self {
            query: QueryBuilder::new(base),
            has_conditions: false,
        }
    }

    /// Append a JOIN clause. Must be called before any condition; the query
    /// is built sequentially and a JOIN cannot be inserted above an existing
    /// `WHERE`.
    pub fn join(&mut self, clause: &str) -> &mut Self {
        debug_assert!(
            !self.has_conditions,
            "joins must be pushed before conditions"
        );
        self.query.push(" ");
        self.query.push(clause);
        self
    }

    /// `WHERE` for the first condition, `AND` for the rest.
    fn begin_condition(&mut self) {
        if self.has_conditions {
            self.query.push(" AND ");
        } else {
            self.query.push(" WHERE ");
            self.has_conditions = true;
        }
    }

    /// Add `column = ANY($n)` for a non-empty value set; empty sets add
    /// nothing. Each call gets its own bound parameter, so any number of
    /// dimensions combine without collision.
    pub fn push_in(&mut self, column: &str, values: &[String]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        self.begin_condition();
        self.query.push(column);
        self.query.push(" = ANY(");
        self.query.push_bind(values.to_vec());
        self.query.push(")");
        self
    }

    /// Add `column = $n` with a single bound value.
    pub fn push_eq(&mut self, column: &str, value: &str) -> &mut Self {
        self.begin_condition();
        self.query.push(column);
        self.query.push(" = ");
        self.query.push_bind(value.to_string());
        self
    }

    /// Append trailing SQL (GROUP BY / ORDER BY / LIMIT).
    pub fn push_sql(&mut self, sql: &str) -> &mut Self {
        self.query.push(sql);
        self
    }

    pub fn has_conditions(&self) -> bool {
        self.has_conditions
    }

    /// The SQL text built so far, with `$n` placeholders.
    pub fn sql(&self) -> &str {
        self.query.sql()
    }

    pub async fn fetch_all<T>(mut self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        self.query.build_query_as::<T>().fetch_all(pool).await
    }

    pub async fn fetch_optional<T>(mut self, pool: &PgPool) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        self.query.build_query_as::<T>().fetch_optional(pool).await
    }

    /// Fetch a single aggregate value (COUNT, COALESCE'd SUM).
    pub async fn fetch_scalar(mut self, pool: &PgPool) -> Result<i64, sqlx::Error> {
        self.query
            .build_query_scalar::<i64>()
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cities() -> Vec<String> {
        vec!["Delhi".to_string(), "Pune".to_string()]
    }

    #[test]
    fn no_filters_means_no_where() {
        let query = FilteredQuery::new("SELECT city, COUNT(*) AS provider_count FROM providers");
        assert_eq!(
            query.sql(),
            "SELECT city, COUNT(*) AS provider_count FROM providers"
        );
        assert!(!query.has_conditions());
    }

    #[test]
    fn empty_value_set_adds_nothing() {
        let mut query = FilteredQuery::new("SELECT COUNT(*) FROM providers");
        query.push_in("city", &[]);
        assert_eq!(query.sql(), "SELECT COUNT(*) FROM providers");
        assert!(!query.has_conditions());
    }

    #[test]
    fn first_condition_gets_where_rest_get_and() {
        let mut query = FilteredQuery::new("SELECT COUNT(*) FROM providers");
        query.push_in("city", &cities());
        query.push_in("type", &["Restaurant".to_string()]);
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM providers WHERE city = ANY($1) AND type = ANY($2)"
        );
    }

    #[test]
    fn each_dimension_gets_a_distinct_parameter() {
        let mut query = FilteredQuery::new("SELECT COUNT(*) FROM food_listings");
        query.push_in("location", &cities());
        query.push_in("food_type", &["Vegan".to_string()]);
        query.push_in("meal_type", &["Lunch".to_string()]);
        let sql = query.sql();
        assert!(sql.contains("location = ANY($1)"));
        assert!(sql.contains("food_type = ANY($2)"));
        assert!(sql.contains("meal_type = ANY($3)"));
    }

    #[test]
    fn push_eq_binds_a_single_value() {
        let mut query = FilteredQuery::new("SELECT COUNT(*) FROM claims c");
        query.push_eq("c.status", "Completed");
        query.push_in("c.status", &["Pending".to_string()]);
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM claims c WHERE c.status = $1 AND c.status = ANY($2)"
        );
    }

    #[test]
    fn join_lands_between_base_and_where() {
        let mut query = FilteredQuery::new("SELECT COUNT(*) FROM claims c");
        query.join("JOIN receivers r ON c.receiver_id = r.receiver_id");
        query.push_in("r.city", &cities());
        assert_eq!(
            query.sql(),
            "SELECT COUNT(*) FROM claims c JOIN receivers r ON c.receiver_id = r.receiver_id \
             WHERE r.city = ANY($1)"
        );
    }

    #[test]
    fn trailing_sql_is_appended_verbatim() {
        let mut query = FilteredQuery::new("SELECT city, COUNT(*) AS n FROM providers");
        query.push_in("city", &cities());
        query.push_sql(" GROUP BY city ORDER BY n DESC");
        assert!(query.sql().ends_with(" GROUP BY city ORDER BY n DESC"));
    }
}
