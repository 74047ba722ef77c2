use actix_web::web::Data;
use sqlx::{Pool, Postgres};

use crate::users::user::User;

pub type DB = Data<Database>;

pub struct Database {
    pub pool: Pool<Postgres>,
}

impl Database {
    pub fn with_pool(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, role, created_at FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
