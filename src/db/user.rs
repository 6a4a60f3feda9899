use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    user::{Credentials, DBUserCreate, RUserUpdate, UserView},
};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User};
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

impl DatabaseService {
    async fn value_taken(
        &self,
        column: Column,
        value: &str,
        except: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut query = User::find().filter(column.eq(value));
        if let Some(id) = except {
            query = query.filter(Column::Id.ne(id));
        }
        Ok(query.count(&self.database_connection).await? > 0)
    }

    /// Pre-check for the handle/email invariant. The unique constraints still
    /// back this up when two writers race.
    async fn ensure_unique(
        &self,
        handle: &str,
        email: &str,
        except: Option<i32>,
    ) -> Result<(), AppError> {
        if self.value_taken(Column::Handle, handle, except).await? {
            return Err(AppError::DuplicateHandle);
        }
        if self.value_taken(Column::Email, email, except).await? {
            return Err(AppError::DuplicateEmail);
        }
        Ok(())
    }

    /// Public projection of every user matching `condition`, oldest first.
    pub(crate) async fn list_users(&self, condition: Condition) -> Result<Vec<UserView>, AppError> {
        Ok(User::find()
            .select_only()
            .columns([Column::Id, Column::Name, Column::Handle, Column::Email, Column::CreatedAt])
            .filter(condition)
            .order_by_asc(Column::Id)
            .into_model::<UserView>()
            .all(&self.database_connection)
            .await?)
    }

    pub(crate) async fn ensure_user_exists(&self, id: i32) -> Result<(), AppError> {
        let found = User::find_by_id(id)
            .count(&self.database_connection)
            .await?;
        if found == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<i32, AppError> {
        self.ensure_unique(&payload.handle, &payload.email, None).await?;

        let res = User::insert(UserActive {
            name: Set(payload.name),
            handle: Set(payload.handle),
            email: Set(payload.email),
            secret_hash: Set(payload.secret_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        Ok(res.last_insert_id)
    }

    /// Substring match on name or handle. `%` and `_` in the filter match
    /// literally. Case sensitivity follows the store collation.
    pub async fn search_users(&self, filter: &str) -> Result<Vec<UserView>, AppError> {
        let pattern = format!("%{}%", escape_like(filter));
        self.list_users(
            Condition::any()
                .add(Column::Name.like(LikeExpr::new(&pattern).escape('\\')))
                .add(Column::Handle.like(LikeExpr::new(&pattern).escape('\\'))),
        )
        .await
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserView, AppError> {
        User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .map(UserView::from)
            .ok_or(AppError::NotFound)
    }

    /// Full replace of the mutable fields.
    pub async fn update_user(&self, id: i32, patch: RUserUpdate) -> Result<(), AppError> {
        let current = User::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)?;

        self.ensure_unique(&patch.handle, &patch.email, Some(id)).await?;

        let mut am: UserActive = current.into();
        am.name = Set(patch.name);
        am.handle = Set(patch.handle);
        am.email = Set(patch.email);
        am.update(&self.database_connection).await?;
        Ok(())
    }

    /// Hard delete. Publications and follow edges go with the row.
    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Authentication entry point only; never exposed through listings.
    pub async fn get_credentials_by_email(&self, email: &str) -> Result<Credentials, AppError> {
        User::find()
            .select_only()
            .columns([Column::Id, Column::SecretHash])
            .filter(Column::Email.eq(email))
            .into_model::<Credentials>()
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_secret_hash(&self, id: i32) -> Result<String, AppError> {
        User::find_by_id(id)
            .select_only()
            .column(Column::SecretHash)
            .into_tuple::<String>()
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn update_secret_hash(&self, id: i32, secret_hash: String) -> Result<(), AppError> {
        let res = User::update_many()
            .col_expr(Column::SecretHash, Expr::value(secret_hash))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }
}
