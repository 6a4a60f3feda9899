use crate::db::database_service::DatabaseService;
use crate::types::{
    error::AppError,
    publication::{PublicationView, RPublication},
};
use chrono::Utc;
use entity::publication::{ActiveModel as PublicationActive, Column, Entity as Publication, Relation};
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select, Set,
};

/// Publication columns plus the author's handle, newest first.
fn publication_view() -> Select<Publication> {
    Publication::find()
        .select_only()
        .columns([
            Column::Id,
            Column::Title,
            Column::Content,
            Column::AuthorId,
            Column::Likes,
            Column::CreatedAt,
        ])
        .column_as(entity::user::Column::Handle, "author_handle")
        .join(JoinType::InnerJoin, Relation::Author.def())
        .order_by_desc(Column::Id)
}

impl DatabaseService {
    pub(crate) async fn list_publications(
        &self,
        condition: Condition,
    ) -> Result<Vec<PublicationView>, AppError> {
        Ok(publication_view()
            .filter(condition)
            .into_model::<PublicationView>()
            .all(&self.database_connection)
            .await?)
    }

    pub async fn create_publication(&self, author_id: i32, payload: RPublication) -> Result<i32, AppError> {
        let res = Publication::insert(PublicationActive {
            title: Set(payload.title),
            content: Set(payload.content),
            author_id: Set(author_id),
            likes: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        })
        .exec(&self.database_connection)
        .await?;

        Ok(res.last_insert_id)
    }

    pub async fn get_publication(&self, id: i32) -> Result<PublicationView, AppError> {
        publication_view()
            .filter(Column::Id.eq(id))
            .into_model::<PublicationView>()
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn list_publications_by_author(&self, author_id: i32) -> Result<Vec<PublicationView>, AppError> {
        self.list_publications(Condition::all().add(Column::AuthorId.eq(author_id)))
            .await
    }

    pub async fn update_publication(&self, id: i32, payload: RPublication) -> Result<(), AppError> {
        let res = Publication::update_many()
            .col_expr(Column::Title, Expr::value(payload.title))
            .col_expr(Column::Content, Expr::value(payload.content))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn delete_publication(&self, id: i32) -> Result<(), AppError> {
        let res = Publication::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    pub async fn like_publication(&self, id: i32) -> Result<(), AppError> {
        let res = Publication::update_many()
            .col_expr(Column::Likes, Expr::col(Column::Likes).add(1))
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// Decrements in one statement guarded by `likes > 0`, so the counter
    /// floors at zero even under concurrent unlikes.
    pub async fn unlike_publication(&self, id: i32) -> Result<(), AppError> {
        let res = Publication::update_many()
            .col_expr(Column::Likes, Expr::col(Column::Likes).sub(1))
            .filter(Column::Id.eq(id))
            .filter(Column::Likes.gt(0))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            // already at zero, or no such row
            Publication::find_by_id(id)
                .one(&self.database_connection)
                .await?
                .ok_or(AppError::NotFound)?;
        }
        Ok(())
    }
}
