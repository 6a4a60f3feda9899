use crate::db::database_service::DatabaseService;
use crate::types::{error::AppError, publication::PublicationView, user::UserView};
use entity::follower::{ActiveModel as FollowerActive, Column, Entity as Follower};
use sea_orm::{
    sea_query::{OnConflict, Query},
    ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter, Set,
};

impl DatabaseService {
    /// `follower_id` starts following `target_id`. Repeating it is a no-op.
    pub async fn follow(&self, target_id: i32, follower_id: i32) -> Result<(), AppError> {
        if target_id == follower_id {
            return Err(AppError::Validation("users cannot follow themselves".into()));
        }
        self.ensure_user_exists(target_id).await?;

        let edge = FollowerActive {
            followed_id: Set(target_id),
            follower_id: Set(follower_id),
        };
        let res = Follower::insert(edge)
            .on_conflict(
                OnConflict::columns([Column::FollowedId, Column::FollowerId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.database_connection)
            .await;

        match res {
            Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Removing an edge that is not there succeeds.
    pub async fn unfollow(&self, target_id: i32, follower_id: i32) -> Result<(), AppError> {
        Follower::delete_many()
            .filter(Column::FollowedId.eq(target_id))
            .filter(Column::FollowerId.eq(follower_id))
            .exec(&self.database_connection)
            .await?;
        Ok(())
    }

    /// Users following `user_id`.
    pub async fn followers(&self, user_id: i32) -> Result<Vec<UserView>, AppError> {
        let edges = Query::select()
            .column(Column::FollowerId)
            .from(Follower)
            .and_where(Column::FollowedId.eq(user_id))
            .to_owned();
        self.list_users(Condition::all().add(entity::user::Column::Id.in_subquery(edges)))
            .await
    }

    /// Users `user_id` follows.
    pub async fn following(&self, user_id: i32) -> Result<Vec<UserView>, AppError> {
        let edges = Query::select()
            .column(Column::FollowedId)
            .from(Follower)
            .and_where(Column::FollowerId.eq(user_id))
            .to_owned();
        self.list_users(Condition::all().add(entity::user::Column::Id.in_subquery(edges)))
            .await
    }

    /// Own publications plus those of everyone `user_id` follows, newest
    /// first. The followed set is a subquery rather than a join, so a
    /// publication can only ever appear once.
    pub async fn timeline(&self, user_id: i32) -> Result<Vec<PublicationView>, AppError> {
        use entity::publication::Column as Pub;

        let followed = Query::select()
            .column(Column::FollowedId)
            .from(Follower)
            .and_where(Column::FollowerId.eq(user_id))
            .to_owned();

        self.list_publications(
            Condition::any()
                .add(Pub::AuthorId.eq(user_id))
                .add(Pub::AuthorId.in_subquery(followed)),
        )
        .await
    }
}
