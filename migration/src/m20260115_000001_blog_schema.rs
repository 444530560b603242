use sea_orm_migration::prelude::*;

// No server-side defaults anywhere: the seed pipeline always writes ids and
// timestamps itself, which keeps this DDL portable to the sqlite test backend.

#[derive(DeriveIden)]
enum Categories { Table, Id, Name, Description, Slug, IsActive, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Users { Table, Id, Username, Email, PasswordHash, FirstName, LastName, IsActive, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum UserProfiles { Table, Id, UserId, Bio, AvatarUrl, Website, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Tags { Table, Id, Name, Slug, Description, CreatedAt }

#[derive(DeriveIden)]
enum Posts { Table, Id, Title, Slug, Content, Excerpt, Status, AuthorId, CategoryId, PublishedAt, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum Comments { Table, Id, PostId, AuthorId, ParentCommentId, Content, IsApproved, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum PostTags { Table, PostId, TagId }

#[derive(DeriveIden)]
enum ActivityLogs { Table, Id, UserId, Action, ResourceType, ResourceId, Details, IpAddress, UserAgent, CreatedAt }

#[derive(DeriveMigrationName)]
pub struct Migration;
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(
            Table::create()
                .table(Categories::Table)
                .if_not_exists()
                .col(ColumnDef::new(Categories::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Categories::Name).string_len(128).not_null())
                .col(ColumnDef::new(Categories::Description).text().not_null())
                .col(ColumnDef::new(Categories::Slug).string_len(128).not_null())
                .col(ColumnDef::new(Categories::IsActive).boolean().not_null())
                .col(ColumnDef::new(Categories::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Categories::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_categories_slug").table(Categories::Table).col(Categories::Slug).unique().to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Users::Table)
                .if_not_exists()
                .col(ColumnDef::new(Users::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Users::Username).string_len(128).not_null())
                .col(ColumnDef::new(Users::Email).string_len(320).not_null())
                .col(ColumnDef::new(Users::PasswordHash).string_len(256).not_null())
                .col(ColumnDef::new(Users::FirstName).string_len(128).not_null())
                .col(ColumnDef::new(Users::LastName).string_len(128).not_null())
                .col(ColumnDef::new(Users::IsActive).boolean().not_null())
                .col(ColumnDef::new(Users::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Users::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_users_username").table(Users::Table).col(Users::Username).unique().to_owned()
        ).await?;
        manager.create_index(
            Index::create().name("idx_users_email").table(Users::Table).col(Users::Email).unique().to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(UserProfiles::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserProfiles::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(UserProfiles::UserId).uuid().not_null())
                .col(ColumnDef::new(UserProfiles::Bio).text())
                .col(ColumnDef::new(UserProfiles::AvatarUrl).string_len(512))
                .col(ColumnDef::new(UserProfiles::Website).string_len(512))
                .col(ColumnDef::new(UserProfiles::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(UserProfiles::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(ForeignKey::create()
                    .name("fk_user_profiles_user")
                    .from(UserProfiles::Table, UserProfiles::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_user_profiles_user").table(UserProfiles::Table).col(UserProfiles::UserId).unique().to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Tags::Table)
                .if_not_exists()
                .col(ColumnDef::new(Tags::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Tags::Name).string_len(128).not_null())
                .col(ColumnDef::new(Tags::Slug).string_len(128).not_null())
                .col(ColumnDef::new(Tags::Description).text().not_null())
                .col(ColumnDef::new(Tags::CreatedAt).timestamp_with_time_zone().not_null())
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_tags_slug").table(Tags::Table).col(Tags::Slug).unique().to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Posts::Table)
                .if_not_exists()
                .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Posts::Title).string_len(512).not_null())
                .col(ColumnDef::new(Posts::Slug).string_len(512).not_null())
                .col(ColumnDef::new(Posts::Content).text().not_null())
                .col(ColumnDef::new(Posts::Excerpt).text().not_null())
                .col(ColumnDef::new(Posts::Status).string_len(32).not_null())
                .col(ColumnDef::new(Posts::AuthorId).uuid().not_null())
                .col(ColumnDef::new(Posts::CategoryId).uuid().not_null())
                .col(ColumnDef::new(Posts::PublishedAt).timestamp_with_time_zone())
                .col(ColumnDef::new(Posts::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Posts::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(ForeignKey::create()
                    .name("fk_posts_author")
                    .from(Posts::Table, Posts::AuthorId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(ForeignKey::create()
                    .name("fk_posts_category")
                    .from(Posts::Table, Posts::CategoryId)
                    .to(Categories::Table, Categories::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_posts_slug").table(Posts::Table).col(Posts::Slug).unique().to_owned()
        ).await?;
        manager.create_index(
            Index::create().name("idx_posts_author").table(Posts::Table).col(Posts::AuthorId).to_owned()
        ).await?;
        manager.create_index(
            Index::create().name("idx_posts_category").table(Posts::Table).col(Posts::CategoryId).to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(Comments::Table)
                .if_not_exists()
                .col(ColumnDef::new(Comments::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Comments::PostId).uuid().not_null())
                .col(ColumnDef::new(Comments::AuthorId).uuid().not_null())
                .col(ColumnDef::new(Comments::ParentCommentId).uuid())
                .col(ColumnDef::new(Comments::Content).text().not_null())
                .col(ColumnDef::new(Comments::IsApproved).boolean().not_null())
                .col(ColumnDef::new(Comments::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Comments::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(ForeignKey::create()
                    .name("fk_comments_post")
                    .from(Comments::Table, Comments::PostId)
                    .to(Posts::Table, Posts::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(ForeignKey::create()
                    .name("fk_comments_author")
                    .from(Comments::Table, Comments::AuthorId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(ForeignKey::create()
                    .name("fk_comments_parent")
                    .from(Comments::Table, Comments::ParentCommentId)
                    .to(Comments::Table, Comments::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_comments_post").table(Comments::Table).col(Comments::PostId).to_owned()
        ).await?;
        manager.create_index(
            Index::create().name("idx_comments_author").table(Comments::Table).col(Comments::AuthorId).to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(PostTags::Table)
                .if_not_exists()
                .col(ColumnDef::new(PostTags::PostId).uuid().not_null())
                .col(ColumnDef::new(PostTags::TagId).uuid().not_null())
                .primary_key(Index::create().col(PostTags::PostId).col(PostTags::TagId))
                .foreign_key(ForeignKey::create()
                    .name("fk_post_tags_post")
                    .from(PostTags::Table, PostTags::PostId)
                    .to(Posts::Table, Posts::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .foreign_key(ForeignKey::create()
                    .name("fk_post_tags_tag")
                    .from(PostTags::Table, PostTags::TagId)
                    .to(Tags::Table, Tags::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                )
                .to_owned()
        ).await?;

        manager.create_table(
            Table::create()
                .table(ActivityLogs::Table)
                .if_not_exists()
                .col(ColumnDef::new(ActivityLogs::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(ActivityLogs::UserId).uuid())
                .col(ColumnDef::new(ActivityLogs::Action).string_len(128).not_null())
                .col(ColumnDef::new(ActivityLogs::ResourceType).string_len(64).not_null())
                .col(ColumnDef::new(ActivityLogs::ResourceId).uuid())
                .col(ColumnDef::new(ActivityLogs::Details).json().not_null())
                .col(ColumnDef::new(ActivityLogs::IpAddress).string_len(64).not_null())
                .col(ColumnDef::new(ActivityLogs::UserAgent).string_len(512).not_null())
                .col(ColumnDef::new(ActivityLogs::CreatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(ForeignKey::create()
                    .name("fk_activity_logs_user")
                    .from(ActivityLogs::Table, ActivityLogs::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                )
                .to_owned()
        ).await?;

        manager.create_index(
            Index::create().name("idx_activity_logs_user").table(ActivityLogs::Table).col(ActivityLogs::UserId).to_owned()
        ).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ActivityLogs::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(PostTags::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Comments::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Posts::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Tags::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(UserProfiles::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Users::Table).to_owned()).await?;
        manager.drop_table(Table::drop().table(Categories::Table).to_owned()).await?;
        Ok(())
    }
}
