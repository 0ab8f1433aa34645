#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::post_repo::SeaOrmPostRepository;
    use inkpot_core::domain::{NewPost, Post, PostFields};
    use inkpot_core::error::RepoError;
    use inkpot_core::ports::{BaseRepository, PostRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, title: &str) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            subtitle: "World".to_owned(),
            date: "17 October 2026".to_owned(),
            body: "<p>text</p>".to_owned(),
            author: "A".to_owned(),
            img_url: "http://x.test/i.png".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        // Mock the query expectation
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Hello")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(1).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.id, 1);
        assert_eq!(post.date, "17 October 2026");
    }

    #[tokio::test]
    async fn test_find_all_orders_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "First"), model(2, "Second")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let posts: Vec<Post> = repo.find_all().await.unwrap();
        assert_eq!(posts.len(), 2);

        let log = repo.db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ORDER BY"), "{sql}");
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Hello")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let new_post = NewPost {
            fields: PostFields {
                title: "Hello".to_owned(),
                subtitle: "World".to_owned(),
                author: "A".to_owned(),
                img_url: "http://x.test/i.png".to_owned(),
                body: "<p>text</p>".to_owned(),
            },
            date: "17 October 2026".to_owned(),
        };

        let post = repo.insert(new_post).await.unwrap();
        assert_eq!(post.id, 1);
    }

    #[tokio::test]
    async fn test_update_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Renamed")]])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let fields = PostFields {
            title: "Renamed".to_owned(),
            ..model_fields()
        };

        let post = repo.update(1, fields).await.unwrap();
        assert_eq!(post.title, "Renamed");
        assert_eq!(post.date, "17 October 2026");
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let err = repo.update(9, model_fields()).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_missing_post_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SeaOrmPostRepository::new(db);
        let err = BaseRepository::<Post, _>::delete(&repo, 9).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    fn model_fields() -> PostFields {
        let m = model(1, "Hello");
        PostFields {
            title: m.title,
            subtitle: m.subtitle,
            author: m.author,
            img_url: m.img_url,
            body: m.body,
        }
    }
}
