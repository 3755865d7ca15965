use std::sync::Arc;

use crate::catalog::display::VideoDisplay;
use crate::domain::{Clock, Video};
use crate::errors::AppError;
use crate::store::VideoRepository;

/// Most titles `suggest` hands back for one query.
pub const MAX_SUGGESTIONS: usize = 8;

/// Entry point for every catalog read plus video creation. Cheap to clone.
#[derive(Clone)]
pub struct CatalogService {
    repository: Arc<dyn VideoRepository>,
    clock: Arc<dyn Clock>,
}

impl CatalogService {
    pub fn new(repository: Arc<dyn VideoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    #[tracing::instrument(name = "List videos", skip(self))]
    pub async fn list_all(&self) -> Result<Vec<VideoDisplay>, AppError> {
        let videos = self.repository.find_all().await?;
        Ok(self.to_display(videos))
    }

    #[tracing::instrument(name = "List videos randomly", skip(self))]
    pub async fn list_all_random(&self) -> Result<Vec<VideoDisplay>, AppError> {
        let videos = self.repository.find_all_random().await?;
        Ok(self.to_display(videos))
    }

    /// Blank queries fall back to the random listing rather than matching
    /// nothing.
    #[tracing::instrument(name = "Search videos", skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<VideoDisplay>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_all_random().await;
        }

        let videos = self.repository.search_by_query(query).await?;
        Ok(self.to_display(videos))
    }

    /// Distinct matching titles in match order, capped at [`MAX_SUGGESTIONS`].
    /// Blank queries suggest nothing; untitled matches are skipped.
    #[tracing::instrument(name = "Suggest titles", skip(self))]
    pub async fn suggest(&self, query: &str) -> Result<Vec<String>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let videos = self.repository.search_by_query(query).await?;

        let mut titles: Vec<String> = Vec::with_capacity(MAX_SUGGESTIONS);
        for title in videos.into_iter().filter_map(|video| video.title) {
            if titles.len() == MAX_SUGGESTIONS {
                break;
            }
            if !titles.contains(&title) {
                titles.push(title);
            }
        }
        Ok(titles)
    }

    #[tracing::instrument(name = "Get video", skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<VideoDisplay>, AppError> {
        let video = self.repository.find_by_id(id).await?;
        let now = self.clock.now();
        Ok(video.map(|video| VideoDisplay::from_video(video, now)))
    }

    /// Stores `video` and returns it with the assigned id. A missing
    /// `created_at` is stamped with the current time.
    #[tracing::instrument(name = "Create video", skip(self, video), fields(title = ?video.title))]
    pub async fn create(&self, mut video: Video) -> Result<Video, AppError> {
        video.id = None;
        if video.created_at.is_none() {
            video.created_at = Some(self.clock.now());
        }

        let saved = self.repository.save(&video).await?;
        tracing::info!(id = ?saved.id, "video created");
        Ok(saved)
    }

    fn to_display(&self, videos: Vec<Video>) -> Vec<VideoDisplay> {
        let now = self.clock.now();
        videos
            .into_iter()
            .map(|video| VideoDisplay::from_video(video, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory_pool;
    use crate::domain::clock::FixedClock;
    use crate::store::SqlVideoRepository;
    use async_trait::async_trait;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    async fn service() -> CatalogService {
        let repository = SqlVideoRepository::new(memory_pool().await, std::time::Duration::from_secs(5));
        CatalogService::new(Arc::new(repository), Arc::new(FixedClock(now())))
    }

    fn video(title: &str, creator: &str) -> Video {
        Video {
            title: Some(title.to_string()),
            description: Some(format!("{title} description")),
            video_url: Some("https://cdn.example.com/v.mp4".to_string()),
            creator_name: Some(creator.to_string()),
            created_at: Some(now() - Duration::hours(2)),
            ..Default::default()
        }
    }

    fn sorted_titles(videos: &[VideoDisplay]) -> Vec<String> {
        let mut titles: Vec<String> = videos
            .iter()
            .map(|v| v.title.clone().unwrap_or_default())
            .collect();
        titles.sort();
        titles
    }

    #[tokio::test]
    async fn big_buck_bunny_scenario() {
        let service = service().await;
        let created = service
            .create(Video {
                title: Some("Big Buck Bunny".into()),
                description: Some("A large and lovable rabbit".into()),
                video_url: Some("https://example.com/BigBuckBunny.mp4".into()),
                creator_name: Some("Blender Foundation".into()),
                duration_seconds: Some(596),
                view_count: 15_000_000,
                created_at: Some(now() - Duration::days(7)),
                ..Default::default()
            })
            .await
            .unwrap();

        let display = service
            .get_by_id(created.id.unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(display.time_ago, "1 week ago");
        assert_eq!(display.formatted_view_count, "15.0M");
        assert_eq!(display.formatted_duration, "9:56");
    }

    #[tokio::test]
    async fn create_round_trips_through_get_by_id() {
        let service = service().await;
        let original = Video {
            thumbnail_url: Some("https://example.com/t.png".into()),
            creator_avatar_url: Some("https://example.com/a.png".into()),
            duration_seconds: Some(42),
            view_count: 1_234,
            ..video("Sintel", "Blender Foundation")
        };

        let created = service.create(original.clone()).await.unwrap();
        let display = service.get_by_id(created.id.unwrap()).await.unwrap().unwrap();

        assert_eq!(display.id, created.id);
        assert_eq!(display.title, original.title);
        assert_eq!(display.description, original.description);
        assert_eq!(display.video_url, original.video_url);
        assert_eq!(display.thumbnail_url, original.thumbnail_url);
        assert_eq!(display.creator_name, original.creator_name);
        assert_eq!(display.creator_avatar_url, original.creator_avatar_url);
        assert_eq!(display.duration_seconds, original.duration_seconds);
        assert_eq!(display.view_count, original.view_count);
        assert_eq!(display.created_at, original.created_at);
        assert_eq!(display.formatted_view_count, "1.2K");
    }

    #[tokio::test]
    async fn display_rounds_view_count_ties_up() {
        let service = service().await;
        let created = service
            .create(Video {
                view_count: 2_250_000,
                ..video("Tie", "x")
            })
            .await
            .unwrap();

        let display = service.get_by_id(created.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(display.formatted_view_count, "2.3M");
    }

    #[tokio::test]
    async fn create_stamps_missing_timestamp_and_ignores_client_id() {
        let service = service().await;
        let created = service
            .create(Video {
                id: Some(999),
                created_at: None,
                ..video("Fresh", "Someone")
            })
            .await
            .unwrap();

        assert_ne!(created.id, Some(999));
        assert_eq!(created.created_at, Some(now()));
        assert_eq!(created.view_count, 0);
    }

    #[tokio::test]
    async fn get_by_id_unknown_is_none() {
        let service = service().await;
        assert!(service.get_by_id(12345).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_all_is_insertion_ordered() {
        let service = service().await;
        for title in ["first", "second", "third"] {
            service.create(video(title, "x")).await.unwrap();
        }

        let titles: Vec<String> = service
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|v| v.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn blank_search_falls_back_to_full_listing() {
        let service = service().await;
        for title in ["Alpha", "Beta", "Gamma"] {
            service.create(video(title, "x")).await.unwrap();
        }

        let everything = sorted_titles(&service.list_all_random().await.unwrap());
        assert_eq!(everything, ["Alpha", "Beta", "Gamma"]);
        assert_eq!(sorted_titles(&service.search("").await.unwrap()), everything);
        assert_eq!(sorted_titles(&service.search("   ").await.unwrap()), everything);
    }

    #[tokio::test]
    async fn search_trims_and_matches_any_field() {
        let service = service().await;
        service.create(video("Rust in Action", "Tim")).await.unwrap();
        service.create(video("Cooking", "Rustacean Chef")).await.unwrap();
        service.create(video("Gardening", "Ann")).await.unwrap();

        let results = service.search("  rust  ").await.unwrap();
        assert_eq!(sorted_titles(&results), ["Cooking", "Rust in Action"]);
        assert!(results.iter().all(|v| v.time_ago == "2 hours ago"));

        assert!(service.search("nothing-like-this").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_and_suggest_ignore_accent_case() {
        let service = service().await;
        service.create(video("Éléphant Rêve", "Ørsted Studio")).await.unwrap();
        service.create(video("Elephant Dream", "Orange")).await.unwrap();

        let results = service.search("ÉLÉPHANT").await.unwrap();
        assert_eq!(sorted_titles(&results), ["Éléphant Rêve"]);

        let by_creator = service.search("ørsted").await.unwrap();
        assert_eq!(sorted_titles(&by_creator), ["Éléphant Rêve"]);

        assert_eq!(service.suggest("éléphant").await.unwrap(), ["Éléphant Rêve"]);
    }

    #[tokio::test]
    async fn suggest_skips_untitled_matches() {
        let service = service().await;
        service
            .create(Video {
                title: None,
                ..video("", "Matching Creator")
            })
            .await
            .unwrap();
        service.create(video("Titled", "Matching Creator")).await.unwrap();

        assert_eq!(service.suggest("matching").await.unwrap(), ["Titled"]);
        assert_eq!(service.search("matching").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn blank_suggest_is_empty() {
        let service = service().await;
        service.create(video("Alpha", "x")).await.unwrap();

        assert!(service.suggest("").await.unwrap().is_empty());
        assert!(service.suggest(" \t ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn suggest_dedupes_and_caps() {
        let service = service().await;
        for i in 0..12 {
            service.create(video(&format!("Tutorial {i}"), "x")).await.unwrap();
        }
        for _ in 0..3 {
            service.create(video("Tutorial 0", "x")).await.unwrap();
        }

        let suggestions = service.suggest("tutorial").await.unwrap();
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);

        let mut unique = suggestions.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[tokio::test]
    async fn suggest_collapses_duplicate_titles() {
        let service = service().await;
        service.create(video("Same Title", "a")).await.unwrap();
        service.create(video("Same Title", "b")).await.unwrap();

        assert_eq!(service.suggest("same").await.unwrap(), ["Same Title"]);
    }

    struct UnavailableStore;

    #[async_trait]
    impl VideoRepository for UnavailableStore {
        async fn save(&self, _video: &Video) -> Result<Video, AppError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn find_by_id(&self, _id: i64) -> Result<Option<Video>, AppError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn find_all(&self) -> Result<Vec<Video>, AppError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn find_all_random(&self) -> Result<Vec<Video>, AppError> {
            Err(sqlx::Error::PoolClosed.into())
        }
        async fn search_by_query(&self, _query: &str) -> Result<Vec<Video>, AppError> {
            Err(sqlx::Error::PoolClosed.into())
        }
    }

    #[tokio::test]
    async fn store_failures_propagate() {
        let service = CatalogService::new(Arc::new(UnavailableStore), Arc::new(FixedClock(now())));

        assert!(matches!(service.list_all().await, Err(AppError::Database(_))));
        assert!(matches!(service.search("").await, Err(AppError::Database(_))));
        assert!(matches!(service.suggest("x").await, Err(AppError::Database(_))));
        assert!(matches!(service.get_by_id(1).await, Err(AppError::Database(_))));
        assert!(service.create(video("x", "y")).await.is_err());
        // blank suggestions never reach the store
        assert!(service.suggest("").await.unwrap().is_empty());
    }
}
